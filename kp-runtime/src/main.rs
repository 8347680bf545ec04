mod report;
mod settings;

use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgGroup, Command};
use kp_challenges::knapsack::{parse_instance, Challenge, GeneratorSettings, Solution};
use kp_utils::{compress_obj, dejsonify, jsonify_pretty, load_file, load_input};
use rand::{rngs::StdRng, Rng, SeedableRng};
use report::run_algorithms;
use settings::{load_settings, RunSettings};
use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

fn cli() -> Command {
    Command::new("kp-runtime")
        .about("Solves 0/1 knapsack instances with brute force, greedy and dynamic programming")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Runs the selected algorithms on one instance and reports the results")
                .arg(
                    arg!(--file [FILE] "Instance file (*.json or text), or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--interactive "Prompt for the instance on the console")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--generate [NUM_ITEMS] "Generate a random instance with this many items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["file", "interactive", "generate"])
                        .required(true),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for instance generation")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--algorithms [ALGORITHMS] "Comma separated algorithms, overrides settings")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--parallel "Run the algorithms concurrently")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the report will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the report will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance")
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for instance generation")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--json "Write the instance as json instead of text")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against an instance")
                .arg(
                    arg!(<INSTANCE> "Instance file (*.json or text), or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("KP_LOG", "info")
            .write_style("KP_LOG_STYLE"),
    );

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("file").cloned(),
            sub_m.get_flag("interactive"),
            sub_m.get_one::<usize>("generate").cloned(),
            sub_m.get_one::<u64>("seed").cloned(),
            sub_m.get_one::<String>("settings").cloned(),
            sub_m.get_one::<String>("algorithms").cloned(),
            sub_m.get_flag("parallel"),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            sub_m.get_one::<u64>("seed").cloned(),
            sub_m.get_one::<String>("settings").cloned(),
            sub_m.get_flag("json"),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(
    file: Option<String>,
    interactive: bool,
    num_items: Option<usize>,
    seed: Option<u64>,
    settings: Option<String>,
    algorithms: Option<String>,
    parallel: bool,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let mut settings = load_settings(settings.as_deref())?;
    if let Some(algorithms) = algorithms {
        settings.algorithms = algorithms
            .split(',')
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        settings.validate()?;
    }
    settings.parallel |= parallel;

    let (challenge, seed) = match (file, interactive, num_items) {
        (Some(path), _, _) => (load_instance(&path)?, None),
        (None, true, _) => (read_instance_from_console(&mut io::stdin().lock())?, None),
        (None, false, Some(num_items)) => {
            let (challenge, seed) = generate_instance(num_items, seed, &settings)?;
            (challenge, Some(seed))
        }
        (None, false, None) => return Err(anyhow!("No instance source given")),
    };

    let report = run_algorithms(&challenge, &settings, seed)?;
    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&report)?)?;
        } else {
            fs::write(&path, jsonify_pretty(&report))?;
        }
        log::info!("Report written to: {:?}", path);
    } else {
        println!("{}", jsonify_pretty(&report));
    }
    Ok(())
}

pub fn generate(
    num_items: usize,
    seed: Option<u64>,
    settings: Option<String>,
    json: bool,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let settings = load_settings(settings.as_deref())?;
    let (challenge, _) = generate_instance(num_items, seed, &settings)?;
    let content = if json {
        jsonify_pretty(&challenge)
    } else {
        challenge.to_text()
    };
    match output_file {
        Some(path) => {
            fs::write(&path, content)?;
            log::info!("Instance written to: {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

pub fn verify_solution(instance: String, solution: String) -> Result<()> {
    if instance == "-" && solution == "-" {
        return Err(anyhow!("Instance and solution cannot both be read from stdin"));
    }
    let challenge = load_instance(&instance)?;
    let solution = dejsonify::<Solution>(&load_input(&solution)?)
        .map_err(|e| anyhow!("Failed to parse solution: {}", e))?;
    let total_value = challenge.verify_solution(&solution)?;
    log::info!("Total value: {}", total_value);
    println!("Solution is valid");
    Ok(())
}

fn load_instance(instance: &str) -> Result<Challenge> {
    let content = load_file(instance)?;
    let challenge = if instance.ends_with(".json") || content.trim_start().starts_with('{') {
        Challenge::from_json(&content)?
    } else {
        parse_instance(&content)?
    };
    log::info!("Loaded instance: {}", challenge);
    Ok(challenge)
}

fn read_instance_from_console<R: BufRead>(reader: &mut R) -> Result<Challenge> {
    let prompts = [
        "Enter the number of items and the knapsack capacity:",
        "Enter the item weights:",
        "Enter the item values:",
    ];
    let mut input = String::new();
    for prompt in prompts {
        eprintln!("{}", prompt);
        let mut line = String::new();
        reader.read_line(&mut line)?;
        input.push_str(line.trim_end());
        input.push('\n');
    }
    Ok(parse_instance(&input)?)
}

fn generate_instance(
    num_items: usize,
    seed: Option<u64>,
    settings: &RunSettings,
) -> Result<(Challenge, u64)> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Generating {} items with seed {}", num_items, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let generator = GeneratorSettings {
        num_items,
        ..settings.generator.clone()
    };
    let challenge = Challenge::generate_instance(&mut rng, &generator)?;
    Ok((challenge, seed))
}
