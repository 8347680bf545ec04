use crate::settings::RunSettings;
use anyhow::{anyhow, Result};
use kp_algorithms::get_algorithm;
use kp_challenges::knapsack::{Challenge, Solution};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InstanceSummary {
    pub num_items: usize,
    pub max_weight: u32,
    pub total_weight: u64,
    pub total_value: u64,
}

impl From<&Challenge> for InstanceSummary {
    fn from(challenge: &Challenge) -> Self {
        Self {
            num_items: challenge.num_items,
            max_weight: challenge.max_weight,
            total_weight: challenge.weights.iter().map(|&w| w as u64).sum(),
            total_value: challenge.values.iter().map(|&v| v as u64).sum(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    pub algorithm: String,
    pub elapsed_micros: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub instance: InstanceSummary,
    pub results: Vec<AlgorithmResult>,
}

pub fn run_algorithm(
    challenge: &Challenge,
    algorithm: &str,
    settings: &RunSettings,
) -> Result<AlgorithmResult> {
    let solve = get_algorithm(algorithm)
        .ok_or_else(|| anyhow!("Unknown algorithm '{}'", algorithm))?;
    let hyperparameters = settings.hyperparameters(algorithm);

    let start = Instant::now();
    let result = solve(challenge, &hyperparameters);
    let elapsed_micros = start.elapsed().as_micros() as u64;

    let mut algorithm_result = AlgorithmResult {
        algorithm: algorithm.to_string(),
        elapsed_micros,
        total_value: None,
        total_weight: None,
        items: None,
        error: None,
    };
    let verified = result.and_then(|solution| {
        challenge.verify_solution(&solution)?;
        let total_weight = challenge.calculate_total_weight(&solution.items)?;
        Ok((solution, total_weight))
    });
    match verified {
        Ok((Solution { items, total_value }, total_weight)) => {
            log::info!(
                "{}: total value {}, total weight {}, {} items in {}us",
                algorithm,
                total_value,
                total_weight,
                items.len(),
                elapsed_micros
            );
            algorithm_result.total_value = Some(total_value);
            algorithm_result.total_weight = Some(total_weight);
            algorithm_result.items = Some(items);
        }
        Err(e) => {
            log::warn!("{}: {}", algorithm, e);
            algorithm_result.error = Some(e.to_string());
        }
    }
    Ok(algorithm_result)
}

pub fn run_algorithms(
    challenge: &Challenge,
    settings: &RunSettings,
    seed: Option<u64>,
) -> Result<Report> {
    log::info!("Solving instance: {}", challenge);
    let results = if settings.parallel {
        settings
            .algorithms
            .par_iter()
            .map(|a| run_algorithm(challenge, a, settings))
            .collect::<Result<Vec<_>>>()?
    } else {
        settings
            .algorithms
            .iter()
            .map(|a| run_algorithm(challenge, a, settings))
            .collect::<Result<Vec<_>>>()?
    };
    Ok(Report {
        seed,
        instance: challenge.into(),
        results,
    })
}
