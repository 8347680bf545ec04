use kp_challenges::knapsack::{Challenge, Solution};
use kp_challenges::Result;
use serde_json::{Map, Value};

pub mod knapsack;

pub type SolveFn = fn(&Challenge, &Option<Map<String, Value>>) -> Result<Solution>;

pub const ALGORITHMS: [&str; 3] = ["brute_force", "greedy", "dynamic_programming"];

pub fn get_algorithm(name: &str) -> Option<SolveFn> {
    match name {
        "brute_force" => Some(knapsack::brute_force::solve_challenge),
        "greedy" => Some(knapsack::greedy::solve_challenge),
        "dynamic_programming" => Some(knapsack::dynamic_programming::solve_challenge),
        _ => None,
    }
}

pub fn solve_brute_force(challenge: &Challenge) -> Result<Solution> {
    knapsack::brute_force::solve_challenge(challenge, &None)
}

pub fn solve_greedy(challenge: &Challenge) -> Result<Solution> {
    knapsack::greedy::solve_challenge(challenge, &None)
}

pub fn solve_dynamic_programming(challenge: &Challenge) -> Result<Solution> {
    knapsack::dynamic_programming::solve_challenge(challenge, &None)
}
