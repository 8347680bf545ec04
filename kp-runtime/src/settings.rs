use anyhow::{anyhow, Result};
use kp_algorithms::{
    get_algorithm, knapsack::dynamic_programming::DEFAULT_MAX_TABLE_CELLS, ALGORITHMS,
};
use kp_challenges::knapsack::GeneratorSettings;
use kp_utils::{dejsonify, load_input};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunSettings {
    pub algorithms: Vec<String>,
    pub brute_force_max_items: usize,
    pub dp_max_table_cells: usize,
    pub parallel: bool,
    pub generator: GeneratorSettings,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            algorithms: ALGORITHMS.iter().map(|a| a.to_string()).collect(),
            brute_force_max_items: 25,
            dp_max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            parallel: false,
            generator: GeneratorSettings::default(),
        }
    }
}

impl RunSettings {
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(anyhow!("No algorithms selected"));
        }
        match self
            .algorithms
            .iter()
            .find(|a| get_algorithm(a.as_str()).is_none())
        {
            Some(a) => Err(anyhow!(
                "Unknown algorithm '{}'. Expected one of: {}",
                a,
                ALGORITHMS.join(", ")
            )),
            None => Ok(()),
        }
    }

    pub fn hyperparameters(&self, algorithm: &str) -> Option<Map<String, Value>> {
        match algorithm {
            "brute_force" => json!({ "max_items": self.brute_force_max_items })
                .as_object()
                .cloned(),
            "dynamic_programming" => json!({ "max_table_cells": self.dp_max_table_cells })
                .as_object()
                .cloned(),
            _ => None,
        }
    }
}

/// Loads settings from a json string or a path to a json file. Missing
/// fields take their defaults.
pub fn load_settings(settings: Option<&str>) -> Result<RunSettings> {
    let settings = match settings {
        Some(s) => {
            let content = load_input(s)?;
            dejsonify::<RunSettings>(&content)
                .map_err(|e| anyhow!("Failed to parse settings: {}", e))?
        }
        None => RunSettings::default(),
    };
    settings.validate()?;
    Ok(settings)
}
