mod parse;

use crate::error::{KnapsackError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::collections::HashSet;

pub use parse::parse_instance;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub num_items: usize,
    pub min_item_weight: u32,
    pub max_item_weight: u32,
    pub min_item_value: u32,
    pub max_item_value: u32,
    pub min_capacity_percent: u32,
    pub max_capacity_percent: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            num_items: 20,
            min_item_weight: 5,
            max_item_weight: 40,
            min_item_value: 1,
            max_item_value: 30,
            min_capacity_percent: 30,
            max_capacity_percent: 70,
        }
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<()> {
        if self.num_items == 0 {
            return Err(KnapsackError::InvalidSettings(
                "num_items must be greater than 0".to_string(),
            ));
        }
        if self.min_item_weight == 0 {
            return Err(KnapsackError::InvalidSettings(
                "min_item_weight must be greater than 0".to_string(),
            ));
        }
        if self.min_item_weight > self.max_item_weight
            || self.min_item_value > self.max_item_value
        {
            return Err(KnapsackError::InvalidSettings(format!(
                "Invalid ranges: weight {}..={}, value {}..={}",
                self.min_item_weight,
                self.max_item_weight,
                self.min_item_value,
                self.max_item_value
            )));
        }
        if self.min_capacity_percent > self.max_capacity_percent {
            return Err(KnapsackError::InvalidSettings(format!(
                "Invalid capacity range: {}%..={}%",
                self.min_capacity_percent, self.max_capacity_percent
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub items: Vec<usize>,
    pub total_value: u64,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

/// A 0/1 knapsack instance. `max_weight` is the capacity; `weights` and
/// `values` are index-aligned and both hold `num_items` entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub num_items: usize,
    pub max_weight: u32,
    pub weights: Vec<u32>,
    pub values: Vec<u32>,
}

impl Challenge {
    pub fn new(
        num_items: usize,
        max_weight: u32,
        weights: Vec<u32>,
        values: Vec<u32>,
    ) -> Result<Self> {
        let challenge = Self {
            num_items,
            max_weight,
            weights,
            values,
        };
        challenge.validate()?;
        Ok(challenge)
    }

    pub fn from_json(json_str: &str) -> Result<Self> {
        let challenge: Self = serde_json::from_str(json_str)
            .map_err(|e| KnapsackError::InvalidInstance(e.to_string()))?;
        challenge.validate()?;
        Ok(challenge)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weights.len() != self.num_items {
            return Err(KnapsackError::InvalidInstance(format!(
                "Expected {} weights, got {}",
                self.num_items,
                self.weights.len()
            )));
        }
        if self.values.len() != self.num_items {
            return Err(KnapsackError::InvalidInstance(format!(
                "Expected {} values, got {}",
                self.num_items,
                self.values.len()
            )));
        }
        Ok(())
    }

    pub fn generate_instance<R: Rng + ?Sized>(
        rng: &mut R,
        settings: &GeneratorSettings,
    ) -> Result<Self> {
        settings.validate()?;

        let weights: Vec<u32> = (0..settings.num_items)
            .map(|_| rng.gen_range(settings.min_item_weight..=settings.max_item_weight))
            .collect();
        let values: Vec<u32> = (0..settings.num_items)
            .map(|_| rng.gen_range(settings.min_item_value..=settings.max_item_value))
            .collect();

        let total_weight = weights.iter().map(|&w| w as u64).sum::<u64>();
        let percent = rng.gen_range(settings.min_capacity_percent..=settings.max_capacity_percent);
        let max_weight = u32::try_from(total_weight * percent as u64 / 100).map_err(|_| {
            KnapsackError::InvalidSettings(format!(
                "Capacity {}% of total weight {} does not fit in u32",
                percent, total_weight
            ))
        })?;

        Self::new(settings.num_items, max_weight, weights, values)
    }

    pub fn calculate_total_weight(&self, items: &[usize]) -> Result<u64> {
        sum_selected(&self.weights, items)
    }

    pub fn calculate_total_value(&self, items: &[usize]) -> Result<u64> {
        sum_selected(&self.values, items)
    }

    /// Checks feasibility of `solution` and that its reported value matches
    /// the instance. Returns the total value.
    pub fn verify_solution(&self, solution: &Solution) -> Result<u64> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(KnapsackError::InvalidSolution(
                "Duplicate items selected.".to_string(),
            ));
        }
        let total_weight = self.calculate_total_weight(&solution.items)?;
        if total_weight > self.max_weight as u64 {
            return Err(KnapsackError::InvalidSolution(format!(
                "Total weight ({}) exceeded max weight ({})",
                total_weight, self.max_weight
            )));
        }

        let total_value = self.calculate_total_value(&solution.items)?;
        if total_value != solution.total_value {
            return Err(KnapsackError::InvalidSolution(format!(
                "Reported total value ({}) does not match actual total value ({})",
                solution.total_value, total_value
            )));
        }
        Ok(total_value)
    }
}

fn sum_selected(per_item: &[u32], items: &[usize]) -> Result<u64> {
    items.iter().try_fold(0u64, |total, &i| match per_item.get(i) {
        Some(&x) => Ok(total + x as u64),
        None => Err(KnapsackError::InvalidSolution(format!(
            "Item ({}) is out of bounds",
            i
        ))),
    })
}

impl std::fmt::Display for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} items, capacity {}", self.num_items, self.max_weight)
    }
}
