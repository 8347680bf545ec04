use kp_challenges::knapsack::*;
use kp_challenges::Result;
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Value per unit of weight, compared exactly by cross-multiplication.
///
/// A weightless item with positive value outranks every finite density. A
/// weightless item with no value is ranked as density 0.
#[derive(Debug, Clone, Copy)]
pub enum Density {
    Finite { value: u64, weight: u64 },
    Unbounded,
}

impl Density {
    pub fn of(value: u32, weight: u32) -> Self {
        match (value, weight) {
            (0, 0) => Density::Finite {
                value: 0,
                weight: 1,
            },
            (_, 0) => Density::Unbounded,
            (v, w) => Density::Finite {
                value: v as u64,
                weight: w as u64,
            },
        }
    }
}

impl Ord for Density {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Density::Unbounded, Density::Unbounded) => Ordering::Equal,
            (Density::Unbounded, _) => Ordering::Greater,
            (_, Density::Unbounded) => Ordering::Less,
            (
                Density::Finite {
                    value: v1,
                    weight: w1,
                },
                Density::Finite {
                    value: v2,
                    weight: w2,
                },
            ) => (v1 * w2).cmp(&(v2 * w1)),
        }
    }
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Density {}

impl PartialOrd for Density {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Items in the order the greedy pass visits them: density descending, then
/// item index ascending.
pub fn sorted_items(challenge: &Challenge) -> Vec<usize> {
    let mut sorted_items: Vec<(usize, Density)> = (0..challenge.num_items)
        .map(|i| (i, Density::of(challenge.values[i], challenge.weights[i])))
        .collect();
    sorted_items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted_items.into_iter().map(|(i, _)| i).collect()
}

/// Value-density heuristic. Always feasible, not always optimal.
pub fn solve_challenge(
    challenge: &Challenge,
    _hyperparameters: &Option<Map<String, Value>>,
) -> Result<Solution> {
    challenge.validate()?;

    let order = sorted_items(challenge);
    log::debug!("greedy: visiting {} items by density", order.len());

    let mut remaining = challenge.max_weight as u64;
    let mut total_value = 0u64;
    let mut items = Vec::new();
    for item in order {
        let weight = challenge.weights[item] as u64;
        if weight <= remaining {
            remaining -= weight;
            total_value += challenge.values[item] as u64;
            items.push(item);
        }
    }
    items.sort_unstable();

    Ok(Solution { items, total_value })
}
