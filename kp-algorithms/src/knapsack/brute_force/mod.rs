use kp_challenges::knapsack::*;
use kp_challenges::{KnapsackError, Result};
use serde_json::{Map, Value};

/// Largest instance whose subsets can be counted in a `u64`.
pub const MAX_ITEMS: usize = 63;

/// Exhaustive search over all 2^N subsets.
///
/// Subsets are enumerated by counting `mask` from 0 to 2^N - 1, where bit `j`
/// selects item `j`. A subset replaces the incumbent only if its value is
/// strictly greater, so ties resolve to the lowest mask.
///
/// Hyperparameters:
/// - `max_items`: refuse instances with more items (capped at [`MAX_ITEMS`])
pub fn solve_challenge(
    challenge: &Challenge,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<Solution> {
    challenge.validate()?;

    let max_items = hyperparameters
        .as_ref()
        .and_then(|m| m.get("max_items"))
        .and_then(|v| v.as_u64())
        .map(|x| (x as usize).min(MAX_ITEMS))
        .unwrap_or(MAX_ITEMS);
    let num_items = challenge.num_items;
    if num_items > max_items {
        return Err(KnapsackError::TooManyItems {
            num_items,
            max_items,
        });
    }

    let max_weight = challenge.max_weight as u64;
    let num_subsets = 1u64 << num_items;
    log::debug!("brute force: enumerating {} subsets", num_subsets);

    let mut best_mask = 0u64;
    let mut best_value = 0u64;
    'subsets: for mask in 1..num_subsets {
        let mut total_weight = 0u64;
        let mut total_value = 0u64;
        for j in 0..num_items {
            if mask & (1u64 << j) != 0 {
                total_weight += challenge.weights[j] as u64;
                if total_weight > max_weight {
                    continue 'subsets;
                }
                total_value += challenge.values[j] as u64;
            }
        }
        if total_value > best_value {
            best_value = total_value;
            best_mask = mask;
        }
    }

    let items = (0..num_items)
        .filter(|&j| best_mask & (1u64 << j) != 0)
        .collect();
    Ok(Solution {
        items,
        total_value: best_value,
    })
}
