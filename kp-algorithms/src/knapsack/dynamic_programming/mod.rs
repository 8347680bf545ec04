use kp_challenges::knapsack::*;
use kp_challenges::{KnapsackError, Result};
use ndarray::Array2;
use serde_json::{Map, Value};

/// Default cap on `(num_items + 1) * (max_weight + 1)` table cells.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 24;

/// Exact solver over a `(num_items + 1) x (max_weight + 1)` table where
/// `dp[[i, w]]` is the best value using the first `i` items within weight `w`.
///
/// Hyperparameters:
/// - `max_table_cells`: fail with `CapacityTooLarge` instead of allocating a
///   larger table (default [`DEFAULT_MAX_TABLE_CELLS`])
pub fn solve_challenge(
    challenge: &Challenge,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<Solution> {
    challenge.validate()?;

    let max_cells = hyperparameters
        .as_ref()
        .and_then(|m| m.get("max_table_cells"))
        .and_then(|v| v.as_u64())
        .map(|x| x as usize)
        .unwrap_or(DEFAULT_MAX_TABLE_CELLS);

    let rows = challenge.num_items + 1;
    let cols = (challenge.max_weight as usize).saturating_add(1);
    let cells = rows
        .checked_mul(cols)
        .filter(|&cells| cells <= max_cells)
        .ok_or(KnapsackError::CapacityTooLarge {
            rows,
            cols,
            max_cells,
        })?;
    log::debug!(
        "dynamic programming: {} x {} table ({} cells)",
        rows,
        cols,
        cells
    );

    let dp = build_table(challenge, rows, cols);

    let mut items = Vec::new();
    let mut remaining = cols - 1;
    for i in (1..rows).rev() {
        if dp[[i, remaining]] != dp[[i - 1, remaining]] {
            items.push(i - 1);
            remaining -= challenge.weights[i - 1] as usize;
        }
    }
    items.reverse();

    Ok(Solution {
        items,
        total_value: dp[[rows - 1, cols - 1]],
    })
}

fn build_table(challenge: &Challenge, rows: usize, cols: usize) -> Array2<u64> {
    let mut dp = Array2::<u64>::zeros((rows, cols));
    for i in 1..rows {
        let weight = challenge.weights[i - 1] as usize;
        let value = challenge.values[i - 1] as u64;
        for w in 0..cols {
            dp[[i, w]] = if weight > w {
                dp[[i - 1, w]]
            } else {
                dp[[i - 1, w]].max(value + dp[[i - 1, w - weight]])
            };
        }
    }
    dp
}
