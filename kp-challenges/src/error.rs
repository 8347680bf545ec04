use thiserror::Error;

pub type Result<T> = std::result::Result<T, KnapsackError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    #[error("Invalid generator settings: {0}")]
    InvalidSettings(String),

    #[error("Brute force supports at most {max_items} items, got {num_items}")]
    TooManyItems { num_items: usize, max_items: usize },

    #[error("Table of {rows} x {cols} cells exceeds the limit of {max_cells} cells")]
    CapacityTooLarge {
        rows: usize,
        cols: usize,
        max_cells: usize,
    },

    #[error("Invalid solution: {0}")]
    InvalidSolution(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}
