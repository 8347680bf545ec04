use super::Challenge;
use crate::error::{KnapsackError, Result};

/// Parses the plain text instance format:
///
/// ```text
/// <num_items> <max_weight>
/// <weight_0> <weight_1> ...
/// <value_0> <value_1> ...
/// ```
///
/// Blank lines are skipped. When `num_items` is 0 the weight and value lines
/// may be omitted.
pub fn parse_instance(input: &str) -> Result<Challenge> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| KnapsackError::Parse {
        line: 1,
        message: "Missing header '<num_items> <max_weight>'".to_string(),
    })?;
    let header = parse_integers(header_line, header)?;
    if header.len() != 2 {
        return Err(KnapsackError::Parse {
            line: header_line,
            message: format!("Expected 2 integers in header, got {}", header.len()),
        });
    }

    let num_items = usize::try_from(header[0]).map_err(|_| {
        KnapsackError::InvalidInstance(format!(
            "Number of items must not be negative, got {}",
            header[0]
        ))
    })?;
    let max_weight = to_u32(header[1], "Capacity")?;

    let mut next_list = || -> Result<Vec<i64>> {
        match lines.next() {
            Some((line, text)) => parse_integers(line, text),
            None => Ok(Vec::new()),
        }
    };
    let weights = next_list()?
        .into_iter()
        .enumerate()
        .map(|(i, w)| to_u32(w, &format!("Weight of item {}", i)))
        .collect::<Result<Vec<_>>>()?;
    let values = next_list()?
        .into_iter()
        .enumerate()
        .map(|(i, v)| to_u32(v, &format!("Value of item {}", i)))
        .collect::<Result<Vec<_>>>()?;

    if let Some((line, _)) = lines.next() {
        return Err(KnapsackError::Parse {
            line,
            message: "Unexpected trailing line".to_string(),
        });
    }

    Challenge::new(num_items, max_weight, weights, values)
}

impl Challenge {
    /// Formats the instance in the text format accepted by [`parse_instance`].
    pub fn to_text(&self) -> String {
        let join = |xs: &[u32]| {
            xs.iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "{} {}\n{}\n{}\n",
            self.num_items,
            self.max_weight,
            join(&self.weights),
            join(&self.values)
        )
    }
}

fn parse_integers(line: usize, text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| KnapsackError::Parse {
                line,
                message: format!("'{}' is not an integer", token),
            })
        })
        .collect()
}

fn to_u32(x: i64, what: &str) -> Result<u32> {
    if x < 0 {
        return Err(KnapsackError::InvalidInstance(format!(
            "{} must not be negative, got {}",
            what, x
        )));
    }
    u32::try_from(x)
        .map_err(|_| KnapsackError::InvalidInstance(format!("{} is out of range: {}", what, x)))
}
