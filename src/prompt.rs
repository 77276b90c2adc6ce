use std::io::{BufRead, Write};

use crate::error::{AppError, Result};

/// Ask a y/n question. Only `y` or `yes` (any case, surrounding whitespace
/// ignored) count as yes; end of input counts as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{}", question).map_err(|e| AppError::Prompt(e.to_string()))?;
    output.flush().map_err(|e| AppError::Prompt(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| AppError::Prompt(e.to_string()))?;

    let answer = answer.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}
