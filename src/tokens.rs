use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperandError {
    #[error("expected {expected} operand(s) but found {found}")]
    Count { expected: usize, found: usize },
}

/// Splits the operand text of one instruction into exactly `expected`
/// fields. Operands are separated by commas and/or whitespace; parentheses
/// also delimit, so base-plus-offset syntax such as `4($sp)` yields the
/// offset literal and the base register as separate operands.
pub fn operands(rest: &str, expected: usize) -> Result<Vec<&str>, OperandError> {
    let found: Vec<&str> = rest
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
        .filter(|piece| !piece.is_empty())
        .collect();

    if found.len() != expected {
        return Err(OperandError::Count {
            expected,
            found: found.len(),
        });
    }
    Ok(found)
}
