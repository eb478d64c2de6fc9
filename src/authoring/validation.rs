use crate::authoring::options::{AnswerOptions, MIN_SLOTS};
use crate::error::{FieldError, ValidationError};

pub fn require_text(value: &str, field: &'static str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Missing(field));
    }
    Ok(())
}

pub fn require<T: Copy>(value: Option<T>, field: &'static str) -> Result<T, FieldError> {
    value.ok_or(FieldError::Missing(field))
}

/// Checks the filled options against the correct-answer index.
///
/// Blank slots are dropped first; the returned list is what gets submitted,
/// paired with the index that was checked against it.
pub fn guard_options(options: &AnswerOptions) -> Result<(Vec<String>, usize), ValidationError> {
    let filled = options.filled();
    if filled.len() < MIN_SLOTS {
        return Err(ValidationError::InsufficientOptions {
            count: filled.len(),
        });
    }

    let index = options.correct_index();
    if index >= filled.len() {
        return Err(ValidationError::InvalidCorrectIndex {
            index,
            count: filled.len(),
        });
    }

    Ok((filled, index))
}
