use thiserror::Error;

/// Why a form draft could not be turned into a request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

pub(crate) fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(value)
}
