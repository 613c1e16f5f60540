//! Shape checks applied by the HTTP layer before a draft or patch reaches the
//! store. The store itself assumes well-formed input.

/// Rejected request payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

pub(crate) fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value)?;
    let mut parts = value.trim().split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail { field }),
    }
}

pub(crate) fn optional_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |value| require_text(field, value))
}

pub(crate) fn optional_email(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |value| require_email(field, value))
}
