use crate::error::AppError;

/// Validate a trimmed display name (1-256 Unicode characters).
pub fn validate_name(value: &str, what: &str) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > 256 {
        return Err(AppError::Validation(format!(
            "{what} must be 1-256 characters"
        )));
    }
    Ok(())
}
