// Validation utilities module
// Custom validation functions used by request DTOs

use validator::ValidationError;

/// Validates that a required text field is not empty or whitespace-only
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
