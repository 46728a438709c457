#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A single client-supplied field failed validation.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidField`].
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_display_names_the_field() {
        let err = CoreError::invalid_field("email", "must be a valid email address");
        assert_eq!(
            err.to_string(),
            "Invalid field 'email': must be a valid email address"
        );
    }
}
