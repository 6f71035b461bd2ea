use crate::domain::errors::{DomainError, DomainResult};

/// Plain-text passwords never reach the domain, so the only rule lives here.
pub(super) fn validate_password(password: &str) -> DomainResult<&str> {
    if password.trim().is_empty() {
        return Err(DomainError::validation("password", "can't be blank"));
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_password_is_rejected() {
        assert!(validate_password("   ").is_err());
        assert_eq!(validate_password("jakejake").unwrap(), "jakejake");
    }
}
