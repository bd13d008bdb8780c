//! Client-side form validation.
//!
//! Validation failures block submission and surface per-field messages; they
//! must never reach the network layer. Extracted into free functions so the
//! rules are testable without rendering.

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Validation errors surfaced next to form fields.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty.
    Required,
    /// Email address is not syntactically valid.
    InvalidEmail,
    /// Password is shorter than [`MIN_PASSWORD_LEN`].
    PasswordTooShort,
    /// Password confirmation does not match the password.
    PasswordsDoNotMatch,
    /// A one-time-code digit must be exactly one character.
    InvalidCodeDigit,
}

impl ValidationError {
    /// Message rendered under the offending field.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::InvalidEmail => "Invalid email address",
            Self::PasswordTooShort => "Password must be at least 5 characters",
            Self::PasswordsDoNotMatch => "Passwords do not match",
            Self::InvalidCodeDigit => "Enter the 6-digit code",
        }
    }
}

/// Validates an email address: non-empty, with text on both sides of `@`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Validates a password against the minimum length.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates a required name field.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    Ok(())
}

/// Validates a single one-time-code input: exactly one character.
pub fn validate_code_digit(digit: &str) -> Result<(), ValidationError> {
    if digit.chars().count() == 1 {
        Ok(())
    } else {
        Err(ValidationError::InvalidCodeDigit)
    }
}

/// Validates a new/confirm password pair.
pub fn validate_new_password(
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    validate_password(new_password)?;

    if confirm_password.is_empty() {
        return Err(ValidationError::Required);
    }

    if new_password != confirm_password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@example.co").is_ok());
        assert!(validate_email("  padded@example.com  ").is_ok());
    }

    #[test]
    fn invalid_emails() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn password_length_boundary() {
        assert_eq!(validate_password(""), Err(ValidationError::Required));
        assert_eq!(
            validate_password("1234"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_password("12345").is_ok());
    }

    #[test]
    fn names_must_not_be_blank() {
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
        assert!(validate_name("Ada").is_ok());
    }

    #[test]
    fn code_digits_are_single_characters() {
        assert!(validate_code_digit("7").is_ok());
        assert_eq!(
            validate_code_digit(""),
            Err(ValidationError::InvalidCodeDigit)
        );
        assert_eq!(
            validate_code_digit("12"),
            Err(ValidationError::InvalidCodeDigit)
        );
    }

    #[test]
    fn new_password_pair_must_match() {
        assert!(validate_new_password("secret1", "secret1").is_ok());
        assert_eq!(
            validate_new_password("secret1", ""),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_new_password("secret1", "secret2"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        assert_eq!(
            validate_new_password("1234", "1234"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn every_error_has_a_message() {
        for error in [
            ValidationError::Required,
            ValidationError::InvalidEmail,
            ValidationError::PasswordTooShort,
            ValidationError::PasswordsDoNotMatch,
            ValidationError::InvalidCodeDigit,
        ] {
            assert!(!error.message().is_empty());
        }
    }
}
