//! Declarative field validation for form submissions. Each form builds a
//! `Validator`, chains the checks its schema requires, and renders the
//! resulting per-field errors inline before any request is sent.
//!
//! The two password policies are intentionally different: sign-in only asks
//! for a minimum length, while registration and password-reset flows require
//! the stronger complexity rules. Upstream services disagree here and the
//! divergence is preserved on purpose (see DESIGN.md).

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum password length accepted at sign-in.
pub const LOGIN_PASSWORD_MIN: usize = 6;
/// Minimum password length for registration and password resets.
pub const STRONG_PASSWORD_MIN: usize = 8;
/// Maximum comment length in characters.
pub const COMMENT_MAX_CHARS: usize = 100;
/// Minimum age accepted on registration and profile forms.
pub const MIN_AGE: u8 = 18;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// Per-field validation errors; the first error recorded for a field wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn record(&mut self, field: &'static str, message: String) {
        self.errors.entry(field).or_insert(message);
    }
}

/// Chainable validator that accumulates per-field errors.
#[derive(Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.record(field, "Este campo es obligatorio.".to_string());
        }
        self
    }

    pub fn min_len(mut self, field: &'static str, value: &str, min: usize) -> Self {
        if value.chars().count() < min {
            self.errors
                .record(field, format!("Debe tener al menos {min} caracteres."));
        }
        self
    }

    pub fn max_len(mut self, field: &'static str, value: &str, max: usize) -> Self {
        if value.chars().count() > max {
            self.errors
                .record(field, format!("No puede superar los {max} caracteres."));
        }
        self
    }

    pub fn email(mut self, field: &'static str, value: &str) -> Self {
        if !value.trim().is_empty() && !EMAIL_RE.is_match(value.trim()) {
            self.errors
                .record(field, "Introduce un correo válido.".to_string());
        }
        self
    }

    /// Sign-in password policy: length only.
    pub fn login_password(self, field: &'static str, value: &str) -> Self {
        self.require(field, value)
            .min_len(field, value, LOGIN_PASSWORD_MIN)
    }

    /// Registration/reset password policy: length plus character classes.
    pub fn strong_password(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.record(field, "Este campo es obligatorio.".to_string());
            return self;
        }
        if value.chars().count() < STRONG_PASSWORD_MIN {
            self.errors.record(
                field,
                format!("Debe tener al menos {STRONG_PASSWORD_MIN} caracteres."),
            );
            return self;
        }
        let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        if !(has_lower && has_upper && has_digit) {
            self.errors.record(
                field,
                "Debe incluir mayúsculas, minúsculas y números.".to_string(),
            );
        }
        self
    }

    /// Cross-field equality, used for password confirmation.
    pub fn matches(mut self, field: &'static str, value: &str, other: &str) -> Self {
        if value != other {
            self.errors
                .record(field, "Las contraseñas no coinciden.".to_string());
        }
        self
    }

    pub fn min_age(mut self, field: &'static str, raw: &str) -> Self {
        match raw.trim().parse::<u8>() {
            Ok(age) if age >= MIN_AGE => {}
            Ok(_) => {
                self.errors
                    .record(field, format!("Debes tener al menos {MIN_AGE} años."));
            }
            Err(_) => {
                self.errors
                    .record(field, "Introduce una edad válida.".to_string());
            }
        }
        self
    }

    /// Comment body policy: non-empty and capped at 100 characters.
    pub fn comment_body(self, field: &'static str, value: &str) -> Self {
        self.require(field, value)
            .max_len(field, value, COMMENT_MAX_CHARS)
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_input() {
        let result = Validator::new().require("email", "   ").finish();
        assert!(result.unwrap_err().get("email").is_some());
        assert!(Validator::new().require("email", "a@b.cd").finish().is_ok());
    }

    #[test]
    fn email_format_is_checked() {
        let result = Validator::new().email("email", "not-an-email").finish();
        assert_eq!(
            result.unwrap_err().get("email"),
            Some("Introduce un correo válido.")
        );
        assert!(Validator::new().email("email", "user@mail.com").finish().is_ok());
    }

    #[test]
    fn login_password_only_requires_six_chars() {
        assert!(Validator::new()
            .login_password("password", "abcdef")
            .finish()
            .is_ok());
        assert!(Validator::new()
            .login_password("password", "abcde")
            .finish()
            .is_err());
    }

    #[test]
    fn strong_password_requires_length_and_classes() {
        assert!(Validator::new()
            .strong_password("password", "Abcdef12")
            .finish()
            .is_ok());
        // Long enough but missing an uppercase letter.
        assert!(Validator::new()
            .strong_password("password", "abcdef12")
            .finish()
            .is_err());
        // Meets the classes but is one character short.
        assert!(Validator::new()
            .strong_password("password", "Abcde12")
            .finish()
            .is_err());
    }

    #[test]
    fn confirmation_must_match() {
        let result = Validator::new()
            .matches("confirm_password", "Abcdef12", "Abcdef13")
            .finish();
        assert_eq!(
            result.unwrap_err().get("confirm_password"),
            Some("Las contraseñas no coinciden.")
        );
        assert!(Validator::new()
            .matches("confirm_password", "Abcdef12", "Abcdef12")
            .finish()
            .is_ok());
    }

    #[test]
    fn age_boundary_is_eighteen() {
        assert!(Validator::new().min_age("age", "17").finish().is_err());
        assert!(Validator::new().min_age("age", "18").finish().is_ok());
        assert!(Validator::new().min_age("age", "abc").finish().is_err());
    }

    #[test]
    fn comment_body_bounds() {
        assert!(Validator::new().comment_body("text", "").finish().is_err());
        assert!(Validator::new().comment_body("text", "a").finish().is_ok());
        let exactly_100 = "a".repeat(100);
        assert!(Validator::new()
            .comment_body("text", &exactly_100)
            .finish()
            .is_ok());
        let over = "a".repeat(101);
        assert!(Validator::new().comment_body("text", &over).finish().is_err());
    }

    #[test]
    fn first_error_per_field_wins() {
        let errors = Validator::new()
            .require("password", "")
            .min_len("password", "", 6)
            .finish()
            .unwrap_err();
        assert_eq!(errors.get("password"), Some("Este campo es obligatorio."));
    }
}
