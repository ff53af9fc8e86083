//! Password policy validation.
//!
//! Checks an existing password against an explicit policy and reports every
//! violated rule. Pure — no randomness, no I/O.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A password policy. Unset fields are not enforced.
///
/// The `require_*` toggles are shorthands for a minimum of 1; an explicit
/// `min_*` count takes precedence over its shorthand.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordPolicy {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_uppercase: Option<usize>,
    pub min_lowercase: Option<usize>,
    pub min_digits: Option<usize>,
    pub min_special: Option<usize>,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digits: bool,
    pub require_special: bool,
    /// Literal substrings the password must not contain.
    pub forbidden_strings: Vec<String>,
}

/// Result of validating a password against a [`PasswordPolicy`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// One message per violated rule, in policy order.
    pub errors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn resolve_minimum(explicit: Option<usize>, required: bool) -> usize {
    explicit.unwrap_or(usize::from(required))
}

/// Validate `password` against `policy`.
///
/// An empty password short-circuits with a single error. Otherwise every
/// rule is checked and every violation is reported.
#[must_use]
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> ValidationReport {
    if password.is_empty() {
        return ValidationReport {
            is_valid: false,
            errors: vec!["Password is empty".to_string()],
        };
    }

    let mut errors: Vec<String> = Vec::new();
    let length = password.chars().count();

    if let Some(min) = policy.min_length {
        if length < min {
            errors.push(format!("Password must be at least {min} characters long."));
        }
    }
    if let Some(max) = policy.max_length {
        if length > max {
            errors.push(format!("Password must be no more than {max} characters long."));
        }
    }

    let mut upper = 0usize;
    let mut lower = 0usize;
    let mut digits = 0usize;
    let mut special = 0usize;
    for c in password.chars() {
        if c.is_ascii_uppercase() {
            upper = upper.saturating_add(1);
        } else if c.is_ascii_lowercase() {
            lower = lower.saturating_add(1);
        } else if c.is_ascii_digit() {
            digits = digits.saturating_add(1);
        } else {
            special = special.saturating_add(1);
        }
    }

    let required_upper = resolve_minimum(policy.min_uppercase, policy.require_uppercase);
    if upper < required_upper {
        errors.push(format!(
            "Password must contain at least {required_upper} uppercase character(s)."
        ));
    }
    let required_lower = resolve_minimum(policy.min_lowercase, policy.require_lowercase);
    if lower < required_lower {
        errors.push(format!(
            "Password must contain at least {required_lower} lowercase character(s)."
        ));
    }
    let required_digits = resolve_minimum(policy.min_digits, policy.require_digits);
    if digits < required_digits {
        errors.push(format!(
            "Password must contain at least {required_digits} digit(s)."
        ));
    }
    let required_special = resolve_minimum(policy.min_special, policy.require_special);
    if special < required_special {
        errors.push(format!(
            "Password must contain at least {required_special} special character(s)."
        ));
    }

    for forbidden in &policy.forbidden_strings {
        if password.contains(forbidden.as_str()) {
            errors.push(format!("Password must not contain \"{forbidden}\"."));
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_short_circuits() {
        let report = validate_password("", &PasswordPolicy::default());
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Password is empty".to_string()]);
    }

    #[test]
    fn empty_policy_accepts_anything() {
        let report = validate_password("x", &PasswordPolicy::default());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn length_bounds() {
        let policy = PasswordPolicy {
            min_length: Some(8),
            max_length: Some(12),
            ..PasswordPolicy::default()
        };
        assert!(!validate_password("short", &policy).is_valid);
        assert!(!validate_password("waytoolongpassword", &policy).is_valid);
        assert!(validate_password("justright1", &policy).is_valid);
    }

    #[test]
    fn require_shorthands() {
        let policy = PasswordPolicy {
            require_uppercase: true,
            require_digits: true,
            ..PasswordPolicy::default()
        };
        let report = validate_password("lowercase", &policy);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert!(validate_password("Lowercase1", &policy).is_valid);
    }

    #[test]
    fn explicit_minimum_wins_over_shorthand() {
        let policy = PasswordPolicy {
            min_digits: Some(3),
            require_digits: true,
            ..PasswordPolicy::default()
        };
        assert!(!validate_password("only1digit", &policy).is_valid);
        assert!(validate_password("has3digits123", &policy).is_valid);
    }

    #[test]
    fn explicit_zero_disables_shorthand() {
        let policy = PasswordPolicy {
            min_special: Some(0),
            require_special: true,
            ..PasswordPolicy::default()
        };
        assert!(validate_password("nospecial", &policy).is_valid);
    }

    #[test]
    fn forbidden_strings() {
        let policy = PasswordPolicy {
            forbidden_strings: vec!["password".to_string(), "admin".to_string()],
            ..PasswordPolicy::default()
        };
        let report = validate_password("mypassword1", &policy);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("password"));
        assert!(validate_password("unrelated", &policy).is_valid);
    }

    #[test]
    fn every_violation_is_reported() {
        let policy = PasswordPolicy {
            min_length: Some(10),
            require_uppercase: true,
            require_digits: true,
            require_special: true,
            ..PasswordPolicy::default()
        };
        let report = validate_password("weak", &policy);
        assert_eq!(report.errors.len(), 4);
        assert_eq!(report.is_valid, report.errors.is_empty());
    }
}
