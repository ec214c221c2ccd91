//! Naming rules for proposed device names.

use serde::{Deserialize, Serialize};

/// Maximum length for a device name.
pub const MAX_NAME_LENGTH: usize = 63;

/// Why a proposed name is rejected.
///
/// Rules are evaluated in priority order and the first failing rule wins,
/// so exactly one reason is reported per item. The `Display` text is the
/// user-facing reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameViolation {
    /// The proposed name is empty.
    #[error("Name cannot be empty")]
    Empty,

    /// The name does not match "letter first, then letters, digits, or
    /// underscores".
    #[error("Name must start with a letter and contain only letters, digits, and underscores")]
    PatternMismatch,

    /// The name is longer than [`MAX_NAME_LENGTH`] characters.
    #[error("Name must be at most {MAX_NAME_LENGTH} characters long")]
    LengthOutOfRange,

    /// Another item in the session currently holds the same proposed name.
    #[error("Name is already in use by another item")]
    Duplicate,
}

/// Checks the single-item naming rules: empty, pattern, length.
///
/// Duplicate detection needs the whole list and lives in the session; a name
/// passing this check can still be rejected there.
pub fn check_name(name: &str) -> Result<(), NameViolation> {
    match name.chars().next() {
        None => return Err(NameViolation::Empty),
        Some(first) if !first.is_ascii_alphabetic() => {
            return Err(NameViolation::PatternMismatch);
        }
        Some(_) => {}
    }

    if name
        .chars()
        .skip(1)
        .any(|c| !c.is_ascii_alphanumeric() && c != '_')
    {
        return Err(NameViolation::PatternMismatch);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(NameViolation::LengthOutOfRange);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(check_name("IED1").is_ok());
        assert!(check_name("a").is_ok());
        assert!(check_name("Bay1_Protection").is_ok());
        assert!(check_name("Q01Control2").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(check_name(""), Err(NameViolation::Empty));
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(check_name("1bad"), Err(NameViolation::PatternMismatch));
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(check_name("_hidden"), Err(NameViolation::PatternMismatch));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(check_name("IED-1"), Err(NameViolation::PatternMismatch));
        assert_eq!(check_name("IED 1"), Err(NameViolation::PatternMismatch));
        assert_eq!(check_name("IED.1"), Err(NameViolation::PatternMismatch));
        assert_eq!(check_name("Bucht\u{e9}"), Err(NameViolation::PatternMismatch));
    }

    #[test]
    fn test_length_boundary() {
        let max = "A".repeat(MAX_NAME_LENGTH);
        assert!(check_name(&max).is_ok());

        let too_long = "A".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(check_name(&too_long), Err(NameViolation::LengthOutOfRange));
    }

    #[test]
    fn test_pattern_beats_length() {
        // A name that is both malformed and too long reports the pattern
        // failure; rule order is fixed.
        let value = format!("1{}", "a".repeat(80));
        assert_eq!(check_name(&value), Err(NameViolation::PatternMismatch));
    }

    #[test]
    fn test_violation_messages_are_user_facing() {
        assert!(NameViolation::Empty.to_string().contains("empty"));
        assert!(NameViolation::Duplicate.to_string().contains("in use"));
    }
}
