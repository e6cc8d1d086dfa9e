use chrono::{Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone pattern compiles"));

/// Declared type of a form control. Only `Email`, `Tel` and `Date` carry a shape rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    TextArea,
}

impl FieldKind {
    /// Value of the `type` attribute for kinds rendered as `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Text | FieldKind::Select | FieldKind::TextArea => "text",
        }
    }
}

/// A failed validation pass. The `Display` text is what the user sees under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please enter a valid date of birth.")]
    InvalidDateOfBirth,
}

/// Checks one field. The first failing rule wins, so at most one error comes back.
///
/// Empty optional fields are valid: the type rules only look at something the user typed.
pub fn validate_field(
    kind: FieldKind,
    required: bool,
    raw_value: &str,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    let value = raw_value.trim();

    if value.is_empty() {
        return if required {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        FieldKind::Date if !is_valid_date_of_birth(value, today) => {
            Err(ValidationError::InvalidDateOfBirth)
        }
        _ => Ok(()),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Spaces, dashes and parentheses are ignored; what remains must be 7-15 digits
/// with an optional leading `+`.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    PHONE_PATTERN.is_match(&compact)
}

/// Both ends of the window are inclusive. Anything that isn't a `YYYY-MM-DD` date fails.
pub fn is_valid_date_of_birth(value: &str, today: NaiveDate) -> bool {
    let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return false;
    };
    match date_of_birth_window(today) {
        Some((earliest, latest)) => earliest <= date && date <= latest,
        None => false,
    }
}

/// Oldest and youngest accepted birth dates for `today`.
///
/// Calendar-month arithmetic, so a Feb 29 anniversary lands on Feb 28 in common years.
pub fn date_of_birth_window(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let earliest = today.checked_sub_months(Months::new(config::MAX_STUDENT_AGE_YEARS * 12))?;
    let latest = today.checked_sub_months(Months::new(config::MIN_STUDENT_AGE_YEARS * 12))?;
    Some((earliest, latest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn empty_required_field_reports_required() {
        for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Tel, FieldKind::Date] {
            let err = validate_field(kind, true, "   ", today()).unwrap_err();
            assert_eq!(err, ValidationError::Required);
            assert_eq!(err.to_string(), "This field is required.");
        }
    }

    #[test]
    fn empty_optional_field_is_valid() {
        assert_eq!(validate_field(FieldKind::Email, false, "", today()), Ok(()));
        assert_eq!(validate_field(FieldKind::Date, false, " ", today()), Ok(()));
    }

    #[test]
    fn plain_text_passes_once_filled() {
        assert_eq!(validate_field(FieldKind::Text, true, "Ada", today()), Ok(()));
        assert_eq!(validate_field(FieldKind::Select, true, "grade-5", today()), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert_eq!(validate_field(FieldKind::Email, true, "a@b.co", today()), Ok(()));
        assert_eq!(
            validate_field(FieldKind::Email, true, "bad@", today()),
            Err(ValidationError::InvalidEmail)
        );
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two words@x.io"));
        assert!(!is_valid_email("a@nodot"));
    }

    #[test]
    fn email_surrounding_whitespace_is_trimmed() {
        assert_eq!(validate_field(FieldKind::Email, true, "  parent@school.org ", today()), Ok(()));
    }

    #[test]
    fn phone_digit_count() {
        assert_eq!(validate_field(FieldKind::Tel, true, "1234567", today()), Ok(()));
        assert_eq!(
            validate_field(FieldKind::Tel, true, "123", today()),
            Err(ValidationError::InvalidPhone)
        );
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn phone_punctuation_is_ignored() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+44 20 7946 0958"));
        assert!(!is_valid_phone("555.123.4567"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("12+34567"));
    }

    #[test]
    fn date_of_birth_examples() {
        assert!(is_valid_date_of_birth("2014-06-15", today()));
        assert!(!is_valid_date_of_birth("1998-06-15", today()));
        assert!(!is_valid_date_of_birth("2022-06-15", today()));
        assert_eq!(
            validate_field(FieldKind::Date, true, "2022-06-15", today()),
            Err(ValidationError::InvalidDateOfBirth)
        );
    }

    #[test]
    fn date_of_birth_bounds_are_inclusive() {
        assert!(is_valid_date_of_birth("1999-06-15", today()));
        assert!(is_valid_date_of_birth("2021-06-15", today()));
        assert!(!is_valid_date_of_birth("1999-06-14", today()));
        assert!(!is_valid_date_of_birth("2021-06-16", today()));
    }

    #[test]
    fn leap_day_window_clamps_to_month_end() {
        let leap_today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let (earliest, latest) = date_of_birth_window(leap_today).unwrap();
        assert_eq!(earliest, NaiveDate::from_ymd_opt(1999, 2, 28).unwrap());
        assert_eq!(latest, NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
    }

    #[test]
    fn unparseable_date_is_rejected() {
        assert!(!is_valid_date_of_birth("15/06/2014", today()));
        assert!(!is_valid_date_of_birth("2014-13-01", today()));
    }
}
