//! End-to-end usage of the fluent API through the prelude.

use chrono::NaiveDate;
use fluent_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn username_scenario() {
    let result = ValidatorBuilder::string()
        .required()
        .min_length(5)
        .max_length(20)
        .matches("^[a-zA-Z0-9_]+$")
        .unwrap()
        .validate("john123");
    assert_eq!(result, ValidationResult::valid());
}

#[test]
fn age_scenario() {
    let result = ValidatorBuilder::integer().min(18).max(120).validate(&15);
    assert!(!result.is_valid());
    assert_eq!(
        result.error_message(),
        "Value must be greater than or equal to 18"
    );
}

// ============================================================================
// STRING
// ============================================================================

#[rstest]
#[case("", "Value is required")]
#[case("abc", "Minimum length is 5 characters")]
#[case("abcdefghijklmnopqrstuvwxyz", "Maximum length is 20 characters")]
#[case("john doe", "Value does not match the required pattern")]
#[case("john_doe", "")]
fn username_messages(#[case] input: &str, #[case] expected: &str) {
    let validator = string()
        .required()
        .min_length(5)
        .max_length(20)
        .matches("^[a-zA-Z0-9_]+$")
        .unwrap();
    assert_eq!(validator.validate(input).error_message(), expected);
}

#[rstest]
#[case(LengthMode::Chars, true)]
#[case(LengthMode::Bytes, false)]
fn length_mode_changes_counting(#[case] mode: LengthMode, #[case] valid: bool) {
    let validator = string().max_length(4).length_mode(mode);
    // Five chars, six bytes: too long either way.
    assert!(!validator.is_valid("h\u{e9}llo"));
    // Four chars, five bytes.
    assert_eq!(validator.is_valid("h\u{e9}ll"), valid);
}

#[test]
fn owned_and_json_inputs() {
    let validator = string().required().min_length(2);
    assert!(validator.validate_any(&String::from("ok")).is_valid());
    assert!(validator.validate_any(&serde_json::json!("ok")).is_valid());
    assert_eq!(
        validator.validate_any(&serde_json::json!(null)).error_message(),
        "Value is required"
    );
    assert_eq!(
        validator.validate_any(&serde_json::json!(42)).error_message(),
        "Expected a string, got number"
    );
}

#[test]
fn invalid_pattern_is_a_configuration_error() {
    let err = string().matches("([a-z]").unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidPattern { .. }));
}

// ============================================================================
// INTEGER
// ============================================================================

#[rstest]
#[case(17, false)]
#[case(18, true)]
#[case(65, true)]
#[case(120, true)]
#[case(121, false)]
fn integer_bounds(#[case] value: i64, #[case] valid: bool) {
    assert_eq!(integer().min(18).max(120).is_valid(&value), valid);
}

#[test]
fn integer_accepts_narrower_types() {
    let validator = integer().max(255);
    assert!(validator.validate_any(&200_u8).is_valid());
    assert!(validator.validate_any(&-3_i16).is_valid());
    assert_eq!(
        validator.validate_any(&1_000_u32).error_message(),
        "Value must be less than or equal to 255"
    );
}

// ============================================================================
// DATE
// ============================================================================

#[rstest]
#[case(ymd(2023, 12, 31), "Date must be after the minimum date")]
#[case(ymd(2024, 1, 1), "")]
#[case(ymd(2024, 7, 4), "")]
#[case(ymd(2024, 12, 31), "")]
#[case(ymd(2025, 1, 1), "Date must be before the maximum date")]
fn date_bounds(#[case] value: NaiveDate, #[case] expected: &str) {
    let validator = date().after(ymd(2024, 1, 1)).before(ymd(2024, 12, 31));
    assert_eq!(validator.validate(&value).error_message(), expected);
}

#[test]
fn date_from_iso_string() {
    let validator = date().after(ymd(2000, 1, 1));
    assert!(validator.validate_any("2001-02-03").is_valid());
    assert_eq!(
        validator.validate_any("1999-12-31").error_message(),
        "Date must be after the minimum date"
    );
    assert_eq!(
        validator.validate_any("yesterday").error_message(),
        "Expected an ISO-8601 date, got string"
    );
}

// ============================================================================
// EMAIL
// ============================================================================

#[rstest]
#[case("user@example.com", true)]
#[case("first.last@sub.example.co.uk", true)]
#[case("not-an-email", false)]
#[case("a@b", false)]
#[case("", true)]
fn email_addresses(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(email().is_valid(input), valid);
}

#[test]
fn required_email() {
    let validator = email().required();
    assert_eq!(validator.validate("").error_message(), "Value is required");
    assert_eq!(
        validator.validate("not-an-email").error_message(),
        "Invalid email address format"
    );
}

// ============================================================================
// EXTENSION & PROPAGATION
// ============================================================================

/// A consumer-defined validator: no registration, just the trait.
struct NonBlank;

impl Validate for NonBlank {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if input.trim().is_empty() {
            ValidationResult::invalid("Value must not be blank")
        } else {
            ValidationResult::valid()
        }
    }
}

#[test]
fn custom_validator() {
    assert!(NonBlank.is_valid("x"));
    assert_eq!(
        NonBlank.validate("   ").error_message(),
        "Value must not be blank"
    );
    assert!(NonBlank.validate_any(&String::from(" y ")).is_valid());
}

#[test]
fn heterogeneous_validators_behind_trait_objects() {
    let checks: Vec<Box<dyn Validate<Input = str>>> = vec![
        Box::new(string().required()),
        Box::new(email()),
        Box::new(NonBlank),
    ];
    let messages: Vec<String> = checks
        .iter()
        .map(|v| v.validate("   ").error_message().to_string())
        .collect();
    assert_eq!(
        messages,
        vec![
            String::new(),
            "Invalid email address format".to_string(),
            "Value must not be blank".to_string(),
        ]
    );
}

fn register(name: &str, age: i64) -> Result<(), ValidatorError> {
    string().required().validate(name).into_result()?;
    integer().min(18).validate(&age).into_result()?;
    Ok(())
}

#[test]
fn failures_propagate_with_question_mark() {
    assert!(register("alice", 30).is_ok());

    let err = register("", 30).unwrap_err();
    assert!(err.is_failure());
    assert_eq!(err.to_string(), "Value is required");

    let err = register("bob", 12).unwrap_err();
    assert_eq!(err.to_string(), "Value must be greater than or equal to 18");
}

#[test]
fn validators_are_shareable_across_threads() {
    let validator = std::sync::Arc::new(email().required());
    let handles: Vec<_> = ["a@example.com", "nope"]
        .into_iter()
        .map(|input| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.is_valid(input))
        })
        .collect();
    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes, vec![true, false]);
}
