//! Basic usage example for fluent-validator
//!
//! Run with `RUST_LOG=fluent_validator=trace` to see which rule rejected
//! each value.

use fluent_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn report(label: &str, result: &ValidationResult) {
    if result.is_valid() {
        println!("✓ {label} is valid");
    } else {
        println!("✗ {label} is invalid: {}", result.error_message());
    }
}

fn main() -> Result<(), ValidatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = string()
        .required()
        .min_length(5)
        .max_length(20)
        .matches("^[a-zA-Z0-9_]+$")?;
    report("'john123'", &username.validate("john123"));
    report("'jo'", &username.validate("jo"));

    let age = integer().min(18).max(120);
    report("age 15", &age.validate(&15));

    let contact = email().required();
    report("'user@example.com'", &contact.validate("user@example.com"));
    report("'not-an-email'", &contact.validate("not-an-email"));

    let rules = Rules::from_json(r#"{ "type": "date", "after": "2024-01-01" }"#)?;
    let start = rules.build()?;
    report("start 2023-12-31", &start.validate(&serde_json::json!("2023-12-31")));

    Ok(())
}
