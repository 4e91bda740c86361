//! Validators over untyped configuration values.
//!
//! Every validator takes the raw value and the field key, and returns a
//! [`Validation`]. Type checks run first; a value of the wrong type never
//! reaches the content checks.

use std::sync::OnceLock;

use arm_id::{find_format, IdFormat, ResourceId};
use regex::Regex;
use serde_json::Value;

use crate::{Validation, ValidationError};

/// Smallest accepted capacity.
pub const CAPACITY_MIN: i64 = 36;

/// Largest accepted capacity.
pub const CAPACITY_MAX: i64 = 216;

/// Capacity must be a multiple of this step.
pub const CAPACITY_STEP: i64 = 36;

/// A boxed validator, as returned by [`by_name`].
pub type Validator = Box<dyn Fn(&Value, &str) -> Validation + Send + Sync>;

fn expect_str<'a>(value: &'a Value, key: &str) -> Result<&'a str, Validation> {
    value.as_str().ok_or_else(|| {
        Validation::from_error(ValidationError::WrongType {
            key: key.to_string(),
            expected: "a string",
        })
    })
}

/// Reads a JSON integer. `u64` values above `i64::MAX` are kept, so range
/// checks report them instead of a type error.
fn expect_int(value: &Value, key: &str) -> Result<i128, Validation> {
    let int = value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from));
    int.ok_or_else(|| {
        Validation::from_error(ValidationError::WrongType {
            key: key.to_string(),
            expected: "an integer",
        })
    })
}

/// Warns when an accepted ID differs from its canonical form.
fn canonical_warning(key: &str, input: &str, canonical: &str) -> Option<String> {
    (input != canonical).then(|| format!("{key}: {input:?} will be normalized to {canonical:?}"))
}

/// Validates that `value` is a string parsing as resource ID kind `T`.
pub fn resource_id<T: ResourceId>(value: &Value, key: &str) -> Validation {
    let input = match expect_str(value, key) {
        Ok(input) => input,
        Err(result) => return result,
    };

    match T::parse(input) {
        Ok(id) => {
            let mut result = Validation::ok();
            if let Some(warning) = canonical_warning(key, input, &id.to_string()) {
                result.push_warning(warning);
            }
            result
        }
        Err(source) => Validation::from_error(ValidationError::InvalidResourceId {
            key: key.to_string(),
            source,
        }),
    }
}

/// Like [`resource_id`], for a kind only known at runtime.
pub fn resource_id_of(format: &IdFormat, value: &Value, key: &str) -> Validation {
    let input = match expect_str(value, key) {
        Ok(input) => input,
        Err(result) => return result,
    };

    match format.parse(input) {
        Ok(captures) => {
            let values: Vec<&str> = captures.iter().map(|(_, value)| value).collect();
            let mut result = Validation::ok();
            if let Some(warning) = canonical_warning(key, input, &format.format(&values)) {
                result.push_warning(warning);
            }
            result
        }
        Err(source) => Validation::from_error(ValidationError::InvalidResourceId {
            key: key.to_string(),
            source,
        }),
    }
}

/// Builds a validator for integers in `min..=max` that are multiples of `step`.
///
/// Range and step violations are reported as separate errors.
pub fn int_between_and_multiple_of(
    min: i64,
    max: i64,
    step: i64,
) -> impl Fn(&Value, &str) -> Validation + Send + Sync {
    move |value: &Value, key: &str| {
        let actual = match expect_int(value, key) {
            Ok(actual) => actual,
            Err(result) => return result,
        };

        let mut result = Validation::ok();
        if actual < i128::from(min) || actual > i128::from(max) {
            result.push_error(ValidationError::OutOfRange {
                key: key.to_string(),
                min,
                max,
                actual,
            });
        }
        if step > 0 && actual % i128::from(step) != 0 {
            result.push_error(ValidationError::NotMultipleOf {
                key: key.to_string(),
                step,
                actual,
            });
        }
        result
    }
}

/// Validates a capacity value: `36..=216` in steps of `36`.
pub fn capacity(value: &Value, key: &str) -> Validation {
    int_between_and_multiple_of(CAPACITY_MIN, CAPACITY_MAX, CAPACITY_STEP)(value, key)
}

/// Builds a validator for strings matching `pattern`.
///
/// `description` completes the sentence "{key} ...", e.g. "must be lowercase".
pub fn string_matches(
    pattern: &'static Regex,
    description: &'static str,
) -> impl Fn(&Value, &str) -> Validation + Send + Sync {
    move |value: &Value, key: &str| {
        let input = match expect_str(value, key) {
            Ok(input) => input,
            Err(result) => return result,
        };

        if pattern.is_match(input) {
            Validation::ok()
        } else {
            Validation::from_error(ValidationError::PatternMismatch {
                key: key.to_string(),
                description,
                actual: input.to_string(),
            })
        }
    }
}

fn suppression_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9\-_.~ ]{1,259}$").expect("suppression name pattern is valid")
    })
}

/// Validates an Advisor suppression name.
pub fn suppression_name(value: &Value, key: &str) -> Validation {
    string_matches(
        suppression_name_pattern(),
        "must be 1-259 characters of letters, digits, spaces, '-', '_', '.' or '~'",
    )(value, key)
}

/// Validates that `value` is a non-empty string.
pub fn string_is_not_empty(value: &Value, key: &str) -> Validation {
    match expect_str(value, key) {
        Ok("") => Validation::from_error(ValidationError::Empty {
            key: key.to_string(),
        }),
        Ok(_) => Validation::ok(),
        Err(result) => result,
    }
}

/// Validates a subscription ID: a hyphenated UUID.
pub fn subscription_id(value: &Value, key: &str) -> Validation {
    let input = match expect_str(value, key) {
        Ok(input) => input,
        Err(result) => return result,
    };

    let hyphenated = input.len() == 36 && uuid::Uuid::try_parse(input).is_ok();
    if hyphenated {
        Validation::ok()
    } else {
        Validation::from_error(ValidationError::InvalidUuid {
            key: key.to_string(),
            actual: input.to_string(),
        })
    }
}

/// Names accepted by [`by_name`], besides `resource_id:<kind>`.
pub const VALIDATOR_NAMES: &[&str] = &["capacity", "suppression_name", "not_empty", "subscription_id"];

/// Resolves a validator by name.
///
/// `resource_id:<kind>` validates a resource ID of any catalog kind.
pub fn by_name(name: &str) -> Option<Validator> {
    if let Some(kind) = name.strip_prefix("resource_id:") {
        let format = find_format(kind).ok()?;
        return Some(Box::new(move |value: &Value, key: &str| {
            resource_id_of(format, value, key)
        }));
    }

    let validator: Validator = match name {
        "capacity" => Box::new(capacity),
        "suppression_name" => Box::new(suppression_name),
        "not_empty" => Box::new(string_is_not_empty),
        "subscription_id" => Box::new(subscription_id),
        _ => return None,
    };
    Some(validator)
}

#[cfg(test)]
mod tests {
    use arm_id::{ResourceGroupId, SqlDatabaseId};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    const SUB: &str = "00000000-0000-0000-0000-000000000000";

    #[rstest]
    #[case(1, false)]
    #[case(24, false)]
    #[case(36, true)]
    #[case(100, false)]
    #[case(108, true)]
    #[case(216, true)]
    #[case(252, false)]
    fn test_capacity(#[case] value: i64, #[case] valid: bool) {
        let result = capacity(&json!(value), "capacity");
        assert_eq!(result.is_valid(), valid, "capacity {value}");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_capacity_reports_each_violation() {
        let result = capacity(&json!(250), "capacity");
        assert_eq!(
            result.errors,
            vec![
                ValidationError::OutOfRange {
                    key: "capacity".to_string(),
                    min: 36,
                    max: 216,
                    actual: 250,
                },
                ValidationError::NotMultipleOf {
                    key: "capacity".to_string(),
                    step: 36,
                    actual: 250,
                },
            ]
        );
        assert_eq!(
            result.errors[0].to_string(),
            "expected capacity to be in the range (36 - 216), got 250"
        );
    }

    #[test]
    fn test_capacity_beyond_i64_is_out_of_range() {
        let huge = u64::MAX;
        let result = capacity(&json!(huge), "capacity");
        assert!(matches!(
            &result.errors[..],
            [ValidationError::OutOfRange { actual, .. }, ..] if *actual == i128::from(huge)
        ));
        assert!(!result.errors.iter().any(ValidationError::is_type_error));
    }

    #[rstest]
    #[case(json!("36"))]
    #[case(json!(36.5))]
    #[case(json!(null))]
    fn test_capacity_wrong_type(#[case] value: Value) {
        let result = capacity(&value, "capacity");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].is_type_error());
    }

    #[rstest]
    #[case("Snooze for a week", true)]
    #[case("a-b_c.d~e", true)]
    #[case("x", true)]
    #[case("", false)]
    #[case("has/slash", false)]
    #[case("emoji 🙂", false)]
    fn test_suppression_name(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(suppression_name(&json!(value), "name").is_valid(), valid);
    }

    #[test]
    fn test_suppression_name_length() {
        let longest = "a".repeat(259);
        assert!(suppression_name(&json!(longest), "name").is_valid());

        let too_long = "a".repeat(260);
        let result = suppression_name(&json!(too_long), "name");
        assert!(matches!(
            &result.errors[..],
            [ValidationError::PatternMismatch { key, .. }] if key == "name"
        ));
    }

    #[test]
    fn test_resource_id_valid() {
        let value = json!(format!("/subscriptions/{SUB}/resourceGroups/rg1"));
        let result = resource_id::<ResourceGroupId>(&value, "resource_group_id");
        assert_eq!(result, Validation::ok());
    }

    #[test]
    fn test_resource_id_rejects_longer_kind() {
        let value = json!(format!(
            "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Compute/virtualMachines/vm1"
        ));
        let result = resource_id::<ResourceGroupId>(&value, "resource_group_id");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].key(), "resource_group_id");
        assert!(result.errors[0]
            .to_string()
            .starts_with("resource_group_id: invalid resource_group ID"));
    }

    #[test]
    fn test_resource_id_wrong_type() {
        let result = resource_id::<SqlDatabaseId>(&json!(42), "database_id");
        assert_eq!(
            result.errors,
            vec![ValidationError::WrongType {
                key: "database_id".to_string(),
                expected: "a string",
            }]
        );
    }

    #[test]
    fn test_resource_id_warns_on_non_canonical_input() {
        let value = json!(format!("subscriptions/{SUB}/resourceGroups/rg1/"));
        let result = resource_id::<ResourceGroupId>(&value, "id");
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_resource_id_of_runtime_kind() {
        let format = find_format("resource_group").unwrap();
        let good = json!(format!("/subscriptions/{SUB}/resourceGroups/rg1"));
        let bad = json!(format!("/subscriptions/{SUB}/resourcegroups/rg1"));
        assert!(resource_id_of(format, &good, "id").is_valid());
        assert!(!resource_id_of(format, &bad, "id").is_valid());
    }

    #[rstest]
    #[case(json!(SUB), true)]
    #[case(json!("00000000000000000000000000000000"), false)]
    #[case(json!("not-a-uuid"), false)]
    #[case(json!(1), false)]
    fn test_subscription_id(#[case] value: Value, #[case] valid: bool) {
        assert_eq!(subscription_id(&value, "subscription_id").is_valid(), valid);
    }

    #[test]
    fn test_string_is_not_empty() {
        assert!(string_is_not_empty(&json!("x"), "name").is_valid());
        assert_eq!(
            string_is_not_empty(&json!(""), "name").errors,
            vec![ValidationError::Empty {
                key: "name".to_string()
            }]
        );
    }

    #[test]
    fn test_by_name() {
        for name in VALIDATOR_NAMES {
            assert!(by_name(name).is_some(), "{name}");
        }
        let validator = by_name("resource_id:sql_server").unwrap();
        assert!(!validator(&json!("/subscriptions/x"), "id").is_valid());
        assert!(by_name("resource_id:unknown").is_none());
        assert!(by_name("unknown").is_none());
    }
}
