//! Dynamic modifier inputs.
//!
//! Modifiers decoded from JSON (or anything converted to [`serde_json::Value`])
//! may hold non-string values; those are rejected before any class is built.

use serde_json::Value;

/// Returns the JSON type name of a value.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Borrows every value as a string, or returns the type name of the first
/// value that is not one.
pub(crate) fn string_modifiers(values: &[Value]) -> Result<Vec<&str>, &'static str> {
	values
		.iter()
		.map(|value| value.as_str().ok_or_else(|| json_type_name(value)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), "null")]
	#[case(json!(true), "boolean")]
	#[case(json!(42), "number")]
	#[case(json!(1.5), "number")]
	#[case(json!("x"), "string")]
	#[case(json!(["help"]), "array")]
	#[case(json!({"a": 1}), "object")]
	fn test_json_type_name(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(json_type_name(&value), expected);
	}

	#[rstest]
	fn test_string_modifiers_reports_first_non_string() {
		let values = [json!("large"), json!(["help"]), json!(3)];
		assert_eq!(string_modifiers(&values), Err("array"));
	}

	#[rstest]
	fn test_string_modifiers_borrows_strings() {
		let values = [json!(" primary "), json!("large")];
		assert_eq!(string_modifiers(&values), Ok(vec![" primary ", "large"]));
	}
}
