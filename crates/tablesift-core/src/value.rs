//! Untyped scalar values stored in row fields
//!
//! Rows coming from a data source carry loosely typed scalars. [`Value`]
//! keeps them untyped and provides the two conversions every matcher relies
//! on: string conversion ([`fmt::Display`]) and truthiness
//! ([`Value::is_truthy`]).

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A scalar field value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// The field is absent from the row
	#[default]
	Undefined,
	/// An explicit null
	Null,
	/// A boolean
	Bool(bool),
	/// A number; integers are stored as integral floats
	Number(f64),
	/// A string
	String(String),
}

impl Value {
	/// Returns the truthiness of this value
	///
	/// `Undefined`, `Null`, `false`, `0`, `-0`, `NaN` and the empty string
	/// are falsy; every other value is truthy.
	///
	/// # Examples
	///
	/// ```
	/// use tablesift_core::Value;
	///
	/// assert!(Value::from(1).is_truthy());
	/// assert!(Value::from("yes").is_truthy());
	/// assert!(!Value::from(0).is_truthy());
	/// assert!(!Value::from("").is_truthy());
	/// assert!(!Value::Undefined.is_truthy());
	/// ```
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Undefined | Self::Null => false,
			Self::Bool(b) => *b,
			Self::Number(n) => !(n.is_nan() || *n == 0.0),
			Self::String(s) => !s.is_empty(),
		}
	}

	/// Returns true if the field was absent
	pub fn is_undefined(&self) -> bool {
		matches!(self, Self::Undefined)
	}

	/// Returns the string slice if this is a string value
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the boolean if this is a boolean value
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the number if this is a numeric value
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the lower-cased string conversion of this value
	///
	/// Used by the case-insensitive matchers.
	pub fn to_lowercase_string(&self) -> String {
		self.to_string().to_lowercase()
	}
}

fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	if n.is_nan() {
		f.write_str("NaN")
	} else if n.is_infinite() {
		f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
	} else if n == 0.0 {
		// -0 prints as 0
		f.write_str("0")
	} else if n.abs() >= 1e21 || n.abs() < 1e-6 {
		format_exponent(n, f)
	} else if n.fract() == 0.0 {
		write!(f, "{:.0}", n)
	} else {
		write!(f, "{}", n)
	}
}

// Shortest digits in exponent form, with an explicit sign on the exponent
fn format_exponent(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let formatted = format!("{:e}", n);
	match formatted.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => {
			write!(f, "{}e+{}", mantissa, exponent)
		}
		_ => f.write_str(&formatted),
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Undefined => f.write_str("undefined"),
			Self::Null => f.write_str("null"),
			Self::Bool(b) => write!(f, "{}", b),
			Self::Number(n) => format_number(*n, f),
			Self::String(s) => f.write_str(s),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32);

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<serde_json::Value> for Value {
	/// Converts a JSON value; arrays and objects keep their JSON text
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(b) => Self::Bool(b),
			serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
			serde_json::Value::String(s) => Self::String(s),
			other => Self::String(other.to_string()),
		}
	}
}

impl From<&Value> for serde_json::Value {
	fn from(value: &Value) -> Self {
		match value {
			Value::Undefined | Value::Null => serde_json::Value::Null,
			Value::Bool(b) => serde_json::Value::Bool(*b),
			Value::Number(n) => json_number(*n),
			Value::String(s) => serde_json::Value::String(s.clone()),
		}
	}
}

fn json_number(n: f64) -> serde_json::Value {
	if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
		serde_json::Value::from(n as i64)
	} else {
		serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Undefined | Self::Null => serializer.serialize_none(),
			Self::Bool(b) => serializer.serialize_bool(*b),
			Self::Number(n) => {
				if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
					serializer.serialize_i64(*n as i64)
				} else {
					serializer.serialize_f64(*n)
				}
			}
			Self::String(s) => serializer.serialize_str(s),
		}
	}
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a scalar value (null, boolean, number or string)")
	}

	fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
		Deserialize::deserialize(deserializer)
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
		Ok(Value::Bool(v))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
		Ok(Value::Number(v as f64))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
		Ok(Value::Number(v as f64))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
		Ok(Value::Number(v))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
		Ok(Value::String(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
		Ok(Value::String(v))
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(ValueVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Value::Undefined, "undefined")]
	#[case(Value::Null, "null")]
	#[case(Value::Bool(true), "true")]
	#[case(Value::Bool(false), "false")]
	#[case(Value::from(1), "1")]
	#[case(Value::from(-42), "-42")]
	#[case(Value::from(1.5), "1.5")]
	#[case(Value::from(-0.0), "0")]
	#[case(Value::from(f64::NAN), "NaN")]
	#[case(Value::from(f64::INFINITY), "Infinity")]
	#[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
	#[case(Value::from(1e21), "1e+21")]
	#[case(Value::from(-2.5e22), "-2.5e+22")]
	#[case(Value::from(1e-7), "1e-7")]
	#[case(Value::from(-1.25e-9), "-1.25e-9")]
	#[case(Value::from(1e20), "100000000000000000000")]
	#[case(Value::from(0.000001), "0.000001")]
	#[case(Value::from("Anna"), "Anna")]
	fn test_string_conversion(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	#[case(Value::Undefined, false)]
	#[case(Value::Null, false)]
	#[case(Value::Bool(false), false)]
	#[case(Value::from(0), false)]
	#[case(Value::from(-0.0), false)]
	#[case(Value::from(f64::NAN), false)]
	#[case(Value::from(""), false)]
	#[case(Value::Bool(true), true)]
	#[case(Value::from(1), true)]
	#[case(Value::from("yes"), true)]
	#[case(Value::from("0"), true)]
	#[case(Value::from("false"), true)]
	fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(value.is_truthy(), expected);
	}

	#[rstest]
	fn test_option_converts_to_null() {
		let missing: Option<i32> = None;
		assert_eq!(Value::from(missing), Value::Null);
		assert_eq!(Value::from(Some(3)), Value::Number(3.0));
	}

	#[rstest]
	fn test_deserialize_json_scalars() {
		let values: Vec<Value> = serde_json::from_str(r#"[null, true, 7, 2.5, "x"]"#).unwrap();
		assert_eq!(
			values,
			vec![
				Value::Null,
				Value::Bool(true),
				Value::Number(7.0),
				Value::Number(2.5),
				Value::String("x".to_string()),
			]
		);
	}

	#[rstest]
	fn test_serialize_integral_number_without_fraction() {
		let json = serde_json::to_string(&Value::from(7)).unwrap();
		assert_eq!(json, "7");
		let json = serde_json::to_string(&Value::Undefined).unwrap();
		assert_eq!(json, "null");
	}

	#[rstest]
	fn test_from_json_compound_keeps_text() {
		let value = Value::from(serde_json::json!([1, 2]));
		assert_eq!(value, Value::String("[1,2]".to_string()));
	}
}
