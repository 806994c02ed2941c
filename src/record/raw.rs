//! Raw festival shape as it arrives from the boundary.
//!
//! Every field is kept as an untyped JSON value so validation can tell an
//! absent key apart from an explicit `null` and report the offending field.
//! Unknown keys are ignored.

use crate::error::DecodeError;
use crate::record::Festival;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const FIELD_NAME: &str = "name";
pub const FIELD_DAYS: &str = "days";
pub const FIELD_TYPE: &str = "type";

/// Canonical field order, used for error reporting.
pub const FIELDS: [&str; 3] = [FIELD_NAME, FIELD_DAYS, FIELD_TYPE];

/// How absent fields are treated while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Absent keys and nulls are errors.
    #[default]
    Strict,
    /// Absent keys and nulls become `""` / `0`.
    Permissive,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFestival {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub days: Option<Value>,

    #[serde(default, deserialize_with = "present", rename = "type")]
    pub kind: Option<Value>,
}

// Without this, serde maps an explicit `null` to `None` as well.
fn present<'de, D>(de: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(de).map(Some)
}

impl RawFestival {
    pub fn from_map(map: Map<String, Value>) -> Result<Self, DecodeError> {
        serde_json::from_value(Value::Object(map)).map_err(|e| DecodeError::malformed(e.to_string()))
    }

    /// Field values paired with their keys, in `FIELDS` order.
    fn slots(&self) -> impl Iterator<Item = (&'static str, Option<&Value>)> {
        FIELDS.into_iter().zip([
            self.name.as_ref(),
            self.days.as_ref(),
            self.kind.as_ref(),
        ])
    }

    /// Check presence and types, then build the typed record.
    ///
    /// Strict: all absent keys are reported together before any type check.
    /// Permissive: absent keys and explicit nulls take the field default.
    /// Neither policy coerces a present value of the wrong type.
    pub fn validate_and_build(&self, policy: DecodePolicy) -> Result<Festival, DecodeError> {
        if policy == DecodePolicy::Strict {
            let missing: Vec<&'static str> = self
                .slots()
                .filter(|(_, v)| v.is_none())
                .map(|(field, _)| field)
                .collect();
            if !missing.is_empty() {
                return Err(DecodeError::MissingFields { fields: missing });
            }
        }

        let name = text_field(FIELD_NAME, self.name.as_ref(), policy)?;
        let days = days_field(self.days.as_ref(), policy)?;
        let kind = text_field(FIELD_TYPE, self.kind.as_ref(), policy)?;

        Ok(Festival::new(name, days, kind))
    }
}

fn text_field(
    field: &'static str,
    value: Option<&Value>,
    policy: DecodePolicy,
) -> Result<String, DecodeError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) if policy == DecodePolicy::Permissive => Ok(String::new()),
        other => Err(mismatch(field, "string", other)),
    }
}

fn days_field(value: Option<&Value>, policy: DecodePolicy) -> Result<i64, DecodeError> {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            // JS senders may hand over `3.0`; accept integral floats only.
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && in_i64_range(f) => Ok(f as i64),
                _ => Err(mismatch(FIELD_DAYS, "integer", value)),
            }
        }
        None | Some(Value::Null) if policy == DecodePolicy::Permissive => Ok(0),
        other => Err(mismatch(FIELD_DAYS, "integer", other)),
    }
}

fn in_i64_range(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn mismatch(field: &'static str, expected: &'static str, found: Option<&Value>) -> DecodeError {
    DecodeError::TypeMismatch {
        field,
        expected,
        found: found.map(json_type_name).unwrap_or("nothing"),
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawFestival {
        match value {
            Value::Object(map) => RawFestival::from_map(map).unwrap(),
            other => panic!("test payload must be an object, got {other}"),
        }
    }

    #[test]
    fn null_and_absent_are_distinguished() {
        let r = raw(json!({"name": null}));
        assert_eq!(r.name, Some(Value::Null));
        assert_eq!(r.days, None);
        assert_eq!(r.kind, None);
    }

    #[test]
    fn strict_reports_all_missing_fields_in_order() {
        let err = raw(json!({"type": "music"}))
            .validate_and_build(DecodePolicy::Strict)
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingFields {
                fields: vec!["name", "days"]
            }
        );
    }

    #[test]
    fn strict_reports_every_field_of_empty_payload() {
        let err = raw(json!({}))
            .validate_and_build(DecodePolicy::Strict)
            .unwrap_err();
        assert_eq!(err.fields(), FIELDS.to_vec());
    }

    #[test]
    fn strict_rejects_explicit_null() {
        let err = raw(json!({"name": "Riverfest", "days": null, "type": "music"}))
            .validate_and_build(DecodePolicy::Strict)
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "days",
                expected: "integer",
                found: "null"
            }
        );
    }

    #[test]
    fn permissive_fills_defaults() {
        let f = raw(json!({"days": null}))
            .validate_and_build(DecodePolicy::Permissive)
            .unwrap();
        assert_eq!(f, Festival::new("", 0, ""));
    }

    #[test]
    fn integral_float_days_accepted_fraction_rejected() {
        let ok = raw(json!({"name": "a", "days": 3.0, "type": "b"}))
            .validate_and_build(DecodePolicy::Strict)
            .unwrap();
        assert_eq!(ok.days(), 3);

        let err = raw(json!({"name": "a", "days": 2.5, "type": "b"}))
            .validate_and_build(DecodePolicy::Strict)
            .unwrap_err();
        assert_eq!(err.fields(), vec!["days"]);
    }

    #[test]
    fn days_beyond_i64_is_mismatch() {
        let err = raw(json!({"name": "a", "days": u64::MAX, "type": "b"}))
            .validate_and_build(DecodePolicy::Strict)
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                field: "days",
                found: "number",
                ..
            }
        ));
    }

    #[test]
    fn negative_days_allowed() {
        let f = raw(json!({"name": "a", "days": -2, "type": "b"}))
            .validate_and_build(DecodePolicy::Strict)
            .unwrap();
        assert_eq!(f.days(), -2);
    }
}
