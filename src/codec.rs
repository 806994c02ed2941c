//! Conversion between boundary payloads and `Festival` records.
//!
//! Inbound payloads are either a JSON object already parsed by the transport,
//! or text holding one. A JSON string value handed over as "structured" is
//! unwrapped and parsed as text, matching what the front-end constructor does.

use crate::error::DecodeError;
use crate::record::raw::{FIELD_DAYS, FIELD_NAME, FIELD_TYPE, json_type_name};
use crate::record::{Festival, RawFestival};

pub use crate::record::DecodePolicy;
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub policy: DecodePolicy,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            policy: DecodePolicy::Strict,
        }
    }

    pub fn permissive() -> Self {
        Self {
            policy: DecodePolicy::Permissive,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Text(String),
    Structured(Value),
}

impl From<&str> for RawPayload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawPayload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Value> for RawPayload {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Self::Text(s),
            other => Self::Structured(other),
        }
    }
}

impl From<Map<String, Value>> for RawPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Structured(Value::Object(map))
    }
}

impl RawPayload {
    /// Reduce the payload to a key/value mapping.
    pub fn into_map(self) -> Result<Map<String, Value>, DecodeError> {
        let value = match self {
            Self::Text(text) => serde_json::from_str::<Value>(&text)
                .map_err(|e| DecodeError::malformed(e.to_string()))?,
            // Same handling as text, whichever way the payload was built.
            Self::Structured(Value::String(text)) => serde_json::from_str::<Value>(&text)
                .map_err(|e| DecodeError::malformed(e.to_string()))?,
            Self::Structured(value) => value,
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(DecodeError::malformed(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

/// Decode with the strict policy.
pub fn decode(raw: impl Into<RawPayload>) -> Result<Festival, DecodeError> {
    decode_with(raw, &DecodeOptions::default())
}

pub fn decode_with(
    raw: impl Into<RawPayload>,
    options: &DecodeOptions,
) -> Result<Festival, DecodeError> {
    let result = raw
        .into()
        .into_map()
        .and_then(RawFestival::from_map)
        .and_then(|r| r.validate_and_build(options.policy));

    match &result {
        Ok(f) => debug!(
            festival = f.name(),
            days = f.days(),
            policy = ?options.policy,
            "decoded festival"
        ),
        Err(e) => debug!(error = %e, policy = ?options.policy, "rejected festival payload"),
    }
    result
}

/// Canonical mapping for the return trip.
pub fn encode(festival: &Festival) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(FIELD_NAME.to_string(), Value::from(festival.name()));
    map.insert(FIELD_DAYS.to_string(), Value::from(festival.days()));
    map.insert(FIELD_TYPE.to_string(), Value::from(festival.kind_label()));
    map
}

pub fn encode_to_string(festival: &Festival) -> String {
    Value::Object(encode(festival)).to_string()
}

impl Festival {
    /// Strict decode, mirroring the front-end `createFrom` factory.
    pub fn create_from(raw: impl Into<RawPayload>) -> Result<Self, DecodeError> {
        decode(raw)
    }

    pub fn to_map(&self) -> Map<String, Value> {
        encode(self)
    }
}
