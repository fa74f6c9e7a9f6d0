//! The item codec seam and the raw JSON helpers every family codec shares.

use serde_json::{Map, Value};

use crate::error::{malformed, WireError};

/// A record with a fixed wire shape.
///
/// Containers that hold homogeneous lists (tagged pairs, session lists)
/// decode each element through this trait.
pub trait WireCodec: Sized {
    fn from_wire(value: &Value) -> Result<Self, WireError>;
    fn to_wire(&self) -> Value;
}

impl WireCodec for String {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        expect_str(value, "string item").map(str::to_string)
    }

    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: WireCodec> WireCodec for Vec<T> {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        decode_list(value, "list")
    }

    fn to_wire(&self) -> Value {
        encode_list(self)
    }
}

/// Parses JSON text and decodes it as `T`.
pub fn decode_str<T: WireCodec>(text: &str) -> Result<T, WireError> {
    let value: Value = serde_json::from_str(text)?;
    T::from_wire(&value)
}

/// Encodes `T` to compact JSON text.
pub fn encode_string<T: WireCodec>(item: &T) -> String {
    item.to_wire().to_string()
}

// ── Shape helpers ─────────────────────────────────────────────────────────

pub(crate) fn expect_array<'a>(v: &'a Value, what: &str) -> Result<&'a Vec<Value>, WireError> {
    v.as_array()
        .ok_or_else(|| malformed(format!("{what} must be an array")))
}

pub(crate) fn expect_object<'a>(
    v: &'a Value,
    what: &str,
) -> Result<&'a Map<String, Value>, WireError> {
    v.as_object()
        .ok_or_else(|| malformed(format!("{what} must be an object")))
}

pub(crate) fn expect_str<'a>(v: &'a Value, what: &str) -> Result<&'a str, WireError> {
    v.as_str()
        .ok_or_else(|| malformed(format!("{what} must be a string")))
}

/// Reads an integer sent either as a JSON number or as a numeric string.
pub(crate) fn expect_int(v: &Value, what: &str) -> Result<i64, WireError> {
    let parsed = match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| malformed(format!("{what} must be an integer")))
}

pub(crate) fn expect_uint(v: &Value, what: &str) -> Result<u64, WireError> {
    let n = expect_int(v, what)?;
    u64::try_from(n).map_err(|_| malformed(format!("{what} must not be negative")))
}

pub(crate) fn malformed_len(what: &str, expected: usize, found: usize) -> WireError {
    malformed(format!("{what} must have {expected} elements, found {found}"))
}

pub(crate) fn field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    what: &str,
) -> Result<&'a Value, WireError> {
    obj.get(key)
        .ok_or_else(|| malformed(format!("{what} is missing `{key}`")))
}

// ── Tagged wrappers ───────────────────────────────────────────────────────

/// Splits a single-field wrapper object into its tag and payload.
pub(crate) fn single_field<'a>(
    v: &'a Value,
    what: &str,
) -> Result<(&'a str, &'a Value), WireError> {
    let obj = expect_object(v, what)?;
    if obj.len() != 1 {
        return Err(malformed(format!(
            "{what} must have exactly one field, found {}",
            obj.len()
        )));
    }
    let (tag, payload) = obj
        .iter()
        .next()
        .ok_or_else(|| malformed(format!("{what} is empty")))?;
    Ok((tag.as_str(), payload))
}

/// Unwraps `{tag: payload}` and checks the tag.
pub(crate) fn unwrap_tagged<'a>(v: &'a Value, tag: &str) -> Result<&'a Value, WireError> {
    let (found, payload) = single_field(v, tag)?;
    if found != tag {
        return Err(malformed(format!("expected `{tag}` wrapper, found `{found}`")));
    }
    Ok(payload)
}

pub(crate) fn tagged(tag: &str, payload: Value) -> Value {
    let mut m = Map::new();
    m.insert(tag.to_string(), payload);
    Value::Object(m)
}

// ── Lists ─────────────────────────────────────────────────────────────────

pub(crate) fn decode_list<T: WireCodec>(v: &Value, what: &str) -> Result<Vec<T>, WireError> {
    expect_array(v, what)?.iter().map(T::from_wire).collect()
}

pub(crate) fn encode_list<T: WireCodec>(items: &[T]) -> Value {
    Value::Array(items.iter().map(WireCodec::to_wire).collect())
}
