//! Tagged-pair containers and the spider's scope split.
//!
//! A tagged pair is exactly two single-field wrappers:
//!
//! ```json
//! [{"urlsInScope": [...]}, {"urlsOutOfScope": [...]}]
//! ```
//!
//! Sections are identified by their tag, never by position.

use serde_json::{Map, Value};

use crate::codec::{
    decode_list, encode_list, expect_array, expect_object, expect_str, field, malformed_len,
    single_field, tagged, WireCodec,
};
use crate::constants::{
    URLS_IN_SCOPE, URLS_OUT_OF_SCOPE, URL_MESSAGE_ID, URL_METHOD, URL_PROCESSED,
    URL_REASON_NOT_PROCESSED, URL_STATUS_CODE, URL_STATUS_REASON, URL_URL,
};
use crate::enums::nullable_int;
use crate::error::{malformed, WireError};

/// Decodes `[{first: [A...]}, {second: [B...]}]`.
pub fn decode_tagged_pair<A: WireCodec, B: WireCodec>(
    value: &Value,
    first: &str,
    second: &str,
) -> Result<(Vec<A>, Vec<B>), WireError> {
    let items = expect_array(value, "tagged pair")?;
    if items.len() != 2 {
        return Err(malformed_len("tagged pair", 2, items.len()));
    }
    let mut first_list: Option<&Value> = None;
    let mut second_list: Option<&Value> = None;
    for item in items {
        let (tag, list) = single_field(item, "tagged pair section")?;
        let slot = if tag == first {
            &mut first_list
        } else if tag == second {
            &mut second_list
        } else {
            return Err(malformed(format!("unknown tagged pair section `{tag}`")));
        };
        if slot.replace(list).is_some() {
            return Err(malformed(format!("tagged pair section `{tag}` repeated")));
        }
    }
    let first_list = first_list.ok_or_else(|| malformed(format!("missing `{first}` section")))?;
    let second_list = second_list.ok_or_else(|| malformed(format!("missing `{second}` section")))?;
    Ok((decode_list(first_list, first)?, decode_list(second_list, second)?))
}

/// Encodes two lists as `[{first: [...]}, {second: [...]}]`.
pub fn encode_tagged_pair<A: WireCodec, B: WireCodec>(
    first: &str,
    first_items: &[A],
    second: &str,
    second_items: &[B],
) -> Value {
    Value::Array(vec![
        tagged(first, encode_list(first_items)),
        tagged(second, encode_list(second_items)),
    ])
}

/// One URL the spider visited inside the scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRecord {
    pub url: String,
    pub method: String,
    pub message_id: Option<i64>,
    pub status_code: Option<i64>,
    pub status_reason: Option<String>,
    pub processed: Option<bool>,
    pub reason_not_processed: Option<String>,
}

fn optional_text(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, WireError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(expect_str(v, key)?.to_string())),
    }
}

fn optional_flag(obj: &Map<String, Value>, key: &str) -> Result<Option<bool>, WireError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) => s
            .parse::<bool>()
            .map(Some)
            .map_err(|_| malformed(format!("`{key}` must be `true` or `false`"))),
        Some(_) => Err(malformed(format!("`{key}` must be a boolean"))),
    }
}

impl WireCodec for UrlRecord {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let obj = expect_object(value, "url record")?;
        Ok(UrlRecord {
            url: expect_str(field(obj, URL_URL, "url record")?, URL_URL)?.to_string(),
            method: expect_str(field(obj, URL_METHOD, "url record")?, URL_METHOD)?.to_string(),
            message_id: obj.get(URL_MESSAGE_ID).and_then(nullable_int::decode),
            status_code: obj.get(URL_STATUS_CODE).and_then(nullable_int::decode),
            status_reason: optional_text(obj, URL_STATUS_REASON)?,
            processed: optional_flag(obj, URL_PROCESSED)?,
            reason_not_processed: optional_text(obj, URL_REASON_NOT_PROCESSED)?,
        })
    }

    /// Processed flags go out as the `"true"`/`"false"` strings the API uses.
    fn to_wire(&self) -> Value {
        let mut m = Map::new();
        if let Some(processed) = self.processed {
            m.insert(URL_PROCESSED.into(), Value::String(processed.to_string()));
        }
        if let Some(reason) = &self.status_reason {
            m.insert(URL_STATUS_REASON.into(), Value::String(reason.clone()));
        }
        m.insert(URL_METHOD.into(), Value::String(self.method.clone()));
        if let Some(reason) = &self.reason_not_processed {
            m.insert(URL_REASON_NOT_PROCESSED.into(), Value::String(reason.clone()));
        }
        m.insert(URL_MESSAGE_ID.into(), nullable_int::encode(self.message_id));
        m.insert(URL_URL.into(), Value::String(self.url.clone()));
        m.insert(URL_STATUS_CODE.into(), nullable_int::encode(self.status_code));
        Value::Object(m)
    }
}

/// Spider results split by scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSplit {
    pub in_scope: Vec<UrlRecord>,
    pub out_of_scope: Vec<String>,
}

impl WireCodec for ScopeSplit {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let (in_scope, out_of_scope) = decode_tagged_pair(value, URLS_IN_SCOPE, URLS_OUT_OF_SCOPE)?;
        Ok(ScopeSplit {
            in_scope,
            out_of_scope,
        })
    }

    fn to_wire(&self) -> Value {
        encode_tagged_pair(URLS_IN_SCOPE, &self.in_scope, URLS_OUT_OF_SCOPE, &self.out_of_scope)
    }
}
