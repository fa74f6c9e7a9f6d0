//! HTTP sessions tracked by the scanner.
//!
//! ```json
//! ["Session 0", {"JSESSIONID": {"name": "JSESSIONID", "value": "abc"}}, 2]
//! ```
//!
//! Name, token map and matched-message count sit at fixed positions.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::codec::{
    expect_array, expect_int, expect_object, expect_str, field, malformed_len, WireCodec,
};
use crate::constants::{
    COOKIE_DOMAIN, COOKIE_HTTP_ONLY, COOKIE_NAME, COOKIE_PATH, COOKIE_SECURE, COOKIE_VALUE,
};
use crate::error::{malformed, WireError};

const SESSION_ARITY: usize = 3;

/// One session token. Fields other than the well-known ones are kept in
/// `extra` and written back after them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub secure: Option<bool>,
    pub http_only: Option<bool>,
    pub extra: Map<String, Value>,
}

impl CookieRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

fn optional_str(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, WireError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(expect_str(v, key)?.to_string())),
    }
}

fn optional_bool(obj: &Map<String, Value>, key: &str) -> Result<Option<bool>, WireError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(_) => Err(malformed(format!("cookie `{key}` must be a boolean"))),
    }
}

impl WireCodec for CookieRecord {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let obj = expect_object(value, "cookie")?;
        let extra = obj
            .iter()
            .filter(|(k, _)| {
                ![
                    COOKIE_NAME,
                    COOKIE_VALUE,
                    COOKIE_DOMAIN,
                    COOKIE_PATH,
                    COOKIE_SECURE,
                    COOKIE_HTTP_ONLY,
                ]
                .contains(&k.as_str())
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(CookieRecord {
            name: expect_str(field(obj, COOKIE_NAME, "cookie")?, COOKIE_NAME)?.to_string(),
            value: expect_str(field(obj, COOKIE_VALUE, "cookie")?, COOKIE_VALUE)?.to_string(),
            domain: optional_str(obj, COOKIE_DOMAIN)?,
            path: optional_str(obj, COOKIE_PATH)?,
            secure: optional_bool(obj, COOKIE_SECURE)?,
            http_only: optional_bool(obj, COOKIE_HTTP_ONLY)?,
            extra,
        })
    }

    fn to_wire(&self) -> Value {
        let mut m = Map::new();
        m.insert(COOKIE_NAME.into(), Value::String(self.name.clone()));
        m.insert(COOKIE_VALUE.into(), Value::String(self.value.clone()));
        if let Some(domain) = &self.domain {
            m.insert(COOKIE_DOMAIN.into(), Value::String(domain.clone()));
        }
        if let Some(path) = &self.path {
            m.insert(COOKIE_PATH.into(), Value::String(path.clone()));
        }
        if let Some(secure) = self.secure {
            m.insert(COOKIE_SECURE.into(), Value::Bool(secure));
        }
        if let Some(http_only) = self.http_only {
            m.insert(COOKIE_HTTP_ONLY.into(), Value::Bool(http_only));
        }
        for (k, v) in &self.extra {
            m.insert(k.clone(), v.clone());
        }
        Value::Object(m)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub tokens: IndexMap<String, CookieRecord>,
    pub matched_count: i64,
}

impl WireCodec for Session {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let items = expect_array(value, "session")?;
        if items.len() != SESSION_ARITY {
            return Err(malformed_len("session", SESSION_ARITY, items.len()));
        }
        let name = expect_str(&items[0], "session name")?.to_string();
        let tokens = expect_object(&items[1], "session tokens")?
            .iter()
            .map(|(token, cookie)| Ok((token.clone(), CookieRecord::from_wire(cookie)?)))
            .collect::<Result<IndexMap<_, _>, WireError>>()?;
        let matched_count = expect_int(&items[2], "session matched count")?;
        Ok(Session {
            name,
            tokens,
            matched_count,
        })
    }

    fn to_wire(&self) -> Value {
        let tokens: Map<String, Value> = self
            .tokens
            .iter()
            .map(|(token, cookie)| (token.clone(), cookie.to_wire()))
            .collect();
        Value::Array(vec![
            Value::String(self.name.clone()),
            Value::Object(tokens),
            Value::from(self.matched_count),
        ])
    }
}
