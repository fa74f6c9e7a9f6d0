//! Query-string payload grammar used by form-based login requests.
//!
//! A payload is a `&`-separated list of `name=value` pairs, for example
//! `username={%username%}&password={%password%}`. Values are opaque: no
//! percent-decoding is applied, so placeholders survive a parse/format cycle
//! byte for byte.
//!
//! Grammar:
//! - the empty string is a valid payload with no fields;
//! - every segment between `&` separators is non-empty;
//! - every segment contains `=`; the name is the text before the first `=`
//!   and must be non-empty, the value is everything after it (and may
//!   itself contain `=`);
//! - names are unique within one payload.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty segment at position {position}")]
    EmptySegment { position: usize },
    #[error("segment `{segment}` has no `=` separator")]
    MissingSeparator { segment: String },
    #[error("empty field name at position {position}")]
    EmptyName { position: usize },
    #[error("invalid field name `{name}`")]
    InvalidName { name: String },
    #[error("duplicate field `{name}`")]
    DuplicateName { name: String },
    #[error("value of field `{name}` contains `&`")]
    InvalidValue { name: String },
}

/// Checks that `name` can appear as a field name.
pub fn validate_name(name: &str) -> Result<(), QueryError> {
    if name.is_empty() {
        return Err(QueryError::EmptyName { position: 0 });
    }
    if name.contains('=') || name.contains('&') {
        return Err(QueryError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Checks that `value` can appear as the value of field `name`.
pub fn validate_value(name: &str, value: &str) -> Result<(), QueryError> {
    if value.contains('&') {
        return Err(QueryError::InvalidValue {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Parses a payload into its ordered `(name, value)` pairs.
///
/// Examples:
/// - `"" -> []`
/// - `"a=1&b=" -> [("a", "1"), ("b", "")]`
/// - `"token=abc=="` -> `[("token", "abc==")]`
pub fn parse_query(payload: &str) -> Result<Vec<(String, String)>, QueryError> {
    let mut fields: Vec<(String, String)> = Vec::new();
    if payload.is_empty() {
        return Ok(fields);
    }
    for (position, segment) in payload.split('&').enumerate() {
        if segment.is_empty() {
            return Err(QueryError::EmptySegment { position });
        }
        let (name, value) = segment
            .split_once('=')
            .ok_or_else(|| QueryError::MissingSeparator {
                segment: segment.to_string(),
            })?;
        if name.is_empty() {
            return Err(QueryError::EmptyName { position });
        }
        if fields.iter().any(|(existing, _)| existing == name) {
            return Err(QueryError::DuplicateName {
                name: name.to_string(),
            });
        }
        fields.push((name.to_string(), value.to_string()));
    }
    Ok(fields)
}

/// Formats ordered pairs back into a payload string.
///
/// The caller is responsible for the pairs being valid; [`QueryPayload`]
/// only ever holds pairs that passed [`validate_name`] and
/// [`validate_value`].
pub fn format_query(fields: &[(String, String)]) -> String {
    let mut out = String::new();
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(name);
        out.push('=');
        out.push_str(value);
    }
    out
}

/// An ordered, always-valid query-string payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPayload {
    fields: Vec<(String, String)>,
}

impl QueryPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(payload: &str) -> Result<Self, QueryError> {
        Ok(Self {
            fields: parse_query(payload)?,
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Sets a field, replacing it in place if present or appending it
    /// otherwise. Returns the previous value.
    pub fn set(&mut self, name: &str, value: &str) -> Result<Option<String>, QueryError> {
        validate_name(name)?;
        validate_value(name, value)?;
        if let Some((_, existing)) = self.fields.iter_mut().find(|(n, _)| n == name) {
            return Ok(Some(std::mem::replace(existing, value.to_string())));
        }
        self.fields.push((name.to_string(), value.to_string()));
        Ok(None)
    }

    /// Removes a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.fields.iter().position(|(n, _)| n == name)?;
        Some(self.fields.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

impl FromStr for QueryPayload {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryPayload::parse(s)
    }
}

impl fmt::Display for QueryPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_query(&self.fields))
    }
}
