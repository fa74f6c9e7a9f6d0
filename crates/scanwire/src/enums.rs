//! Enum string mappers.
//!
//! The API is inconsistent about how enum values are spelled on the wire, so
//! each enum picks one of a few decoding policies:
//!
//! - *capitalized*: encode as the upper-cased canonical name, decode
//!   case-insensitively against canonical names, fail on anything else;
//! - *state machine* ([`ScanState`], [`ActiveScanState`]): as capitalized,
//!   but `NotStarted` travels as `NOT_STARTED`;
//! - *handle-parameters* ([`HandleParametersOption`]): underscore tokens
//!   are recognised before canonical names;
//! - *defaulting* ([`LogicalOperator`]): unknown tokens silently become
//!   `And`. This asymmetry with the failing policies is deliberate.
//!
//! [`nullable_int`] covers integers that may be absent.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::codec::{expect_str, WireCodec};
use crate::constants::{
    TOKEN_IGNORE_COMPLETELY, TOKEN_IGNORE_VALUE, TOKEN_NOT_STARTED, TOKEN_USE_ALL,
};
use crate::error::WireError;

/// An enum with a wire token mapping.
pub trait WireEnum: Sized + Copy + 'static {
    const ENUM_NAME: &'static str;
    const VARIANTS: &'static [Self];

    fn canonical_name(self) -> &'static str;
    fn decode(token: &str) -> Result<Self, WireError>;
    fn encode(self) -> String;
}

/// Case-insensitive lookup against canonical names.
pub fn match_canonical<E: WireEnum>(token: &str) -> Option<E> {
    E::VARIANTS
        .iter()
        .copied()
        .find(|v| v.canonical_name().eq_ignore_ascii_case(token))
}

fn unrecognized<E: WireEnum>(token: &str) -> WireError {
    log::debug!("unrecognized {} token `{token}`", E::ENUM_NAME);
    WireError::UnrecognizedEnumToken {
        enum_name: E::ENUM_NAME,
        token: token.to_string(),
    }
}

fn decode_capitalized<E: WireEnum>(token: &str) -> Result<E, WireError> {
    match_canonical(token).ok_or_else(|| unrecognized::<E>(token))
}

fn encode_capitalized<E: WireEnum>(value: E) -> String {
    value.canonical_name().to_uppercase()
}

fn decode_state<E: WireEnum>(token: &str, not_started: E) -> Result<E, WireError> {
    if token.eq_ignore_ascii_case(TOKEN_NOT_STARTED) {
        return Ok(not_started);
    }
    decode_capitalized(token)
}

fn enum_from_wire<E: WireEnum>(v: &Value) -> Result<E, WireError> {
    E::decode(expect_str(v, E::ENUM_NAME)?)
}

// ── Scan state ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanState {
    NotStarted,
    Running,
    Paused,
    Finished,
}

impl WireEnum for ScanState {
    const ENUM_NAME: &'static str = "ScanState";
    const VARIANTS: &'static [Self] = &[
        ScanState::NotStarted,
        ScanState::Running,
        ScanState::Paused,
        ScanState::Finished,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            ScanState::NotStarted => "NotStarted",
            ScanState::Running => "Running",
            ScanState::Paused => "Paused",
            ScanState::Finished => "Finished",
        }
    }

    fn decode(token: &str) -> Result<Self, WireError> {
        decode_state(token, ScanState::NotStarted)
    }

    fn encode(self) -> String {
        match self {
            ScanState::NotStarted => TOKEN_NOT_STARTED.to_string(),
            other => encode_capitalized(other),
        }
    }
}

// ── Active scan state ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveScanState {
    NotStarted,
    Running,
    Paused,
    Finished,
}

impl WireEnum for ActiveScanState {
    const ENUM_NAME: &'static str = "ActiveScanState";
    const VARIANTS: &'static [Self] = &[
        ActiveScanState::NotStarted,
        ActiveScanState::Running,
        ActiveScanState::Paused,
        ActiveScanState::Finished,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            ActiveScanState::NotStarted => "NotStarted",
            ActiveScanState::Running => "Running",
            ActiveScanState::Paused => "Paused",
            ActiveScanState::Finished => "Finished",
        }
    }

    fn decode(token: &str) -> Result<Self, WireError> {
        decode_state(token, ActiveScanState::NotStarted)
    }

    fn encode(self) -> String {
        match self {
            ActiveScanState::NotStarted => TOKEN_NOT_STARTED.to_string(),
            other => encode_capitalized(other),
        }
    }
}

// ── Logical operator ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl WireEnum for LogicalOperator {
    const ENUM_NAME: &'static str = "LogicalOperator";
    const VARIANTS: &'static [Self] = &[LogicalOperator::And, LogicalOperator::Or];

    fn canonical_name(self) -> &'static str {
        match self {
            LogicalOperator::And => "And",
            LogicalOperator::Or => "Or",
        }
    }

    /// Never fails: unknown tokens map to [`LogicalOperator::And`].
    fn decode(token: &str) -> Result<Self, WireError> {
        Ok(match_canonical(token).unwrap_or_else(|| {
            log::trace!("LogicalOperator token `{token}` defaulted to AND");
            LogicalOperator::And
        }))
    }

    fn encode(self) -> String {
        encode_capitalized(self)
    }
}

// ── Handle-parameters option ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleParametersOption {
    IgnoreCompletely,
    IgnoreValue,
    UseAll,
}

impl WireEnum for HandleParametersOption {
    const ENUM_NAME: &'static str = "HandleParametersOption";
    const VARIANTS: &'static [Self] = &[
        HandleParametersOption::IgnoreCompletely,
        HandleParametersOption::IgnoreValue,
        HandleParametersOption::UseAll,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            HandleParametersOption::IgnoreCompletely => "IgnoreCompletely",
            HandleParametersOption::IgnoreValue => "IgnoreValue",
            HandleParametersOption::UseAll => "UseAll",
        }
    }

    fn decode(token: &str) -> Result<Self, WireError> {
        let special = [
            (TOKEN_IGNORE_COMPLETELY, HandleParametersOption::IgnoreCompletely),
            (TOKEN_IGNORE_VALUE, HandleParametersOption::IgnoreValue),
            (TOKEN_USE_ALL, HandleParametersOption::UseAll),
        ];
        if let Some((_, v)) = special
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(token))
        {
            return Ok(*v);
        }
        decode_capitalized(token)
    }

    fn encode(self) -> String {
        match self {
            HandleParametersOption::IgnoreCompletely => TOKEN_IGNORE_COMPLETELY,
            HandleParametersOption::IgnoreValue => TOKEN_IGNORE_VALUE,
            HandleParametersOption::UseAll => TOKEN_USE_ALL,
        }
        .to_string()
    }
}

// ── HTTP parameter type and flags ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpParameterType {
    Cookie,
    Form,
    Url,
}

impl WireEnum for HttpParameterType {
    const ENUM_NAME: &'static str = "HttpParameterType";
    const VARIANTS: &'static [Self] = &[
        HttpParameterType::Cookie,
        HttpParameterType::Form,
        HttpParameterType::Url,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            HttpParameterType::Cookie => "Cookie",
            HttpParameterType::Form => "Form",
            HttpParameterType::Url => "Url",
        }
    }

    fn decode(token: &str) -> Result<Self, WireError> {
        decode_capitalized(token)
    }

    fn encode(self) -> String {
        encode_capitalized(self)
    }
}

impl WireCodec for HttpParameterType {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        enum_from_wire(value)
    }

    fn to_wire(&self) -> Value {
        Value::String(self.encode())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterFlag {
    Session,
    Structural,
    AntiCsrf,
}

impl WireEnum for ParameterFlag {
    const ENUM_NAME: &'static str = "ParameterFlag";
    const VARIANTS: &'static [Self] = &[
        ParameterFlag::Session,
        ParameterFlag::Structural,
        ParameterFlag::AntiCsrf,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            ParameterFlag::Session => "Session",
            ParameterFlag::Structural => "Structural",
            ParameterFlag::AntiCsrf => "AntiCsrf",
        }
    }

    fn decode(token: &str) -> Result<Self, WireError> {
        decode_capitalized(token)
    }

    fn encode(self) -> String {
        encode_capitalized(self)
    }
}

impl WireCodec for ParameterFlag {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        enum_from_wire(value)
    }

    fn to_wire(&self) -> Value {
        Value::String(self.encode())
    }
}

// ── FromStr / Display ─────────────────────────────────────────────────────

/// `FromStr` and `Display` through the enum's wire mapping.
macro_rules! wire_enum_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = WireError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as WireEnum>::decode(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.encode())
                }
            }
        )+
    };
}

wire_enum_text!(
    ScanState,
    ActiveScanState,
    LogicalOperator,
    HandleParametersOption,
    HttpParameterType,
    ParameterFlag,
);

// ── Nullable integer ──────────────────────────────────────────────────────

/// Integers that may be absent.
///
/// Anything that does not parse as an integer, including `null` and `""`,
/// decodes to `None` instead of failing.
pub mod nullable_int {
    use serde_json::Value;

    pub fn decode(v: &Value) -> Option<i64> {
        let parsed = match v {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        if parsed.is_none() && !v.is_null() {
            log::trace!("nullable integer token {v} read as absent");
        }
        parsed
    }

    pub fn encode(value: Option<i64>) -> Value {
        match value {
            Some(n) => Value::from(n),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scan_state_not_started_special_case() {
        assert_eq!(ScanState::decode("NOT_STARTED").unwrap(), ScanState::NotStarted);
        assert_eq!(ScanState::decode("not_started").unwrap(), ScanState::NotStarted);
        assert_eq!(ScanState::NotStarted.encode(), "NOT_STARTED");
        assert_eq!(ScanState::Running.encode(), "RUNNING");
        assert_eq!(ScanState::decode("paused").unwrap(), ScanState::Paused);
    }

    #[test]
    fn failing_and_defaulting_policies_differ() {
        assert!(matches!(
            ScanState::decode("BOGUS"),
            Err(WireError::UnrecognizedEnumToken { enum_name: "ScanState", .. })
        ));
        assert!(ActiveScanState::decode("BOGUS").is_err());
        assert!(HandleParametersOption::decode("BOGUS").is_err());
        assert_eq!(LogicalOperator::decode("BOGUS").unwrap(), LogicalOperator::And);
        assert_eq!(LogicalOperator::decode("or").unwrap(), LogicalOperator::Or);
    }

    #[test]
    fn handle_parameters_special_tokens() {
        assert_eq!(
            HandleParametersOption::decode("IGNORE_VALUE").unwrap(),
            HandleParametersOption::IgnoreValue
        );
        assert_eq!(
            HandleParametersOption::decode("useall").unwrap(),
            HandleParametersOption::UseAll
        );
        assert_eq!(HandleParametersOption::IgnoreCompletely.encode(), "IGNORE_COMPLETELY");
    }

    #[test]
    fn nullable_int_matrix() {
        assert_eq!(nullable_int::decode(&json!(5)), Some(5));
        assert_eq!(nullable_int::decode(&json!("5")), Some(5));
        assert_eq!(nullable_int::decode(&json!(null)), None);
        assert_eq!(nullable_int::decode(&json!("")), None);
        assert_eq!(nullable_int::decode(&json!("abc")), None);
        assert_eq!(nullable_int::decode(&json!(1.5)), None);
        assert_eq!(nullable_int::encode(None), json!(null));
        assert_eq!(nullable_int::encode(Some(7)), json!(7));
    }
}
