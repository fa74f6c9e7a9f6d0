//! Codec error type.

use scanwire_query::QueryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    /// Array or object shape does not match the expected sections, fields or
    /// positional pairing.
    #[error("malformed structure: {0}")]
    Malformed(String),
    #[error("unrecognized {enum_name} token `{token}`")]
    UnrecognizedEnumToken {
        enum_name: &'static str,
        token: String,
    },
    #[error("unsupported discriminator `{found}`, expected {expected}")]
    UnsupportedDiscriminator { expected: String, found: String },
    #[error("missing parameter `{0}`")]
    MissingParameter(String),
    #[error("invalid value `{value}` for parameter `{name}`")]
    InvalidParameterValue { name: String, value: String },
    #[error("parameter `{0}` collides with the discriminator key")]
    ReservedParameter(String),
    #[error("invalid login payload: {0}")]
    InvalidPayload(#[from] QueryError),
    #[error("invalid JSON login payload: {0}")]
    InvalidJsonPayload(String),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds a [`WireError::Malformed`] and records why at debug level.
pub(crate) fn malformed(reason: impl Into<String>) -> WireError {
    let reason = reason.into();
    log::debug!("rejecting payload: {reason}");
    WireError::Malformed(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matrix() {
        let cases: Vec<(WireError, &str)> = vec![
            (
                WireError::Malformed("odd length".into()),
                "malformed structure: odd length",
            ),
            (
                WireError::UnrecognizedEnumToken {
                    enum_name: "ScanState",
                    token: "BOGUS".into(),
                },
                "unrecognized ScanState token `BOGUS`",
            ),
            (
                WireError::UnsupportedDiscriminator {
                    expected: "`formBasedAuthentication`".into(),
                    found: "httpAuthentication".into(),
                },
                "unsupported discriminator `httpAuthentication`, expected `formBasedAuthentication`",
            ),
            (
                WireError::MissingParameter("loginUrl".into()),
                "missing parameter `loginUrl`",
            ),
            (
                WireError::ReservedParameter("methodName".into()),
                "parameter `methodName` collides with the discriminator key",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected, "mismatch for {err:?}");
        }
    }

    #[test]
    fn query_errors_convert() {
        let err: WireError = QueryError::DuplicateName { name: "a".into() }.into();
        assert!(matches!(err, WireError::InvalidPayload(_)));
        assert_eq!(err.to_string(), "invalid login payload: duplicate field `a`");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(malformed("x"));
        assert_eq!(err.to_string(), "malformed structure: x");
    }
}
