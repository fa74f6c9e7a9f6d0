//! Field-level access to a query-string `loginRequestData` parameter.
//!
//! The payload string is the single source of truth: every mutation parses
//! it, edits the decomposed fields and writes the whole string back.

use scanwire_query::QueryPayload;

use crate::constants::LOGIN_REQUEST_DATA;
use crate::error::WireError;
use crate::record::AuthenticationMethod;

/// Decomposes the payload. An absent payload has no fields.
pub(crate) fn fields(method: &AuthenticationMethod) -> Result<QueryPayload, WireError> {
    match method.parameter(LOGIN_REQUEST_DATA) {
        Some(raw) => Ok(QueryPayload::parse(raw)?),
        None => Ok(QueryPayload::new()),
    }
}

pub(crate) fn validate_payload(raw: &str) -> Result<(), WireError> {
    QueryPayload::parse(raw)?;
    Ok(())
}

pub(crate) fn set_field(
    method: &mut AuthenticationMethod,
    name: &str,
    value: &str,
) -> Result<(), WireError> {
    let mut payload = fields(method)?;
    payload.set(name, value)?;
    method.set_parameter(LOGIN_REQUEST_DATA, &payload.to_string())?;
    Ok(())
}

pub(crate) fn remove_field(
    method: &mut AuthenticationMethod,
    name: &str,
) -> Result<String, WireError> {
    let mut payload = fields(method)?;
    let removed = payload
        .remove(name)
        .ok_or_else(|| WireError::MissingParameter(name.to_string()))?;
    method.set_parameter(LOGIN_REQUEST_DATA, &payload.to_string())?;
    Ok(removed)
}
