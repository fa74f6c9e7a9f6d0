//! Typed views over [`ParameterRecord`]s.
//!
//! A view borrows one record mutably and exposes named accessors for the
//! parameters its discriminator defines. Parameters the view does not know
//! about stay in the record untouched, so decode → view edits → encode
//! keeps everything the server sent.
//!
//! Each family has a closed enum of views ([`AuthenticationView`],
//! [`CredentialsView`], [`SessionManagementView`]) chosen by discriminator.

mod authentication;
mod credentials;
mod login;
mod session_management;

use indexmap::IndexMap;

use crate::error::WireError;
use crate::record::{ParameterRecord, RecordFamily};

pub use authentication::{
    AuthenticationView, FormBasedAuthentication, HttpAuthentication, JsonBasedAuthentication,
    ManualAuthentication, ScriptBasedAuthentication,
};
pub use credentials::{
    CredentialsView, GenericCredentials, ManualCredentials, UsernamePasswordCredentials,
};
pub use session_management::{
    CookieBasedSessionManagement, HttpAuthSessionManagement, ScriptBasedSessionManagement,
    SessionManagementView,
};

/// Shared surface of every view.
pub trait ParameterView {
    type Family: RecordFamily;

    /// The discriminator this view accepts.
    const NAME: &'static str;

    fn record(&self) -> &ParameterRecord<Self::Family>;
    fn record_mut(&mut self) -> &mut ParameterRecord<Self::Family>;

    /// The live parameter map of the underlying record.
    fn parameters(&self) -> &IndexMap<String, String> {
        self.record().parameters()
    }

    fn parameter(&self, name: &str) -> Option<&str> {
        self.record().parameter(name)
    }

    /// Checks a value before it is written. Views whose parameters carry a
    /// format override this; a rejected value leaves the record unchanged.
    fn validate(&self, _name: &str, _value: &str) -> Result<(), WireError> {
        Ok(())
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), WireError> {
        self.validate(name, value)?;
        self.record_mut().set_parameter(name, value)?;
        Ok(())
    }

    /// Reads a parameter the view cannot work without.
    fn required(&self, name: &str) -> Result<&str, WireError> {
        self.record()
            .parameter(name)
            .ok_or_else(|| WireError::MissingParameter(name.to_string()))
    }
}

pub(crate) fn ensure_discriminator<F: RecordFamily>(
    record: &ParameterRecord<F>,
    expected: &str,
) -> Result<(), WireError> {
    if record.discriminator() != expected {
        log::debug!(
            "{} view `{expected}` refused record `{}`",
            F::FAMILY,
            record.discriminator()
        );
        return Err(WireError::UnsupportedDiscriminator {
            expected: format!("`{expected}`"),
            found: record.discriminator().to_string(),
        });
    }
    Ok(())
}

pub(crate) fn unsupported<F: RecordFamily>(found: &str, known: &[&str]) -> WireError {
    log::debug!("no {} view for `{found}`", F::FAMILY);
    WireError::UnsupportedDiscriminator {
        expected: format!("one of {}", known.join(", ")),
        found: found.to_string(),
    }
}

/// Parameters of a script-backed record other than the script name.
pub(crate) fn script_parameters<'r, F>(
    record: &'r ParameterRecord<F>,
    script_name_key: &'r str,
) -> impl Iterator<Item = (&'r str, &'r str)>
where
    F: RecordFamily,
{
    record
        .parameters()
        .iter()
        .filter(move |(k, _)| k.as_str() != script_name_key)
        .map(|(k, v)| (k.as_str(), v.as_str()))
}
