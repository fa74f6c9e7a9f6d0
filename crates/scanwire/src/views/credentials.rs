//! Authentication credentials views.

use super::{ensure_discriminator, unsupported, ParameterView};
use crate::constants::{
    GENERIC_CREDENTIALS, MANUAL_CREDENTIALS, PASSWORD, SESSION_NAME, USERNAME,
    USERNAME_PASSWORD_CREDENTIALS,
};
use crate::error::WireError;
use crate::record::{AuthenticationCredentials, CredentialsFamily};

#[derive(Debug)]
pub struct UsernamePasswordCredentials<'a> {
    credentials: &'a mut AuthenticationCredentials,
}

impl<'a> UsernamePasswordCredentials<'a> {
    pub fn new(credentials: &'a mut AuthenticationCredentials) -> Result<Self, WireError> {
        ensure_discriminator(credentials, USERNAME_PASSWORD_CREDENTIALS)?;
        Ok(Self { credentials })
    }

    pub fn create(username: &str, password: &str) -> Result<AuthenticationCredentials, WireError> {
        AuthenticationCredentials::new(USERNAME_PASSWORD_CREDENTIALS)
            .with_parameter(USERNAME, username)?
            .with_parameter(PASSWORD, password)
    }

    pub fn username(&self) -> Result<&str, WireError> {
        self.required(USERNAME)
    }

    pub fn set_username(&mut self, username: &str) -> Result<(), WireError> {
        self.set_parameter(USERNAME, username)
    }

    pub fn password(&self) -> Result<&str, WireError> {
        self.required(PASSWORD)
    }

    pub fn set_password(&mut self, password: &str) -> Result<(), WireError> {
        self.set_parameter(PASSWORD, password)
    }
}

impl ParameterView for UsernamePasswordCredentials<'_> {
    type Family = CredentialsFamily;
    const NAME: &'static str = USERNAME_PASSWORD_CREDENTIALS;

    fn record(&self) -> &AuthenticationCredentials {
        &*self.credentials
    }

    fn record_mut(&mut self) -> &mut AuthenticationCredentials {
        &mut *self.credentials
    }
}

/// Free-form credentials used by script-based authentication; every
/// parameter is opaque, so access goes through [`ParameterView`].
#[derive(Debug)]
pub struct GenericCredentials<'a> {
    credentials: &'a mut AuthenticationCredentials,
}

impl<'a> GenericCredentials<'a> {
    pub fn new(credentials: &'a mut AuthenticationCredentials) -> Result<Self, WireError> {
        ensure_discriminator(credentials, GENERIC_CREDENTIALS)?;
        Ok(Self { credentials })
    }

    pub fn create() -> AuthenticationCredentials {
        AuthenticationCredentials::new(GENERIC_CREDENTIALS)
    }

    pub fn remove_parameter(&mut self, name: &str) -> Result<String, WireError> {
        self.credentials
            .remove_parameter(name)
            .ok_or_else(|| WireError::MissingParameter(name.to_string()))
    }
}

impl ParameterView for GenericCredentials<'_> {
    type Family = CredentialsFamily;
    const NAME: &'static str = GENERIC_CREDENTIALS;

    fn record(&self) -> &AuthenticationCredentials {
        &*self.credentials
    }

    fn record_mut(&mut self) -> &mut AuthenticationCredentials {
        &mut *self.credentials
    }
}

#[derive(Debug)]
pub struct ManualCredentials<'a> {
    credentials: &'a mut AuthenticationCredentials,
}

impl<'a> ManualCredentials<'a> {
    pub fn new(credentials: &'a mut AuthenticationCredentials) -> Result<Self, WireError> {
        ensure_discriminator(credentials, MANUAL_CREDENTIALS)?;
        Ok(Self { credentials })
    }

    pub fn create(session_name: &str) -> Result<AuthenticationCredentials, WireError> {
        AuthenticationCredentials::new(MANUAL_CREDENTIALS)
            .with_parameter(SESSION_NAME, session_name)
    }

    pub fn session_name(&self) -> Result<&str, WireError> {
        self.required(SESSION_NAME)
    }

    pub fn set_session_name(&mut self, name: &str) -> Result<(), WireError> {
        self.set_parameter(SESSION_NAME, name)
    }
}

impl ParameterView for ManualCredentials<'_> {
    type Family = CredentialsFamily;
    const NAME: &'static str = MANUAL_CREDENTIALS;

    fn record(&self) -> &AuthenticationCredentials {
        &*self.credentials
    }

    fn record_mut(&mut self) -> &mut AuthenticationCredentials {
        &mut *self.credentials
    }
}

/// The closed set of credentials views.
#[derive(Debug)]
pub enum CredentialsView<'a> {
    UsernamePassword(UsernamePasswordCredentials<'a>),
    Generic(GenericCredentials<'a>),
    Manual(ManualCredentials<'a>),
}

impl<'a> CredentialsView<'a> {
    pub const KNOWN: &'static [&'static str] = &[
        USERNAME_PASSWORD_CREDENTIALS,
        GENERIC_CREDENTIALS,
        MANUAL_CREDENTIALS,
    ];

    pub fn new(credentials: &'a mut AuthenticationCredentials) -> Result<Self, WireError> {
        let view = match credentials.discriminator() {
            USERNAME_PASSWORD_CREDENTIALS => {
                Self::UsernamePassword(UsernamePasswordCredentials { credentials })
            }
            GENERIC_CREDENTIALS => Self::Generic(GenericCredentials { credentials }),
            MANUAL_CREDENTIALS => Self::Manual(ManualCredentials { credentials }),
            other => return Err(unsupported::<CredentialsFamily>(other, Self::KNOWN)),
        };
        Ok(view)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UsernamePassword(_) => UsernamePasswordCredentials::NAME,
            Self::Generic(_) => GenericCredentials::NAME,
            Self::Manual(_) => ManualCredentials::NAME,
        }
    }
}
