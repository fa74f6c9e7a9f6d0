//! Session management method views.

use super::{ensure_discriminator, script_parameters, unsupported, ParameterView};
use crate::constants::{
    COOKIE_BASED_SESSION_MANAGEMENT, HTTP_AUTH_SESSION_MANAGEMENT,
    SCRIPT_BASED_SESSION_MANAGEMENT, SCRIPT_NAME,
};
use crate::error::WireError;
use crate::record::{SessionManagementFamily, SessionManagementMethod};

#[derive(Debug)]
pub struct CookieBasedSessionManagement<'a> {
    method: &'a mut SessionManagementMethod,
}

impl<'a> CookieBasedSessionManagement<'a> {
    pub fn new(method: &'a mut SessionManagementMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, COOKIE_BASED_SESSION_MANAGEMENT)?;
        Ok(Self { method })
    }

    pub fn create() -> SessionManagementMethod {
        SessionManagementMethod::new(COOKIE_BASED_SESSION_MANAGEMENT)
    }
}

impl ParameterView for CookieBasedSessionManagement<'_> {
    type Family = SessionManagementFamily;
    const NAME: &'static str = COOKIE_BASED_SESSION_MANAGEMENT;

    fn record(&self) -> &SessionManagementMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut SessionManagementMethod {
        &mut *self.method
    }
}

#[derive(Debug)]
pub struct HttpAuthSessionManagement<'a> {
    method: &'a mut SessionManagementMethod,
}

impl<'a> HttpAuthSessionManagement<'a> {
    pub fn new(method: &'a mut SessionManagementMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, HTTP_AUTH_SESSION_MANAGEMENT)?;
        Ok(Self { method })
    }

    pub fn create() -> SessionManagementMethod {
        SessionManagementMethod::new(HTTP_AUTH_SESSION_MANAGEMENT)
    }
}

impl ParameterView for HttpAuthSessionManagement<'_> {
    type Family = SessionManagementFamily;
    const NAME: &'static str = HTTP_AUTH_SESSION_MANAGEMENT;

    fn record(&self) -> &SessionManagementMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut SessionManagementMethod {
        &mut *self.method
    }
}

#[derive(Debug)]
pub struct ScriptBasedSessionManagement<'a> {
    method: &'a mut SessionManagementMethod,
}

impl<'a> ScriptBasedSessionManagement<'a> {
    pub fn new(method: &'a mut SessionManagementMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, SCRIPT_BASED_SESSION_MANAGEMENT)?;
        Ok(Self { method })
    }

    pub fn create(script_name: &str) -> Result<SessionManagementMethod, WireError> {
        SessionManagementMethod::new(SCRIPT_BASED_SESSION_MANAGEMENT)
            .with_parameter(SCRIPT_NAME, script_name)
    }

    pub fn script_name(&self) -> Result<&str, WireError> {
        self.required(SCRIPT_NAME)
    }

    pub fn set_script_name(&mut self, name: &str) -> Result<(), WireError> {
        self.set_parameter(SCRIPT_NAME, name)
    }

    pub fn script_parameter(&self, name: &str) -> Option<&str> {
        self.parameter(name)
    }

    pub fn set_script_parameter(&mut self, name: &str, value: &str) -> Result<(), WireError> {
        self.set_parameter(name, value)
    }

    pub fn script_parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        script_parameters(&*self.method, SCRIPT_NAME)
    }
}

impl ParameterView for ScriptBasedSessionManagement<'_> {
    type Family = SessionManagementFamily;
    const NAME: &'static str = SCRIPT_BASED_SESSION_MANAGEMENT;

    fn record(&self) -> &SessionManagementMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut SessionManagementMethod {
        &mut *self.method
    }
}

/// The closed set of session management views.
#[derive(Debug)]
pub enum SessionManagementView<'a> {
    CookieBased(CookieBasedSessionManagement<'a>),
    HttpAuth(HttpAuthSessionManagement<'a>),
    ScriptBased(ScriptBasedSessionManagement<'a>),
}

impl<'a> SessionManagementView<'a> {
    pub const KNOWN: &'static [&'static str] = &[
        COOKIE_BASED_SESSION_MANAGEMENT,
        HTTP_AUTH_SESSION_MANAGEMENT,
        SCRIPT_BASED_SESSION_MANAGEMENT,
    ];

    pub fn new(method: &'a mut SessionManagementMethod) -> Result<Self, WireError> {
        let view = match method.discriminator() {
            COOKIE_BASED_SESSION_MANAGEMENT => {
                Self::CookieBased(CookieBasedSessionManagement { method })
            }
            HTTP_AUTH_SESSION_MANAGEMENT => Self::HttpAuth(HttpAuthSessionManagement { method }),
            SCRIPT_BASED_SESSION_MANAGEMENT => {
                Self::ScriptBased(ScriptBasedSessionManagement { method })
            }
            other => return Err(unsupported::<SessionManagementFamily>(other, Self::KNOWN)),
        };
        Ok(view)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CookieBased(_) => CookieBasedSessionManagement::NAME,
            Self::HttpAuth(_) => HttpAuthSessionManagement::NAME,
            Self::ScriptBased(_) => ScriptBasedSessionManagement::NAME,
        }
    }
}
