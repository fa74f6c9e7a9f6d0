//! Authentication method views.

use scanwire_query::QueryPayload;
use serde_json::Value;

use super::{ensure_discriminator, login, script_parameters, unsupported, ParameterView};
use crate::constants::{
    FORM_BASED_AUTHENTICATION, HOSTNAME, HTTP_AUTHENTICATION, JSON_BASED_AUTHENTICATION,
    LOGIN_PAGE_URL, LOGIN_REQUEST_DATA, LOGIN_URL, MANUAL_AUTHENTICATION, PORT, REALM,
    SCRIPT_BASED_AUTHENTICATION, SCRIPT_NAME,
};
use crate::error::WireError;
use crate::record::{AuthenticationMethod, MethodFamily};

// ── Form-based ────────────────────────────────────────────────────────────

/// `formBasedAuthentication`: a login URL plus a query-string payload.
#[derive(Debug)]
pub struct FormBasedAuthentication<'a> {
    method: &'a mut AuthenticationMethod,
}

impl<'a> FormBasedAuthentication<'a> {
    pub fn new(method: &'a mut AuthenticationMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, FORM_BASED_AUTHENTICATION)?;
        Ok(Self { method })
    }

    /// Builds a fresh record for a request payload.
    pub fn create(
        login_url: &str,
        login_request_data: &str,
    ) -> Result<AuthenticationMethod, WireError> {
        let mut method = AuthenticationMethod::new(FORM_BASED_AUTHENTICATION);
        {
            let mut view = FormBasedAuthentication::new(&mut method)?;
            view.set_login_url(login_url)?;
            view.set_login_request_data(login_request_data)?;
        }
        Ok(method)
    }

    pub fn login_url(&self) -> Result<&str, WireError> {
        self.required(LOGIN_URL)
    }

    pub fn set_login_url(&mut self, url: &str) -> Result<(), WireError> {
        self.set_parameter(LOGIN_URL, url)
    }

    pub fn login_request_data(&self) -> Result<&str, WireError> {
        self.required(LOGIN_REQUEST_DATA)
    }

    /// Rejects payloads that are not a valid query string; nothing is
    /// stored in that case.
    pub fn set_login_request_data(&mut self, raw: &str) -> Result<(), WireError> {
        self.set_parameter(LOGIN_REQUEST_DATA, raw)
    }

    pub fn login_page_url(&self) -> Option<&str> {
        self.parameter(LOGIN_PAGE_URL)
    }

    pub fn set_login_page_url(&mut self, url: &str) -> Result<(), WireError> {
        self.set_parameter(LOGIN_PAGE_URL, url)
    }

    /// The payload decomposed into ordered fields.
    pub fn login_fields(&self) -> Result<QueryPayload, WireError> {
        login::fields(&*self.method)
    }

    pub fn field(&self, name: &str) -> Result<Option<String>, WireError> {
        Ok(login::fields(&*self.method)?.get(name).map(str::to_string))
    }

    pub fn has_field(&self, name: &str) -> Result<bool, WireError> {
        Ok(login::fields(&*self.method)?.contains(name))
    }

    /// Replaces a field in place or appends it to the end of the payload.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), WireError> {
        login::set_field(&mut *self.method, name, value)
    }

    /// Fails with [`WireError::MissingParameter`] if the field is absent.
    pub fn remove_field(&mut self, name: &str) -> Result<String, WireError> {
        login::remove_field(&mut *self.method, name)
    }
}

impl ParameterView for FormBasedAuthentication<'_> {
    type Family = MethodFamily;
    const NAME: &'static str = FORM_BASED_AUTHENTICATION;

    fn record(&self) -> &AuthenticationMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut AuthenticationMethod {
        &mut *self.method
    }

    fn validate(&self, name: &str, value: &str) -> Result<(), WireError> {
        match name {
            LOGIN_REQUEST_DATA => login::validate_payload(value),
            _ => Ok(()),
        }
    }
}

// ── JSON-based ────────────────────────────────────────────────────────────

/// `jsonBasedAuthentication`: like form-based, but the payload is a JSON
/// document.
#[derive(Debug)]
pub struct JsonBasedAuthentication<'a> {
    method: &'a mut AuthenticationMethod,
}

impl<'a> JsonBasedAuthentication<'a> {
    pub fn new(method: &'a mut AuthenticationMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, JSON_BASED_AUTHENTICATION)?;
        Ok(Self { method })
    }

    pub fn create(
        login_url: &str,
        login_request_data: &str,
    ) -> Result<AuthenticationMethod, WireError> {
        let mut method = AuthenticationMethod::new(JSON_BASED_AUTHENTICATION);
        {
            let mut view = JsonBasedAuthentication::new(&mut method)?;
            view.set_login_url(login_url)?;
            view.set_login_request_data(login_request_data)?;
        }
        Ok(method)
    }

    pub fn login_url(&self) -> Result<&str, WireError> {
        self.required(LOGIN_URL)
    }

    pub fn set_login_url(&mut self, url: &str) -> Result<(), WireError> {
        self.set_parameter(LOGIN_URL, url)
    }

    pub fn login_request_data(&self) -> Result<&str, WireError> {
        self.required(LOGIN_REQUEST_DATA)
    }

    /// Rejects payloads that are not a JSON document.
    pub fn set_login_request_data(&mut self, raw: &str) -> Result<(), WireError> {
        self.set_parameter(LOGIN_REQUEST_DATA, raw)
    }

    pub fn login_page_url(&self) -> Option<&str> {
        self.parameter(LOGIN_PAGE_URL)
    }

    pub fn set_login_page_url(&mut self, url: &str) -> Result<(), WireError> {
        self.set_parameter(LOGIN_PAGE_URL, url)
    }
}

impl ParameterView for JsonBasedAuthentication<'_> {
    type Family = MethodFamily;
    const NAME: &'static str = JSON_BASED_AUTHENTICATION;

    fn record(&self) -> &AuthenticationMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut AuthenticationMethod {
        &mut *self.method
    }

    fn validate(&self, name: &str, value: &str) -> Result<(), WireError> {
        if name == LOGIN_REQUEST_DATA {
            serde_json::from_str::<Value>(value)
                .map_err(|e| WireError::InvalidJsonPayload(e.to_string()))?;
        }
        Ok(())
    }
}

// ── HTTP ──────────────────────────────────────────────────────────────────

/// `httpAuthentication`: host, port and an optional realm.
#[derive(Debug)]
pub struct HttpAuthentication<'a> {
    method: &'a mut AuthenticationMethod,
}

impl<'a> HttpAuthentication<'a> {
    pub fn new(method: &'a mut AuthenticationMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, HTTP_AUTHENTICATION)?;
        Ok(Self { method })
    }

    pub fn create(
        hostname: &str,
        port: u16,
        realm: Option<&str>,
    ) -> Result<AuthenticationMethod, WireError> {
        let mut method = AuthenticationMethod::new(HTTP_AUTHENTICATION);
        {
            let mut view = HttpAuthentication::new(&mut method)?;
            view.set_hostname(hostname)?;
            view.set_port(port)?;
            if let Some(realm) = realm {
                view.set_realm(realm)?;
            }
        }
        Ok(method)
    }

    pub fn hostname(&self) -> Result<&str, WireError> {
        self.required(HOSTNAME)
    }

    pub fn set_hostname(&mut self, hostname: &str) -> Result<(), WireError> {
        self.set_parameter(HOSTNAME, hostname)
    }

    pub fn realm(&self) -> Option<&str> {
        self.parameter(REALM)
    }

    pub fn set_realm(&mut self, realm: &str) -> Result<(), WireError> {
        self.set_parameter(REALM, realm)
    }

    pub fn port(&self) -> Result<u16, WireError> {
        parse_port(self.required(PORT)?)
    }

    pub fn set_port(&mut self, port: u16) -> Result<(), WireError> {
        self.set_parameter(PORT, &port.to_string())
    }
}

impl ParameterView for HttpAuthentication<'_> {
    type Family = MethodFamily;
    const NAME: &'static str = HTTP_AUTHENTICATION;

    fn record(&self) -> &AuthenticationMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut AuthenticationMethod {
        &mut *self.method
    }

    fn validate(&self, name: &str, value: &str) -> Result<(), WireError> {
        if name == PORT {
            parse_port(value)?;
        }
        Ok(())
    }
}

fn parse_port(raw: &str) -> Result<u16, WireError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| WireError::InvalidParameterValue {
            name: PORT.to_string(),
            value: raw.to_string(),
        })
}

// ── Manual ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct ManualAuthentication<'a> {
    method: &'a mut AuthenticationMethod,
}

impl<'a> ManualAuthentication<'a> {
    pub fn new(method: &'a mut AuthenticationMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, MANUAL_AUTHENTICATION)?;
        Ok(Self { method })
    }

    pub fn create() -> AuthenticationMethod {
        AuthenticationMethod::new(MANUAL_AUTHENTICATION)
    }
}

impl ParameterView for ManualAuthentication<'_> {
    type Family = MethodFamily;
    const NAME: &'static str = MANUAL_AUTHENTICATION;

    fn record(&self) -> &AuthenticationMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut AuthenticationMethod {
        &mut *self.method
    }
}

// ── Script-based ──────────────────────────────────────────────────────────

/// `scriptBasedAuthentication`: a script name plus whatever parameters the
/// script declares.
#[derive(Debug)]
pub struct ScriptBasedAuthentication<'a> {
    method: &'a mut AuthenticationMethod,
}

impl<'a> ScriptBasedAuthentication<'a> {
    pub fn new(method: &'a mut AuthenticationMethod) -> Result<Self, WireError> {
        ensure_discriminator(method, SCRIPT_BASED_AUTHENTICATION)?;
        Ok(Self { method })
    }

    pub fn create(script_name: &str) -> Result<AuthenticationMethod, WireError> {
        AuthenticationMethod::new(SCRIPT_BASED_AUTHENTICATION)
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

impl ParameterView for ScriptBasedAuthentication<'_> {
    type Family = MethodFamily;
    const NAME: &'static str = SCRIPT_BASED_AUTHENTICATION;

    fn record(&self) -> &AuthenticationMethod {
        &*self.method
    }

    fn record_mut(&mut self) -> &mut AuthenticationMethod {
        &mut *self.method
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────

/// The closed set of authentication method views.
#[derive(Debug)]
pub enum AuthenticationView<'a> {
    FormBased(FormBasedAuthentication<'a>),
    JsonBased(JsonBasedAuthentication<'a>),
    Http(HttpAuthentication<'a>),
    Manual(ManualAuthentication<'a>),
    ScriptBased(ScriptBasedAuthentication<'a>),
}

impl<'a> AuthenticationView<'a> {
    pub const KNOWN: &'static [&'static str] = &[
        FORM_BASED_AUTHENTICATION,
        JSON_BASED_AUTHENTICATION,
        HTTP_AUTHENTICATION,
        MANUAL_AUTHENTICATION,
        SCRIPT_BASED_AUTHENTICATION,
    ];

    pub fn new(method: &'a mut AuthenticationMethod) -> Result<Self, WireError> {
        let view = match method.discriminator() {
            FORM_BASED_AUTHENTICATION => Self::FormBased(FormBasedAuthentication { method }),
            JSON_BASED_AUTHENTICATION => Self::JsonBased(JsonBasedAuthentication { method }),
            HTTP_AUTHENTICATION => Self::Http(HttpAuthentication { method }),
            MANUAL_AUTHENTICATION => Self::Manual(ManualAuthentication { method }),
            SCRIPT_BASED_AUTHENTICATION => Self::ScriptBased(ScriptBasedAuthentication { method }),
            other => return Err(unsupported::<MethodFamily>(other, Self::KNOWN)),
        };
        Ok(view)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FormBased(_) => FormBasedAuthentication::NAME,
            Self::JsonBased(_) => JsonBasedAuthentication::NAME,
            Self::Http(_) => HttpAuthentication::NAME,
            Self::Manual(_) => ManualAuthentication::NAME,
            Self::ScriptBased(_) => ScriptBasedAuthentication::NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_view_refuses_other_discriminators() {
        let mut method = AuthenticationMethod::new(HTTP_AUTHENTICATION);
        assert!(matches!(
            FormBasedAuthentication::new(&mut method),
            Err(WireError::UnsupportedDiscriminator { .. })
        ));
    }

    #[test]
    fn port_must_be_numeric() {
        let mut method = AuthenticationMethod::new(HTTP_AUTHENTICATION)
            .with_parameter(PORT, "eighty")
            .unwrap();
        let view = HttpAuthentication::new(&mut method).unwrap();
        assert!(matches!(
            view.port(),
            Err(WireError::InvalidParameterValue { .. })
        ));
        assert!(matches!(view.hostname(), Err(WireError::MissingParameter(_))));
    }

    #[test]
    fn dispatch_picks_variant_by_discriminator() {
        let mut method = ManualAuthentication::create();
        let view = AuthenticationView::new(&mut method).unwrap();
        assert_eq!(view.name(), MANUAL_AUTHENTICATION);

        let mut unknown = AuthenticationMethod::new("kerberos");
        assert!(matches!(
            AuthenticationView::new(&mut unknown),
            Err(WireError::UnsupportedDiscriminator { .. })
        ));
    }
}
