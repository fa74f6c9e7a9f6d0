//! Extensible parameter records.
//!
//! Authentication methods, credentials and session management methods all
//! travel as one flat JSON object: a discriminator under a family-specific
//! key, followed by arbitrary string parameters.
//!
//! ```json
//! {"methodName": "formBasedAuthentication", "loginUrl": "http://x/login", "loginRequestData": "u=a&p=b"}
//! ```

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::codec::{expect_object, expect_str, WireCodec};
use crate::constants::{CREDENTIALS_TYPE_KEY, METHOD_NAME_KEY};
use crate::error::{malformed, WireError};

/// Fixes the discriminator key of one record family.
pub trait RecordFamily {
    const DISCRIMINATOR_KEY: &'static str;
    const FAMILY: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MethodFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CredentialsFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionManagementFamily;

impl RecordFamily for MethodFamily {
    const DISCRIMINATOR_KEY: &'static str = METHOD_NAME_KEY;
    const FAMILY: &'static str = "authentication method";
}

impl RecordFamily for CredentialsFamily {
    const DISCRIMINATOR_KEY: &'static str = CREDENTIALS_TYPE_KEY;
    const FAMILY: &'static str = "authentication credentials";
}

impl RecordFamily for SessionManagementFamily {
    const DISCRIMINATOR_KEY: &'static str = METHOD_NAME_KEY;
    const FAMILY: &'static str = "session management method";
}

/// A discriminator plus an ordered map of opaque string parameters.
///
/// Equality ignores parameter order: the API only cares about membership.
#[derive(Clone, PartialEq, Eq)]
pub struct ParameterRecord<F> {
    discriminator: String,
    parameters: IndexMap<String, String>,
    family: PhantomData<F>,
}

pub type AuthenticationMethod = ParameterRecord<MethodFamily>;
pub type AuthenticationCredentials = ParameterRecord<CredentialsFamily>;
pub type SessionManagementMethod = ParameterRecord<SessionManagementFamily>;

impl<F: RecordFamily> ParameterRecord<F> {
    pub fn new(discriminator: impl Into<String>) -> Self {
        Self {
            discriminator: discriminator.into(),
            parameters: IndexMap::new(),
            family: PhantomData,
        }
    }

    /// Builder-style [`Self::set_parameter`].
    pub fn with_parameter(mut self, name: &str, value: &str) -> Result<Self, WireError> {
        self.set_parameter(name, value)?;
        Ok(self)
    }

    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    pub fn parameters(&self) -> &IndexMap<String, String> {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Sets a parameter, keeping its position if it already exists.
    pub fn set_parameter(&mut self, name: &str, value: &str) -> Result<Option<String>, WireError> {
        if name == F::DISCRIMINATOR_KEY {
            return Err(WireError::ReservedParameter(name.to_string()));
        }
        Ok(self
            .parameters
            .insert(name.to_string(), value.to_string()))
    }

    /// Removes a parameter, keeping the order of the rest.
    pub fn remove_parameter(&mut self, name: &str) -> Option<String> {
        self.parameters.shift_remove(name)
    }

    pub fn from_json(v: &Value) -> Result<Self, WireError> {
        let obj = expect_object(v, F::FAMILY)?;
        let discriminator = obj
            .get(F::DISCRIMINATOR_KEY)
            .ok_or_else(|| {
                malformed(format!(
                    "{} is missing `{}`",
                    F::FAMILY,
                    F::DISCRIMINATOR_KEY
                ))
            })
            .and_then(|d| expect_str(d, F::DISCRIMINATOR_KEY))?;
        let mut parameters = IndexMap::with_capacity(obj.len().saturating_sub(1));
        for (key, value) in obj {
            if key == F::DISCRIMINATOR_KEY {
                continue;
            }
            parameters.insert(key.clone(), stringify(key, value)?);
        }
        Ok(Self {
            discriminator: discriminator.to_string(),
            parameters,
            family: PhantomData,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut m = Map::new();
        m.insert(
            F::DISCRIMINATOR_KEY.to_string(),
            Value::String(self.discriminator.clone()),
        );
        for (key, value) in &self.parameters {
            m.insert(key.clone(), Value::String(value.clone()));
        }
        Value::Object(m)
    }
}

fn stringify(key: &str, value: &Value) -> Result<String, WireError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => {
            Err(malformed(format!("parameter `{key}` must be a scalar")))
        }
    }
}

impl<F: RecordFamily> WireCodec for ParameterRecord<F> {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        Self::from_json(value)
    }

    fn to_wire(&self) -> Value {
        self.to_json()
    }
}

impl<F: RecordFamily> fmt::Debug for ParameterRecord<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterRecord")
            .field("family", &F::FAMILY)
            .field("discriminator", &self.discriminator)
            .field("parameters", &self.parameters)
            .finish()
    }
}
