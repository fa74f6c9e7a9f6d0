//! Active scan progress.
//!
//! ```json
//! ["h1", {"HostProcess": [{"Plugin": ["p1", 1, "OK", 120]}]}, "h2", {"HostProcess": []}]
//! ```
//!
//! Hosts and their plugin lists alternate in one flat array.

use serde_json::Value;

use crate::codec::{
    expect_array, expect_int, expect_str, expect_uint, malformed_len, tagged, unwrap_tagged,
    WireCodec,
};
use crate::constants::{HOST_PROCESS_TAG, PLUGIN_TAG};
use crate::error::{malformed, WireError};

const PLUGIN_ARITY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    pub name: String,
    pub id: i64,
    pub status: String,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProcess {
    pub host: String,
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanProgress {
    pub hosts: Vec<HostProcess>,
}

impl WireCodec for Plugin {
    /// Reads `{"Plugin": [name, id, status, elapsedMs]}`.
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let tuple = expect_array(unwrap_tagged(value, PLUGIN_TAG)?, PLUGIN_TAG)?;
        if tuple.len() != PLUGIN_ARITY {
            return Err(malformed_len(PLUGIN_TAG, PLUGIN_ARITY, tuple.len()));
        }
        Ok(Plugin {
            name: expect_str(&tuple[0], "plugin name")?.to_string(),
            id: expect_int(&tuple[1], "plugin id")?,
            status: expect_str(&tuple[2], "plugin status")?.to_string(),
            elapsed_ms: expect_uint(&tuple[3], "plugin elapsed time")?,
        })
    }

    fn to_wire(&self) -> Value {
        tagged(
            PLUGIN_TAG,
            Value::Array(vec![
                Value::String(self.name.clone()),
                Value::from(self.id),
                Value::String(self.status.clone()),
                Value::from(self.elapsed_ms),
            ]),
        )
    }
}

impl WireCodec for ScanProgress {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let items = expect_array(value, "scan progress")?;
        if items.len() % 2 != 0 {
            return Err(malformed(format!(
                "scan progress must alternate host and {HOST_PROCESS_TAG}, got {} elements",
                items.len()
            )));
        }
        let hosts = items
            .chunks_exact(2)
            .map(|pair| {
                let host = expect_str(&pair[0], "host")?.to_string();
                let process = unwrap_tagged(&pair[1], HOST_PROCESS_TAG)?;
                let plugins = expect_array(process, HOST_PROCESS_TAG)?
                    .iter()
                    .map(Plugin::from_wire)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(HostProcess { host, plugins })
            })
            .collect::<Result<Vec<_>, WireError>>()?;
        Ok(ScanProgress { hosts })
    }

    fn to_wire(&self) -> Value {
        let mut out = Vec::with_capacity(self.hosts.len() * 2);
        for host in &self.hosts {
            out.push(Value::String(host.host.clone()));
            out.push(tagged(
                HOST_PROCESS_TAG,
                Value::Array(host.plugins.iter().map(WireCodec::to_wire).collect()),
            ));
        }
        Value::Array(out)
    }
}
