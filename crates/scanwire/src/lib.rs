//! Typed codecs for the scanner control API's JSON wire format.
//!
//! Several API responses are not plain objects: scan progress interleaves
//! hosts with tagged plugin lists, sessions are positional triples, HTTP
//! parameters carry optional tagged sections, and spider results come as a
//! pair of tagged lists. Authentication, credentials and session management
//! methods are flat objects with a discriminator and free-form parameters.
//!
//! Every shape decodes from a [`serde_json::Value`] into a typed record and
//! encodes back through [`WireCodec`]. [`decode_str`] and [`encode_string`]
//! do the same from and to JSON text.
//!
//! ```
//! use scanwire::{decode_str, encode_string, ScanProgress};
//!
//! let text = r#"["h1",{"HostProcess":[{"Plugin":["p1",1,"OK",120]}]}]"#;
//! let progress: ScanProgress = decode_str(text).unwrap();
//! assert_eq!(progress.hosts[0].plugins[0].elapsed_ms, 120);
//! assert_eq!(encode_string(&progress), text);
//! ```

pub mod constants;
pub mod enums;
pub mod views;

mod codec;
mod error;
mod http_param;
mod progress;
mod record;
mod scope;
mod session;

pub use codec::{decode_str, encode_string, WireCodec};
pub use enums::{
    nullable_int, ActiveScanState, HandleParametersOption, HttpParameterType, LogicalOperator,
    ParameterFlag, ScanState, WireEnum,
};
pub use error::WireError;
pub use http_param::HttpParameter;
pub use progress::{HostProcess, Plugin, ScanProgress};
pub use record::{
    AuthenticationCredentials, AuthenticationMethod, CredentialsFamily, MethodFamily,
    ParameterRecord, RecordFamily, SessionManagementFamily, SessionManagementMethod,
};
pub use scope::{decode_tagged_pair, encode_tagged_pair, ScopeSplit, UrlRecord};
pub use session::{CookieRecord, Session};
pub use views::ParameterView;
