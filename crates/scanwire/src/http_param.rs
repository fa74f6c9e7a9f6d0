//! Multi-valued HTTP parameters seen on a site.
//!
//! ```json
//! [{"site": "example.com:443", "name": "q", "timesUsed": 3, "type": "url"},
//!  {"Flags": ["structural"]},
//!  {"Values": ["a", "b"]}]
//! ```
//!
//! The head object is always first. The `Flags` and `Values` sections are
//! optional and may come in either order; they are matched by tag.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::codec::{
    decode_list, expect_array, expect_int, expect_object, expect_str, field, single_field,
    tagged, WireCodec,
};
use crate::constants::{FLAGS_TAG, PARAM_NAME, PARAM_SITE, PARAM_TIMES_USED, PARAM_TYPE, VALUES_TAG};
use crate::enums::{HttpParameterType, ParameterFlag};
use crate::error::{malformed, WireError};

const HEAD_FIELDS: [&str; 4] = [PARAM_SITE, PARAM_NAME, PARAM_TIMES_USED, PARAM_TYPE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpParameter {
    pub site: String,
    pub name: String,
    pub times_used: i64,
    pub kind: HttpParameterType,
    pub flags: BTreeSet<ParameterFlag>,
    pub values: Vec<String>,
}

impl HttpParameter {
    pub fn new(
        site: impl Into<String>,
        name: impl Into<String>,
        times_used: i64,
        kind: HttpParameterType,
    ) -> Self {
        Self {
            site: site.into(),
            name: name.into(),
            times_used,
            kind,
            flags: BTreeSet::new(),
            values: Vec::new(),
        }
    }
}

impl WireCodec for HttpParameter {
    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let items = expect_array(value, "http parameter")?;
        let (head, sections) = items
            .split_first()
            .ok_or_else(|| malformed("http parameter is missing its head section"))?;

        let head = expect_object(head, "http parameter head")?;
        if let Some(unknown) = head.keys().find(|k| !HEAD_FIELDS.contains(&k.as_str())) {
            return Err(malformed(format!("unexpected head field `{unknown}`")));
        }
        let mut param = HttpParameter::new(
            expect_str(field(head, PARAM_SITE, "http parameter head")?, PARAM_SITE)?,
            expect_str(field(head, PARAM_NAME, "http parameter head")?, PARAM_NAME)?,
            expect_int(field(head, PARAM_TIMES_USED, "http parameter head")?, PARAM_TIMES_USED)?,
            HttpParameterType::from_wire(field(head, PARAM_TYPE, "http parameter head")?)?,
        );

        let mut seen_flags = false;
        let mut seen_values = false;
        for section in sections {
            match single_field(section, "http parameter section")? {
                (FLAGS_TAG, list) if !seen_flags => {
                    seen_flags = true;
                    param.flags = decode_list::<ParameterFlag>(list, FLAGS_TAG)?
                        .into_iter()
                        .collect();
                }
                (VALUES_TAG, list) if !seen_values => {
                    seen_values = true;
                    param.values = decode_list(list, VALUES_TAG)?;
                }
                (FLAGS_TAG, _) | (VALUES_TAG, _) => {
                    return Err(malformed("http parameter section repeated"));
                }
                (other, _) => {
                    return Err(malformed(format!("unknown http parameter section `{other}`")));
                }
            }
        }
        Ok(param)
    }

    fn to_wire(&self) -> Value {
        let mut head = Map::new();
        head.insert(PARAM_SITE.into(), Value::String(self.site.clone()));
        head.insert(PARAM_NAME.into(), Value::String(self.name.clone()));
        head.insert(PARAM_TIMES_USED.into(), Value::from(self.times_used));
        head.insert(PARAM_TYPE.into(), self.kind.to_wire());

        let mut out = vec![Value::Object(head)];
        if !self.flags.is_empty() {
            out.push(tagged(
                FLAGS_TAG,
                Value::Array(self.flags.iter().map(WireCodec::to_wire).collect()),
            ));
        }
        if !self.values.is_empty() {
            out.push(tagged(
                VALUES_TAG,
                Value::Array(self.values.iter().map(WireCodec::to_wire).collect()),
            ));
        }
        Value::Array(out)
    }
}
