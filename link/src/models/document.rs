//! Document resource as returned by the store.

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stored document.
///
/// `name` is the full resource path
/// (`projects/{p}/databases/{d}/documents/{collection}/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource path, absent on write payloads that target a known path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Field mapping
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,

    /// Server-assigned creation time (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// Server-assigned last update time (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Document {
    /// Render the field mapping as `{key: value, ...}` for operator output.
    ///
    /// Keys print in sorted order (BTreeMap iteration order), so output is
    /// stable across runs.
    pub fn render_fields(&self) -> String {
        let mut out = String::from("{");
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.to_string());
        }
        out.push('}');
        out
    }
}
