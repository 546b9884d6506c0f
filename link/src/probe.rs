//! Connectivity probe: write, read back, and delete one fixed document.
//!
//! Verifies that credentials and network configuration allow write, read,
//! and delete access to the store. A successful probe leaves no residue.

use crate::{
    client::DocStoreClient,
    error::{LinkError, Result},
    models::{FieldValue, Value},
};
use log::{debug, info};
use std::collections::BTreeMap;

/// Collection holding the probe document.
pub const PROBE_COLLECTION: &str = "test";

/// Id of the probe document.
pub const PROBE_DOCUMENT_ID: &str = "connection";

/// Constant message written by the probe.
pub const PROBE_MESSAGE: &str = "Backend connected successfully";

/// What a successful probe observed.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Short path of the probe document (`test/connection`)
    pub document_path: String,

    /// Field mapping read back after the write
    pub fields: BTreeMap<String, Value>,

    /// Commit time reported by the write (RFC 3339)
    pub commit_time: Option<String>,
}

impl ProbeReport {
    /// Render the field mapping for operator output
    pub fn render_fields(&self) -> String {
        let doc = crate::models::Document {
            name: None,
            fields: self.fields.clone(),
            create_time: None,
            update_time: None,
        };
        doc.render_fields()
    }
}

/// Run the connectivity probe against the given client.
///
/// Steps, fully sequential, each failure aborting the rest:
/// 1. write `{message, timestamp: <server time>}` to `test/connection`,
///    overwriting any existing content;
/// 2. read the document back;
/// 3. delete it, whether or not the read-back found it.
///
/// A read-back miss after a successful write should be impossible; it is
/// still reported as a failure (after the delete) rather than silently
/// producing no result.
pub async fn run_probe(client: &DocStoreClient) -> Result<ProbeReport> {
    let doc_ref = client.collection(PROBE_COLLECTION).doc(PROBE_DOCUMENT_ID);
    debug!("[PROBE] Starting against {}", doc_ref.resource_path());

    let fields: BTreeMap<String, FieldValue> = [
        ("message".to_string(), FieldValue::string(PROBE_MESSAGE)),
        ("timestamp".to_string(), FieldValue::server_timestamp()),
    ]
    .into_iter()
    .collect();

    let commit = doc_ref.set(fields).await?;
    debug!("[PROBE] Write committed at {:?}", commit.commit_time);

    let read_back = doc_ref.get().await?;

    doc_ref.delete().await?;
    debug!("[PROBE] Probe document deleted");

    match read_back {
        Some(document) => {
            info!("[PROBE] Round-trip complete for {}", doc_ref.short_path());
            Ok(ProbeReport {
                document_path: doc_ref.short_path(),
                fields: document.fields,
                commit_time: commit.commit_time,
            })
        }
        None => Err(LinkError::ProbeFailed(format!(
            "probe document {} missing after write",
            doc_ref.short_path()
        ))),
    }
}
