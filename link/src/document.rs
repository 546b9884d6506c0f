//! Collection and document references with write/read/delete over HTTP.

use crate::{
    client::DocStoreClient,
    error::{LinkError, Result},
    models::{
        CommitRequest, CommitResponse, Document, DocumentTransform, ErrorBody, FieldTransform,
        FieldValue, ServerValue, Write,
    },
};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::time::Instant;

/// Reference to a top-level collection.
#[derive(Clone)]
pub struct CollectionRef {
    client: DocStoreClient,
    collection_id: String,
}

impl CollectionRef {
    pub(crate) fn new(client: DocStoreClient, collection_id: String) -> Self {
        Self {
            client,
            collection_id,
        }
    }

    /// Get a reference to a document in this collection
    pub fn doc(&self, document_id: impl Into<String>) -> DocumentRef {
        DocumentRef {
            client: self.client.clone(),
            collection_id: self.collection_id.clone(),
            document_id: document_id.into(),
        }
    }
}

/// Reference to a single document.
///
/// Operations are sequential HTTP calls with no retries; any failure
/// surfaces immediately as a [`LinkError`].
#[derive(Clone)]
pub struct DocumentRef {
    client: DocStoreClient,
    collection_id: String,
    document_id: String,
}

impl DocumentRef {
    /// Full resource path:
    /// `projects/{p}/databases/{d}/documents/{collection}/{id}`
    pub fn resource_path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.client.documents_root(),
            self.collection_id,
            self.document_id
        )
    }

    /// Short path relative to the database root, e.g. `test/connection`
    pub fn short_path(&self) -> String {
        format!("{}/{}", self.collection_id, self.document_id)
    }

    fn document_url(&self) -> String {
        format!("{}/v1/{}", self.client.base_url(), self.resource_path())
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/v1/{}:commit",
            self.client.base_url(),
            self.client.documents_root()
        )
    }

    /// Write the given fields, fully overwriting any existing document.
    ///
    /// [`FieldValue::ServerTimestamp`] sentinels are split out of the
    /// document payload into a field transform so the store stamps them
    /// with its own clock.
    pub async fn set(&self, fields: BTreeMap<String, FieldValue>) -> Result<CommitResponse> {
        let request = self.build_commit_request(fields);

        let url = self.commit_url();
        debug!(
            "[LINK_SET] POST {} doc={} writes={}",
            url,
            self.short_path(),
            request.writes.len()
        );
        let start = Instant::now();

        let mut req_builder = self.client.http_client().post(&url).json(&request);
        req_builder = self.client.auth().apply_to_request(req_builder)?;
        let response = req_builder.send().await?;

        let status = response.status();
        debug!(
            "[LINK_SET] Response status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            return Err(Self::server_error(status, response).await);
        }

        let commit_response: CommitResponse = response.json().await?;
        Ok(commit_response)
    }

    /// Read the document back.
    ///
    /// Returns `Ok(None)` if the document does not exist; absence is not an
    /// error at this layer.
    pub async fn get(&self) -> Result<Option<Document>> {
        let url = self.document_url();
        debug!("[LINK_GET] GET {}", url);
        let start = Instant::now();

        let mut req_builder = self.client.http_client().get(&url);
        req_builder = self.client.auth().apply_to_request(req_builder)?;
        let response = req_builder.send().await?;

        let status = response.status();
        debug!(
            "[LINK_GET] Response status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::server_error(status, response).await);
        }

        let document: Document = response.json().await?;
        Ok(Some(document))
    }

    /// Delete the document. Deleting an absent document succeeds.
    pub async fn delete(&self) -> Result<()> {
        let url = self.document_url();
        debug!("[LINK_DELETE] DELETE {}", url);
        let start = Instant::now();

        let mut req_builder = self.client.http_client().delete(&url);
        req_builder = self.client.auth().apply_to_request(req_builder)?;
        let response = req_builder.send().await?;

        let status = response.status();
        debug!(
            "[LINK_DELETE] Response status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            return Err(Self::server_error(status, response).await);
        }
        Ok(())
    }

    fn build_commit_request(&self, fields: BTreeMap<String, FieldValue>) -> CommitRequest {
        let mut concrete = BTreeMap::new();
        let mut field_transforms = Vec::new();

        for (field_path, value) in fields {
            match value {
                FieldValue::Value(v) => {
                    concrete.insert(field_path, v);
                }
                FieldValue::ServerTimestamp => field_transforms.push(FieldTransform {
                    field_path,
                    set_to_server_value: ServerValue::RequestTime,
                }),
            }
        }

        // The update write goes first even when its field map is empty:
        // a full overwrite must clear fields the previous document had.
        let mut writes = vec![Write {
            update: Some(Document {
                name: Some(self.resource_path()),
                fields: concrete,
                create_time: None,
                update_time: None,
            }),
            ..Default::default()
        }];

        if !field_transforms.is_empty() {
            writes.push(Write {
                transform: Some(DocumentTransform {
                    document: self.resource_path(),
                    field_transforms,
                }),
                ..Default::default()
            });
        }

        CommitRequest { writes }
    }

    async fn server_error(status: reqwest::StatusCode, response: reqwest::Response) -> LinkError {
        let raw = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = ErrorBody::message_from(&raw);
        warn!(
            "[LINK_HTTP] Server error: status={} message=\"{}\"",
            status, message
        );
        LinkError::ServerError {
            status_code: status.as_u16(),
            message,
        }
    }
}
