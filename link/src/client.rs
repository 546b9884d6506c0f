//! Document-store client with builder pattern.
//!
//! Provides the credentialed handle to the remote store from which
//! collection and document references are derived.

use crate::{
    auth::AuthProvider,
    credentials::ServiceAccountKey,
    document::CollectionRef,
    error::{LinkError, Result},
};
use std::time::Duration;

/// Default public endpoint of the managed service.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Main document-store client.
///
/// Construct with [`DocStoreClientBuilder`], or [`DocStoreClient::from_key`]
/// to seed the builder from a service-account key file. Clients are cheap
/// to clone and explicitly passed to consumers; there is no process-wide
/// instance.
///
/// # Examples
///
/// ```rust,no_run
/// use firecheck_link::DocStoreClient;
///
/// # fn example() -> firecheck_link::Result<()> {
/// let client = DocStoreClient::builder()
///     .project_id("demo")
///     .base_url("http://localhost:8085")
///     .build()?;
///
/// let doc = client.collection("test").doc("connection");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DocStoreClient {
    base_url: String,
    project_id: String,
    database: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
}

impl DocStoreClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> DocStoreClientBuilder {
        DocStoreClientBuilder::new()
    }

    /// Build a client from a service-account key file.
    ///
    /// Takes project, database, endpoint, and bearer token from the key.
    /// A key without a token yields an unauthenticated client.
    pub fn from_key(key: &ServiceAccountKey) -> Result<Self> {
        let auth = match &key.token {
            Some(token) => AuthProvider::bearer_token(token.clone()),
            None => AuthProvider::none(),
        };
        let mut builder = Self::builder()
            .project_id(key.project_id.clone())
            .database(key.database().to_string())
            .auth(auth);
        if let Some(url) = &key.server_url {
            builder = builder.base_url(url.clone());
        }
        builder.build()
    }

    /// Get a reference to a top-level collection
    pub fn collection(&self, collection_id: impl Into<String>) -> CollectionRef {
        CollectionRef::new(self.clone(), collection_id.into())
    }

    /// Resource prefix for document paths:
    /// `projects/{project}/databases/{database}/documents`
    pub(crate) fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database
        )
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Authentication provider attached to every request
    pub fn auth(&self) -> &AuthProvider {
        &self.auth
    }
}

/// Builder for configuring [`DocStoreClient`] instances.
pub struct DocStoreClientBuilder {
    base_url: String,
    project_id: Option<String>,
    database: String,
    timeout: Duration,
    connect_timeout: Duration,
    auth: AuthProvider,
}

impl DocStoreClientBuilder {
    fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: None,
            database: crate::credentials::DEFAULT_DATABASE.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            auth: AuthProvider::none(),
        }
    }

    /// Set the service endpoint (e.g. a local emulator)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the project id (required)
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Set the database id (default: "(default)")
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the HTTP request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout (TCP + TLS handshake)
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DocStoreClient> {
        let project_id = self
            .project_id
            .ok_or_else(|| LinkError::ConfigurationError("project_id is required".into()))?;

        // Keep-alive pooling; the probe issues several sequential requests
        // over one connection.
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_max_idle_per_host(2)
            .build()
            .map_err(|e| LinkError::ConfigurationError(e.to_string()))?;

        Ok(DocStoreClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            project_id,
            database: self.database,
            http_client,
            auth: self.auth,
        })
    }
}
