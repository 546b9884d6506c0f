//! firecheck-link: client library for the document-store connectivity probe.
//!
//! Provides credential loading, an authenticated HTTP client for a
//! Firestore-compatible document store, typed wire models, and the
//! write/read/delete probe sequence itself.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod document;
pub mod error;
pub mod models;
pub mod probe;

pub use auth::AuthProvider;
pub use client::{DocStoreClient, DocStoreClientBuilder, DEFAULT_BASE_URL};
pub use credentials::ServiceAccountKey;
pub use document::{CollectionRef, DocumentRef};
pub use error::{LinkError, Result};
pub use models::{Document, FieldValue, Value};
pub use probe::{
    run_probe, ProbeReport, PROBE_COLLECTION, PROBE_DOCUMENT_ID, PROBE_MESSAGE,
};
