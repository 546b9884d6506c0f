//! Wire-format models for the document store's REST API.

pub mod commit;
pub mod document;
pub mod status;
pub mod value;

pub use commit::{
    CommitRequest, CommitResponse, DocumentTransform, FieldTransform, ServerValue, Write,
    WriteResult,
};
pub use document::Document;
pub use status::{ErrorBody, ErrorStatus};
pub use value::{FieldValue, Value};
