//! Custom extractors for Axum handlers.
//!
//! Each extractor rejects with an [`AppError`](crate::errors::AppError), so
//! malformed input always produces the standard `{detail}` error body.

pub mod id_path;
pub mod query;
pub mod validated_json;

pub use id_path::IdPath;
pub use query::ApiQuery;
pub use validated_json::ValidatedJson;
