// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by post value objects, the slug service and the
/// repositories. `Conflict` is reserved for the store's unique-slug
/// constraint; every other storage failure is `Persistence`.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A title, slug, id or state that breaks its invariant.
    #[error("invalid post data: {0}")]
    Validation(String),
    /// Another record already owns the slug.
    #[error("slug conflict: {0}")]
    Conflict(String),
    /// No record matched, or the record is no longer active.
    #[error("post not found: {0}")]
    NotFound(String),
    #[error("post storage failure: {0}")]
    Persistence(String),
}
