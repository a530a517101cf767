// src/application/commands/posts/conflict.rs
use crate::{
    application::error::ApplicationError,
    domain::{errors::DomainError, post::PostTitle},
};

/// Maps a failed write to the caller-facing error. A unique-constraint
/// rejection names the title that produced the slug.
pub(super) fn translate_write_error(err: DomainError, title: &PostTitle) -> ApplicationError {
    match err {
        DomainError::Conflict(detail) => {
            tracing::info!(title = %title, %detail, "post write rejected by slug constraint");
            ApplicationError::conflict(format!(
                "A post with the title \"{title}\" already exists or creates a conflicting slug. Please try a different title."
            ))
        }
        other => ApplicationError::from(other),
    }
}
