// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::repository::{PostFilter, PostRepository};
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Numbered suffixes tried before falling back to a timestamp suffix.
pub const MAX_SUFFIX_ATTEMPTS: u32 = 100;

/// Domain service responsible for producing unique slugs for posts.
///
/// The existence check is optimistic: two concurrent writers can both see a
/// slug as free, so the store's unique constraint stays authoritative.
pub struct PostSlugService {
    repo: Arc<dyn PostRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl PostSlugService {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            generator,
            clock,
        }
    }

    /// Normalizes `title` into a slug candidate without checking the store.
    pub fn candidate_for(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return Err(DomainError::Validation(
                "title must contain at least one ASCII letter or digit".into(),
            ));
        }
        PostSlug::new(base)
    }

    pub async fn generate_unique_slug(
        &self,
        title: &PostTitle,
        exclude_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let candidate = self.candidate_for(title)?;
        self.resolve(&candidate, exclude_id).await
    }

    /// Returns `candidate` or the first free `candidate-N` for N in
    /// `1..=MAX_SUFFIX_ATTEMPTS`, ignoring the record `exclude_id`.
    pub async fn resolve(
        &self,
        candidate: &PostSlug,
        exclude_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        if !self.is_taken(candidate, exclude_id).await? {
            return Ok(candidate.clone());
        }

        for counter in 1..=MAX_SUFFIX_ATTEMPTS {
            let attempt = candidate.with_suffix(counter)?;
            if !self.is_taken(&attempt, exclude_id).await? {
                tracing::debug!(
                    slug = %candidate,
                    resolved = %attempt,
                    "slug collision resolved with numeric suffix"
                );
                return Ok(attempt);
            }
        }

        let millis = self.clock.now().timestamp_millis().unsigned_abs();
        let fallback = candidate.with_suffix(millis)?;
        tracing::warn!(
            slug = %candidate,
            resolved = %fallback,
            attempts = MAX_SUFFIX_ATTEMPTS,
            "numeric slug suffixes exhausted; using timestamp suffix"
        );
        Ok(fallback)
    }

    async fn is_taken(&self, slug: &PostSlug, exclude_id: Option<PostId>) -> DomainResult<bool> {
        let filter = PostFilter::all()
            .with_slug(slug.clone())
            .excluding(exclude_id);
        Ok(self.repo.find_one(&filter).await?.is_some())
    }
}
