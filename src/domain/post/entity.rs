// src/domain/post/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::{PostId, PostSlug, PostState, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: Option<String>,
    pub state: PostState,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Title and slug only ever change together.
    pub fn rename(&mut self, title: PostTitle, slug: PostSlug) {
        self.title = title;
        self.slug = slug;
    }

    pub fn set_content(&mut self, content: String) {
        self.content = Some(content);
    }

    pub fn set_published_at(&mut self, published_at: DateTime<Utc>) {
        self.published_at = published_at;
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !self.is_active() {
            return Err(DomainError::NotFound(format!(
                "Post with ID {} not found",
                self.id
            )));
        }
        self.state = PostState::Inactive;
        Ok(())
    }
}

/// A post that has not been stored yet; the store assigns `id`,
/// `created_at` and `updated_at`.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: Option<String>,
    pub state: PostState,
    pub published_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(
        title: PostTitle,
        slug: PostSlug,
        content: Option<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            slug,
            content,
            state: PostState::Active,
            published_at,
        }
    }

    pub fn into_post(self, id: PostId, now: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            state: self.state,
            published_at: self.published_at,
            created_at: now,
            updated_at: now,
        }
    }
}
