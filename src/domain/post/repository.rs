use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::{PostId, PostSlug, PostState};
use async_trait::async_trait;

/// Conjunction of optional predicates. An empty filter matches every record,
/// whatever its state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub id: Option<PostId>,
    pub slug: Option<PostSlug>,
    pub state: Option<PostState>,
    pub exclude_id: Option<PostId>,
}

impl PostFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active() -> Self {
        Self::default().with_state(PostState::Active)
    }

    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_state(mut self, state: PostState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn excluding(mut self, id: Option<PostId>) -> Self {
        self.exclude_id = id;
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.id.is_none_or(|id| post.id == id)
            && self.slug.as_ref().is_none_or(|slug| &post.slug == slug)
            && self.state.is_none_or(|state| post.state == state)
            && self.exclude_id.is_none_or(|id| post.id != id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrder {
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
}

/// Storage for posts. Implementations must enforce slug uniqueness across
/// every record and report a violation as `DomainError::Conflict`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_one(&self, filter: &PostFilter) -> DomainResult<Option<Post>>;
    async fn find_many(&self, filter: &PostFilter, order: PostOrder) -> DomainResult<Vec<Post>>;
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Persists every mutable field of an existing post and refreshes `updated_at`.
    async fn save(&self, post: Post) -> DomainResult<Post>;
}
