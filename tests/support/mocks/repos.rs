// tests/support/mocks/repos.rs
use async_trait::async_trait;
use posts_core::domain::errors::{DomainError, DomainResult};
use posts_core::domain::post::{NewPost, Post, PostFilter, PostOrder, PostRepository};
use posts_core::infrastructure::repositories::InMemoryPostRepository;
use std::sync::Arc;

/* -------------------------------- BlindSlugRepo -------------------------------- */

/// Hides every slug lookup, the way a concurrent writer can slip in between
/// the existence check and the insert. Writes still hit the unique check.
pub struct BlindSlugRepo {
    pub inner: Arc<InMemoryPostRepository>,
}

#[async_trait]
impl PostRepository for BlindSlugRepo {
    async fn find_one(&self, filter: &PostFilter) -> DomainResult<Option<Post>> {
        if filter.slug.is_some() && filter.id.is_none() {
            return Ok(None);
        }
        self.inner.find_one(filter).await
    }

    async fn find_many(&self, filter: &PostFilter, order: PostOrder) -> DomainResult<Vec<Post>> {
        self.inner.find_many(filter, order).await
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.inner.insert(post).await
    }

    async fn save(&self, post: Post) -> DomainResult<Post> {
        self.inner.save(post).await
    }
}

/* -------------------------------- FailingPostRepo -------------------------------- */

/// Every call fails with an unexpected storage error.
pub struct FailingPostRepo;

fn broken() -> DomainError {
    DomainError::Persistence("database is locked".into())
}

#[async_trait]
impl PostRepository for FailingPostRepo {
    async fn find_one(&self, _filter: &PostFilter) -> DomainResult<Option<Post>> {
        Err(broken())
    }

    async fn find_many(&self, _filter: &PostFilter, _order: PostOrder) -> DomainResult<Vec<Post>> {
        Err(broken())
    }

    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        Err(broken())
    }

    async fn save(&self, _post: Post) -> DomainResult<Post> {
        Err(broken())
    }
}

/* -------------------------------- FailingWritesRepo -------------------------------- */

/// Reads succeed against `inner`; writes fail with an unexpected storage error.
pub struct FailingWritesRepo {
    pub inner: Arc<InMemoryPostRepository>,
}

#[async_trait]
impl PostRepository for FailingWritesRepo {
    async fn find_one(&self, filter: &PostFilter) -> DomainResult<Option<Post>> {
        self.inner.find_one(filter).await
    }

    async fn find_many(&self, filter: &PostFilter, order: PostOrder) -> DomainResult<Vec<Post>> {
        self.inner.find_many(filter, order).await
    }

    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        Err(broken())
    }

    async fn save(&self, _post: Post) -> DomainResult<Post> {
        Err(broken())
    }
}
