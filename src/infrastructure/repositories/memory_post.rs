use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{NewPost, Post, PostFilter, PostId, PostOrder, PostRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Post>,
}

impl Table {
    fn slug_taken_by_other(&self, post_id: Option<PostId>, slug: &str) -> bool {
        self.rows
            .values()
            .any(|row| row.slug.as_str() == slug && Some(row.id) != post_id)
    }
}

/// Process-local post store. The mutex makes each write atomic, so the
/// unique slug check here plays the part of a database unique index.
pub struct InMemoryPostRepository {
    table: Mutex<Table>,
    clock: Arc<dyn Clock>,
}

impl InMemoryPostRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(Table::default()),
            clock,
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| DomainError::Persistence("post table lock poisoned".into()))
    }

    /// Number of stored records, active or not.
    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.lock()?.rows.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_one(&self, filter: &PostFilter) -> DomainResult<Option<Post>> {
        let table = self.lock()?;
        Ok(table.rows.values().find(|post| filter.matches(post)).cloned())
    }

    async fn find_many(&self, filter: &PostFilter, order: PostOrder) -> DomainResult<Vec<Post>> {
        let table = self.lock()?;
        let mut posts: Vec<Post> = table
            .rows
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();

        posts.sort_by(|a, b| {
            let ascending = a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id));
            match order {
                PostOrder::CreatedAtAsc => ascending,
                PostOrder::CreatedAtDesc => ascending.reverse(),
            }
        });
        Ok(posts)
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut table = self.lock()?;
        if table.slug_taken_by_other(None, post.slug.as_str()) {
            return Err(DomainError::Conflict(format!(
                "slug '{}' already exists",
                post.slug
            )));
        }

        table.last_id += 1;
        let id = PostId::new(table.last_id)?;
        let stored = post.into_post(id, self.clock.now());
        table.rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn save(&self, mut post: Post) -> DomainResult<Post> {
        let mut table = self.lock()?;
        if table.slug_taken_by_other(Some(post.id), post.slug.as_str()) {
            return Err(DomainError::Conflict(format!(
                "slug '{}' already exists",
                post.slug
            )));
        }

        let Some(existing) = table.rows.get_mut(&i64::from(post.id)) else {
            return Err(DomainError::NotFound(format!(
                "Post with ID {} not found",
                post.id
            )));
        };

        post.created_at = existing.created_at;
        post.updated_at = self.clock.now();
        *existing = post.clone();
        Ok(post)
    }
}
