use super::map_sqlx;
use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostFilter, PostId, PostOrder, PostRepository, PostSlug, PostTitle,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const POST_COLUMNS: &str =
    "id, title, slug, content, state, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
    clock: Arc<dyn Clock>,
}

impl SqlitePostRepository {
    pub fn new(pool: Arc<SqlitePool>, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: Option<String>,
    state: String,
    published_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: row.content,
            state: row.state.parse()?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_clause(builder: &mut QueryBuilder<'_, Sqlite>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

fn push_conditions<'a>(builder: &mut QueryBuilder<'a, Sqlite>, filter: &PostFilter) {
    let mut has_where = false;

    if let Some(id) = filter.id {
        push_clause(builder, &mut has_where);
        builder.push("id = ");
        builder.push_bind(i64::from(id));
    }
    if let Some(slug) = &filter.slug {
        push_clause(builder, &mut has_where);
        builder.push("slug = ");
        builder.push_bind(slug.as_str().to_owned());
    }
    if let Some(state) = filter.state {
        push_clause(builder, &mut has_where);
        builder.push("state = ");
        builder.push_bind(state.as_str());
    }
    if let Some(exclude) = filter.exclude_id {
        push_clause(builder, &mut has_where);
        builder.push("id <> ");
        builder.push_bind(i64::from(exclude));
    }
}

fn select(filter: &PostFilter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
    push_conditions(&mut builder, filter);
    builder
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn find_one(&self, filter: &PostFilter) -> DomainResult<Option<Post>> {
        let mut builder = select(filter);
        builder.push(" LIMIT 1");

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_many(&self, filter: &PostFilter, order: PostOrder) -> DomainResult<Vec<Post>> {
        let mut builder = select(filter);
        builder.push(match order {
            PostOrder::CreatedAtDesc => " ORDER BY created_at DESC, id DESC",
            PostOrder::CreatedAtAsc => " ORDER BY created_at ASC, id ASC",
        });

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            state,
            published_at,
        } = post;
        let now = self.clock.now();

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content, state, published_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content)
        .bind(state.as_str())
        .bind(published_at)
        .bind(now)
        .bind(now)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn save(&self, post: Post) -> DomainResult<Post> {
        let Post {
            id,
            title,
            slug,
            content,
            state,
            published_at,
            created_at: _,
            updated_at: _,
        } = post;
        let now = self.clock.now();

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts
             SET title = ?, slug = ?, content = ?, state = ?, published_at = ?, updated_at = ?
             WHERE id = ?
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content)
        .bind(state.as_str())
        .bind(published_at)
        .bind(now)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Post::try_from(row),
            None => Err(DomainError::NotFound(format!("Post with ID {id} not found"))),
        }
    }
}
