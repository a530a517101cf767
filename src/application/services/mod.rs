// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::posts::{
            CreatePostCommand, DeletePostCommand, PostCommandService, UpdatePostCommand,
        },
        dto::PostDto,
        ports::{time::Clock, util::SlugGenerator},
        queries::posts::{GetPostByIdQuery, GetPostBySlugQuery, ListPostsQuery, PostQueryService},
    },
    domain::post::{PostRepository, services::PostSlugService},
};

/// Entry point for the post lifecycle: create, read, update and soft delete.
///
/// Every operation returns an [`ApplicationError`](crate::application::error::ApplicationError)
/// of kind `NotFound`, `Conflict`, `Validation` or `Infrastructure` instead of
/// panicking; raw storage failures never cross this boundary.
pub struct PostLifecycleManager {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl PostLifecycleManager {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&repo)));

        Self {
            post_commands,
            post_queries,
        }
    }

    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        self.post_commands.create_post(command).await
    }

    pub async fn list_active_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        self.post_queries
            .list_posts(ListPostsQuery {
                include_inactive: false,
            })
            .await
    }

    pub async fn list_all_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        self.post_queries
            .list_posts(ListPostsQuery {
                include_inactive: true,
            })
            .await
    }

    pub async fn get_post(&self, id: i64) -> ApplicationResult<PostDto> {
        self.post_queries
            .get_post_by_id(GetPostByIdQuery { id })
            .await
    }

    pub async fn get_post_by_slug(&self, slug: impl Into<String>) -> ApplicationResult<PostDto> {
        self.post_queries
            .get_post_by_slug(GetPostBySlugQuery { slug: slug.into() })
            .await
    }

    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        self.post_commands.update_post(command).await
    }

    pub async fn delete_post(&self, id: i64) -> ApplicationResult<()> {
        self.post_commands
            .delete_post(DeletePostCommand { id })
            .await
    }
}
