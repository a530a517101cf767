// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::post::{Post, PostFilter, PostId, PostRepository, services::PostSlugService},
};

pub struct PostCommandService {
    pub(super) repo: Arc<dyn PostRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    /// Loads a post only while it is active; inactive and unknown ids look
    /// the same to callers.
    pub(super) async fn find_active(&self, id: i64) -> ApplicationResult<Post> {
        let not_found = || ApplicationError::not_found(format!("Post with ID {id} not found"));
        let post_id = PostId::new(id).map_err(|_| not_found())?;
        self.repo
            .find_one(&PostFilter::active().with_id(post_id))
            .await?
            .ok_or_else(not_found)
    }
}
