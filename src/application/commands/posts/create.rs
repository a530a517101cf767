// src/application/commands/posts/create.rs
use super::{PostCommandService, conflict::translate_write_error};
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{NewPost, PostTitle},
};
use chrono::{DateTime, Utc};

pub struct CreatePostCommand {
    pub title: String,
    pub content: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content,
            published_at: self.published_at,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let slug = self.slug_service.generate_unique_slug(&title, None).await?;
        let published_at = command.published_at.unwrap_or_else(|| self.clock.now());

        let new_post = NewPost::new(title.clone(), slug, command.content, published_at);
        let created = self
            .repo
            .insert(new_post)
            .await
            .map_err(|err| translate_write_error(err, &title))?;

        tracing::info!(post_id = %created.id, slug = %created.slug, "post created");
        Ok(created.into())
    }
}
