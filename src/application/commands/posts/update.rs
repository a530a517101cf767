use super::{PostCommandService, conflict::translate_write_error};
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{Post, PostState, PostTitle},
};
use chrono::{DateTime, Utc};

#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub state: Option<PostState>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let mut post = self.find_active(command.id).await?;

        let UpdatePostCommand {
            id: _,
            title,
            content,
            published_at,
            state,
        } = command;

        let title_opt = title.map(PostTitle::new).transpose()?;
        self.apply_title_update(&mut post, title_opt).await?;

        if let Some(content) = content {
            post.set_content(content);
        }
        if let Some(published_at) = published_at {
            post.set_published_at(published_at);
        }
        if let Some(PostState::Inactive) = state {
            post.deactivate()?;
        }

        let title = post.title.clone();
        let updated = self
            .repo
            .save(post)
            .await
            .map_err(|err| translate_write_error(err, &title))?;

        tracing::info!(
            post_id = %updated.id,
            slug = %updated.slug,
            state = %updated.state,
            "post updated"
        );
        Ok(updated.into())
    }

    /// The slug is recomputed only when the title actually changes.
    async fn apply_title_update(
        &self,
        post: &mut Post,
        title_opt: Option<PostTitle>,
    ) -> ApplicationResult<()> {
        let Some(title) = title_opt else {
            return Ok(());
        };
        if title == post.title {
            return Ok(());
        }

        let slug = self
            .slug_service
            .generate_unique_slug(&title, Some(post.id))
            .await?;
        post.rename(title, slug);
        Ok(())
    }
}
