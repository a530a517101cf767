// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::application::error::ApplicationResult;

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Soft delete: the record stays stored as `Inactive`.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let mut post = self.find_active(command.id).await?;
        post.deactivate()?;

        let deactivated = self.repo.save(post).await?;
        tracing::info!(post_id = %deactivated.id, slug = %deactivated.slug, "post deactivated");
        Ok(())
    }
}
