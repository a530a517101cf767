use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostFilter, PostId},
};

pub struct GetPostByIdQuery {
    pub id: i64,
}

impl PostQueryService {
    pub async fn get_post_by_id(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let not_found =
            || ApplicationError::not_found(format!("Post with ID {} not found", query.id));
        let id = PostId::new(query.id).map_err(|_| not_found())?;
        let post = self
            .repo
            .find_one(&PostFilter::active().with_id(id))
            .await?
            .ok_or_else(not_found)?;
        Ok(post.into())
    }
}
