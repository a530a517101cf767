use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostFilter, PostSlug},
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let not_found =
            || ApplicationError::not_found(format!("Post with slug \"{}\" not found", query.slug));
        // A malformed slug cannot be stored, so it simply matches nothing.
        let slug = PostSlug::new(query.slug.as_str()).map_err(|_| not_found())?;
        let post = self
            .repo
            .find_one(&PostFilter::active().with_slug(slug))
            .await?
            .ok_or_else(not_found)?;
        Ok(post.into())
    }
}
