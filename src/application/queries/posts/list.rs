use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{PostFilter, PostOrder},
};

#[derive(Default)]
pub struct ListPostsQuery {
    pub include_inactive: bool,
}

impl PostQueryService {
    /// Newest first.
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let filter = if query.include_inactive {
            PostFilter::all()
        } else {
            PostFilter::active()
        };

        let records = self
            .repo
            .find_many(&filter, PostOrder::CreatedAtDesc)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
