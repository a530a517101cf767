// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, UpdatePostCommand},
    dto::{PostDto, serde_time},
};
use crate::domain::post::PostState;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "publishedAt", with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "publishedAt", with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: Option<PostState>,
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        published_at: payload.published_at,
    };

    let created = state.services.create_post(command).await.into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_posts(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .list_active_posts()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state.services.get_post(id).await.into_http().map(Json)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .get_post_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        published_at: payload.published_at,
        state: payload.state,
    };

    state
        .services
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state.services.delete_post(id).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
