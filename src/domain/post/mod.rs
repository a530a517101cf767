// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post};
pub use repository::{PostFilter, PostOrder, PostRepository};
pub use value_objects::{PostId, PostSlug, PostState, PostTitle};
