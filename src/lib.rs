//! Post records addressed by title-derived, unique slugs, with a soft-delete
//! lifecycle over a store that enforces slug uniqueness.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
