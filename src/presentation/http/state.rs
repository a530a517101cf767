// src/presentation/http/state.rs
use crate::application::services::PostLifecycleManager;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<PostLifecycleManager>,
}
