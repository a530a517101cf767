// src/application/ports/util.rs

/// Turns free text into a slug candidate. Implementations are pure: the same
/// input always yields the same output, which may be empty.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
