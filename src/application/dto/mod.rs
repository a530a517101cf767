pub mod posts;
pub mod serde_time;

pub use posts::PostDto;
