// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod time;

pub use repos::{BlindSlugRepo, FailingPostRepo, FailingWritesRepo};
pub use time::{FixedClock, SteppingClock, fixed_now};
