pub mod config;
pub mod engine;
pub mod error;
pub mod handler;
pub mod inference;
pub mod job;
pub mod server;

pub use error::{Error, Result};
