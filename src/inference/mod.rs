mod client;
mod types;

pub use client::{InferenceClient, SglangClient, extract_text};
pub use types::GenerateBody;
