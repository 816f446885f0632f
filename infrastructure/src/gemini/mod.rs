//! Gemini REST adapter

mod gateway;
mod types;

pub use gateway::{DEFAULT_GEMINI_MODEL, GeminiModel};
