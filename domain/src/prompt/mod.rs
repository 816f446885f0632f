//! Prompt domain
//!
//! Templates for the three generative calls: persona, nearby cafés and music video.

mod template;

pub use template::PromptTemplate;
