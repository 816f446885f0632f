//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod find_cafes;
pub mod find_video;
pub mod locate;
pub mod recommend;
pub mod run_pipeline;
pub mod share_result;

#[cfg(test)]
pub(crate) mod testing;
