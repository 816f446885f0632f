//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generative_model;
pub mod location;
pub mod progress;
pub mod share;
