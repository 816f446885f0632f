//! The quiz: twelve static questions and the selection they fill.
//!
//! - [`category::Category`] — the twelve preference axes
//! - [`question::Question`] — one catalog entry with its answer options
//! - [`catalog`] — the fixed, ordered question list
//! - [`selection::Selection`] — the per-attempt answer record

pub mod catalog;
pub mod category;
pub mod question;
pub mod selection;
