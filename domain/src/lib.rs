//! Domain layer for coffee-persona
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! Twelve static questions, one per preference [`Category`]. Each answer fills
//! one field of the [`Selection`]; only a complete selection is submitted.
//!
//! ## Screen flow
//!
//! [`ScreenController`] is the five-state machine
//! (Landing → Quiz → Loading → Result / Error) that owns the selection and
//! the last [`PersonaResult`].
//!
//! ## Persona
//!
//! The generated [`Recommendation`], nearby [`Cafe`]s and a music [`VideoId`].
//! Calls that substitute a default on failure report it through [`Generated`].

pub mod core;
pub mod persona;
pub mod prompt;
pub mod quiz;
pub mod screen;

// Re-export commonly used types
pub use crate::core::error::{DomainError, ParseError};
pub use persona::{
    cafe::Cafe,
    generated::Generated,
    location::Coordinates,
    parsing::{
        extract_video_id, parse_cafe_list, parse_recommendation, strip_code_fence,
    },
    recommendation::Recommendation,
    result::PersonaResult,
    video::VideoId,
};
pub use prompt::PromptTemplate;
pub use quiz::{
    catalog::{QUESTION_COUNT, question_at, questions},
    category::Category,
    question::{AnswerOption, Question},
    selection::Selection,
};
pub use screen::{
    controller::{AnswerOutcome, ScreenController},
    state::ScreenState,
};
