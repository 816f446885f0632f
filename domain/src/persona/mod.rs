//! Persona subdomain: what the pipeline produces for a completed quiz.
//!
//! - [`recommendation::Recommendation`] — the generated coffee persona
//! - [`cafe::Cafe`] — nearby café suggestions
//! - [`video::VideoId`] — music video for the persona's song
//! - [`location::Coordinates`] — where to search for cafés
//! - [`result::PersonaResult`] — what the result screen shows
//! - [`generated::Generated`] — fresh value vs. substituted default
//! - [`parsing`] — turning model text into the above

pub mod cafe;
pub mod generated;
pub mod location;
pub mod parsing;
pub mod recommendation;
pub mod result;
pub mod video;
