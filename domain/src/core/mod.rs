//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — invalid use of the screen flow
//! - [`error::ParseError`] — unreadable model output

pub mod error;
