//! Screen flow: the five-state machine behind the UI.

pub mod controller;
pub mod state;
