//! Progress reporting for headless runs

pub mod reporter;
