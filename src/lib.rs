//! Scholarship chat library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod buffer;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod protocol;
pub mod record;
pub mod session;
pub mod state;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod integration_tests;
