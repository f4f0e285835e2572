//! Terminal front-end for the scholarship chat
//!
//! This module organizes the line-oriented application into focused submodules:
//! - `core`: ChatApp struct, channel wiring and line input
//! - `events`: Event processing from backend
//! - `form`: Prompting the intake form field by field
//! - `update`: Main command loop

pub mod core;
pub mod events;
pub mod form;
pub mod update;

pub use core::ChatApp;
