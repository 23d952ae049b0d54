//! Shared utilities

pub mod path;
pub mod strings;
