//! Core data models for shenv

mod config;
mod document;
mod profile;
mod variable;

pub use config::{Config, ParseConfig, ProfilesConfig};
pub use document::ProfileDocument;
pub use profile::{find_profile, profile_path, Profile, DEFAULT_CANDIDATES};
pub use variable::{ParseResult, ParseWarning, Variable};
