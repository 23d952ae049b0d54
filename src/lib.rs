//! shenv - Shell Profile Environment Manager
//!
//! Manages `export KEY=VALUE` declarations in shell startup files while
//! leaving every other line alone.
//!
//! # Features
//!
//! - Discover `.zshrc`, `.bash_profile` and `.bashrc` (or a configured list)
//! - Parse exported variables without touching the rest of the file
//! - Add, edit and delete variables with atomic rewrites
//! - Import and export variable sets as JSON documents

pub mod cli;
pub mod codec;
pub mod error;
pub mod model;
pub mod ops;
pub mod store;
pub mod utils;

pub use codec::{DeclarationCodec, MalformedPolicy};
pub use error::{Result, ShenvError};
pub use model::{Config, Profile, ProfileDocument, Variable};
pub use store::ProfileStore;
