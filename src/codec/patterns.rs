//! # Declaration Patterns
//!
//! Regex patterns for recognizing `export` declarations.
//!
//! Patterns run against a line that has already been trimmed of
//! surrounding whitespace, so they anchor at the keyword itself.

use lazy_static::lazy_static;
use regex::Regex;

/// Literal prefix that marks a line as an export declaration
pub const EXPORT_PREFIX: &str = "export ";

lazy_static! {
    /// Matches a well-formed declaration: `export KEY=VALUE`
    ///
    /// Captures:
    /// - `key`: everything up to the first `=` (may be empty or contain spaces)
    /// - `value`: the rest of the line, further `=` included
    ///
    /// Exactly one space must follow `export`; `export\tX=1` is opaque.
    pub static ref EXPORT_DECL_RE: Regex = Regex::new(
        r"^export (?P<key>[^=]*)=(?P<value>.*)$"
    ).unwrap();
}
