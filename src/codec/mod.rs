//! # Declaration Codec
//!
//! Pure conversions between profile text and variable lists.
//!
//! ```text
//! codec/
//! ├── mod.rs       - Line classification, parse, serialize, rewrite
//! ├── patterns.rs  - EXPORT_DECL_RE
//! └── document.rs  - JSON interchange document
//! ```
//!
//! Every line of a profile is either an export declaration or opaque.
//! Parsing collects the declarations; rewriting keeps the opaque lines in
//! order and appends freshly rendered declarations after them:
//!
//! ```text
//! # header                     # header
//! export FOO=bar      ──►      alias x=1
//! alias x=1                    export FOO=bar
//! ```
//!
//! A line that starts with `export ` but has no `=` is malformed. Under
//! [`MalformedPolicy::Drop`] it yields no variable and does not survive a
//! rewrite; under [`MalformedPolicy::Preserve`] it is treated as opaque.

pub mod document;
pub mod patterns;

pub use document::{decode_document, encode_document};

use crate::model::{ParseConfig, ParseResult, ParseWarning, Variable};
use crate::utils::strings::split_lines;
use patterns::{EXPORT_DECL_RE, EXPORT_PREFIX};

/// What to do with `export NAME` lines that have no `=`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Skip on parse and discard on rewrite
    #[default]
    Drop,
    /// Keep the line verbatim as opaque content
    Preserve,
}

impl From<ParseConfig> for MalformedPolicy {
    fn from(config: ParseConfig) -> Self {
        if config.preserve_malformed {
            MalformedPolicy::Preserve
        } else {
            MalformedPolicy::Drop
        }
    }
}

/// Classification of a single profile line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Declaration(Variable),
    /// Starts with `export ` but has no `=`
    Malformed,
    Opaque,
}

/// Classify one raw line.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if !trimmed.starts_with(EXPORT_PREFIX) {
        return LineKind::Opaque;
    }
    match EXPORT_DECL_RE.captures(trimmed) {
        Some(caps) => LineKind::Declaration(Variable::new(
            caps["key"].trim(),
            caps["value"].trim(),
        )),
        None => LineKind::Malformed,
    }
}

/// Converts profile text to variables and back
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationCodec {
    policy: MalformedPolicy,
}

impl DeclarationCodec {
    pub fn new(policy: MalformedPolicy) -> Self {
        Self { policy }
    }

    /// Parse profile text into declarations, opaque lines and warnings.
    ///
    /// Declarations come out in file order. Repeated keys are all kept;
    /// deduplication only happens when a variable is added.
    pub fn parse(&self, content: &str) -> ParseResult {
        let lines = split_lines(content);
        let mut result = ParseResult::new();

        for (idx, line) in lines.iter().enumerate() {
            let line_number = idx + 1;
            match classify_line(line) {
                LineKind::Declaration(var) => {
                    tracing::trace!(line = line_number, key = %var.key, "Parsed declaration");
                    result.add_variable(var);
                }
                LineKind::Malformed => {
                    let message = match self.policy {
                        MalformedPolicy::Drop => {
                            "export without '=' is ignored and will be removed on save"
                        }
                        MalformedPolicy::Preserve => "export without '=' is kept as plain text",
                    };
                    tracing::warn!(line = line_number, raw = %line.trim(), "{}", message);
                    result.add_warning(ParseWarning::new(line_number, message, *line));
                    if self.policy == MalformedPolicy::Preserve {
                        result.add_opaque(*line);
                    }
                }
                LineKind::Opaque => result.add_opaque(*line),
            }
        }

        tracing::debug!(
            lines = lines.len(),
            variables = result.variables.len(),
            opaque = result.opaque_lines.len(),
            "Parsed profile content"
        );
        result
    }

    /// Lines of `content` that survive a rewrite, borrowed in file order
    pub fn opaque_lines<'a>(&self, content: &'a str) -> Vec<&'a str> {
        split_lines(content)
            .into_iter()
            .filter(|line| match classify_line(line) {
                LineKind::Declaration(_) => false,
                LineKind::Malformed => self.policy == MalformedPolicy::Preserve,
                LineKind::Opaque => true,
            })
            .collect()
    }

    /// Replace every declaration in `content` with `variables`.
    pub fn rewrite(&self, content: &str, variables: &[Variable]) -> String {
        serialize(&self.opaque_lines(content), variables)
    }
}

/// Parse declarations with the default policy
pub fn parse(content: &str) -> Vec<Variable> {
    DeclarationCodec::default().parse(content).variables
}

/// Opaque lines followed by one `export KEY=VALUE` per variable, joined with `\n`.
///
/// Keys and values are written unescaped, matching how they were read.
pub fn serialize<S: AsRef<str>>(opaque_lines: &[S], variables: &[Variable]) -> String {
    opaque_lines
        .iter()
        .map(|line| line.as_ref().to_string())
        .chain(variables.iter().map(Variable::to_declaration))
        .collect::<Vec<_>>()
        .join("\n")
}
