//! Exported variable data structures

use serde::{Deserialize, Serialize};

/// A single `export KEY=VALUE` declaration
///
/// # Field Semantics
/// - `key`: Text before the first `=`, trimmed. Not validated against shell identifier rules.
/// - `value`: Everything after the first `=`, trimmed. Stored verbatim, so it may contain
///   further `=`, spaces or quotes. Nothing is escaped on write.
///
/// The serde shape (`{"key": ..., "value": ...}`) is part of the interchange document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Render as a declaration line: `export KEY=VALUE`
    pub fn to_declaration(&self) -> String {
        format!("export {}={}", self.key, self.value)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Parse result containing variables, preserved lines and warnings
#[derive(Debug, Default)]
pub struct ParseResult {
    pub variables: Vec<Variable>,
    /// Lines kept verbatim on rewrite, in file order
    pub opaque_lines: Vec<String>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn add_opaque(&mut self, line: impl Into<String>) {
        self.opaque_lines.push(line.into());
    }

    pub fn add_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }
}

/// Warning generated during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub line_number: usize,
    pub message: String,
    pub raw_line: String,
}

impl ParseWarning {
    pub fn new(
        line_number: usize,
        message: impl Into<String>,
        raw_line: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            message: message.into(),
            raw_line: raw_line.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_is_unescaped() {
        let var = Variable::new("GREETING", "hello world=1 \"quoted\"");
        assert_eq!(
            var.to_declaration(),
            "export GREETING=hello world=1 \"quoted\""
        );
    }

    #[test]
    fn test_empty_value_declaration() {
        assert_eq!(Variable::new("EMPTY", "").to_declaration(), "export EMPTY=");
    }

    #[test]
    fn test_variable_display() {
        assert_eq!(format!("{}", Variable::new("EDITOR", "nvim")), "EDITOR=nvim");
    }
}
