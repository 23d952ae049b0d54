//! Shell profile snapshots

use std::path::{Path, PathBuf};

use super::Variable;

/// Conventional profile filenames, in discovery precedence
pub const DEFAULT_CANDIDATES: [&str; 3] = [".zshrc", ".bash_profile", ".bashrc"];

/// A shell startup file as read from disk at discovery time.
///
/// A `Profile` is a snapshot: `variables` is always the parse of `content`,
/// and both are stale as soon as the file is written. Edits produce a new
/// list of profiles rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Base name of the file, e.g. `.zshrc`
    pub name: String,
    pub path: PathBuf,
    pub variables: Vec<Variable>,
    /// Raw text read from `path`
    pub content: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        variables: Vec<Variable>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            variables,
            content: content.into(),
        }
    }

    /// A profile at `home/name` with no known content yet.
    ///
    /// Write never trusts cached content, so this is enough to target a file
    /// that discovery did not report (the import flow).
    pub fn at(home: &Path, name: &str) -> Self {
        Self::new(name, profile_path(home, name), Vec::new(), String::new())
    }

    /// Look up a variable by key (first occurrence)
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.key == key)
    }
}

/// Join a home directory and a profile filename
pub fn profile_path(home: &Path, name: &str) -> PathBuf {
    home.join(name)
}

/// Find a profile by name in a discovery result
pub fn find_profile<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.name == name)
}
