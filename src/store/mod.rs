//! Profile Store
//!
//! Discovers profile files under a home directory, reads them through the
//! [`DeclarationCodec`] and writes variable sets back atomically.
//!
//! The store holds no profile state of its own. [`ProfileStore::discover`]
//! builds a fresh list from disk on every call, and [`ProfileStore::write`]
//! re-reads the target before rewriting it.

use std::path::{Component, Path, PathBuf};

use crate::codec::{DeclarationCodec, MalformedPolicy};
use crate::error::{Result, ShenvError};
use crate::model::{find_profile, profile_path, Config, Profile, Variable, DEFAULT_CANDIDATES};
use crate::utils::path::{ensure_file, read_file, write_atomic};

/// Short profile names accepted in import documents, and the files they mean
const PROFILE_NAME_MAPPING: [(&str, &str); 4] = [
    ("zshrc", ".zshrc"),
    ("bash_profile", ".bash_profile"),
    ("bashrc", ".bashrc"),
    ("profile", ".profile"),
];

/// Map a short profile name to its filename; unknown names are already filenames
pub fn profile_filename(name: &str) -> &str {
    PROFILE_NAME_MAPPING
        .iter()
        .find(|(short, _)| *short == name)
        .map(|(_, file)| *file)
        .unwrap_or(name)
}

/// Reject names that could resolve outside the home directory.
///
/// Only plain relative components are allowed: no root, no prefix, no `.`
/// and no `..`.
pub fn check_profile_filename(name: &str) -> Result<&str> {
    let path = Path::new(name);
    let plain = !name.is_empty() && path.components().all(|c| matches!(c, Component::Normal(_)));
    if plain {
        Ok(name)
    } else {
        Err(ShenvError::InvalidProfileName(name.to_string()))
    }
}

/// Discover profiles under `home` with the default codec
pub fn discover<S: AsRef<str>>(home: &Path, candidates: &[S]) -> Vec<Profile> {
    let candidates = candidates.iter().map(|c| c.as_ref().to_string()).collect();
    ProfileStore::new(home, candidates).discover()
}

/// Reads and writes shell profiles under one home directory
#[derive(Debug, Clone)]
pub struct ProfileStore {
    home: PathBuf,
    candidates: Vec<String>,
    codec: DeclarationCodec,
}

impl ProfileStore {
    pub fn new(home: impl Into<PathBuf>, candidates: Vec<String>) -> Self {
        Self {
            home: home.into(),
            candidates,
            codec: DeclarationCodec::default(),
        }
    }

    /// Store over the conventional `.zshrc`, `.bash_profile`, `.bashrc`
    pub fn with_default_candidates(home: impl Into<PathBuf>) -> Self {
        Self::new(
            home,
            DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn from_config(home: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(home, config.profiles.candidates.clone())
            .with_policy(MalformedPolicy::from(config.parse))
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.codec = DeclarationCodec::new(policy);
        self
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn codec(&self) -> &DeclarationCodec {
        &self.codec
    }

    /// Path of a profile filename under this store's home
    pub fn path_for(&self, name: &str) -> PathBuf {
        profile_path(&self.home, name)
    }

    /// Scan candidates in order and parse every existing, readable file.
    ///
    /// Missing candidates are skipped. Unreadable ones are skipped too, with
    /// a warning in the log; they never fail the scan.
    pub fn discover(&self) -> Vec<Profile> {
        let profiles: Vec<Profile> = self
            .candidates
            .iter()
            .filter_map(|name| self.load(name))
            .collect();

        tracing::debug!(
            home = %self.home.display(),
            found = profiles.len(),
            candidates = self.candidates.len(),
            "Discovered profiles"
        );
        profiles
    }

    /// Read a single profile by filename, `None` if absent or unreadable
    fn load(&self, name: &str) -> Option<Profile> {
        let path = self.path_for(name);
        if !path.is_file() {
            return None;
        }
        match read_file(&path) {
            Ok(content) => {
                let variables = self.codec.parse(&content).variables;
                Some(Profile::new(name, path, variables, content))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable profile");
                None
            }
        }
    }

    /// Find a discovered profile by filename (`.zshrc`) or short name (`zshrc`)
    pub fn find(&self, name: &str) -> Result<Profile> {
        let profiles = self.discover();
        find_profile(&profiles, name)
            .or_else(|| find_profile(&profiles, profile_filename(name)))
            .cloned()
            .ok_or_else(|| ShenvError::ProfileNotFound(name.to_string()))
    }

    /// Replace the export declarations of `profile`'s file with `variables`.
    ///
    /// The file is re-read first; cached `profile.content` is ignored. Opaque
    /// lines keep their order and the new declarations follow them.
    pub fn write(&self, profile: &Profile, variables: &[Variable]) -> Result<()> {
        let current = read_file(&profile.path)?;
        let new_content = self.codec.rewrite(&current, variables);
        write_atomic(&profile.path, &new_content)?;

        tracing::debug!(
            profile = %profile.name,
            path = %profile.path.display(),
            variables = variables.len(),
            "Wrote profile"
        );
        Ok(())
    }

    /// Create an empty file at `path` if there is none
    pub fn ensure_exists(&self, path: &Path) -> Result<()> {
        ensure_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_profile_filename_mapping() {
        assert_eq!(profile_filename("zshrc"), ".zshrc");
        assert_eq!(profile_filename("bash_profile"), ".bash_profile");
        assert_eq!(profile_filename("bashrc"), ".bashrc");
        assert_eq!(profile_filename("profile"), ".profile");
        assert_eq!(profile_filename(".zshrc"), ".zshrc");
        assert_eq!(profile_filename("my_env.sh"), "my_env.sh");
    }

    #[test]
    fn test_check_profile_filename() {
        assert_eq!(check_profile_filename(".zshrc").unwrap(), ".zshrc");
        assert_eq!(check_profile_filename("env/work.sh").unwrap(), "env/work.sh");
        for bad in ["", "/etc/profile", "../.zshrc", "env/../../x", "./.zshrc"] {
            assert!(
                matches!(
                    check_profile_filename(bad),
                    Err(ShenvError::InvalidProfileName(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_discover_in_candidate_order() {
        let home = tempdir().unwrap();
        fs::write(home.path().join(".bashrc"), "export B=2\n").unwrap();
        fs::write(home.path().join(".zshrc"), "export Z=1\n").unwrap();

        let profiles = discover(home.path(), &DEFAULT_CANDIDATES);

        let names: Vec<_> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![".zshrc", ".bashrc"]);
        assert_eq!(profiles[0].path, home.path().join(".zshrc"));
        assert_eq!(profiles[0].variables, vec![Variable::new("Z", "1")]);
        assert_eq!(profiles[1].content, "export B=2\n");
    }

    #[test]
    fn test_discover_skips_directories_and_missing() {
        let home = tempdir().unwrap();
        fs::create_dir(home.path().join(".zshrc")).unwrap();

        let profiles = discover(home.path(), &DEFAULT_CANDIDATES);
        assert!(profiles.is_empty());
    }

    #[test]
    fn test_discover_skips_non_utf8() {
        let home = tempdir().unwrap();
        fs::write(home.path().join(".zshrc"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(home.path().join(".bashrc"), "export OK=1").unwrap();

        let profiles = discover(home.path(), &DEFAULT_CANDIDATES);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, ".bashrc");
    }

    #[test]
    fn test_extended_candidates() {
        let home = tempdir().unwrap();
        fs::write(home.path().join(".profile"), "export P=1").unwrap();

        let store = ProfileStore::new(home.path(), vec![".zshrc".into(), ".profile".into()]);
        let profiles = store.discover();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, ".profile");
    }

    #[test]
    fn test_find_by_short_name() {
        let home = tempdir().unwrap();
        fs::write(home.path().join(".zshrc"), "").unwrap();
        let store = ProfileStore::with_default_candidates(home.path());

        assert_eq!(store.find("zshrc").unwrap().name, ".zshrc");
        assert_eq!(store.find(".zshrc").unwrap().name, ".zshrc");
        assert!(matches!(
            store.find(".bashrc"),
            Err(ShenvError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_write_rereads_file() {
        let home = tempdir().unwrap();
        let path = home.path().join(".zshrc");
        fs::write(&path, "export OLD=1\n").unwrap();
        let store = ProfileStore::with_default_candidates(home.path());
        let profile = store.find(".zshrc").unwrap();

        // Changed behind the snapshot's back
        fs::write(&path, "alias g=git\nexport OLD=1\n").unwrap();
        store
            .write(&profile, &[Variable::new("NEW", "2")])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "alias g=git\nexport NEW=2");
    }

    #[test]
    fn test_write_missing_file_fails() {
        let home = tempdir().unwrap();
        let store = ProfileStore::with_default_candidates(home.path());
        let profile = Profile::at(home.path(), ".zshrc");

        let err = store.write(&profile, &[]).unwrap_err();
        assert!(matches!(err, ShenvError::FileNotFound(_)));
        assert!(!home.path().join(".zshrc").exists());
    }

    #[test]
    fn test_write_respects_preserve_policy() {
        let home = tempdir().unwrap();
        let path = home.path().join(".bashrc");
        fs::write(&path, "export BROKEN\nexport A=1\n").unwrap();
        let store = ProfileStore::with_default_candidates(home.path())
            .with_policy(MalformedPolicy::Preserve);
        let profile = store.find(".bashrc").unwrap();

        store.write(&profile, &profile.variables).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "export BROKEN\nexport A=1");
    }

    #[test]
    fn test_ensure_exists() {
        let home = tempdir().unwrap();
        let store = ProfileStore::with_default_candidates(home.path());
        let path = store.path_for(".profile");

        store.ensure_exists(&path).unwrap();
        assert!(path.is_file());
    }
}
