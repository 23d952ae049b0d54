//! Path and file utilities

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{Result, ShenvError};

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Resolve the home directory: explicit value, then `HOME`, then the platform query.
///
/// A leading `~` in the explicit value is expanded.
pub fn resolve_home(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return expand_tilde(&path.to_string_lossy());
    }
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("~"))
}

/// Check if a file exists and is a regular file
pub fn check_file_readable(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(ShenvError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Read file content with proper error handling
pub fn read_file(path: &Path) -> Result<String> {
    check_file_readable(path)?;
    std::fs::read_to_string(path).map_err(|source| ShenvError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `content` atomically.
///
/// The content goes to a temp file in the same directory which is then renamed
/// over the target, so an interrupted write never leaves a truncated file.
/// Permissions of an existing target are carried over. A symlinked target is
/// resolved first so the link stays in place and the file it points to is
/// replaced.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let fail = |source: std::io::Error| ShenvError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let resolved = std::fs::canonicalize(path).ok();
    let path = resolved.as_deref().unwrap_or(path);

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(fail)?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(fail)?;
    temp_file.write_all(content.as_bytes()).map_err(fail)?;
    temp_file.flush().map_err(fail)?;

    if let Ok(metadata) = std::fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(fail)?;
    }

    temp_file.persist(path).map_err(|e| fail(e.error))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "File replaced atomically");
    Ok(())
}

/// Create an empty file at `path` unless something already exists there
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
        .or_else(|e| {
            // Lost a race with another creator; the file is there either way.
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                Ok(())
            } else {
                Err(ShenvError::WriteFailure {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        })?;
    tracing::debug!(path = %path.display(), "Created empty profile");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/.bashrc");
        assert!(!path.to_string_lossy().starts_with('~'));
        assert_eq!(expand_tilde("/etc/profile"), PathBuf::from("/etc/profile"));
    }

    #[test]
    fn test_resolve_home_prefers_explicit() {
        let home = resolve_home(Some(Path::new("/srv/home")));
        assert_eq!(home, PathBuf::from("/srv/home"));
    }

    #[test]
    fn test_resolve_home_expands_tilde() {
        let home = resolve_home(Some(Path::new("~/sandbox")));
        assert!(!home.to_string_lossy().starts_with('~'));
        assert!(home.ends_with("sandbox"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_file(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ShenvError::FileNotFound(_)));
    }

    #[test]
    fn test_read_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        let err = read_file(dir.path()).unwrap_err();
        assert!(matches!(err, ShenvError::FileNotFound(_)));
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(".zshrc");
        std::fs::write(&file, "old").unwrap();

        write_atomic(&file, "new content").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new content");
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file = dir.path().join(".bashrc");
        std::fs::write(&file, "x").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&file, "y").unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_follows_symlink() {
        let dir = tempdir().unwrap();
        let dotfiles = dir.path().join("dotfiles");
        std::fs::create_dir(&dotfiles).unwrap();
        let target = dotfiles.join("zshrc");
        std::fs::write(&target, "export OLD=1\n").unwrap();
        let link = dir.path().join(".zshrc");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        write_atomic(&link, "export NEW=2").unwrap();

        let link_meta = std::fs::symlink_metadata(&link).unwrap();
        assert!(link_meta.file_type().is_symlink());
        assert_eq!(std::fs::read_link(&link).unwrap(), target);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "export NEW=2");
        assert_eq!(std::fs::read_dir(&dotfiles).unwrap().count(), 1);
    }

    #[test]
    fn test_ensure_file_creates_once() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(".profile");

        ensure_file(&file).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "");

        std::fs::write(&file, "keep").unwrap();
        ensure_file(&file).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "keep");
    }
}
