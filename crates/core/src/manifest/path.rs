//! Lexical path normalization for manifest keys and values.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path without touching the file system.
///
/// Drops `.` segments, folds `name/..` pairs and keeps leading `..` of
/// relative paths. An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> String {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return ".".to_string();
    }
    normalized.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize_path(Path::new("./src/app.js")), "src/app.js");
        assert_eq!(normalize_path(Path::new("src//js/../app.js")), "src/app.js");
        assert_eq!(normalize_path(Path::new("../shared/a.css")), "../shared/a.css");
        assert_eq!(normalize_path(Path::new("a/../../b")), "../b");
    }

    #[test]
    fn test_normalize_absolute() {
        assert_eq!(normalize_path(Path::new("/var/www/./app.js")), "/var/www/app.js");
        assert_eq!(normalize_path(Path::new("/../app.js")), "/app.js");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_path(Path::new("")), ".");
        assert_eq!(normalize_path(Path::new("a/..")), ".");
    }
}
