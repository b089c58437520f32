// src/watch/path_utils.rs

//! Path helpers shared by the loop and the fs-event waker.

use std::path::{Path, PathBuf};

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// - First we try a direct `strip_prefix(root)`.
/// - If that fails (e.g. due to symlinks or different absolute prefixes),
///   we canonicalize both paths and try again.
///
/// Returns `None` if the path cannot be related to `root`.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(normalize(&rel.to_string_lossy()));
    }

    // macOS reports /private/var/... for /var/..., among others.
    if let (Ok(root_canon), Ok(path_canon)) = (root.canonicalize(), path.canonicalize()) {
        if let Ok(rel) = path_canon.strip_prefix(&root_canon) {
            return Some(normalize(&rel.to_string_lossy()));
        }
    }

    None
}

/// Normalize a declared graph path for comparisons: forward slashes, no
/// leading `./`.
pub fn normalize(path: &str) -> String {
    let s = path.replace('\\', "/");
    let mut rest = s.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}

/// Location on disk of a declared path. Absolute paths are kept as they are.
pub fn resolve_against(root: &Path, declared: &str) -> PathBuf {
    let p = Path::new(declared);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
