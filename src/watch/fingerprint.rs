// src/watch/fingerprint.rs

use std::fmt;
use std::io::{self, Read};
use std::path::Path;

use blake3::Hasher;
use tracing::{debug, warn};

use crate::fs::FileSystem;

/// Content fingerprint of a single file.
///
/// `Absent` stands for "could not be read" (missing, permission denied, read
/// error). It never equals a digest, so a deletion or a file appearing is
/// detected like any other content change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    Absent,
    /// Lowercase hex BLAKE3 digest of the full file content.
    Digest(String),
}

impl Fingerprint {
    /// Fingerprint an in-memory byte slice.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Fingerprint::Digest(blake3::hash(bytes).to_hex().to_string())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Fingerprint::Absent)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fingerprint::Absent => f.write_str("<absent>"),
            Fingerprint::Digest(hex) => f.write_str(hex),
        }
    }
}

/// Compute the fingerprint of the file at `path`.
///
/// Never fails: any open or read error yields [`Fingerprint::Absent`] so one
/// bad file cannot abort a polling cycle.
pub fn fingerprint(fs: &dyn FileSystem, path: &Path) -> Fingerprint {
    let mut reader = match fs.open_read(path) {
        Ok(reader) => reader,
        Err(err) => {
            let not_found = err
                .chain()
                .find_map(|e| e.downcast_ref::<io::Error>())
                .is_some_and(|e| e.kind() == io::ErrorKind::NotFound);
            if not_found {
                debug!(path = ?path, "file not found, treating as absent");
            } else {
                warn!(path = ?path, error = %err, "cannot open file, treating as absent");
            }
            return Fingerprint::Absent;
        }
    };

    let mut hasher = Hasher::new();
    let mut buf = [0u8; 8192];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buf[..n]);
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!(path = ?path, error = %err, "read failed mid-file, treating as absent");
                return Fingerprint::Absent;
            }
        }
    }

    Fingerprint::Digest(hasher.finalize().to_hex().to_string())
}
