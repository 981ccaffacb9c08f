//! Freshness-aware output writing.
//!
//! Pages are re-rendered on every build, but files whose bytes did not change
//! are left untouched so their mtime stays stable for deploy tools and CDNs.

use std::fs;
use std::io;
use std::path::Path;

use crate::debug;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Hash an in-memory buffer.
    pub fn of(bytes: &[u8]) -> Self {
        Self(*blake3::hash(bytes).as_bytes())
    }

    /// Hash an existing file, `None` if it cannot be read.
    pub fn of_file(path: &Path) -> Option<Self> {
        fs::read(path).ok().map(|bytes| Self::of(&bytes))
    }

    /// Convert to hex string (for debugging/display).
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 16 hex chars are plenty for log lines
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Outcome of [`write_if_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
}

/// Write `content` to `path` unless the file already holds identical bytes.
///
/// Parent directories are created as needed.
pub fn write_if_changed(path: &Path, content: &[u8]) -> io::Result<WriteStatus> {
    let hash = ContentHash::of(content);
    if ContentHash::of_file(path) == Some(hash) {
        debug!("write"; "{} unchanged ({hash})", path.display());
        return Ok(WriteStatus::Unchanged);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    debug!("write"; "{} written ({hash})", path.display());
    Ok(WriteStatus::Written)
}
