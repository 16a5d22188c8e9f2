//! Per-integration storage key
//!
//! The key is `wrm_` followed by the first 20 hex digits of the md5 of the
//! integration's path relative to the host's integrations root. The same
//! integration always lands on the same option row; distinct paths get
//! distinct rows.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

pub const KEY_PREFIX: &str = "wrm_";
const DIGEST_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierKey(String);

impl IdentifierKey {
    /// Derive the key for the integration at `path`
    ///
    /// When `root` is given and `path` lives under it, only the relative part
    /// is hashed, so moving the host's install directory keeps the key.
    pub fn from_path(path: &Path, root: Option<&Path>) -> Self {
        let basename = basename(path, root);
        let digest = format!("{:x}", md5::compute(basename.as_bytes()));
        IdentifierKey(format!("{}{}", KEY_PREFIX, &digest[..DIGEST_CHARS]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentifierKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Path relative to `root` with `/` separators and no leading slash
fn basename(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .filter(|c| c != "/" && c != "\\")
        .collect::<Vec<_>>()
        .join("/");

    joined.trim_start_matches('/').to_string()
}
