use anyhow::{Context as AnyhowContext, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub(crate) const CONFIG_FILE_NAME: &str = "tailor.toml";

/// Scan configuration, loaded from `tailor.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct TailorConfig {
    /// Directories to scan, workspace-relative; empty means everything
    pub search_paths: Vec<String>,

    /// Relative paths already claimed by existing declarations
    pub owned: Vec<String>,
}

impl TailorConfig {
    /// Load configuration.
    ///
    /// An explicitly given file must exist; otherwise `<root>/tailor.toml`
    /// is used when present, and defaults apply when it is not.
    pub(crate) fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}
