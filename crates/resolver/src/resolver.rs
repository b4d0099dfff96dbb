use crate::error::{ResolveError, Result};
use crate::scope::PathGlobs;
use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Resolve a glob query into the concrete set of matching file paths.
///
/// This is the scanner's sole effectful boundary; everything behind it is
/// pure set and mapping work. Implementations return workspace-relative
/// paths with forward slashes.
#[async_trait]
pub trait PathResolver: Send + Sync {
    async fn resolve(&self, globs: &PathGlobs) -> Result<BTreeSet<String>>;
}

/// Filesystem-backed resolver: a gitignore-aware walk filtered through a
/// compiled glob set.
pub struct FsPathResolver {
    root: PathBuf,
    include_hidden: bool,
}

impl FsPathResolver {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            include_hidden: false,
        }
    }

    /// Also match files under hidden directories (off by default)
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.include_hidden = yes;
        self
    }

    fn compile(globs: &PathGlobs) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in globs.includes() {
            let glob = Glob::new(pattern).map_err(|source| ResolveError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|source| ResolveError::InvalidPattern {
                pattern: globs.includes().join(", "),
                source,
            })
    }

    fn walk(root: &Path, matcher: &GlobSet, include_hidden: bool) -> BTreeSet<String> {
        let mut matches = BTreeSet::new();

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(!include_hidden)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            // Honor .gitignore files even when the tree is not a git repo
            .require_git(false);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let Ok(relative) = entry.path().strip_prefix(root) else {
                        continue;
                    };
                    let rel_path = relative.to_string_lossy().replace('\\', "/");
                    if matcher.is_match(&rel_path) {
                        matches.insert(rel_path);
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        matches
    }
}

#[async_trait]
impl PathResolver for FsPathResolver {
    async fn resolve(&self, globs: &PathGlobs) -> Result<BTreeSet<String>> {
        if !self.root.is_dir() {
            return Err(ResolveError::InvalidRoot(format!(
                "not a directory: {}",
                self.root.display()
            )));
        }

        let matcher = Self::compile(globs)?;
        let root = self.root.clone();
        let include_hidden = self.include_hidden;

        // The walk is synchronous; keep it off the async runtime.
        let matches =
            tokio::task::spawn_blocking(move || Self::walk(&root, &matcher, include_hidden))
                .await?;

        log::debug!(
            "Resolved {} path(s) for {:?}",
            matches.len(),
            globs.includes()
        );
        Ok(matches)
    }
}
