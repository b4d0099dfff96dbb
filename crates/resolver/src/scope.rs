/// The directories eligible for scanning in one invocation.
///
/// Immutable once constructed; `path_globs` is the only way to turn a
/// scope into a concrete query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchScope {
    dirs: Vec<String>,
}

impl SearchScope {
    /// Scope covering the whole workspace root
    pub fn workspace() -> Self {
        Self { dirs: Vec::new() }
    }

    /// Scope restricted to the given workspace-relative directories.
    ///
    /// An empty list, `"."`, or `""` all mean the workspace root.
    pub fn new(dirs: impl IntoIterator<Item = String>) -> Self {
        let dirs: Vec<String> = dirs
            .into_iter()
            .map(|d| normalize_dir(&d))
            .filter(|d| !d.is_empty())
            .collect();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// Glob query matching `extension` (e.g. `*.kt`) under this scope,
    /// one recursive pattern per search directory.
    pub fn path_globs(&self, extension: &str) -> PathGlobs {
        if self.dirs.is_empty() {
            return PathGlobs::new(vec![format!("**/{extension}")]);
        }
        PathGlobs::new(
            self.dirs
                .iter()
                .map(|dir| format!("{dir}/**/{extension}"))
                .collect(),
        )
    }
}

fn normalize_dir(raw: &str) -> String {
    let mut value = raw.trim().replace('\\', "/");
    while value.starts_with("./") {
        value = value[2..].to_string();
    }
    let value = value.trim_matches('/');
    if value == "." {
        return String::new();
    }
    value.to_string()
}

/// A concrete glob query handed to a [`PathResolver`](crate::PathResolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGlobs {
    includes: Vec<String>,
}

impl PathGlobs {
    pub fn new(includes: Vec<String>) -> Self {
        Self { includes }
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }
}
