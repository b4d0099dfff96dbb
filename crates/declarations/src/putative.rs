use crate::decl_type::DeclarationType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Group file paths by their containing directory.
///
/// The directory key is the path with its final segment removed; files at
/// the scan root land under the empty string. Every basename appears under
/// exactly one key, so joining `dir/basename` back together reproduces the
/// input set exactly.
pub fn group_by_dir(
    paths: impl IntoIterator<Item = String>,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for path in paths {
        let (dir, base) = match path.rfind('/') {
            Some(idx) => (path[..idx].to_string(), path[idx + 1..].to_string()),
            None => (String::new(), path),
        };
        grouped.entry(dir).or_default().insert(base);
    }
    grouped
}

/// A proposed, not-yet-committed build-unit declaration inferred from
/// unclaimed source files.
///
/// Consumed downstream for interactive confirmation or automatic insertion
/// into the declaration graph; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutativeDeclaration {
    /// Declaration type to instantiate
    #[serde(rename = "type")]
    pub decl_type: DeclarationType,

    /// Containing directory, workspace-relative ("" for the build root)
    pub path: String,

    /// Explicit name, or `None` to take the directory default
    pub name: Option<String>,

    /// Sorted basenames of the unowned files that triggered the proposal
    pub triggers: Vec<String>,
}

impl PutativeDeclaration {
    pub fn new(
        decl_type: DeclarationType,
        path: impl Into<String>,
        name: Option<String>,
        triggers: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut triggers: Vec<String> = triggers.into_iter().collect();
        triggers.sort();
        triggers.dedup();
        Self {
            decl_type,
            path: path.into(),
            name,
            triggers,
        }
    }

    /// The name the declaration takes if none was given: the directory
    /// basename, or the type alias for declarations at the build root.
    ///
    /// Collision with an existing same-named declaration is the caller's
    /// concern; this only defines the deterministic default.
    pub fn default_name(&self) -> &str {
        if let Some(name) = &self.name {
            return name;
        }
        match self.path.rsplit('/').next() {
            Some("") | None => self.decl_type.alias(),
            Some(base) => base,
        }
    }

    /// Reconstruct the full paths of the triggering files
    pub fn trigger_paths(&self) -> impl Iterator<Item = String> + '_ {
        self.triggers.iter().map(move |base| {
            if self.path.is_empty() {
                base.clone()
            } else {
                format!("{}/{}", self.path, base)
            }
        })
    }
}

/// The full set of proposals produced by one scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutativeDeclarations(pub Vec<PutativeDeclaration>);

impl PutativeDeclarations {
    pub fn new(declarations: Vec<PutativeDeclaration>) -> Self {
        Self(declarations)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PutativeDeclaration> {
        self.0.iter()
    }

    pub fn extend(&mut self, other: PutativeDeclarations) {
        self.0.extend(other.0);
    }
}

impl IntoIterator for PutativeDeclarations {
    type Item = PutativeDeclaration;
    type IntoIter = std::vec::IntoIter<PutativeDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<PutativeDeclaration> for PutativeDeclarations {
    fn from_iter<I: IntoIterator<Item = PutativeDeclaration>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_by_parent_directory() {
        let grouped = group_by_dir(
            ["a/Foo.kt", "a/Bar.kt", "b/Baz.kt", "Top.kt"]
                .into_iter()
                .map(String::from),
        );

        assert_eq!(grouped.len(), 3);
        assert_eq!(
            grouped[""],
            BTreeSet::from(["Top.kt".to_string()])
        );
        assert_eq!(
            grouped["a"],
            BTreeSet::from(["Bar.kt".to_string(), "Foo.kt".to_string()])
        );
        assert_eq!(grouped["b"], BTreeSet::from(["Baz.kt".to_string()]));
    }

    #[test]
    fn grouping_reconstructs_original_paths() {
        let original: BTreeSet<String> = ["x/y/A.java", "x/B.java", "C.java"]
            .into_iter()
            .map(String::from)
            .collect();

        let mut rebuilt = BTreeSet::new();
        for (dir, bases) in group_by_dir(original.clone()) {
            for base in bases {
                if dir.is_empty() {
                    rebuilt.insert(base);
                } else {
                    rebuilt.insert(format!("{dir}/{base}"));
                }
            }
        }
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn triggers_are_sorted_and_deduped() {
        let decl = PutativeDeclaration::new(
            DeclarationType::KotlinSources,
            "a",
            None,
            ["Foo.kt", "Bar.kt", "Foo.kt"].into_iter().map(String::from),
        );
        assert_eq!(decl.triggers, vec!["Bar.kt", "Foo.kt"]);
    }

    #[test]
    fn default_name_comes_from_directory() {
        let decl = PutativeDeclaration::new(
            DeclarationType::JavaSources,
            "src/jvm/util",
            None,
            ["A.java".to_string()],
        );
        assert_eq!(decl.default_name(), "util");
    }

    #[test]
    fn default_name_at_build_root_is_type_alias() {
        let decl = PutativeDeclaration::new(
            DeclarationType::KotlinSources,
            "",
            None,
            ["Main.kt".to_string()],
        );
        assert_eq!(decl.default_name(), "kotlin_sources");
    }

    #[test]
    fn explicit_name_wins_over_default() {
        let decl = PutativeDeclaration::new(
            DeclarationType::JunitTests,
            "src/test",
            Some("tests".to_string()),
            ["FooTest.java".to_string()],
        );
        assert_eq!(decl.default_name(), "tests");
    }

    #[test]
    fn trigger_paths_rejoin_directory_and_basenames() {
        let decl = PutativeDeclaration::new(
            DeclarationType::KotlinSources,
            "a",
            None,
            ["Foo.kt".to_string(), "Bar.kt".to_string()],
        );
        let paths: Vec<String> = decl.trigger_paths().collect();
        assert_eq!(paths, vec!["a/Bar.kt", "a/Foo.kt"]);
    }
}
