use serde::{Deserialize, Serialize};

/// Build-unit declaration type a source file can be claimed by.
///
/// A closed enum rather than an open plugin surface: every backend that
/// proposes declarations names one of these variants, and exhaustive
/// matches keep display and serialization in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationType {
    KotlinSources,
    JavaSources,
    JunitTests,
}

impl DeclarationType {
    /// The alias used in BUILD stanzas and reports
    pub fn alias(self) -> &'static str {
        match self {
            DeclarationType::KotlinSources => "kotlin_sources",
            DeclarationType::JavaSources => "java_sources",
            DeclarationType::JunitTests => "junit_tests",
        }
    }

    /// Parse an alias back into a declaration type
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "kotlin_sources" => Some(DeclarationType::KotlinSources),
            "java_sources" => Some(DeclarationType::JavaSources),
            "junit_tests" => Some(DeclarationType::JunitTests),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeclarationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alias())
    }
}
