use crate::backends::{JavaClassifier, KotlinClassifier};
use crate::classify::Classifier;
use crate::error::Result;
use crate::synth::synthesize;
use tailor_declarations::{OwnedPathSet, PutativeDeclarations};
use tailor_resolver::{PathResolver, SearchScope};

/// One registered backend: the extension glob it owns and the classifier
/// that partitions its unowned candidates.
pub struct BackendEntry {
    extension: String,
    classifier: Box<dyn Classifier>,
}

impl BackendEntry {
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Registry of `(extension, classifier)` backends, resolved once at
/// startup.
///
/// Each entry drives an independent synthesize pass; the registry runs
/// them one at a time and concatenates the proposals in registration
/// order. Callers that want fan-out can run entries concurrently
/// themselves, since every scan is independent.
#[derive(Default)]
pub struct BackendRegistry {
    entries: Vec<BackendEntry>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in Kotlin and Java backends
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("*.kt", Box::new(KotlinClassifier));
        registry.register("*.java", Box::new(JavaClassifier));
        registry
    }

    pub fn register(&mut self, extension: impl Into<String>, classifier: Box<dyn Classifier>) {
        self.entries.push(BackendEntry {
            extension: extension.into(),
            classifier,
        });
    }

    pub fn entries(&self) -> &[BackendEntry] {
        &self.entries
    }

    /// Run every backend's scan over the same scope and ownership
    /// snapshot, concatenating proposals in registration order.
    pub async fn scan_all(
        &self,
        resolver: &dyn PathResolver,
        scope: &SearchScope,
        owned: &OwnedPathSet,
    ) -> Result<PutativeDeclarations> {
        let mut all = PutativeDeclarations::default();
        for entry in &self.entries {
            let proposals =
                synthesize(resolver, scope, owned, &entry.extension, &*entry.classifier).await?;
            log::info!(
                "Backend `{}` proposed {} declaration(s)",
                entry.extension,
                proposals.len()
            );
            all.extend(proposals);
        }
        Ok(all)
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| &e.extension))
            .finish()
    }
}
