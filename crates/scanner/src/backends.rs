use crate::classify::{Classification, Classifier};
use std::collections::BTreeSet;
use tailor_declarations::DeclarationType;

/// Kotlin backend: every unowned `.kt` file belongs in a
/// `kotlin_sources` declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinClassifier;

impl Classifier for KotlinClassifier {
    fn classify(&self, paths: BTreeSet<String>) -> Classification {
        let mut classification = Classification::new();
        classification.push(DeclarationType::KotlinSources, paths);
        classification
    }
}

/// Java backend: basenames ending in `Test.java` are JUnit tests, the
/// rest are plain sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaClassifier;

impl JavaClassifier {
    fn is_test_file(path: &str) -> bool {
        path.rsplit('/')
            .next()
            .is_some_and(|base| base.ends_with("Test.java"))
    }
}

impl Classifier for JavaClassifier {
    fn classify(&self, paths: BTreeSet<String>) -> Classification {
        let (tests, sources): (BTreeSet<String>, BTreeSet<String>) =
            paths.into_iter().partition(|p| Self::is_test_file(p));

        let mut classification = Classification::new();
        classification.push(DeclarationType::JavaSources, sources);
        classification.push(DeclarationType::JunitTests, tests);
        classification
    }
}
