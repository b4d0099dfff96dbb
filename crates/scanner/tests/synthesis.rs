use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tailor_declarations::{DeclarationType, OwnedPathSet, PutativeDeclaration};
use tailor_resolver::{FsPathResolver, PathGlobs, PathResolver, ResolveError, SearchScope};
use tailor_scanner::{synthesize, BackendRegistry, KotlinClassifier, ScannerError};

/// Resolver over a fixed path set, matching only on the extension suffix
/// of each include pattern.
struct StaticResolver {
    paths: BTreeSet<String>,
}

impl StaticResolver {
    fn new(paths: &[&str]) -> Self {
        Self {
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[async_trait]
impl PathResolver for StaticResolver {
    async fn resolve(&self, globs: &PathGlobs) -> tailor_resolver::Result<BTreeSet<String>> {
        let suffixes: Vec<&str> = globs
            .includes()
            .iter()
            .filter_map(|p| p.rsplit('*').next())
            .collect();
        Ok(self
            .paths
            .iter()
            .filter(|path| suffixes.iter().any(|s| path.ends_with(s)))
            .cloned()
            .collect())
    }
}

/// Resolver that always fails, standing in for an I/O error.
struct FailingResolver;

#[async_trait]
impl PathResolver for FailingResolver {
    async fn resolve(&self, _globs: &PathGlobs) -> tailor_resolver::Result<BTreeSet<String>> {
        Err(ResolveError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "scan root unreadable",
        )))
    }
}

fn owned(paths: &[&str]) -> OwnedPathSet {
    paths.iter().copied().collect()
}

fn decl(ty: DeclarationType, path: &str, triggers: &[&str]) -> PutativeDeclaration {
    PutativeDeclaration::new(ty, path, None, triggers.iter().map(|t| t.to_string()))
}

fn sorted(mut decls: Vec<PutativeDeclaration>) -> Vec<PutativeDeclaration> {
    decls.sort_by(|a, b| (a.decl_type, &a.path).cmp(&(b.decl_type, &b.path)));
    decls
}

#[tokio::test]
async fn groups_unowned_candidates_by_directory() {
    let resolver = StaticResolver::new(&["a/Foo.kt", "a/Bar.kt", "b/Baz.kt"]);
    let proposals = synthesize(
        &resolver,
        &SearchScope::workspace(),
        &owned(&[]),
        "*.kt",
        &KotlinClassifier,
    )
    .await
    .unwrap();

    assert_eq!(
        sorted(proposals.into_iter().collect()),
        vec![
            decl(DeclarationType::KotlinSources, "a", &["Bar.kt", "Foo.kt"]),
            decl(DeclarationType::KotlinSources, "b", &["Baz.kt"]),
        ]
    );
}

#[tokio::test]
async fn owned_files_drop_out_of_proposals() {
    let resolver = StaticResolver::new(&["a/Foo.kt", "a/Bar.kt", "b/Baz.kt"]);
    let proposals = synthesize(
        &resolver,
        &SearchScope::workspace(),
        &owned(&["a/Foo.kt"]),
        "*.kt",
        &KotlinClassifier,
    )
    .await
    .unwrap();

    assert_eq!(
        sorted(proposals.into_iter().collect()),
        vec![
            decl(DeclarationType::KotlinSources, "a", &["Bar.kt"]),
            decl(DeclarationType::KotlinSources, "b", &["Baz.kt"]),
        ]
    );
}

#[tokio::test]
async fn empty_candidate_set_yields_no_proposals() {
    let resolver = StaticResolver::new(&[]);
    let proposals = synthesize(
        &resolver,
        &SearchScope::workspace(),
        &owned(&["a/Foo.kt"]),
        "*.kt",
        &KotlinClassifier,
    )
    .await
    .unwrap();
    assert!(proposals.is_empty());
}

#[tokio::test]
async fn fully_owned_tree_yields_no_proposals() {
    let resolver = StaticResolver::new(&["a/Foo.kt", "b/Baz.kt"]);
    let proposals = synthesize(
        &resolver,
        &SearchScope::workspace(),
        &owned(&["a/Foo.kt", "b/Baz.kt"]),
        "*.kt",
        &KotlinClassifier,
    )
    .await
    .unwrap();
    assert!(proposals.is_empty());
}

#[tokio::test]
async fn accepting_proposals_makes_a_rescan_quiet() {
    let resolver = StaticResolver::new(&["a/Foo.kt", "a/Bar.kt", "b/Baz.kt"]);
    let scope = SearchScope::workspace();
    let mut claimed = owned(&[]);

    let first = synthesize(&resolver, &scope, &claimed, "*.kt", &KotlinClassifier)
        .await
        .unwrap();
    assert_eq!(first.len(), 2);

    for proposal in first.iter() {
        claimed.extend(proposal.trigger_paths());
    }

    let second = synthesize(&resolver, &scope, &claimed, "*.kt", &KotlinClassifier)
        .await
        .unwrap();
    assert!(second.is_empty());
}

#[tokio::test]
async fn every_unowned_candidate_lands_in_exactly_one_trigger_list() {
    let candidates = ["a/Foo.kt", "a/Bar.kt", "b/Baz.kt", "Top.kt"];
    let resolver = StaticResolver::new(&candidates);
    let proposals = synthesize(
        &resolver,
        &SearchScope::workspace(),
        &owned(&[]),
        "*.kt",
        &KotlinClassifier,
    )
    .await
    .unwrap();

    let mut seen = Vec::new();
    for proposal in proposals.iter() {
        seen.extend(proposal.trigger_paths());
    }
    seen.sort();

    let mut expected: Vec<String> = candidates.iter().map(|p| p.to_string()).collect();
    expected.sort();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn resolution_failure_propagates_unchanged() {
    let err = synthesize(
        &FailingResolver,
        &SearchScope::workspace(),
        &owned(&[]),
        "*.kt",
        &KotlinClassifier,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        ScannerError::Resolve(ResolveError::IoError(_))
    ));
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[tokio::test]
async fn builtin_registry_scans_a_real_tree() {
    let temp = tempfile::tempdir().unwrap();
    touch(&temp.path().join("app/Main.kt"));
    touch(&temp.path().join("app/Helper.kt"));
    touch(&temp.path().join("jvm/Service.java"));
    touch(&temp.path().join("jvm/ServiceTest.java"));

    let resolver = FsPathResolver::new(temp.path());
    let registry = BackendRegistry::builtin();
    let proposals = registry
        .scan_all(&resolver, &SearchScope::workspace(), &owned(&[]))
        .await
        .unwrap();

    assert_eq!(
        sorted(proposals.into_iter().collect()),
        vec![
            decl(
                DeclarationType::KotlinSources,
                "app",
                &["Helper.kt", "Main.kt"]
            ),
            decl(DeclarationType::JavaSources, "jvm", &["Service.java"]),
            decl(DeclarationType::JunitTests, "jvm", &["ServiceTest.java"]),
        ]
    );
}

#[tokio::test]
async fn proposals_stay_contiguous_by_declaration_type() {
    let resolver = StaticResolver::new(&[
        "a/Foo.java",
        "b/Bar.java",
        "a/FooTest.java",
        "b/BarTest.java",
    ]);
    let proposals = synthesize(
        &resolver,
        &SearchScope::workspace(),
        &owned(&[]),
        "*.java",
        &tailor_scanner::JavaClassifier,
    )
    .await
    .unwrap();

    let types: Vec<DeclarationType> = proposals.iter().map(|p| p.decl_type).collect();
    assert_eq!(
        types,
        vec![
            DeclarationType::JavaSources,
            DeclarationType::JavaSources,
            DeclarationType::JunitTests,
            DeclarationType::JunitTests,
        ]
    );
}
