use crate::classify::Classifier;
use crate::error::Result;
use std::collections::BTreeSet;
use tailor_declarations::{group_by_dir, OwnedPathSet, PutativeDeclaration, PutativeDeclarations};
use tailor_resolver::{PathResolver, SearchScope};

/// Determine the candidate declarations needed to bring unclaimed files
/// matching `extension` under management.
///
/// Single-pass and stateless: resolve the scope, subtract owned paths,
/// classify the remainder, group each class by containing directory, and
/// emit one proposal per non-empty (type, directory) pair. The output is
/// grouped contiguously by declaration type in classification order;
/// within a type, directories come out in sorted order.
///
/// Resolution failures propagate unchanged; there is no retry and no
/// partial result.
pub async fn synthesize(
    resolver: &dyn PathResolver,
    scope: &SearchScope,
    owned: &OwnedPathSet,
    extension: &str,
    classifier: &dyn Classifier,
) -> Result<PutativeDeclarations> {
    let globs = scope.path_globs(extension);
    let all = resolver.resolve(&globs).await?;

    let unowned: BTreeSet<String> = all
        .into_iter()
        .filter(|path| !owned.contains(path))
        .collect();
    log::debug!(
        "{} unowned candidate(s) for `{extension}` ({} owned overall)",
        unowned.len(),
        owned.len()
    );

    let classification = classifier.classify(unowned.clone());
    debug_assert!(
        classification.is_total_over(&unowned),
        "classifier for `{extension}` dropped or duplicated candidate paths"
    );

    let mut declarations = Vec::new();
    for (decl_type, paths) in classification.into_groups() {
        for (dirname, filenames) in group_by_dir(paths) {
            if filenames.is_empty() {
                continue;
            }
            declarations.push(PutativeDeclaration::new(
                decl_type, dirname, None, filenames,
            ));
        }
    }

    Ok(PutativeDeclarations::new(declarations))
}
