use std::collections::BTreeSet;
use tailor_declarations::DeclarationType;

/// Ordered mapping of declaration type to the unowned candidate paths
/// that belong to it.
///
/// Group order is whatever the classifier produced; the synthesizer
/// keeps its output contiguously grouped by type in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    groups: Vec<(DeclarationType, BTreeSet<String>)>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group. A type must appear at most once per classification.
    pub fn push(&mut self, decl_type: DeclarationType, paths: BTreeSet<String>) {
        debug_assert!(
            self.groups.iter().all(|(ty, _)| *ty != decl_type),
            "duplicate classification group for {decl_type}"
        );
        self.groups.push((decl_type, paths));
    }

    pub fn groups(&self) -> &[(DeclarationType, BTreeSet<String>)] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<(DeclarationType, BTreeSet<String>)> {
        self.groups
    }

    /// Totality check: every input path classified into exactly one group,
    /// nothing dropped, nothing duplicated.
    pub fn is_total_over(&self, input: &BTreeSet<String>) -> bool {
        let classified: usize = self.groups.iter().map(|(_, paths)| paths.len()).sum();
        if classified != input.len() {
            return false;
        }
        let mut union = BTreeSet::new();
        for (_, paths) in &self.groups {
            for path in paths {
                if !union.insert(path.as_str()) {
                    return false;
                }
            }
        }
        union.len() == input.len() && input.iter().all(|p| union.contains(p.as_str()))
    }
}

/// Partition unowned candidate paths into declaration-type groups.
///
/// Implementations must be pure and total: every input path appears in
/// exactly one output group, and classifying the same set twice yields
/// the same result. A non-total classifier is a programming defect, not
/// a runtime condition; the synthesizer guards the invariant with a
/// debug assertion.
pub trait Classifier: Send + Sync {
    fn classify(&self, paths: BTreeSet<String>) -> Classification;
}
