use indexmap::IndexSet;

/// Outcome of diffing the previous pass's entities against a new selection.
///
/// `added` and `retained` follow selection order, `removed` follows the
/// previous render order, so applying the diff is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityDiff {
    pub added: Vec<String>,
    pub retained: Vec<String>,
    pub removed: Vec<String>,
}

impl EntityDiff {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Computes the create/update/destroy sets for one selection change.
///
/// This replaces an implicit enter/exit join against a live drawing tree:
/// the diff is explicit bookkeeping keyed by entity name, independent of any
/// drawing backend.
#[must_use]
pub fn reconcile(previous: &IndexSet<String>, selection: &[String]) -> EntityDiff {
    let mut diff = EntityDiff::default();

    for name in selection {
        if previous.contains(name) {
            diff.retained.push(name.clone());
        } else {
            diff.added.push(name.clone());
        }
    }

    for name in previous {
        if !selection.iter().any(|selected| selected == name) {
            diff.removed.push(name.clone());
        }
    }

    diff
}
