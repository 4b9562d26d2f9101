//! Threat list filtering.

use crate::fixtures::{Severity, Threat, ThreatType};

/// Filter parameters for the threats page. `None` means "all", matching the
/// dropdown's unfiltered position; both predicates are conjunctive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreatFilters {
    pub severity: Option<Severity>,
    pub kind: Option<ThreatType>,
}

impl ThreatFilters {
    /// Unfiltered view.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.severity = severity;
    }

    pub fn set_kind(&mut self, kind: Option<ThreatType>) {
        self.kind = kind;
    }

    /// Whether a single record passes both predicates.
    pub fn matches(&self, threat: &Threat) -> bool {
        self.severity.map_or(true, |s| threat.severity == s)
            && self.kind.map_or(true, |k| threat.kind == k)
    }

    /// Derive the visible subsequence of `threats`, preserving collection
    /// order. Never reorders and never copies the records.
    pub fn apply<'a>(&self, threats: &'a [Threat]) -> Vec<&'a Threat> {
        threats.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;

    #[test]
    fn default_filters_pass_everything() {
        let store = FixtureStore::builtin();
        let visible = ThreatFilters::all().apply(&store.threats);
        assert_eq!(visible.len(), store.threats.len());
    }

    #[test]
    fn severity_and_kind_are_conjunctive() {
        let store = FixtureStore::builtin();
        let filters = ThreatFilters {
            severity: Some(Severity::Critical),
            kind: Some(ThreatType::Injection),
        };
        let visible = filters.apply(&store.threats);
        assert!(!visible.is_empty());
        for t in &visible {
            assert_eq!(t.severity, Severity::Critical);
            assert_eq!(t.kind, ThreatType::Injection);
        }
        // Critical + Jailbreak has no rows in the builtin dataset.
        let empty = ThreatFilters {
            severity: Some(Severity::Critical),
            kind: Some(ThreatType::Jailbreak),
        };
        assert!(empty.apply(&store.threats).is_empty());
    }

    #[test]
    fn filtering_preserves_collection_order() {
        let store = FixtureStore::builtin();
        let filters = ThreatFilters {
            severity: Some(Severity::High),
            kind: None,
        };
        let visible = filters.apply(&store.threats);
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<&str> = store
            .threats
            .iter()
            .filter(|t| t.severity == Severity::High)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, expected);
    }
}
