//! Settings and system health page.

use crate::fixtures::{FixtureStore, ModelStatus, PerfSample};
use crate::state::Thresholds;
use tracing::info;

/// View controller for the settings page: model status cards, performance
/// series, and the five threshold sliders.
#[derive(Debug)]
pub struct SettingsPage<'a> {
    store: &'a FixtureStore,
    pub thresholds: Thresholds,
}

impl<'a> SettingsPage<'a> {
    /// Seed thresholds from shipped defaults.
    pub fn new(store: &'a FixtureStore) -> Self {
        Self::with_thresholds(store, Thresholds::default())
    }

    /// Seed thresholds from an explicit starting point (config override).
    pub fn with_thresholds(store: &'a FixtureStore, thresholds: Thresholds) -> Self {
        Self { store, thresholds }
    }

    pub fn models(&self) -> &'a [ModelStatus] {
        &self.store.models
    }

    pub fn performance(&self) -> &'a [PerfSample] {
        &self.store.performance
    }

    /// "Apply Changes": terminal no-op. Nothing is persisted or sent
    /// anywhere; the edited values last only as long as this page.
    pub fn apply(&self) {
        info!(
            injection_confidence = self.thresholds.injection_confidence,
            anomaly_score_alert = self.thresholds.anomaly_score_alert,
            rate_limit_per_min = self.thresholds.rate_limit_per_min,
            max_tokens_per_session = self.thresholds.max_tokens_per_session,
            session_timeout_min = self.thresholds.session_timeout_min,
            "Threshold changes applied (display only)"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_page_carries_default_thresholds() {
        let store = FixtureStore::builtin();
        let page = SettingsPage::new(&store);
        assert_eq!(page.thresholds, Thresholds::default());
        assert_eq!(page.models().len(), 4);
        assert_eq!(page.performance().len(), 6);
    }

    #[test]
    fn edits_do_not_survive_page_teardown() {
        let store = FixtureStore::builtin();
        let mut page = SettingsPage::new(&store);
        page.thresholds.set_rate_limit_per_min(250);
        page.apply();
        drop(page);
        // A new mount starts from defaults again.
        let fresh = SettingsPage::new(&store);
        assert_eq!(fresh.thresholds.rate_limit_per_min, 100);
    }
}
