//! Live policy enable/disable overlay.

use crate::fixtures::Policy;
use rand::Rng;
use std::collections::BTreeMap;

/// Id-keyed boolean overlay over the policy collection.
///
/// Seeded once from each policy's fixture `enabled` flag; after that the map
/// is the sole source of truth for "is this policy active" and the fixture
/// value is never consulted again. The fixtures themselves stay untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyToggles {
    map: BTreeMap<String, bool>,
}

impl PolicyToggles {
    /// Seed the overlay from fixture defaults.
    pub fn seed(policies: &[Policy]) -> Self {
        Self {
            map: policies.iter().map(|p| (p.id.clone(), p.enabled)).collect(),
        }
    }

    /// Flip one policy. Unknown ids are ignored; the overlay only ever holds
    /// the ids it was seeded with.
    pub fn toggle(&mut self, id: &str) {
        if let Some(enabled) = self.map.get_mut(id) {
            *enabled = !*enabled;
        }
    }

    /// Live state for one policy; `None` for ids outside the collection.
    pub fn is_enabled(&self, id: &str) -> Option<bool> {
        self.map.get(id).copied()
    }

    /// Count of currently enabled policies.
    pub fn active_count(&self) -> usize {
        self.map.values().filter(|&&enabled| enabled).count()
    }

    pub fn total(&self) -> usize {
        self.map.len()
    }

    /// The "N / total active" counter shown above the policy list.
    pub fn counter(&self) -> String {
        format!("{} / {} active", self.active_count(), self.total())
    }
}

/// Display-only impact figures for a policy drawer.
///
/// Regenerated on every render, so two views of the same policy will differ;
/// these are cosmetic previews, not persisted metrics. The rng is injected
/// so tests can pin a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactPreview {
    /// Blocked events over 7 days; 100..600 when enabled.
    pub blocked_events: u32,
    /// False positives over 7 days; 2..22 when enabled.
    pub false_positives: u32,
    /// Affected sessions; 50..250 when enabled.
    pub affected_sessions: u32,
}

impl ImpactPreview {
    /// Sample preview figures. A disabled policy reads exactly zero on all
    /// three figures regardless of rng state.
    pub fn sample<R: Rng + ?Sized>(enabled: bool, rng: &mut R) -> Self {
        if !enabled {
            return Self {
                blocked_events: 0,
                false_positives: 0,
                affected_sessions: 0,
            };
        }
        Self {
            blocked_events: rng.gen_range(100..600),
            false_positives: rng.gen_range(2..22),
            affected_sessions: rng.gen_range(50..250),
        }
    }
}
