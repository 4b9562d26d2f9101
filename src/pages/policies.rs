//! Tool and policy management page.

use crate::fixtures::{FixtureStore, Policy, ToolPermission};
use crate::state::{Drawer, ImpactPreview, PolicyToggles};
use rand::Rng;

/// View controller for the policies page: tool permissions matrix, policy
/// list with live enable switches, and a policy detail drawer.
#[derive(Debug)]
pub struct PoliciesPage<'a> {
    store: &'a FixtureStore,
    pub toggles: PolicyToggles,
    pub drawer: Drawer<Policy>,
}

impl<'a> PoliciesPage<'a> {
    /// Seed toggle state from fixture defaults; from here on the overlay is
    /// the only authority on which policies are active.
    pub fn new(store: &'a FixtureStore) -> Self {
        Self {
            store,
            toggles: PolicyToggles::seed(&store.policies),
            drawer: Drawer::Closed,
        }
    }

    pub fn policies(&self) -> &'a [Policy] {
        &self.store.policies
    }

    pub fn tool_permissions(&self) -> &'a [ToolPermission] {
        &self.store.tool_permissions
    }

    pub fn toggle(&mut self, id: &str) {
        self.toggles.toggle(id);
    }

    /// "N / total active" header counter.
    pub fn counter(&self) -> String {
        self.toggles.counter()
    }

    pub fn select(&mut self, id: &str) -> bool {
        match self.store.policy(id) {
            Some(policy) => {
                self.drawer.open(policy.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }

    /// Open the detail drawer for a policy and sample its impact preview in
    /// one step. Returns the policy record, its live toggle state, and the
    /// preview; `None` leaves the drawer untouched.
    pub fn show<R: Rng + ?Sized>(
        &mut self,
        id: &str,
        rng: &mut R,
    ) -> Option<(&'a Policy, bool, ImpactPreview)> {
        let policy = self.store.policy(id)?;
        let enabled = self.toggles.is_enabled(id).unwrap_or(policy.enabled);
        self.drawer.open(policy.clone());
        Some((policy, enabled, ImpactPreview::sample(enabled, rng)))
    }

    /// Sample the impact preview for a policy under its live toggle state.
    /// Resampled on every call; a disabled policy always previews zeros.
    pub fn preview<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Option<ImpactPreview> {
        self.toggles
            .is_enabled(id)
            .map(|enabled| ImpactPreview::sample(enabled, rng))
    }
}
