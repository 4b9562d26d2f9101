//! Threat intelligence page.

use crate::fixtures::{FixtureStore, Severity, Threat, ThreatType};
use crate::state::{Drawer, ThreatFilters};

/// View controller for the threats page: two filter dropdowns over the
/// threat table plus a detail drawer.
#[derive(Debug)]
pub struct ThreatsPage<'a> {
    store: &'a FixtureStore,
    pub filters: ThreatFilters,
    pub drawer: Drawer<Threat>,
}

impl<'a> ThreatsPage<'a> {
    pub fn new(store: &'a FixtureStore) -> Self {
        Self {
            store,
            filters: ThreatFilters::all(),
            drawer: Drawer::Closed,
        }
    }

    /// The derived view list under the current filters.
    pub fn visible(&self) -> Vec<&'a Threat> {
        self.filters.apply(&self.store.threats)
    }

    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.filters.set_severity(severity);
    }

    pub fn set_kind(&mut self, kind: Option<ThreatType>) {
        self.filters.set_kind(kind);
    }

    /// Row click: select a threat and open its drawer. Returns false when
    /// the id is not in the collection (drawer state is left untouched).
    pub fn select(&mut self, id: &str) -> bool {
        match self.store.threat(id) {
            Some(threat) => {
                self.drawer.open(threat.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }
}
