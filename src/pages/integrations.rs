//! Integrations page.

use crate::fixtures::{FixtureStore, Integration, IntegrationStatus};
use crate::state::Drawer;

/// Connection health tallies shown above the integration grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StatusTallies {
    pub connected: usize,
    pub disconnected: usize,
    pub error: usize,
}

/// View controller for the integrations page: card grid plus a configure
/// drawer for the selected integration.
#[derive(Debug)]
pub struct IntegrationsPage<'a> {
    store: &'a FixtureStore,
    pub drawer: Drawer<Integration>,
}

impl<'a> IntegrationsPage<'a> {
    pub fn new(store: &'a FixtureStore) -> Self {
        Self {
            store,
            drawer: Drawer::Closed,
        }
    }

    pub fn integrations(&self) -> &'a [Integration] {
        &self.store.integrations
    }

    pub fn tallies(&self) -> StatusTallies {
        let count = |status: IntegrationStatus| {
            self.store
                .integrations
                .iter()
                .filter(|i| i.status == status)
                .count()
        };
        StatusTallies {
            connected: count(IntegrationStatus::Connected),
            disconnected: count(IntegrationStatus::Disconnected),
            error: count(IntegrationStatus::Error),
        }
    }

    pub fn select(&mut self, id: &str) -> bool {
        match self.store.integration(id) {
            Some(integration) => {
                self.drawer.open(integration.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }
}
