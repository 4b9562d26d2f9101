//! Session activity page.

use crate::fixtures::{FixtureStore, HourlyCount, Session, TimelinePoint, TokenPoint};
use crate::state::Drawer;

/// Derived risk indicators shown in the session drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskIndicators {
    pub prompt_velocity_elevated: bool,
    pub semantic_deviation_high: bool,
    pub token_spike_detected: bool,
}

impl RiskIndicators {
    /// Threshold rules from the session drawer: velocity over score 70,
    /// deviation over score 60, token spike over 200k tokens.
    pub fn for_session(session: &Session) -> Self {
        Self {
            prompt_velocity_elevated: session.anomaly_score > 70,
            semantic_deviation_high: session.anomaly_score > 60,
            token_spike_detected: session.token_usage > 200_000,
        }
    }
}

/// View controller for the activity page: session table plus detail drawer.
#[derive(Debug)]
pub struct ActivityPage<'a> {
    store: &'a FixtureStore,
    pub drawer: Drawer<Session>,
}

impl<'a> ActivityPage<'a> {
    pub fn new(store: &'a FixtureStore) -> Self {
        Self {
            store,
            drawer: Drawer::Closed,
        }
    }

    pub fn sessions(&self) -> &'a [Session] {
        &self.store.sessions
    }

    pub fn timeline(&self) -> &'a [TimelinePoint] {
        &self.store.session_timeline
    }

    /// Prompts per hour across the current day.
    pub fn prompt_frequency(&self) -> &'a [HourlyCount] {
        &self.store.prompt_frequency
    }

    /// Daily token consumption over the trailing week.
    pub fn token_usage_trend(&self) -> &'a [TokenPoint] {
        &self.store.token_usage_trend
    }

    pub fn select(&mut self, id: &str) -> bool {
        match self.store.session(id) {
            Some(session) => {
                self.drawer.open(session.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }

    /// Risk indicators for the currently selected session.
    pub fn indicators(&self) -> Option<RiskIndicators> {
        self.drawer.selected().map(RiskIndicators::for_session)
    }
}
