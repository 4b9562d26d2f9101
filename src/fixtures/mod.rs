//! Read-only fixture store backing every console view.
//!
//! The store is the single dataset the rest of the crate filters and
//! displays. Nothing in the view layer mutates it; live overlays (policy
//! toggles, thresholds) shadow it from [`crate::state`].

mod data;
pub mod types;

pub use types::*;

use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Fixture integrity errors surfaced by [`FixtureStore::validate`].
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },
}

/// The complete fixture dataset, constructed once per process.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    pub kpi: Kpi,
    pub threats: Vec<Threat>,
    pub sessions: Vec<Session>,
    pub threat_trend: Vec<TrendPoint>,
    pub anomaly_distribution: Vec<HistogramBucket>,
    pub prompt_frequency: Vec<HourlyCount>,
    pub token_usage_trend: Vec<TokenPoint>,
    pub behavior_clusters: Vec<ClusterPoint>,
    pub policies: Vec<Policy>,
    pub tool_permissions: Vec<ToolPermission>,
    pub integrations: Vec<Integration>,
    pub connected_assets: Vec<ConnectedAsset>,
    pub recent_incidents: Vec<RecentIncident>,
    pub session_timeline: Vec<TimelinePoint>,
    pub models: Vec<ModelStatus>,
    pub performance: Vec<PerfSample>,
    pub geo_threats: Vec<GeoRegion>,
    pub incident_details: BTreeMap<String, IncidentRecord>,
}

impl FixtureStore {
    /// Build the canonical builtin dataset.
    pub fn builtin() -> Self {
        let store = Self {
            kpi: data::kpi(),
            threats: data::threats(),
            sessions: data::sessions(),
            threat_trend: data::threat_trend(),
            anomaly_distribution: data::anomaly_distribution(),
            prompt_frequency: data::prompt_frequency(),
            token_usage_trend: data::token_usage_trend(),
            behavior_clusters: data::behavior_clusters(),
            policies: data::policies(),
            tool_permissions: data::tool_permissions(),
            integrations: data::integrations(),
            connected_assets: data::connected_assets(),
            recent_incidents: data::recent_incidents(),
            session_timeline: data::session_timeline(),
            models: data::models(),
            performance: data::performance(),
            geo_threats: data::geo_threats(),
            incident_details: data::incident_details(),
        };
        debug_assert!(store.validate().is_ok());
        store
    }

    /// Check per-collection id uniqueness.
    pub fn validate(&self) -> Result<(), FixtureError> {
        check_unique("threats", self.threats.iter().map(|t| t.id.as_str()))?;
        check_unique("sessions", self.sessions.iter().map(|s| s.id.as_str()))?;
        check_unique("policies", self.policies.iter().map(|p| p.id.as_str()))?;
        check_unique("integrations", self.integrations.iter().map(|i| i.id.as_str()))?;
        check_unique("tool_permissions", self.tool_permissions.iter().map(|t| t.name.as_str()))?;
        Ok(())
    }

    /// Find a threat by id.
    pub fn threat(&self, id: &str) -> Option<&Threat> {
        self.threats.iter().find(|t| t.id == id)
    }

    /// Find a session by id.
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Find a policy by id.
    pub fn policy(&self, id: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.id == id)
    }

    /// Find an integration by id.
    pub fn integration(&self, id: &str) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.id == id)
    }

    /// Look up a hand-authored incident record by id.
    pub fn incident_detail(&self, id: &str) -> Option<&IncidentRecord> {
        self.incident_details.get(id)
    }
}

fn check_unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), FixtureError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
