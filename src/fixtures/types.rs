//! Entity types and closed enumerations for the fixture dataset.
//!
//! Every enum here is a closed set: fixture records and view state only ever
//! carry these values, which is what makes filtering and rendering total
//! functions (no free-form input reaches this layer).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a threat, incident, or session risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        };
        f.write_str(s)
    }
}

/// Category of detected threat activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ThreatType {
    Injection,
    Jailbreak,
    Extraction,
    Probing,
    #[serde(rename = "Bot Abuse")]
    BotAbuse,
    #[serde(rename = "Data Harvesting")]
    DataHarvesting,
}

impl fmt::Display for ThreatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThreatType::Injection => "Injection",
            ThreatType::Jailbreak => "Jailbreak",
            ThreatType::Extraction => "Extraction",
            ThreatType::Probing => "Probing",
            ThreatType::BotAbuse => "Bot Abuse",
            ThreatType::DataHarvesting => "Data Harvesting",
        };
        f.write_str(s)
    }
}

/// Investigation status of a threat record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatStatus {
    Active,
    Mitigated,
    #[serde(rename = "Under Investigation")]
    UnderInvestigation,
    Resolved,
}

impl fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThreatStatus::Active => "Active",
            ThreatStatus::Mitigated => "Mitigated",
            ThreatStatus::UnderInvestigation => "Under Investigation",
            ThreatStatus::Resolved => "Resolved",
        };
        f.write_str(s)
    }
}

/// Enforcement category a policy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyCategory {
    Injection,
    #[serde(rename = "Rate Limiting")]
    RateLimiting,
    #[serde(rename = "Tool Access")]
    ToolAccess,
    #[serde(rename = "Data Protection")]
    DataProtection,
    Session,
}

impl fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PolicyCategory::Injection => "Injection",
            PolicyCategory::RateLimiting => "Rate Limiting",
            PolicyCategory::ToolAccess => "Tool Access",
            PolicyCategory::DataProtection => "Data Protection",
            PolicyCategory::Session => "Session",
        };
        f.write_str(s)
    }
}

/// Action a policy takes when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyAction {
    Block,
    Warn,
    Log,
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PolicyAction::Block => "Block",
            PolicyAction::Warn => "Warn",
            PolicyAction::Log => "Log",
        };
        f.write_str(s)
    }
}

/// Permission state of an LLM tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolStatus {
    Allowed,
    Restricted,
    Blocked,
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ToolStatus::Allowed => "Allowed",
            ToolStatus::Restricted => "Restricted",
            ToolStatus::Blocked => "Blocked",
        };
        f.write_str(s)
    }
}

/// Kind of external integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationType {
    #[serde(rename = "SIEM")]
    Siem,
    Logging,
    Webhook,
    Monitoring,
    Identity,
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntegrationType::Siem => "SIEM",
            IntegrationType::Logging => "Logging",
            IntegrationType::Webhook => "Webhook",
            IntegrationType::Monitoring => "Monitoring",
            IntegrationType::Identity => "Identity",
        };
        f.write_str(s)
    }
}

/// Connection health of an integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
    Error,
}

impl fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntegrationStatus::Connected => "Connected",
            IntegrationStatus::Disconnected => "Disconnected",
            IntegrationStatus::Error => "Error",
        };
        f.write_str(s)
    }
}

/// Health of a connected asset on the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Active,
    Warning,
}

/// Operational state of a detection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelState {
    Active,
    Degraded,
}

/// A detected threat event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Threat {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ThreatType,
    pub severity: Severity,
    pub status: ThreatStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "sourceIP")]
    pub source_ip: String,
    pub geo_location: String,
    pub affected_asset: String,
    pub description: String,
}

/// A monitored LLM session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub entity: String,
    pub prompt_count: u32,
    /// 0-100; feeds the risk-indicator derivation in the session drawer.
    pub anomaly_score: u8,
    pub risk_level: Severity,
    pub start_time: DateTime<Utc>,
    pub duration: String,
    pub token_usage: u64,
}

/// An enforcement policy. `enabled` is the fixture default; live state lives
/// in [`crate::state::toggles::PolicyToggles`], never written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub category: PolicyCategory,
    pub enabled: bool,
    #[serde(rename = "severity")]
    pub action: PolicyAction,
    pub description: String,
    pub last_modified: NaiveDate,
}

/// One row of the tool permissions matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPermission {
    pub name: String,
    pub status: ToolStatus,
    pub scope: String,
    /// `None` renders as "Never".
    pub last_used: Option<DateTime<Utc>>,
    pub invocations: u64,
}

/// An external service integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IntegrationType,
    pub status: IntegrationStatus,
    pub last_sync: DateTime<Utc>,
    pub description: String,
}

/// One event in an incident timeline. `time` is pre-formatted display text
/// ("14:30:12") in both hand-authored and synthesized records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub time: String,
    pub action: String,
    pub actor: String,
}

/// A fully-detailed incident record, either hand-authored in the fixture map
/// or synthesized from a [`Threat`] by [`crate::incident::resolve_incident`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    pub id: String,
    /// Free-text type label ("Prompt Injection", "Suspicious Login").
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub status: ThreatStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "sourceIP")]
    pub source_ip: String,
    pub geo_location: String,
    pub affected_asset: String,
    pub description: String,
    pub narrative: String,
    pub affected_components: Vec<String>,
    pub timeline: Vec<TimelineEvent>,
    pub recommendations: Vec<String>,
}

/// Headline counters for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub total_interactions: u64,
    pub active_threats: u64,
    pub injection_attempts: u64,
    pub session_risk_score: f64,
    pub last_incident: NaiveDate,
    pub last_scan: NaiveDate,
}

/// One point of the weekly threat trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub threats: u32,
    pub blocked: u32,
    pub incidents: u32,
}

/// One bucket of the anomaly-score distribution histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub range: String,
    pub count: u32,
    pub label: String,
}

/// Prompt volume for one two-hour slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyCount {
    pub hour: String,
    pub count: u32,
}

/// Daily token consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPoint {
    pub date: String,
    pub tokens: u64,
}

/// One point of the behavioral cluster scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPoint {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub cluster: String,
    pub risk: u32,
}

/// Hourly session and anomaly counts for the activity page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub time: String,
    pub sessions: u32,
    pub anomalies: u32,
}

/// An asset wired into the monitoring mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedAsset {
    pub name: String,
    pub host: String,
    pub status: AssetStatus,
}

/// A condensed incident row on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentIncident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub time: String,
    pub asset: String,
    #[serde(rename = "sourceIP")]
    pub source_ip: String,
    pub geo: String,
    pub status: ThreatStatus,
}

/// Status of one deployed detection model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStatus {
    pub name: String,
    pub state: ModelState,
    pub accuracy: f64,
    pub latency_ms: u32,
    pub last_updated: NaiveDate,
}

/// One sample of the system performance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfSample {
    pub time: String,
    pub requests: u32,
    pub latency_ms: u32,
    pub cpu: u32,
    pub memory: u32,
}

/// Aggregated threat origin region for the globe view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRegion {
    pub region: String,
    pub lat: f64,
    pub lng: f64,
    pub count: u32,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_enums_display_with_spaces() {
        assert_eq!(ThreatType::BotAbuse.to_string(), "Bot Abuse");
        assert_eq!(ThreatType::DataHarvesting.to_string(), "Data Harvesting");
        assert_eq!(ThreatStatus::UnderInvestigation.to_string(), "Under Investigation");
        assert_eq!(PolicyCategory::RateLimiting.to_string(), "Rate Limiting");
    }

    #[test]
    fn multi_word_enums_serialize_with_spaces() {
        let json = serde_json::to_string(&ThreatType::BotAbuse).unwrap();
        assert_eq!(json, "\"Bot Abuse\"");
        let json = serde_json::to_string(&IntegrationType::Siem).unwrap();
        assert_eq!(json, "\"SIEM\"");
    }

    #[test]
    fn threat_serializes_with_wire_field_names() {
        let threat = Threat {
            id: "THR-1".into(),
            kind: ThreatType::Injection,
            severity: Severity::Critical,
            status: ThreatStatus::Active,
            timestamp: chrono::Utc::now(),
            source_ip: "203.0.xxx".into(),
            geo_location: "East Asia".into(),
            affected_asset: "API Gateway".into(),
            description: "test".into(),
        };
        let json = serde_json::to_value(&threat).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("sourceIP").is_some());
        assert!(json.get("geoLocation").is_some());
        assert!(json.get("affectedAsset").is_some());
    }

    #[test]
    fn severity_orders_critical_first() {
        assert!(Severity::Critical < Severity::High);
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }
}
