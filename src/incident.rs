//! Incident resolution.
//!
//! Resolves an identifier to a displayable incident record: hand-authored
//! records win, otherwise a record is synthesized from the matching threat.
//! Synthesis is pure; the timeline is computed from the threat timestamp,
//! never from wall-clock time, so the same id always yields the same record.

use crate::fixtures::{FixtureStore, IncidentRecord, Threat, TimelineEvent};
use chrono::Duration;

/// Boilerplate appended to a threat description to form the narrative of a
/// synthesized incident.
const NARRATIVE_SUFFIX: &str =
    " Further investigation is required to determine the full scope and impact of this incident.";

/// Components always listed alongside the affected asset.
const SHARED_COMPONENTS: [&str; 2] = ["LLM Gateway", "Input Filter"];

/// Synthetic timeline: offset from the threat timestamp, action, actor.
const TIMELINE_STEPS: [(i64, &str, &str); 3] = [
    (0, "Threat detected by automated classifier", "System"),
    (120, "Incident created and flagged", "Risk Engine"),
    (300, "SOC analyst notified", "Alert System"),
];

/// Generic response steps for incidents without a hand-authored record.
const FALLBACK_RECOMMENDATIONS: [&str; 4] = [
    "Block source IP at WAF level",
    "Review affected asset logs for the last 24 hours",
    "Update detection rules based on attack pattern",
    "Notify security team for manual review",
];

/// Resolve an incident id to a displayable record.
///
/// Lookup order: the hand-authored incident map, then synthesis from a
/// threat with the same id. Returns `None` when the id matches neither;
/// callers render that as a not-found view, it is not an error.
pub fn resolve_incident(store: &FixtureStore, id: &str) -> Option<IncidentRecord> {
    if let Some(record) = store.incident_detail(id) {
        return Some(record.clone());
    }
    store.threat(id).map(synthesize_from_threat)
}

/// Derive a full incident record from a bare threat row.
fn synthesize_from_threat(threat: &Threat) -> IncidentRecord {
    let mut affected_components = Vec::with_capacity(1 + SHARED_COMPONENTS.len());
    affected_components.push(threat.affected_asset.clone());
    affected_components.extend(SHARED_COMPONENTS.iter().map(|c| c.to_string()));

    let timeline = TIMELINE_STEPS
        .iter()
        .map(|(offset_secs, action, actor)| TimelineEvent {
            time: (threat.timestamp + Duration::seconds(*offset_secs))
                .format("%H:%M:%S")
                .to_string(),
            action: (*action).to_string(),
            actor: (*actor).to_string(),
        })
        .collect();

    IncidentRecord {
        id: threat.id.clone(),
        kind: threat.kind.to_string(),
        severity: threat.severity,
        status: threat.status,
        timestamp: threat.timestamp,
        source_ip: threat.source_ip.clone(),
        geo_location: threat.geo_location.clone(),
        affected_asset: threat.affected_asset.clone(),
        description: threat.description.clone(),
        narrative: format!("{}{}", threat.description, NARRATIVE_SUFFIX),
        affected_components,
        timeline,
        recommendations: FALLBACK_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}
