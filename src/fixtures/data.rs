//! The builtin fixture dataset.
//!
//! Hand-authored records standing in for a live backend. Everything here is
//! constructed once and handed out read-only through [`super::FixtureStore`].

use super::types::*;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::BTreeMap;

// Fixture timestamps are compile-time constants; the unwraps here cannot
// fire for valid calendar dates and are covered by store validation tests.
fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap()
}

pub(super) fn kpi() -> Kpi {
    Kpi {
        total_interactions: 256_219,
        active_threats: 28_219,
        injection_attempts: 4_871,
        session_risk_score: 73.4,
        last_incident: day(2026, 2, 12),
        last_scan: day(2026, 2, 8),
    }
}

pub(super) fn threats() -> Vec<Threat> {
    let rows: [(&str, ThreatType, Severity, ThreatStatus, DateTime<Utc>, &str, &str, &str, &str); 10] = [
        ("THR-2026-0891", ThreatType::Injection, Severity::Critical, ThreatStatus::Active, ts(2026, 2, 12, 14, 32, 0), "185.221.xxx", "Eastern Europe", "App Server #3", "Context override attempt targeting system prompt extraction via nested instruction injection."),
        ("THR-2026-0890", ThreatType::Jailbreak, Severity::High, ThreatStatus::UnderInvestigation, ts(2026, 2, 12, 13, 15, 0), "103.45.xxx", "Southeast Asia", "Chat Interface", "Repeated roleplay-based jailbreak attempts to bypass content safety guardrails."),
        ("THR-2026-0889", ThreatType::Extraction, Severity::High, ThreatStatus::Mitigated, ts(2026, 2, 12, 11, 2, 0), "45.134.xxx", "South America", "RAG Pipeline", "Structured probing with sequential query variations designed to extract training data patterns."),
        ("THR-2026-0888", ThreatType::Probing, Severity::Medium, ThreatStatus::Resolved, ts(2026, 2, 11, 22, 48, 0), "91.207.xxx", "Central Asia", "API Gateway", "Automated enumeration of tool invocation endpoints via crafted prompt sequences."),
        ("THR-2026-0887", ThreatType::BotAbuse, Severity::Medium, ThreatStatus::Active, ts(2026, 2, 11, 19, 30, 0), "198.51.xxx", "North America", "Code Assistant", "High-frequency automated queries exceeding behavioral baseline by 340%."),
        ("THR-2026-0886", ThreatType::Injection, Severity::Critical, ThreatStatus::Mitigated, ts(2026, 2, 11, 16, 12, 0), "162.158.xxx", "Western Europe", "Customer Bot", "Multi-layered prompt injection using base64 encoded payload to bypass input filters."),
        ("THR-2026-0885", ThreatType::DataHarvesting, Severity::High, ThreatStatus::UnderInvestigation, ts(2026, 2, 11, 12, 45, 0), "77.88.xxx", "Eastern Europe", "Doc Assistant", "Systematic extraction of internal document summaries through iterative refinement queries."),
        ("THR-2026-0884", ThreatType::Jailbreak, Severity::Low, ThreatStatus::Resolved, ts(2026, 2, 10, 20, 18, 0), "203.0.xxx", "East Asia", "Chat Interface", "Single-attempt DAN-style jailbreak using outdated prompt template."),
        ("THR-2026-0883", ThreatType::Extraction, Severity::Medium, ThreatStatus::Resolved, ts(2026, 2, 10, 15, 33, 0), "178.62.xxx", "Northern Europe", "API Gateway", "Embedding similarity probing to map model knowledge boundaries."),
        ("THR-2026-0882", ThreatType::Probing, Severity::High, ThreatStatus::Active, ts(2026, 2, 10, 9, 5, 0), "51.79.xxx", "Southern Africa", "App Server #1", "Coordinated multi-session probing across different user identities from same ASN."),
    ];
    rows.into_iter()
        .map(|(id, kind, severity, status, timestamp, ip, geo, asset, desc)| Threat {
            id: id.into(),
            kind,
            severity,
            status,
            timestamp,
            source_ip: ip.into(),
            geo_location: geo.into(),
            affected_asset: asset.into(),
            description: desc.into(),
        })
        .collect()
}

pub(super) fn sessions() -> Vec<Session> {
    let rows: [(&str, &str, &str, u32, u8, Severity, DateTime<Utc>, &str, u64); 8] = [
        ("SES-40291", "usr-8821", "External API", 147, 92, Severity::Critical, ts(2026, 2, 12, 14, 0, 0), "2h 15m", 284_000),
        ("SES-40290", "usr-3344", "Web Client", 89, 78, Severity::High, ts(2026, 2, 12, 13, 0, 0), "1h 42m", 156_000),
        ("SES-40289", "usr-1102", "Mobile App", 34, 45, Severity::Medium, ts(2026, 2, 12, 12, 30, 0), "45m", 67_200),
        ("SES-40288", "usr-7719", "Admin Panel", 12, 15, Severity::Low, ts(2026, 2, 12, 11, 0, 0), "22m", 18_400),
        ("SES-40287", "usr-5503", "External API", 211, 96, Severity::Critical, ts(2026, 2, 12, 10, 15, 0), "3h 08m", 412_000),
        ("SES-40286", "usr-2298", "Web Client", 56, 62, Severity::Medium, ts(2026, 2, 12, 9, 45, 0), "1h 10m", 98_000),
        ("SES-40285", "usr-9014", "Code IDE", 78, 81, Severity::High, ts(2026, 2, 12, 8, 30, 0), "2h 01m", 195_000),
        ("SES-40284", "usr-4467", "Slack Bot", 23, 28, Severity::Low, ts(2026, 2, 11, 22, 0, 0), "35m", 32_000),
    ];
    rows.into_iter()
        .map(|(id, user, entity, prompts, score, risk, start, dur, tokens)| Session {
            id: id.into(),
            user_id: user.into(),
            entity: entity.into(),
            prompt_count: prompts,
            anomaly_score: score,
            risk_level: risk,
            start_time: start,
            duration: dur.into(),
            token_usage: tokens,
        })
        .collect()
}

pub(super) fn threat_trend() -> Vec<TrendPoint> {
    [
        ("Jan 14", 120, 115, 5),
        ("Jan 21", 145, 138, 7),
        ("Jan 28", 189, 180, 9),
        ("Feb 04", 210, 198, 12),
        ("Feb 08", 278, 265, 13),
        ("Feb 12", 312, 294, 18),
    ]
    .into_iter()
    .map(|(date, threats, blocked, incidents)| TrendPoint {
        date: date.into(),
        threats,
        blocked,
        incidents,
    })
    .collect()
}

pub(super) fn anomaly_distribution() -> Vec<HistogramBucket> {
    [
        ("0-20", 1240, "Normal"),
        ("20-40", 890, "Low Risk"),
        ("40-60", 456, "Medium Risk"),
        ("60-80", 234, "High Risk"),
        ("80-100", 89, "Critical"),
    ]
    .into_iter()
    .map(|(range, count, label)| HistogramBucket {
        range: range.into(),
        count,
        label: label.into(),
    })
    .collect()
}

pub(super) fn prompt_frequency() -> Vec<HourlyCount> {
    [
        ("00:00", 45),
        ("02:00", 22),
        ("04:00", 18),
        ("06:00", 34),
        ("08:00", 156),
        ("10:00", 289),
        ("12:00", 312),
        ("14:00", 445),
        ("16:00", 378),
        ("18:00", 234),
        ("20:00", 167),
        ("22:00", 89),
    ]
    .into_iter()
    .map(|(hour, count)| HourlyCount { hour: hour.into(), count })
    .collect()
}

pub(super) fn token_usage_trend() -> Vec<TokenPoint> {
    [
        ("Feb 06", 1_200_000),
        ("Feb 07", 1_350_000),
        ("Feb 08", 1_180_000),
        ("Feb 09", 1_540_000),
        ("Feb 10", 2_100_000),
        ("Feb 11", 1_890_000),
        ("Feb 12", 2_340_000),
    ]
    .into_iter()
    .map(|(date, tokens)| TokenPoint { date: date.into(), tokens })
    .collect()
}

pub(super) fn behavior_clusters() -> Vec<ClusterPoint> {
    [
        (12, 45, 20, "Normal", 15),
        (25, 62, 15, "Normal", 22),
        (34, 38, 18, "Normal", 18),
        (55, 72, 25, "Suspicious", 58),
        (62, 80, 30, "Suspicious", 65),
        (78, 88, 35, "Malicious", 85),
        (85, 92, 40, "Malicious", 92),
        (90, 95, 45, "Malicious", 97),
        (42, 55, 22, "Suspicious", 48),
        (18, 30, 12, "Normal", 10),
    ]
    .into_iter()
    .map(|(x, y, size, cluster, risk)| ClusterPoint {
        x,
        y,
        size,
        cluster: cluster.into(),
        risk,
    })
    .collect()
}

pub(super) fn policies() -> Vec<Policy> {
    let rows: [(&str, &str, PolicyCategory, bool, PolicyAction, &str, NaiveDate); 8] = [
        ("POL-001", "Prompt Injection Blocking", PolicyCategory::Injection, true, PolicyAction::Block, "Blocks detected prompt injection attempts using ML classifier with >0.85 confidence.", day(2026, 2, 10)),
        ("POL-002", "Jailbreak Pattern Detection", PolicyCategory::Injection, true, PolicyAction::Block, "Identifies and blocks known jailbreak prompt patterns including DAN, roleplay, and encoding-based attacks.", day(2026, 2, 9)),
        ("POL-003", "Rate Limiting - Standard", PolicyCategory::RateLimiting, true, PolicyAction::Warn, "Limits API requests to 100/min per user session. Triggers warning at 80% threshold.", day(2026, 2, 8)),
        ("POL-004", "Database Query Restriction", PolicyCategory::ToolAccess, true, PolicyAction::Block, "Restricts LLM tool invocations to pre-approved database query templates only.", day(2026, 2, 7)),
        ("POL-005", "File Access Control", PolicyCategory::ToolAccess, true, PolicyAction::Block, "Enforces zero-trust file system access with explicit per-path permissions.", day(2026, 2, 6)),
        ("POL-006", "PII Redaction", PolicyCategory::DataProtection, true, PolicyAction::Block, "Automatically redacts personally identifiable information from LLM outputs.", day(2026, 2, 5)),
        ("POL-007", "Session Anomaly Threshold", PolicyCategory::Session, true, PolicyAction::Warn, "Flags sessions with anomaly score exceeding 70 for manual review.", day(2026, 2, 4)),
        ("POL-008", "Token Budget Enforcement", PolicyCategory::RateLimiting, false, PolicyAction::Log, "Enforces per-session token usage budgets. Currently in monitoring mode.", day(2026, 2, 3)),
    ];
    rows.into_iter()
        .map(|(id, name, category, enabled, action, desc, modified)| Policy {
            id: id.into(),
            name: name.into(),
            category,
            enabled,
            action,
            description: desc.into(),
            last_modified: modified,
        })
        .collect()
}

pub(super) fn tool_permissions() -> Vec<ToolPermission> {
    let rows: [(&str, ToolStatus, &str, Option<DateTime<Utc>>, u64); 8] = [
        ("database_query", ToolStatus::Allowed, "Read-only, approved templates", Some(ts(2026, 2, 12, 14, 22, 0)), 12_480),
        ("file_read", ToolStatus::Restricted, "/docs, /public only", Some(ts(2026, 2, 12, 13, 45, 0)), 8_930),
        ("file_write", ToolStatus::Blocked, "N/A", None, 0),
        ("web_search", ToolStatus::Allowed, "Approved domains only", Some(ts(2026, 2, 12, 14, 30, 0)), 15_200),
        ("code_execution", ToolStatus::Restricted, "Sandboxed environment", Some(ts(2026, 2, 12, 12, 10, 0)), 3_450),
        ("email_send", ToolStatus::Blocked, "N/A", None, 0),
        ("api_call", ToolStatus::Restricted, "Internal APIs only", Some(ts(2026, 2, 12, 14, 28, 0)), 22_100),
        ("shell_exec", ToolStatus::Blocked, "N/A", None, 0),
    ];
    rows.into_iter()
        .map(|(name, status, scope, last_used, invocations)| ToolPermission {
            name: name.into(),
            status,
            scope: scope.into(),
            last_used,
            invocations,
        })
        .collect()
}

pub(super) fn integrations() -> Vec<Integration> {
    let rows: [(&str, &str, IntegrationType, IntegrationStatus, DateTime<Utc>, &str); 8] = [
        ("INT-001", "Splunk Enterprise", IntegrationType::Siem, IntegrationStatus::Connected, ts(2026, 2, 12, 14, 30, 0), "Security event forwarding and correlation with enterprise SIEM."),
        ("INT-002", "Elastic SIEM", IntegrationType::Siem, IntegrationStatus::Disconnected, ts(2026, 2, 10, 8, 0, 0), "Log aggregation and threat hunting via Elasticsearch."),
        ("INT-003", "Datadog APM", IntegrationType::Monitoring, IntegrationStatus::Connected, ts(2026, 2, 12, 14, 29, 0), "Application performance monitoring and real-time metrics."),
        ("INT-004", "PagerDuty", IntegrationType::Webhook, IntegrationStatus::Connected, ts(2026, 2, 12, 14, 25, 0), "Incident alerting and on-call escalation management."),
        ("INT-005", "AWS CloudWatch", IntegrationType::Logging, IntegrationStatus::Connected, ts(2026, 2, 12, 14, 28, 0), "Cloud infrastructure logging and metric collection."),
        ("INT-006", "Okta SSO", IntegrationType::Identity, IntegrationStatus::Error, ts(2026, 2, 11, 16, 0, 0), "Single sign-on and identity management integration."),
        ("INT-007", "Slack Alerts", IntegrationType::Webhook, IntegrationStatus::Connected, ts(2026, 2, 12, 14, 31, 0), "Real-time security alert notifications to Slack channels."),
        ("INT-008", "Grafana", IntegrationType::Monitoring, IntegrationStatus::Disconnected, ts(2026, 2, 9, 12, 0, 0), "Custom dashboarding and metric visualization."),
    ];
    rows.into_iter()
        .map(|(id, name, kind, status, last_sync, desc)| Integration {
            id: id.into(),
            name: name.into(),
            kind,
            status,
            last_sync,
            description: desc.into(),
        })
        .collect()
}

pub(super) fn connected_assets() -> Vec<ConnectedAsset> {
    [
        ("App Server", "srv-app-03.internal", AssetStatus::Active),
        ("Database", "db-prod-eu-01", AssetStatus::Active),
        ("API Gateway", "api-gw-main", AssetStatus::Active),
        ("RAG Pipeline", "rag-prod-01", AssetStatus::Warning),
        ("Chat Service", "chat-svc-02", AssetStatus::Active),
    ]
    .into_iter()
    .map(|(name, host, status)| ConnectedAsset {
        name: name.into(),
        host: host.into(),
        status,
    })
    .collect()
}

pub(super) fn recent_incidents() -> Vec<RecentIncident> {
    [
        ("INC-0412", "Suspicious Login", Severity::High, "14:32", "App Server #3", "185.221.xxx", "Eastern Europe", ThreatStatus::UnderInvestigation),
        ("INC-0411", "Injection Detected", Severity::Critical, "13:15", "Chat Interface", "103.45.xxx", "Southeast Asia", ThreatStatus::Active),
        ("INC-0410", "Data Extraction", Severity::High, "11:02", "RAG Pipeline", "45.134.xxx", "South America", ThreatStatus::Mitigated),
        ("INC-0409", "Rate Limit Exceeded", Severity::Medium, "09:48", "API Gateway", "91.207.xxx", "Central Asia", ThreatStatus::Resolved),
    ]
    .into_iter()
    .map(|(id, kind, severity, time, asset, ip, geo, status)| RecentIncident {
        id: id.into(),
        kind: kind.into(),
        severity,
        time: time.into(),
        asset: asset.into(),
        source_ip: ip.into(),
        geo: geo.into(),
        status,
    })
    .collect()
}

pub(super) fn session_timeline() -> Vec<TimelinePoint> {
    [
        ("08:00", 12, 1),
        ("09:00", 28, 3),
        ("10:00", 45, 5),
        ("11:00", 52, 4),
        ("12:00", 61, 8),
        ("13:00", 48, 6),
        ("14:00", 67, 12),
        ("15:00", 54, 7),
        ("16:00", 42, 5),
    ]
    .into_iter()
    .map(|(time, sessions, anomalies)| TimelinePoint {
        time: time.into(),
        sessions,
        anomalies,
    })
    .collect()
}

pub(super) fn models() -> Vec<ModelStatus> {
    [
        ("Injection Classifier v3.2", ModelState::Active, 97.2, 12, day(2026, 2, 10)),
        ("Behavioral Anomaly Detector", ModelState::Active, 94.8, 18, day(2026, 2, 9)),
        ("Semantic Similarity Engine", ModelState::Active, 96.1, 8, day(2026, 2, 8)),
        ("Jailbreak Pattern Matcher", ModelState::Degraded, 91.3, 24, day(2026, 2, 6)),
    ]
    .into_iter()
    .map(|(name, state, accuracy, latency_ms, last_updated)| ModelStatus {
        name: name.into(),
        state,
        accuracy,
        latency_ms,
        last_updated,
    })
    .collect()
}

pub(super) fn performance() -> Vec<PerfSample> {
    [
        ("00:00", 1200, 11, 34, 62),
        ("04:00", 800, 9, 22, 58),
        ("08:00", 3400, 14, 56, 71),
        ("12:00", 5200, 18, 72, 78),
        ("16:00", 4800, 16, 68, 76),
        ("20:00", 2600, 12, 45, 66),
    ]
    .into_iter()
    .map(|(time, requests, latency_ms, cpu, memory)| PerfSample {
        time: time.into(),
        requests,
        latency_ms,
        cpu,
        memory,
    })
    .collect()
}

pub(super) fn geo_threats() -> Vec<GeoRegion> {
    [
        ("Eastern Europe", 50.4, 30.5, 1240, Severity::Critical),
        ("Southeast Asia", 13.7, 100.5, 890, Severity::High),
        ("South America", -11.2, 17.9, 456, Severity::Medium),
        ("North America", 40.7, -74.0, 234, Severity::Low),
        ("Central Asia", 41.3, 69.3, 178, Severity::Medium),
    ]
    .into_iter()
    .map(|(region, lat, lng, count, severity)| GeoRegion {
        region: region.into(),
        lat,
        lng,
        count,
        severity,
    })
    .collect()
}

fn event(time: &str, action: &str, actor: &str) -> TimelineEvent {
    TimelineEvent {
        time: time.into(),
        action: action.into(),
        actor: actor.into(),
    }
}

pub(super) fn incident_details() -> BTreeMap<String, IncidentRecord> {
    let mut map = BTreeMap::new();

    map.insert(
        "THR-2026-0891".to_string(),
        IncidentRecord {
            id: "THR-2026-0891".into(),
            kind: "Prompt Injection".into(),
            severity: Severity::Critical,
            status: ThreatStatus::Active,
            timestamp: ts(2026, 2, 12, 14, 32, 0),
            source_ip: "185.221.xxx".into(),
            geo_location: "Eastern Europe".into(),
            affected_asset: "App Server #3".into(),
            description: "Context override attempt targeting system prompt extraction via nested instruction injection.".into(),
            narrative: "An adversary operating from Eastern Europe initiated a sophisticated multi-layered prompt injection attack targeting App Server #3. The attacker used nested instruction encoding to bypass input sanitization, attempting to extract the system prompt and underlying model configuration. The injection payload contained base64-encoded override instructions hidden within seemingly benign user queries. Initial detection was triggered by the Injection Classifier v3.2 at 14:32 UTC with a confidence score of 0.96.".into(),
            affected_components: vec![
                "App Server #3".into(),
                "LLM Gateway".into(),
                "Input Sanitizer".into(),
                "Response Filter".into(),
            ],
            timeline: vec![
                event("14:30:12", "Initial suspicious prompt detected", "Injection Classifier"),
                event("14:30:14", "Prompt flagged - confidence 0.96", "Risk Scoring Engine"),
                event("14:30:15", "Session anomaly score elevated to 92", "Behavioral Model"),
                event("14:32:00", "Incident created - THR-2026-0891", "System"),
                event("14:32:05", "Automated block applied to source IP", "Firewall"),
                event("14:35:00", "SOC analyst notified via PagerDuty", "Alert System"),
                event("14:42:00", "Manual investigation initiated", "SOC-Analyst-04"),
            ],
            recommendations: vec![
                "Block source IP range 185.221.xxx/24 at WAF level".into(),
                "Update injection classifier with new attack pattern signatures".into(),
                "Review and rotate system prompts for affected services".into(),
                "Enable enhanced logging for App Server #3 for 72 hours".into(),
                "Conduct forensic analysis of all sessions from source ASN".into(),
            ],
        },
    );

    map.insert(
        "INC-0412".to_string(),
        IncidentRecord {
            id: "INC-0412".into(),
            kind: "Suspicious Login".into(),
            severity: Severity::High,
            status: ThreatStatus::UnderInvestigation,
            timestamp: ts(2026, 2, 12, 14, 32, 0),
            source_ip: "185.221.xxx".into(),
            geo_location: "Eastern Europe".into(),
            affected_asset: "App Server #3".into(),
            description: "Suspicious login attempt from unrecognized geo-location using valid credentials.".into(),
            narrative: "A login attempt was detected from Eastern Europe using valid credentials for a privileged admin account. The geo-location and device fingerprint do not match any known user patterns. The session exhibited anomalous behavior patterns consistent with credential stuffing or stolen token replay attacks.".into(),
            affected_components: vec![
                "App Server #3".into(),
                "Auth Service".into(),
                "Session Manager".into(),
            ],
            timeline: vec![
                event("14:30:00", "Login attempt from new geo-location", "Auth Service"),
                event("14:30:02", "Device fingerprint mismatch detected", "Behavioral Model"),
                event("14:32:00", "Incident created", "System"),
                event("14:33:00", "Session flagged for review", "SOC-Analyst-02"),
            ],
            recommendations: vec![
                "Force password reset for affected account".into(),
                "Review all sessions from this IP range".into(),
                "Enable additional MFA challenge for admin accounts".into(),
                "Audit recent privilege escalation events".into(),
            ],
        },
    );

    map
}
