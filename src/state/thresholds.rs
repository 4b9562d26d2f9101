//! Detection threshold configuration state.

use serde::{Deserialize, Serialize};

/// The five tunable thresholds from the settings page.
///
/// Each field is edited independently; there is no cross-field validation.
/// Setters clamp to the control's range and snap to its step, so the state
/// holds exactly the values the slider controls could produce.
/// Nothing here persists: edits live for the page's lifetime only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Thresholds {
    /// Injection-classifier confidence cutoff, stored as a fraction.
    pub injection_confidence: f64,
    /// Anomaly score that raises an alert, 0-100.
    pub anomaly_score_alert: u8,
    /// Requests per minute, 0-500 in steps of 10.
    pub rate_limit_per_min: u32,
    /// Token budget per session, 0-1,000,000 in steps of 10,000.
    pub max_tokens_per_session: u64,
    /// Idle timeout in minutes, 0-120 in steps of 5.
    pub session_timeout_min: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            injection_confidence: 0.85,
            anomaly_score_alert: 70,
            rate_limit_per_min: 100,
            max_tokens_per_session: 500_000,
            session_timeout_min: 30,
        }
    }
}

impl Thresholds {
    /// Set the injection confidence from a fraction. The control works in
    /// whole percent, so the value is clamped to [0, 1] and snapped to 0.01.
    pub fn set_injection_confidence(&mut self, fraction: f64) {
        let percent = (fraction * 100.0).clamp(0.0, 100.0).round();
        self.injection_confidence = percent / 100.0;
    }

    pub fn set_anomaly_score_alert(&mut self, score: u8) {
        self.anomaly_score_alert = score.min(100);
    }

    pub fn set_rate_limit_per_min(&mut self, per_min: u32) {
        self.rate_limit_per_min = snap(per_min.min(500) as u64, 10) as u32;
    }

    pub fn set_max_tokens_per_session(&mut self, tokens: u64) {
        self.max_tokens_per_session = snap(tokens.min(1_000_000), 10_000);
    }

    pub fn set_session_timeout_min(&mut self, minutes: u32) {
        self.session_timeout_min = snap(minutes.min(120) as u64, 5) as u32;
    }

    /// "0.85" - confidence rendered as a two-decimal fraction.
    pub fn confidence_display(&self) -> String {
        format!("{:.2}", self.injection_confidence)
    }

    /// "500K" - token budget rendered in thousands.
    pub fn max_tokens_display(&self) -> String {
        format!("{}K", self.max_tokens_per_session / 1000)
    }

    /// "30m" - timeout rendered in minutes.
    pub fn timeout_display(&self) -> String {
        format!("{}m", self.session_timeout_min)
    }
}

fn snap(value: u64, step: u64) -> u64 {
    (value + step / 2) / step * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_configuration() {
        let t = Thresholds::default();
        assert_eq!(t.injection_confidence, 0.85);
        assert_eq!(t.anomaly_score_alert, 70);
        assert_eq!(t.rate_limit_per_min, 100);
        assert_eq!(t.max_tokens_per_session, 500_000);
        assert_eq!(t.session_timeout_min, 30);
    }

    #[test]
    fn confidence_clamps_and_snaps_to_percent() {
        let mut t = Thresholds::default();
        t.set_injection_confidence(1.7);
        assert_eq!(t.injection_confidence, 1.0);
        t.set_injection_confidence(-0.3);
        assert_eq!(t.injection_confidence, 0.0);
        t.set_injection_confidence(0.856);
        assert_eq!(t.injection_confidence, 0.86);
        assert_eq!(t.confidence_display(), "0.86");
    }

    #[test]
    fn rate_limit_snaps_to_step_ten() {
        let mut t = Thresholds::default();
        t.set_rate_limit_per_min(503);
        assert_eq!(t.rate_limit_per_min, 500);
        t.set_rate_limit_per_min(94);
        assert_eq!(t.rate_limit_per_min, 90);
        t.set_rate_limit_per_min(95);
        assert_eq!(t.rate_limit_per_min, 100);
    }

    #[test]
    fn token_budget_snaps_and_renders_in_thousands() {
        let mut t = Thresholds::default();
        t.set_max_tokens_per_session(284_000);
        assert_eq!(t.max_tokens_per_session, 280_000);
        assert_eq!(t.max_tokens_display(), "280K");
        t.set_max_tokens_per_session(2_000_000);
        assert_eq!(t.max_tokens_per_session, 1_000_000);
    }

    #[test]
    fn timeout_snaps_to_step_five() {
        let mut t = Thresholds::default();
        t.set_session_timeout_min(7);
        assert_eq!(t.session_timeout_min, 5);
        t.set_session_timeout_min(8);
        assert_eq!(t.session_timeout_min, 10);
        t.set_session_timeout_min(300);
        assert_eq!(t.session_timeout_min, 120);
        assert_eq!(t.timeout_display(), "120m");
    }

    #[test]
    fn fields_are_independent() {
        let mut t = Thresholds::default();
        t.set_anomaly_score_alert(95);
        // No enforcement that alert < confidence or any other relation.
        assert_eq!(t.injection_confidence, 0.85);
        assert_eq!(t.anomaly_score_alert, 95);
    }
}
