//! Shared terminal rendering helpers.

use crate::config::ColorMode;
use crate::fixtures::{
    IntegrationStatus, Severity, ThreatStatus, ToolStatus,
};
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

/// Apply the color mode before any output is produced. `auto` leaves the
/// decision to the `colored` crate, which honors NO_COLOR and tty detection.
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => {}
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

/// Severity badge colored like the dashboard's severity chips.
pub fn severity_badge(severity: Severity) -> ColoredString {
    match severity {
        Severity::Critical => "Critical".red().bold(),
        Severity::High => "High".red(),
        Severity::Medium => "Medium".yellow(),
        Severity::Low => "Low".green(),
    }
}

/// Threat status indicator.
pub fn status_badge(status: ThreatStatus) -> ColoredString {
    match status {
        ThreatStatus::Active => "Active".red(),
        ThreatStatus::Mitigated => "Mitigated".green(),
        ThreatStatus::UnderInvestigation => "Under Investigation".yellow(),
        ThreatStatus::Resolved => "Resolved".dimmed(),
    }
}

pub fn integration_badge(status: IntegrationStatus) -> ColoredString {
    match status {
        IntegrationStatus::Connected => "Connected".green(),
        IntegrationStatus::Disconnected => "Disconnected".dimmed(),
        IntegrationStatus::Error => "Error".red().bold(),
    }
}

pub fn tool_badge(status: ToolStatus) -> ColoredString {
    match status {
        ToolStatus::Allowed => "Allowed".green(),
        ToolStatus::Restricted => "Restricted".yellow(),
        ToolStatus::Blocked => "Blocked".red(),
    }
}

/// "HH:MM" clock time for table columns.
pub fn clock(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// Full timestamp for detail views.
pub fn timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Thousands-separated integer, "12,480".
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Section header in the console's uppercase style.
pub fn header(title: &str) {
    println!("{}", title.to_uppercase().dimmed());
}

/// A "label: value" detail line.
pub fn detail(label: &str, value: &str) {
    println!("  {:<18} {}", format!("{}:", label), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(12_480), "12,480");
        assert_eq!(thousands(1_000_000), "1,000,000");
        assert_eq!(thousands(256_219), "256,219");
    }
}
