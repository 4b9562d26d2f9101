//! CLI command implementations.
//!
//! Each submodule implements one top-level command (summary, threats,
//! sessions, behavior, policies, tools, integrations, incident, settings,
//! config).

pub mod behavior;
pub mod config;
pub mod incident;
pub mod integrations;
pub mod policies;
pub mod sessions;
pub mod settings;
pub mod summary;
pub mod threats;

pub use behavior::cmd_behavior;
pub use config::cmd_config;
pub use incident::cmd_incident;
pub use integrations::cmd_integrations;
pub use policies::{cmd_policies, cmd_tools};
pub use sessions::cmd_sessions;
pub use settings::cmd_settings;
pub use summary::cmd_summary;
pub use threats::cmd_threats;

use crate::config::{ConsoleConfig, OutputFormat};
use crate::logging::audit::{AuditLimits, AuditTrail};
use tracing::warn;

/// Resolve the effective output format: CLI flag, then config, then text.
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &ConsoleConfig) -> OutputFormat {
    flag.unwrap_or(config.output.format)
}

/// Append an entry to the audit trail when it is enabled. Audit failures
/// are logged, never fatal: the console keeps working without its trail.
pub(crate) fn audit_record(config: &ConsoleConfig, action: &str, detail: &str) {
    if !config.audit.enabled {
        return;
    }
    let limits = AuditLimits {
        max_file_bytes: config.audit.max_file_bytes,
        max_rotated_files: config.audit.max_rotated_files,
    };
    let result = AuditTrail::open(&config.audit.resolved_path(), limits)
        .and_then(|trail| trail.record(action, detail));
    if let Err(e) = result {
        warn!(error = %e, action, "Failed to record audit entry");
    }
}
