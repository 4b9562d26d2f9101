//! Command-line argument parsing.

use crate::config::{ColorMode, OutputFormat};
use crate::fixtures::{Severity, ThreatType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AegisOps - LLM security operations console
#[derive(Parser, Debug)]
#[command(name = "aegisops")]
#[command(author, version, about, long_about = None)]
#[command(about = "AegisOps - security operations console for LLM threat monitoring")]
pub struct Cli {
    /// Logging verbosity level
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Logging output format
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: crate::logging::LogFormat,

    /// Control color output (auto, always, never). Respects NO_COLOR env var.
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Path to config file [default: platform config dir]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overview: KPIs, threat trend, recent incidents, connected assets
    Summary {
        /// Run the globe animation for this many milliseconds before rendering
        #[arg(long)]
        spin_ms: Option<u64>,

        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Threat intelligence table with severity/type filters
    Threats {
        /// Only show threats of this severity
        #[arg(short, long)]
        severity: Option<Severity>,

        /// Only show threats of this type
        #[arg(short = 't', long = "type")]
        kind: Option<ThreatType>,

        /// Open the detail drawer for one threat id
        #[arg(long)]
        show: Option<String>,

        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Monitored session activity
    Sessions {
        /// Open the detail drawer for one session id
        #[arg(long)]
        show: Option<String>,

        /// Include the hourly session timeline
        #[arg(long)]
        timeline: bool,

        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Behavioral analytics: anomaly distribution and session clusters
    Behavior {
        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Manage policy rules
    Policies {
        #[command(subcommand)]
        action: PoliciesAction,
    },

    /// Tool permissions matrix
    Tools {
        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// External integrations
    Integrations {
        /// Open the configure drawer for one integration id
        #[arg(long)]
        show: Option<String>,

        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Full incident detail for a threat or incident id
    Incident {
        /// Threat or incident id (e.g. THR-2026-0890)
        id: String,

        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Detection thresholds and system health
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PoliciesAction {
    /// List policy rules with live toggle state
    List {
        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Show one policy's detail drawer, including its impact preview
    Show {
        /// Policy id (e.g. POL-003)
        id: String,

        /// Seed for the impact preview sampler (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Flip one or more policy switches and print the active counter
    Toggle {
        /// Policy ids to flip
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show thresholds, model status, and performance samples
    Show {
        /// Output format: text, json
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Edit threshold sliders for this invocation (nothing persists)
    Set {
        /// Injection confidence as a fraction, 0.00-1.00
        #[arg(long)]
        injection_confidence: Option<f64>,

        /// Anomaly score alert threshold, 0-100
        #[arg(long)]
        anomaly_alert: Option<u8>,

        /// Rate limit in requests per minute, 0-500 (step 10)
        #[arg(long)]
        rate_limit: Option<u32>,

        /// Max tokens per session, 0-1000000 (step 10000)
        #[arg(long)]
        max_tokens: Option<u64>,

        /// Session timeout in minutes, 0-120 (step 5)
        #[arg(long)]
        session_timeout: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default configuration
    Init {
        /// Path to create config file
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show current configuration
    Show,
}

/// Logging verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Exit codes with distinct semantics.
/// 0 = success, 1 = lookup miss, 2 = error.
pub const EXIT_OK: u8 = 0;
pub const EXIT_NOT_FOUND: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_default_log_level_is_warn() {
        let cli = Cli::parse_from(["aegisops", "threats"]);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn cli_accepts_log_level_debug() {
        let cli = Cli::parse_from(["aegisops", "--log-level", "debug", "threats"]);
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn log_level_global_works_after_subcommand() {
        let cli = Cli::parse_from(["aegisops", "threats", "--log-level", "trace"]);
        assert_eq!(cli.log_level, LogLevel::Trace);
    }

    #[test]
    fn threats_accepts_both_filters() {
        let cli = Cli::parse_from([
            "aegisops", "threats", "--severity", "critical", "--type", "injection",
        ]);
        match cli.command {
            Commands::Threats { severity, kind, .. } => {
                assert_eq!(severity, Some(Severity::Critical));
                assert_eq!(kind, Some(ThreatType::Injection));
            }
            _ => panic!("Expected Threats command"),
        }
    }

    #[test]
    fn threat_type_value_enum_covers_multi_word_variants() {
        let cli = Cli::parse_from(["aegisops", "threats", "--type", "bot-abuse"]);
        match cli.command {
            Commands::Threats { kind, .. } => assert_eq!(kind, Some(ThreatType::BotAbuse)),
            _ => panic!("Expected Threats command"),
        }
    }

    #[test]
    fn behavior_accepts_format_flag() {
        let cli = Cli::parse_from(["aegisops", "behavior", "-F", "json"]);
        match cli.command {
            Commands::Behavior { format } => assert_eq!(format, Some(OutputFormat::Json)),
            _ => panic!("Expected Behavior command"),
        }
    }

    #[test]
    fn policies_toggle_requires_at_least_one_id() {
        assert!(Cli::try_parse_from(["aegisops", "policies", "toggle"]).is_err());
        let cli = Cli::parse_from(["aegisops", "policies", "toggle", "POL-001", "POL-008"]);
        match cli.command {
            Commands::Policies {
                action: PoliciesAction::Toggle { ids },
            } => assert_eq!(ids, vec!["POL-001", "POL-008"]),
            _ => panic!("Expected Policies Toggle command"),
        }
    }

    #[test]
    fn policies_show_accepts_seed() {
        let cli = Cli::parse_from(["aegisops", "policies", "show", "POL-001", "--seed", "42"]);
        match cli.command {
            Commands::Policies {
                action: PoliciesAction::Show { id, seed, .. },
            } => {
                assert_eq!(id, "POL-001");
                assert_eq!(seed, Some(42));
            }
            _ => panic!("Expected Policies Show command"),
        }
    }

    #[test]
    fn settings_set_flags_are_each_optional() {
        let cli = Cli::parse_from(["aegisops", "settings", "set", "--rate-limit", "250"]);
        match cli.command {
            Commands::Settings {
                action:
                    SettingsAction::Set {
                        injection_confidence,
                        rate_limit,
                        ..
                    },
            } => {
                assert_eq!(injection_confidence, None);
                assert_eq!(rate_limit, Some(250));
            }
            _ => panic!("Expected Settings Set command"),
        }
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(EXIT_OK, 0);
        assert_eq!(EXIT_NOT_FOUND, 1);
        assert_eq!(EXIT_ERROR, 2);
        assert_ne!(EXIT_NOT_FOUND, EXIT_ERROR);
    }
}
