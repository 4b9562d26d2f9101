//! Console configuration (TOML file plus defaults).

mod settings;

pub use settings::{
    AuditSettings, ColorMode, ConfigError, ConsoleConfig, OutputConfig, OutputFormat,
};
