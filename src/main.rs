use aegisops::cli::args::{Cli, Commands, EXIT_ERROR};
use aegisops::cli::commands::{
    cmd_behavior, cmd_config, cmd_incident, cmd_integrations, cmd_policies, cmd_sessions,
    cmd_settings, cmd_summary, cmd_threats, cmd_tools,
};
use aegisops::cli::render;
use aegisops::config::ConsoleConfig;
use clap::Parser;
use colored::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging before any command runs.
    // log_level/log_format are consumed here; only command is forwarded.
    if let Err(e) = aegisops::logging::init(cli.log_level.into(), cli.log_format) {
        eprintln!("{}: Failed to initialize logging: {}", "Error".red().bold(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    let config = match ConsoleConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("{}: {}", "Error".red().bold(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // CLI flag wins over the config file for color handling.
    render::apply_color_mode(cli.color.unwrap_or(config.output.color));

    match run(cli.command, &config) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands, config: &ConsoleConfig) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Summary { spin_ms, format } => cmd_summary(config, spin_ms, format),
        Commands::Threats {
            severity,
            kind,
            show,
            format,
        } => cmd_threats(config, severity, kind, show.as_deref(), format),
        Commands::Sessions {
            show,
            timeline,
            format,
        } => cmd_sessions(config, show.as_deref(), timeline, format),
        Commands::Behavior { format } => cmd_behavior(config, format),
        Commands::Policies { action } => cmd_policies(config, action),
        Commands::Tools { format } => cmd_tools(config, format),
        Commands::Integrations { show, format } => {
            cmd_integrations(config, show.as_deref(), format)
        }
        Commands::Incident { id, format } => cmd_incident(config, &id, format),
        Commands::Settings { action } => cmd_settings(config, action),
        Commands::Config { action } => cmd_config(action),
    }
}
