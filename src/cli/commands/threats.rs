use colored::Colorize;
use std::process::ExitCode;
use tracing::{debug, info_span};

use crate::cli::args::{EXIT_NOT_FOUND, EXIT_OK};
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::{FixtureStore, Severity, Threat, ThreatType};
use crate::pages::ThreatsPage;

pub fn cmd_threats(
    config: &ConsoleConfig,
    severity: Option<Severity>,
    kind: Option<ThreatType>,
    show: Option<&str>,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("threats", ?severity, ?kind).entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let mut page = ThreatsPage::new(&store);
    page.set_severity(severity);
    page.set_kind(kind);

    if let Some(id) = show {
        if !page.select(id) {
            eprintln!("{}: Threat {} not found", "Error".red().bold(), id);
            return Ok(ExitCode::from(EXIT_NOT_FOUND));
        }
    }

    let visible = page.visible();
    debug!(total = store.threats.len(), visible = visible.len(), "Threat view derived");

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "severityFilter": severity.map(|s| s.to_string()),
                "typeFilter": kind.map(|k| k.to_string()),
                "threats": visible,
                "selected": page.drawer.selected(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            render::header("Threat Intelligence");
            println!(
                "{:<15} {:<16} {:<10} {:<20} {:<13} {:<15} {}",
                "ID", "TYPE", "SEVERITY", "STATUS", "SOURCE", "ASSET", "TIME"
            );
            for threat in &visible {
                println!(
                    "{:<15} {:<16} {:<10} {:<20} {:<13} {:<15} {}",
                    threat.id,
                    threat.kind.to_string(),
                    render::severity_badge(threat.severity),
                    render::status_badge(threat.status),
                    threat.source_ip,
                    threat.affected_asset,
                    render::clock(threat.timestamp),
                );
            }
            println!();
            println!("{} of {} threats shown", visible.len(), store.threats.len());

            if let Some(threat) = page.drawer.selected() {
                println!();
                print_drawer(threat);
            }
        }
    }

    Ok(ExitCode::from(EXIT_OK))
}

fn print_drawer(threat: &Threat) {
    render::header(&format!("Threat Detail - {}", threat.id));
    render::detail("Type", &threat.kind.to_string());
    render::detail("Severity", &render::severity_badge(threat.severity).to_string());
    render::detail("Status", &render::status_badge(threat.status).to_string());
    render::detail("Source IP", &threat.source_ip);
    render::detail("Geo Location", &threat.geo_location);
    render::detail("Affected Asset", &threat.affected_asset);
    render::detail("Timestamp", &render::timestamp(threat.timestamp));
    println!();
    println!("  {}", threat.description);
    println!();
    println!(
        "  Full incident view: {}",
        format!("aegisops incident {}", threat.id).cyan()
    );
}
