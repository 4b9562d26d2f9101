use colored::Colorize;
use std::process::ExitCode;
use tracing::{debug, info_span};

use crate::cli::args::{EXIT_NOT_FOUND, EXIT_OK};
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::{FixtureStore, IncidentRecord};
use crate::incident::resolve_incident;

pub fn cmd_incident(
    config: &ConsoleConfig,
    id: &str,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("incident", id = %id).entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let Some(incident) = resolve_incident(&store, id) else {
        // Not-found is a rendered view with a way back, not a failure path.
        println!("{}", "Incident Not Found".red().bold());
        println!();
        println!("  Incident {} not found", id);
        println!("  Back to threats: {}", "aegisops threats".cyan());
        return Ok(ExitCode::from(EXIT_NOT_FOUND));
    };
    debug!(synthesized = !store.incident_details.contains_key(id), "Incident resolved");

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&incident)?);
        }
        OutputFormat::Text => print_incident(&incident),
    }

    Ok(ExitCode::from(EXIT_OK))
}

fn print_incident(incident: &IncidentRecord) {
    render::header(&format!("Incident {} - {}", incident.id, incident.kind));
    render::detail("Threat Type", &incident.kind);
    render::detail("Severity", &render::severity_badge(incident.severity).to_string());
    render::detail("Status", &render::status_badge(incident.status).to_string());
    render::detail("Source IP", &format!("[{}]", incident.source_ip));
    render::detail("Geo Location", &incident.geo_location);
    render::detail("Affected Asset", &incident.affected_asset);
    render::detail("Timestamp", &render::timestamp(incident.timestamp));
    println!();

    render::header("Threat Narrative Summary");
    println!("  {}", incident.narrative);
    println!();

    render::header("Affected AI Components");
    for component in &incident.affected_components {
        println!("  - {}", component);
    }
    println!();

    render::header("Timeline of Actions");
    for event in &incident.timeline {
        println!(
            "  {}  {:<24} {}",
            event.time.dimmed(),
            event.actor.cyan(),
            event.action
        );
    }
    println!();

    render::header("Recommended Response Steps");
    for (i, rec) in incident.recommendations.iter().enumerate() {
        println!("  {:02}  {}", i + 1, rec);
    }
}
