use colored::Colorize;
use std::process::ExitCode;
use tracing::info_span;

use crate::cli::args::{EXIT_NOT_FOUND, EXIT_OK};
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::{FixtureStore, Integration};
use crate::pages::IntegrationsPage;

pub fn cmd_integrations(
    config: &ConsoleConfig,
    show: Option<&str>,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("integrations").entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let mut page = IntegrationsPage::new(&store);

    if let Some(id) = show {
        if !page.select(id) {
            eprintln!("{}: Integration {} not found", "Error".red().bold(), id);
            return Ok(ExitCode::from(EXIT_NOT_FOUND));
        }
    }

    let tallies = page.tallies();

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "tallies": tallies,
                "integrations": page.integrations(),
                "selected": page.drawer.selected(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            render::header("Integrations");
            println!(
                "{} connected, {} disconnected, {} error",
                tallies.connected.to_string().green(),
                tallies.disconnected,
                tallies.error.to_string().red(),
            );
            println!();
            println!(
                "{:<9} {:<18} {:<12} {:<14} {}",
                "ID", "NAME", "TYPE", "STATUS", "LAST SYNC"
            );
            for integration in page.integrations() {
                println!(
                    "{:<9} {:<18} {:<12} {:<14} {}",
                    integration.id,
                    integration.name,
                    integration.kind.to_string(),
                    render::integration_badge(integration.status),
                    render::timestamp(integration.last_sync),
                );
            }

            if let Some(integration) = page.drawer.selected() {
                println!();
                print_drawer(integration);
            }
        }
    }

    Ok(ExitCode::from(EXIT_OK))
}

fn print_drawer(integration: &Integration) {
    render::header(&format!("Configure - {}", integration.name));
    render::detail("Integration ID", &integration.id);
    render::detail("Type", &integration.kind.to_string());
    render::detail("Status", &render::integration_badge(integration.status).to_string());
    render::detail("Last Sync", &render::timestamp(integration.last_sync));
    println!();
    println!("  {}", integration.description);
}
