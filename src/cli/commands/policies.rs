use colored::Colorize;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::process::ExitCode;
use tracing::{info, info_span};

use crate::cli::args::{PoliciesAction, EXIT_NOT_FOUND, EXIT_OK};
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::FixtureStore;
use crate::pages::PoliciesPage;

pub fn cmd_policies(config: &ConsoleConfig, action: PoliciesAction) -> anyhow::Result<ExitCode> {
    let store = FixtureStore::builtin();
    let mut page = PoliciesPage::new(&store);

    match action {
        PoliciesAction::List { format } => {
            let _span = info_span!("policies_list").entered();
            let format = super::resolve_format(format, config);
            match format {
                OutputFormat::Json => {
                    let rows: Vec<serde_json::Value> = page
                        .policies()
                        .iter()
                        .map(|p| {
                            serde_json::json!({
                                "id": p.id,
                                "name": p.name,
                                "category": p.category,
                                "enabled": page.toggles.is_enabled(&p.id),
                                "severity": p.action,
                                "lastModified": p.last_modified,
                            })
                        })
                        .collect();
                    let json = serde_json::json!({
                        "active": page.toggles.active_count(),
                        "total": page.toggles.total(),
                        "policies": rows,
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Text => {
                    render::header("Policy Rules");
                    println!("{}", page.counter().dimmed());
                    for policy in page.policies() {
                        let switch = match page.toggles.is_enabled(&policy.id) {
                            Some(true) => "[on] ".green(),
                            _ => "[off]".dimmed(),
                        };
                        println!(
                            "{} {:<8} {:<28} {:<16} {:<6} {}",
                            switch,
                            policy.id,
                            policy.name,
                            policy.category.to_string(),
                            policy.action.to_string(),
                            policy.last_modified,
                        );
                    }
                }
            }
            Ok(ExitCode::from(EXIT_OK))
        }

        PoliciesAction::Show { id, seed, format } => {
            let _span = info_span!("policies_show", id = %id).entered();
            let format = super::resolve_format(format, config);

            // Preview figures are resampled on every show; --seed pins them.
            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::thread_rng()),
            };
            let Some((policy, enabled, preview)) = page.show(&id, rng.as_mut()) else {
                eprintln!("{}: Policy {} not found", "Error".red().bold(), id);
                return Ok(ExitCode::from(EXIT_NOT_FOUND));
            };

            match format {
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "policy": policy,
                        "enabled": enabled,
                        "impactPreview": preview,
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Text => {
                    render::header(&policy.name);
                    render::detail("Policy ID", &policy.id);
                    render::detail("Category", &policy.category.to_string());
                    render::detail("Action", &policy.action.to_string());
                    render::detail("Last Modified", &policy.last_modified.to_string());
                    let status = if enabled {
                        "Enabled".green()
                    } else {
                        "Disabled".dimmed()
                    };
                    render::detail("Status", &status.to_string());
                    println!();
                    println!("  {}", policy.description);
                    println!();
                    render::header("Policy Impact Preview");
                    render::detail("Blocked events (7d)", &render::thousands(preview.blocked_events as u64));
                    render::detail("False positives (7d)", &render::thousands(preview.false_positives as u64));
                    render::detail("Affected sessions", &render::thousands(preview.affected_sessions as u64));
                }
            }
            Ok(ExitCode::from(EXIT_OK))
        }

        PoliciesAction::Toggle { ids } => {
            let _span = info_span!("policies_toggle", count = ids.len()).entered();
            for id in &ids {
                if page.toggles.is_enabled(id).is_none() {
                    eprintln!("{}: Policy {} not found", "Error".red().bold(), id);
                    return Ok(ExitCode::from(EXIT_NOT_FOUND));
                }
            }
            for id in &ids {
                page.toggle(id);
                let enabled = page.toggles.is_enabled(id).unwrap_or(false);
                let state = if enabled { "enabled".green() } else { "disabled".dimmed() };
                println!("{} {}", id, state);
                info!(policy = %id, enabled, "Policy toggled");
                super::audit_record(
                    config,
                    "policy_toggle",
                    &format!("{} -> {}", id, if enabled { "enabled" } else { "disabled" }),
                );
            }
            println!();
            println!("{}", page.counter());
            Ok(ExitCode::from(EXIT_OK))
        }
    }
}

pub fn cmd_tools(config: &ConsoleConfig, format: Option<OutputFormat>) -> anyhow::Result<ExitCode> {
    let _span = info_span!("tools").entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let page = PoliciesPage::new(&store);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(page.tool_permissions())?);
        }
        OutputFormat::Text => {
            render::header("Tool Permissions Matrix");
            println!(
                "{:<16} {:<12} {:<32} {:>12} {}",
                "TOOL", "STATUS", "SCOPE", "INVOCATIONS", "LAST USED"
            );
            for tool in page.tool_permissions() {
                let last_used = tool
                    .last_used
                    .map(render::clock)
                    .unwrap_or_else(|| "Never".to_string());
                println!(
                    "{:<16} {:<12} {:<32} {:>12} {}",
                    tool.name,
                    render::tool_badge(tool.status),
                    tool.scope,
                    render::thousands(tool.invocations),
                    last_used,
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_OK))
}
