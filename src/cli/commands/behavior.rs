use colored::Colorize;
use std::process::ExitCode;
use tracing::info_span;

use crate::cli::args::EXIT_OK;
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::FixtureStore;
use crate::pages::BehaviorPage;

pub fn cmd_behavior(
    config: &ConsoleConfig,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("behavior").entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let page = BehaviorPage::new(&store);

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "anomalyDistribution": page.anomaly_distribution(),
                "behaviorClusters": page.clusters(),
                "scoredSessions": page.scored_sessions(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            render::header("Behavioral Analytics");
            println!();
            render::header("Anomaly Score Distribution");
            let peak = page
                .anomaly_distribution()
                .iter()
                .map(|b| b.count)
                .max()
                .unwrap_or(1)
                .max(1);
            for bucket in page.anomaly_distribution() {
                let bar = "#".repeat((bucket.count * 40 / peak) as usize);
                println!(
                    "  {:<7} {:>5}  {:<40} {}",
                    bucket.range,
                    bucket.count,
                    bar,
                    bucket.label.dimmed()
                );
            }
            render::detail("Scored sessions", &render::thousands(page.scored_sessions()));

            println!();
            render::header("Behavior Clusters");
            println!(
                "{:>4} {:>4} {:>5} {:>5}  {}",
                "X", "Y", "SIZE", "RISK", "CLUSTER"
            );
            for point in page.clusters() {
                let label = match point.cluster.as_str() {
                    "Malicious" => point.cluster.red().bold(),
                    "Suspicious" => point.cluster.yellow(),
                    _ => point.cluster.green(),
                };
                println!(
                    "{:>4} {:>4} {:>5} {:>5}  {}",
                    point.x, point.y, point.size, point.risk, label
                );
            }

            if let Some(top) = page.riskiest_cluster() {
                println!();
                render::detail(
                    "Highest risk",
                    &format!("{} point at risk {}", top.cluster, top.risk),
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_OK))
}
