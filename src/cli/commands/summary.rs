use std::process::ExitCode;
use std::time::Duration;
use tracing::info_span;

use crate::cli::args::EXIT_OK;
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::FixtureStore;
use crate::pages::DashboardPage;

/// Frame interval for the globe spin, ~60fps.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn cmd_summary(
    config: &ConsoleConfig,
    spin_ms: Option<u64>,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("summary").entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let mut page = match spin_ms {
        Some(ms) => {
            let page = DashboardPage::mount_animated(&store, FRAME_INTERVAL);
            std::thread::sleep(Duration::from_millis(ms));
            page
        }
        None => DashboardPage::new(&store),
    };
    // Freeze the globe before rendering; drop would stop it anyway, but the
    // rotation readout should not move while we print.
    page.stop_animation();

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "kpi": page.kpi(),
                "threatTrend": page.threat_trend(),
                "recentIncidents": page.recent_incidents(),
                "connectedAssets": page.connected_assets(),
                "geoThreats": page.geo_threats(),
                "globeRotationRadians": page.rotation_radians(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            let kpi = page.kpi();
            render::header("Security Overview");
            render::detail("Total Interactions", &render::thousands(kpi.total_interactions));
            render::detail("Active Threats", &render::thousands(kpi.active_threats));
            render::detail("Injection Attempts", &render::thousands(kpi.injection_attempts));
            render::detail("Session Risk Score", &format!("{:.1}", kpi.session_risk_score));
            render::detail("Last Incident", &kpi.last_incident.to_string());
            render::detail("Last Scan", &kpi.last_scan.to_string());
            println!();

            render::header("Threat Trend");
            for point in page.threat_trend() {
                println!(
                    "  {}  {:>3} threats  {:>3} blocked  {:>2} incidents",
                    point.date, point.threats, point.blocked, point.incidents
                );
            }
            println!();

            render::header("Recent Incidents");
            for incident in page.recent_incidents() {
                println!(
                    "  {}  {:<9} {:<20} {:<10} {:<15} {}",
                    incident.time,
                    incident.id,
                    incident.kind,
                    render::severity_badge(incident.severity),
                    incident.asset,
                    render::status_badge(incident.status),
                );
            }
            println!();

            render::header("Connected Assets");
            for asset in page.connected_assets() {
                println!("  {:<14} {}", asset.name, asset.host);
            }

            if spin_ms.is_some() {
                println!();
                println!("  globe rotation: {:.4} rad", page.rotation_radians());
            }
        }
    }

    Ok(ExitCode::from(EXIT_OK))
}
