use colored::Colorize;
use std::process::ExitCode;
use tracing::info_span;

use crate::cli::args::{EXIT_NOT_FOUND, EXIT_OK};
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::{FixtureStore, Session};
use crate::pages::{ActivityPage, RiskIndicators};

pub fn cmd_sessions(
    config: &ConsoleConfig,
    show: Option<&str>,
    timeline: bool,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("sessions").entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let mut page = ActivityPage::new(&store);

    if let Some(id) = show {
        if !page.select(id) {
            eprintln!("{}: Session {} not found", "Error".red().bold(), id);
            return Ok(ExitCode::from(EXIT_NOT_FOUND));
        }
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "sessions": page.sessions(),
                "timeline": timeline.then(|| page.timeline()),
                "promptFrequency": timeline.then(|| page.prompt_frequency()),
                "tokenUsageTrend": timeline.then(|| page.token_usage_trend()),
                "selected": page.drawer.selected(),
                "riskIndicators": page.indicators(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            render::header("Session Activity");
            println!(
                "{:<11} {:<10} {:<14} {:>8} {:>8} {:<10} {:>10} {}",
                "ID", "USER", "ENTITY", "PROMPTS", "ANOMALY", "RISK", "TOKENS", "DURATION"
            );
            for session in page.sessions() {
                println!(
                    "{:<11} {:<10} {:<14} {:>8} {:>8} {:<10} {:>10} {}",
                    session.id,
                    session.user_id,
                    session.entity,
                    session.prompt_count,
                    session.anomaly_score,
                    render::severity_badge(session.risk_level),
                    render::thousands(session.token_usage),
                    session.duration,
                );
            }

            if timeline {
                println!();
                render::header("Session Timeline");
                for point in page.timeline() {
                    println!(
                        "  {}  {:>3} sessions  {:>2} anomalies",
                        point.time, point.sessions, point.anomalies
                    );
                }

                println!();
                render::header("Prompt Frequency");
                for slot in page.prompt_frequency() {
                    println!("  {}  {:>4} prompts", slot.hour, slot.count);
                }

                println!();
                render::header("Token Usage Trend");
                for day in page.token_usage_trend() {
                    println!("  {}  {:>10} tokens", day.date, render::thousands(day.tokens));
                }
            }

            if let Some(session) = page.drawer.selected() {
                println!();
                // Indicators are derived from the selected record only.
                let indicators = RiskIndicators::for_session(session);
                print_drawer(session, indicators);
            }
        }
    }

    Ok(ExitCode::from(EXIT_OK))
}

fn print_drawer(session: &Session, indicators: RiskIndicators) {
    render::header(&format!("Session Detail - {}", session.id));
    render::detail("User ID", &session.user_id);
    render::detail("Entity", &session.entity);
    render::detail("Prompt Count", &session.prompt_count.to_string());
    render::detail("Anomaly Score", &session.anomaly_score.to_string());
    render::detail("Risk Level", &render::severity_badge(session.risk_level).to_string());
    render::detail("Token Usage", &render::thousands(session.token_usage));
    render::detail("Start Time", &render::timestamp(session.start_time));
    render::detail("Duration", &session.duration);
    println!();
    render::header("Risk Indicators");
    let flag = |alert: bool, hot: &str, calm: &str| {
        if alert {
            hot.red().to_string()
        } else {
            calm.green().to_string()
        }
    };
    render::detail(
        "Prompt Velocity",
        &flag(indicators.prompt_velocity_elevated, "Elevated", "Normal"),
    );
    render::detail(
        "Semantic Deviation",
        &flag(indicators.semantic_deviation_high, "High", "Low"),
    );
    render::detail(
        "Token Spike",
        &flag(indicators.token_spike_detected, "Detected", "None"),
    );
}
