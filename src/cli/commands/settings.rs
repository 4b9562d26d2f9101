use colored::Colorize;
use std::process::ExitCode;
use tracing::info_span;

use crate::cli::args::{SettingsAction, EXIT_OK};
use crate::cli::render;
use crate::config::{ConsoleConfig, OutputFormat};
use crate::fixtures::{FixtureStore, ModelState};
use crate::pages::SettingsPage;

pub fn cmd_settings(config: &ConsoleConfig, action: SettingsAction) -> anyhow::Result<ExitCode> {
    match action {
        SettingsAction::Show { format } => settings_show(config, format),
        SettingsAction::Set {
            injection_confidence,
            anomaly_alert,
            rate_limit,
            max_tokens,
            session_timeout,
        } => settings_set(
            config,
            injection_confidence,
            anomaly_alert,
            rate_limit,
            max_tokens,
            session_timeout,
        ),
    }
}

fn settings_show(
    config: &ConsoleConfig,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("settings_show").entered();
    let format = super::resolve_format(format, config);

    let store = FixtureStore::builtin();
    let page = SettingsPage::with_thresholds(&store, config.thresholds);

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "thresholds": page.thresholds,
                "models": page.models(),
                "performance": page.performance(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            print_thresholds(&page);
            println!();

            render::header("Model Status");
            for model in page.models() {
                let state = match model.state {
                    ModelState::Active => "active".green(),
                    ModelState::Degraded => "degraded".yellow(),
                };
                println!(
                    "  {:<28} {:<10} {:>5.1}% accuracy  {:>3}ms  updated {}",
                    model.name, state, model.accuracy, model.latency_ms, model.last_updated
                );
            }
            println!();

            render::header("System Performance");
            for sample in page.performance() {
                println!(
                    "  {}  {:>4} req  {:>3}ms  cpu {:>2}%  mem {:>2}%",
                    sample.time, sample.requests, sample.latency_ms, sample.cpu, sample.memory
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_OK))
}

fn settings_set(
    config: &ConsoleConfig,
    injection_confidence: Option<f64>,
    anomaly_alert: Option<u8>,
    rate_limit: Option<u32>,
    max_tokens: Option<u64>,
    session_timeout: Option<u32>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("settings_set").entered();

    let store = FixtureStore::builtin();
    let mut page = SettingsPage::with_thresholds(&store, config.thresholds);

    if let Some(fraction) = injection_confidence {
        page.thresholds.set_injection_confidence(fraction);
    }
    if let Some(score) = anomaly_alert {
        page.thresholds.set_anomaly_score_alert(score);
    }
    if let Some(per_min) = rate_limit {
        page.thresholds.set_rate_limit_per_min(per_min);
    }
    if let Some(tokens) = max_tokens {
        page.thresholds.set_max_tokens_per_session(tokens);
    }
    if let Some(minutes) = session_timeout {
        page.thresholds.set_session_timeout_min(minutes);
    }
    page.apply();

    print_thresholds(&page);
    println!();
    println!("{}", "Changes applied for this invocation only.".dimmed());

    super::audit_record(
        config,
        "threshold_set",
        &format!(
            "confidence={} anomaly={} rate={} tokens={} timeout={}",
            page.thresholds.confidence_display(),
            page.thresholds.anomaly_score_alert,
            page.thresholds.rate_limit_per_min,
            page.thresholds.max_tokens_display(),
            page.thresholds.timeout_display(),
        ),
    );

    Ok(ExitCode::from(EXIT_OK))
}

fn print_thresholds(page: &SettingsPage<'_>) {
    render::header("Detection Thresholds");
    render::detail(
        "Injection Confidence",
        &page.thresholds.confidence_display(),
    );
    render::detail(
        "Anomaly Score Alert",
        &page.thresholds.anomaly_score_alert.to_string(),
    );
    render::detail(
        "Rate Limit",
        &format!("{}/min", page.thresholds.rate_limit_per_min),
    );
    render::detail("Max Tokens / Session", &page.thresholds.max_tokens_display());
    render::detail("Session Timeout", &page.thresholds.timeout_display());
}
