//! Timeline check command handler.
//!
//! Orchestrates: resolve config -> expected timeline -> simulate one show
//! -> verify -> render report.

use super::{build_panel, resolve_transition};
use crate::commands::{CheckArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{lifecycle_label, status_label, verdict_label};
use slidekit::{
    expected_timeline, run_simulation, verify_timeline, ExpectedEvent, ScriptedAction,
    SimulationConfig, TimelineReport, TransitionConfig,
};

/// Seconds simulated past the last expected event.
const SETTLE_SECS: f64 = 0.5;

/// Execute the check command.
pub fn execute_check(config: &CliConfig, args: &CheckArgs) -> CliResult<()> {
    if !args.tolerance_ms.is_finite() || args.tolerance_ms < 0.0 {
        return Err(CliError::invalid_argument(format!(
            "tolerance must be a non-negative number of milliseconds, got {}",
            args.tolerance_ms
        )));
    }
    let transition = resolve_transition(&args.transition)?;
    let panel = build_panel(&args.panel)?;

    let expected = expected_timeline(&transition, 0.0);
    let simulation = SimulationConfig::new(args.fps, run_length(&expected)).with_sample_recording(false);

    if config.verbosity.is_verbose() {
        eprintln!(
            "Checking {} expected events at {} fps over {:.3}s",
            expected.len(),
            simulation.fps,
            simulation.duration_secs
        );
    }

    let recording = run_simulation(&transition, panel, &simulation, &single_show(&transition))?;
    let report = verify_timeline(&expected, &recording.observed_events(), args.tolerance_ms);
    tracing::info!(verdict = %report.verdict, max_delta_ms = report.max_delta_ms, "timeline checked");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!(
            "{}",
            render_text_report(&report, args.tolerance_ms, config.verbosity.is_quiet())
        ),
    }

    if report.is_pass() {
        Ok(())
    } else {
        Err(CliError::verification(format!(
            "{}/{} events passed, {} unexpected",
            report.verified_events, report.total_events, report.unexpected_events
        )))
    }
}

/// How long to simulate so every expected event has time to fire.
#[must_use]
pub fn run_length(expected: &[ExpectedEvent]) -> f64 {
    expected
        .iter()
        .map(|e| e.expected_secs)
        .fold(0.0, f64::max)
        + SETTLE_SECS
}

/// Script that produces one uninterrupted show at time zero.
///
/// With `show_on_activate` the activation already shows; a scripted show
/// on top would restart the sequence.
#[must_use]
pub fn single_show(transition: &TransitionConfig) -> Vec<ScriptedAction> {
    if transition.show_on_activate {
        Vec::new()
    } else {
        vec![ScriptedAction::show(0.0)]
    }
}

/// Render a timeline report as text.
#[must_use]
pub fn render_text_report(report: &TimelineReport, tolerance_ms: f64, quiet: bool) -> String {
    let mut out = String::new();
    if !quiet {
        out.push_str(&format!("Timeline (tolerance: {tolerance_ms:.1}ms)\n"));
        for event in &report.events {
            let status = status_label(event.passed);
            match (event.actual_secs, event.delta_ms) {
                (Some(actual), Some(delta)) => out.push_str(&format!(
                    "  {}: expected={:.3}s actual={:.3}s delta={:.3}ms {}\n",
                    lifecycle_label(event.lifecycle),
                    event.expected_secs,
                    actual,
                    delta,
                    status
                )),
                _ => out.push_str(&format!(
                    "  {}: expected={:.3}s actual=MISSING {}\n",
                    lifecycle_label(event.lifecycle),
                    event.expected_secs,
                    status
                )),
            }
        }
        if report.unexpected_events > 0 {
            out.push_str(&format!("  unexpected events: {}\n", report.unexpected_events));
        }
    }
    out.push_str(&format!(
        "Verdict: {} ({}/{} events, max delta: {:.3}ms, mean delta: {:.3}ms)\n",
        verdict_label(report.verdict),
        report.verified_events,
        report.total_events,
        report.max_delta_ms,
        report.mean_delta_ms
    ));
    out
}
