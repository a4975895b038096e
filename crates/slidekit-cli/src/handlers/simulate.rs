//! Simulate command handler.
//!
//! Orchestrates: resolve config -> build script -> run simulation -> render.

use super::{build_panel, resolve_transition};
use crate::commands::{OutputFormat, SimulateArgs};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{heading, lifecycle_label};
use slidekit::{run_simulation, ScriptedAction, SimulationConfig, SimulationRecording};

/// Execute the simulate command.
pub fn execute_simulate(config: &CliConfig, args: &SimulateArgs) -> CliResult<()> {
    let transition = resolve_transition(&args.transition)?;
    let panel = build_panel(&args.panel)?;
    let simulation = SimulationConfig::new(args.fps, args.duration).with_sample_recording(args.samples);
    let script = build_script(args);

    if script.is_empty() && !transition.show_on_activate {
        tracing::warn!("nothing scheduled; pass --show-at or enable show_on_activate");
    }

    let recording = run_simulation(&transition, panel, &simulation, &script)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recording)?),
        OutputFormat::Text => print!("{}", render_text(&recording, config.verbosity.is_quiet())),
    }
    Ok(())
}

/// Turn `--show-at`/`--hide-at`/`--message` into a script.
///
/// The message rides on the earliest show.
#[must_use]
pub fn build_script(args: &SimulateArgs) -> Vec<ScriptedAction> {
    let mut shows = args.show_at.clone();
    shows.sort_by(f64::total_cmp);

    let mut script: Vec<ScriptedAction> = shows
        .iter()
        .enumerate()
        .map(|(i, &at)| match (&args.message, i) {
            (Some(message), 0) => ScriptedAction::show_message(at, message.clone()),
            _ => ScriptedAction::show(at),
        })
        .collect();
    script.extend(args.hide_at.iter().map(|&at| ScriptedAction::hide(at)));
    script
}

/// Render a recording as text.
///
/// `quiet` keeps only the final summary line.
#[must_use]
pub fn render_text(recording: &SimulationRecording, quiet: bool) -> String {
    let summary = format!(
        "Final: {} at {} (shown: {})\n",
        recording.final_state, recording.final_position, recording.is_shown
    );
    if quiet {
        return summary;
    }

    let mut out = format!(
        "{} {} ticks at {} fps ({:.3}s), direction {}\n",
        heading("Simulation:"),
        recording.ticks,
        recording.simulation.fps,
        recording.duration_secs(),
        recording.transition.direction
    );
    if recording.events.is_empty() {
        out.push_str("  (no events)\n");
    }
    for event in &recording.events {
        out.push_str(&format!(
            "  {:>8.3}s  {} {:<4} {}\n",
            event.time_secs,
            lifecycle_label(event.lifecycle),
            event.sequence.to_string(),
            event.position
        ));
    }
    if !recording.samples.is_empty() {
        out.push_str(&format!("{}\n", heading("Samples:")));
        for sample in &recording.samples {
            out.push_str(&format!(
                "  {:>8.3}s  {:<10} {}\n",
                sample.time_secs,
                sample.state.to_string(),
                sample.position
            ));
        }
    }
    if !recording.message.is_empty() {
        out.push_str(&format!("Message: {}\n", recording.message));
    }
    if recording.skipped_actions > 0 {
        out.push_str(&format!(
            "Skipped {} action(s) scheduled after the end of the run\n",
            recording.skipped_actions
        ));
    }
    out.push_str(&summary);
    out
}
