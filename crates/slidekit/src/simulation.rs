//! Deterministic, headless simulation of a transition.
//!
//! Drives a controller over a [`RectPanel`] with a fixed tick and a script
//! of host calls, recording every lifecycle event and panel position.
//!
//! # Example
//!
//! ```ignore
//! let recording = run_simulation(
//!     &TransitionConfig::default(),
//!     RectPanel::new(Vec2::ZERO, Size::new(400.0, 80.0)),
//!     &SimulationConfig::new(60, 5.0),
//!     &[ScriptedAction::show(0.0)],
//! )?;
//! assert_eq!(recording.events.len(), 4);
//! ```

use crate::config::TransitionConfig;
use crate::controller::{EventLog, TransitionController, TransitionEvent, TransitionState};
use crate::geometry::Vec2;
use crate::panel::RectPanel;
use crate::result::{SlideError, SlideResult};
use crate::timeline::ObservedEvent;
use serde::{Deserialize, Serialize};

/// Scripted actions within this many seconds of a tick are applied on it.
const TICK_EPSILON: f64 = 1e-9;

/// Configuration for simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Ticks per second
    pub fps: u32,
    /// Simulated seconds
    pub duration_secs: f64,
    /// Whether to record a position sample on every tick
    pub record_samples: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            duration_secs: 5.0,
            record_samples: true,
        }
    }
}

impl SimulationConfig {
    /// Create a config with the given rate and duration
    #[must_use]
    pub const fn new(fps: u32, duration_secs: f64) -> Self {
        Self {
            fps,
            duration_secs,
            record_samples: true,
        }
    }

    /// Set the tick rate
    #[must_use]
    pub const fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set the simulated duration
    #[must_use]
    pub const fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Enable or disable per-tick position samples
    #[must_use]
    pub const fn with_sample_recording(mut self, enabled: bool) -> Self {
        self.record_samples = enabled;
        self
    }

    /// Seconds per tick
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tick_secs(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Number of ticks the run lasts
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn total_ticks(&self) -> u64 {
        (self.duration_secs * f64::from(self.fps)).ceil().max(0.0) as u64
    }

    fn validate(&self) -> SlideResult<()> {
        if self.fps == 0 {
            return Err(SlideError::invalid_argument("fps must be greater than zero"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(SlideError::invalid_argument(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }
}

/// A host call made by the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// `show()`
    Show,
    /// `hide()`
    Hide,
    /// `show_with_message(text)`
    ShowMessage(String),
}

/// An action and the time it should happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedAction {
    /// Simulated seconds
    pub at_secs: f64,
    /// What to call
    pub action: Action,
}

impl ScriptedAction {
    /// Show at `at_secs`
    #[must_use]
    pub const fn show(at_secs: f64) -> Self {
        Self {
            at_secs,
            action: Action::Show,
        }
    }

    /// Hide at `at_secs`
    #[must_use]
    pub const fn hide(at_secs: f64) -> Self {
        Self {
            at_secs,
            action: Action::Hide,
        }
    }

    /// Show `message` at `at_secs`
    #[must_use]
    pub fn show_message(at_secs: f64, message: impl Into<String>) -> Self {
        Self {
            at_secs,
            action: Action::ShowMessage(message.into()),
        }
    }
}

/// Panel position at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Simulated seconds
    pub time_secs: f64,
    /// Panel position
    pub position: Vec2,
    /// Controller state
    pub state: TransitionState,
}

/// A complete simulation recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecording {
    /// Run configuration
    pub simulation: SimulationConfig,
    /// Transition configuration
    pub transition: TransitionConfig,
    /// Every lifecycle event, in firing order
    pub events: Vec<TransitionEvent>,
    /// Per-tick samples (empty when sampling is off)
    pub samples: Vec<PositionSample>,
    /// Ticks simulated
    pub ticks: u64,
    /// Scripted actions that fell after the end of the run
    pub skipped_actions: usize,
    /// State after the last tick
    pub final_state: TransitionState,
    /// Position after the last tick
    pub final_position: Vec2,
    /// `is_shown` after the last tick
    pub is_shown: bool,
    /// Last message shown via `ShowMessage`
    pub message: String,
}

impl SimulationRecording {
    /// Events in the form [`verify_timeline`](crate::timeline::verify_timeline) takes
    #[must_use]
    pub fn observed_events(&self) -> Vec<ObservedEvent> {
        self.events.iter().map(ObservedEvent::from).collect()
    }

    /// Simulated seconds
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f64 {
        self.ticks as f64 / f64::from(self.simulation.fps)
    }

    /// Whether two runs fired the same events at the same times
    #[must_use]
    pub fn same_events(&self, other: &Self) -> bool {
        self.events == other.events
    }
}

/// Run `script` against a controller animating `panel`.
///
/// The controller is activated before the first tick. Each action is
/// applied at the first tick whose time has reached `at_secs`, before that
/// tick advances the controller.
///
/// # Errors
///
/// Returns [`SlideError::InvalidArgument`] for a zero `fps`, a negative or
/// non-finite duration, or a negative or non-finite action time.
pub fn run_simulation(
    transition: &TransitionConfig,
    panel: RectPanel,
    simulation: &SimulationConfig,
    script: &[ScriptedAction],
) -> SlideResult<SimulationRecording> {
    simulation.validate()?;
    if let Some(bad) = script
        .iter()
        .find(|a| !a.at_secs.is_finite() || a.at_secs < 0.0)
    {
        return Err(SlideError::invalid_argument(format!(
            "action time must be a non-negative number of seconds, got {}",
            bad.at_secs
        )));
    }

    let mut pending: Vec<&ScriptedAction> = script.iter().collect();
    pending.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
    let mut pending = pending.into_iter().peekable();

    let log = EventLog::new();
    let mut controller = TransitionController::new(*transition, Some(panel));
    controller.record_into(&log);
    controller.activate();

    let dt = simulation.tick_secs();
    let ticks = simulation.total_ticks();
    let mut message = String::new();
    let mut samples = Vec::new();

    tracing::info!(fps = simulation.fps, ticks, actions = script.len(), "simulation started");

    for _ in 0..ticks {
        let now = controller.clock_secs();
        while let Some(action) = pending.next_if(|a| a.at_secs <= now + TICK_EPSILON) {
            tracing::debug!(at = action.at_secs, now, action = ?action.action, "scripted action");
            match &action.action {
                Action::Show => controller.show(),
                Action::Hide => controller.hide(),
                Action::ShowMessage(text) => controller.show_with_message(text, Some(&mut message)),
            }
        }

        controller.advance(dt);

        if simulation.record_samples {
            samples.push(PositionSample {
                time_secs: controller.clock_secs(),
                position: controller.position().unwrap_or_default(),
                state: controller.state(),
            });
        }
    }

    let skipped_actions = pending.count();
    if skipped_actions > 0 {
        tracing::warn!(skipped_actions, "scripted actions fell after the end of the run");
    }

    let recording = SimulationRecording {
        simulation: *simulation,
        transition: *transition,
        events: log.events(),
        samples,
        ticks,
        skipped_actions,
        final_state: controller.state(),
        final_position: controller.position().unwrap_or_default(),
        is_shown: controller.is_shown(),
        message,
    };
    tracing::info!(
        events = recording.events.len(),
        final_state = %recording.final_state,
        "simulation finished"
    );
    Ok(recording)
}
