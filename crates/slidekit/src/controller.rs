//! Slide-in / hold / slide-out state machine.
//!
//! # Architecture
//!
//! ```text
//!            show()                 tween done            hold done
//! Hidden ───────────► ShowingIn ───────────────► Shown ───────────► HidingOut
//!   ▲                    │  ▲                      │                   │
//!   │                    │  └──── show() ──────────┤◄── show() ────────┤
//!   │                    └──── hide() ──────────► HidingOut ◄─ hide() ─┘
//!   └──────────────────────── tween done ──────────────────────────────┘
//! ```
//!
//! The controller keeps at most one sequence alive. `show()` and `hide()`
//! discard it and start a new one; a discarded sequence never fires its
//! completion signal. All progress happens in [`TransitionController::advance`],
//! which the host calls once per tick with the elapsed seconds. Time left over
//! after a phase finishes carries into the next phase.

use crate::config::TransitionConfig;
use crate::geometry::{off_screen_anchor, Vec2};
use crate::panel::{Panel, RectPanel};
use crate::sequence::{TextDisplay, TimedSequence};
use crate::signal::{ListenerId, Signal};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Where the panel is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    /// Resting at the off-screen anchor
    Hidden,
    /// Sliding towards the on-screen anchor
    ShowingIn,
    /// Resting at the on-screen anchor, possibly counting down a hold
    Shown,
    /// Sliding towards the off-screen anchor
    HidingOut,
}

impl std::fmt::Display for TransitionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::ShowingIn => write!(f, "showing_in"),
            Self::Shown => write!(f, "shown"),
            Self::HidingOut => write!(f, "hiding_out"),
        }
    }
}

/// The four lifecycle signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// A show sequence started
    ShowStart,
    /// The panel reached the on-screen anchor
    ShowComplete,
    /// A hide sequence started
    HideStart,
    /// The panel reached the off-screen anchor
    HideComplete,
}

impl Lifecycle {
    /// All lifecycles in the order a full cycle fires them.
    pub const ALL: [Self; 4] = [
        Self::ShowStart,
        Self::ShowComplete,
        Self::HideStart,
        Self::HideComplete,
    ];
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowStart => write!(f, "show_start"),
            Self::ShowComplete => write!(f, "show_complete"),
            Self::HideStart => write!(f, "hide_start"),
            Self::HideComplete => write!(f, "hide_complete"),
        }
    }
}

/// Identifies one show or hide sequence. Strictly increasing per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceId(pub u64);

impl std::fmt::Display for SequenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload delivered to lifecycle listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Which signal fired
    pub lifecycle: Lifecycle,
    /// Sequence that fired it
    pub sequence: SequenceId,
    /// Controller time in seconds (sum of every `advance` so far)
    pub time_secs: f64,
    /// Panel position when the signal fired
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
}

impl Tween {
    fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        // NaN and non-positive durations jump straight to `to`
        let duration = if duration > 0.0 { duration } else { 0.0 };
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    fn sample(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        Vec2::lerp(self.from, self.to, self.elapsed / self.duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseKind {
    SlideIn,
    Hold,
    SlideOut,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    SlideIn(Tween),
    Hold { elapsed: f32, duration: f32 },
    SlideOut(Tween),
}

enum Progress {
    /// Phase still running; move the panel if a position is given
    Running(Option<Vec2>),
    /// Phase finished with `overflow` seconds unused
    Finished { overflow: f32, position: Option<Vec2> },
}

impl Phase {
    const fn kind(&self) -> PhaseKind {
        match self {
            Self::SlideIn(_) => PhaseKind::SlideIn,
            Self::Hold { .. } => PhaseKind::Hold,
            Self::SlideOut(_) => PhaseKind::SlideOut,
        }
    }

    fn advance(&mut self, dt: f32) -> Progress {
        match self {
            Self::SlideIn(tween) | Self::SlideOut(tween) => {
                tween.elapsed += dt;
                if tween.elapsed >= tween.duration {
                    Progress::Finished {
                        overflow: tween.elapsed - tween.duration,
                        position: Some(tween.to),
                    }
                } else {
                    Progress::Running(Some(tween.sample()))
                }
            }
            Self::Hold { elapsed, duration } => {
                *elapsed += dt;
                if *elapsed >= *duration {
                    Progress::Finished {
                        overflow: *elapsed - *duration,
                        position: None,
                    }
                } else {
                    Progress::Running(None)
                }
            }
        }
    }
}

/// The single active animation a controller owns.
#[derive(Debug, Clone, Copy)]
struct Sequence {
    id: SequenceId,
    phase: Phase,
}

/// Shared recorder of lifecycle events, handy for hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<TransitionEvent>>>);

impl EventLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded event
    #[must_use]
    pub fn events(&self) -> Vec<TransitionEvent> {
        self.0.borrow().clone()
    }

    /// Recorded lifecycles, in firing order
    #[must_use]
    pub fn lifecycles(&self) -> Vec<Lifecycle> {
        self.0.borrow().iter().map(|e| e.lifecycle).collect()
    }

    /// How many times `lifecycle` fired
    #[must_use]
    pub fn count(&self, lifecycle: Lifecycle) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| e.lifecycle == lifecycle)
            .count()
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Forget recorded events
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: TransitionEvent) {
        self.0.borrow_mut().push(event);
    }
}

/// Animates a panel on and off screen.
///
/// Construct with [`TransitionController::new`]; a `None` panel yields a
/// permanently disabled controller whose every operation is a no-op.
pub struct TransitionController<P: Panel = RectPanel> {
    config: TransitionConfig,
    panel: Option<P>,
    on_screen: Vec2,
    off_screen: Vec2,
    state: TransitionState,
    shown: bool,
    active: Option<Sequence>,
    next_sequence: u64,
    activated: bool,
    clock: f64,
    on_show_start: Signal<TransitionEvent>,
    on_show_complete: Signal<TransitionEvent>,
    on_hide_start: Signal<TransitionEvent>,
    on_hide_complete: Signal<TransitionEvent>,
}

impl<P: Panel> TransitionController<P> {
    /// Build a controller around `panel`.
    ///
    /// The panel's current anchored position becomes the on-screen anchor
    /// and the off-screen anchor is derived from its size. With
    /// `hide_on_init` the panel is snapped off-screen immediately; without
    /// it the panel rests on-screen in `Shown`, but `is_shown` stays false
    /// and `hide()` does nothing until the first `show()`.
    pub fn new(config: TransitionConfig, mut panel: Option<P>) -> Self {
        let (on_screen, off_screen) = match panel.as_mut() {
            Some(panel) => {
                let on_screen = panel.anchored_position();
                let off_screen = off_screen_anchor(
                    on_screen,
                    panel.size(),
                    config.direction,
                    panel.has_enclosing_frame(),
                );
                if config.hide_on_init {
                    panel.set_anchored_position(off_screen);
                }
                (on_screen, off_screen)
            }
            None => {
                tracing::warn!("no panel to animate; transition controller disabled");
                (Vec2::ZERO, Vec2::ZERO)
            }
        };

        let state = if panel.is_some() && !config.hide_on_init {
            TransitionState::Shown
        } else {
            TransitionState::Hidden
        };
        if panel.is_some() {
            tracing::debug!(
                direction = %config.direction,
                on_screen = %on_screen,
                off_screen = %off_screen,
                state = %state,
                "transition controller ready"
            );
        }

        Self {
            config,
            panel,
            on_screen,
            off_screen,
            state,
            shown: false,
            active: None,
            next_sequence: 0,
            activated: false,
            clock: 0.0,
            on_show_start: Signal::new("on_show_start"),
            on_show_complete: Signal::new("on_show_complete"),
            on_hide_start: Signal::new("on_hide_start"),
            on_hide_complete: Signal::new("on_hide_complete"),
        }
    }

    /// Whether a panel was available at construction
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.panel.is_some()
    }

    /// Configuration in effect
    #[must_use]
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// True from a show's start signal until a hide's complete signal
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Whether a sequence (tween or hold) is running
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the running sequence, if any
    #[must_use]
    pub fn active_sequence(&self) -> Option<SequenceId> {
        self.active.map(|s| s.id)
    }

    /// Current panel position; `None` when disabled
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.panel.as_ref().map(Panel::anchored_position)
    }

    /// Where the panel rests when shown
    #[must_use]
    pub fn on_screen_anchor(&self) -> Vec2 {
        self.on_screen
    }

    /// Where the panel rests when hidden
    #[must_use]
    pub fn off_screen_anchor(&self) -> Vec2 {
        self.off_screen
    }

    /// Seconds of `advance` applied so far
    #[must_use]
    pub fn clock_secs(&self) -> f64 {
        self.clock
    }

    /// The animated panel
    #[must_use]
    pub fn panel(&self) -> Option<&P> {
        self.panel.as_ref()
    }

    /// Release the panel
    pub fn into_panel(self) -> Option<P> {
        self.panel
    }

    /// Whether [`activate`](Self::activate) has run
    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Mark the controller active. The first call shows the panel when
    /// `show_on_activate` is set; later calls do nothing.
    ///
    /// Returns true on the first successful activation.
    pub fn activate(&mut self) -> bool {
        if !self.is_enabled() || self.activated {
            return false;
        }
        self.activated = true;
        if self.config.show_on_activate {
            self.show();
        }
        true
    }

    /// Start (or restart) the show sequence from the off-screen anchor.
    pub fn show(&mut self) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        panel.set_anchored_position(self.off_screen);
        self.cancel_active("show");

        let id = self.allocate_sequence();
        self.shown = true;
        self.state = TransitionState::ShowingIn;
        self.active = Some(Sequence {
            id,
            phase: Phase::SlideIn(Tween::new(
                self.off_screen,
                self.on_screen,
                self.config.animation_duration,
            )),
        });
        tracing::debug!(sequence = %id, "show started");
        self.emit(Lifecycle::ShowStart, id, self.clock);
        self.step(0.0);
    }

    /// Start (or restart) the hide sequence from the current position.
    ///
    /// Does nothing unless the panel is shown.
    pub fn hide(&mut self) {
        let Some(from) = self.position() else {
            return;
        };
        if !self.shown {
            return;
        }
        self.cancel_active("hide");

        let id = self.allocate_sequence();
        self.state = TransitionState::HidingOut;
        self.active = Some(Sequence {
            id,
            phase: Phase::SlideOut(Tween::new(
                from,
                self.off_screen,
                self.config.animation_duration,
            )),
        });
        tracing::debug!(sequence = %id, from = %from, "hide started");
        self.emit(Lifecycle::HideStart, id, self.clock);
        self.step(0.0);
    }

    /// Put `message` on `display` (when given), then [`show`](Self::show).
    pub fn show_with_message(&mut self, message: &str, display: Option<&mut dyn TextDisplay>) {
        if let Some(display) = display {
            display.set_text(message);
        }
        self.show();
    }

    /// Advance the active sequence by `dt` seconds.
    ///
    /// Negative and non-finite deltas count as zero.
    pub fn advance(&mut self, dt: f32) {
        if !self.is_enabled() {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.step(dt);
        self.clock += f64::from(dt);
    }

    /// Register a listener for one lifecycle signal.
    pub fn on(
        &mut self,
        lifecycle: Lifecycle,
        listener: impl FnMut(&TransitionEvent) + 'static,
    ) -> ListenerId {
        self.signal_mut(lifecycle).subscribe(listener)
    }

    /// Register `listener` for `ShowStart`
    pub fn on_show_start(&mut self, listener: impl FnMut(&TransitionEvent) + 'static) -> ListenerId {
        self.on(Lifecycle::ShowStart, listener)
    }

    /// Register `listener` for `ShowComplete`
    pub fn on_show_complete(
        &mut self,
        listener: impl FnMut(&TransitionEvent) + 'static,
    ) -> ListenerId {
        self.on(Lifecycle::ShowComplete, listener)
    }

    /// Register `listener` for `HideStart`
    pub fn on_hide_start(&mut self, listener: impl FnMut(&TransitionEvent) + 'static) -> ListenerId {
        self.on(Lifecycle::HideStart, listener)
    }

    /// Register `listener` for `HideComplete`
    pub fn on_hide_complete(
        &mut self,
        listener: impl FnMut(&TransitionEvent) + 'static,
    ) -> ListenerId {
        self.on(Lifecycle::HideComplete, listener)
    }

    /// Register one listener for all four signals.
    ///
    /// Returns the ids in [`Lifecycle::ALL`] order.
    pub fn on_any(&mut self, listener: impl FnMut(&TransitionEvent) + 'static) -> [ListenerId; 4] {
        let shared = Rc::new(RefCell::new(listener));
        Lifecycle::ALL.map(|lifecycle| {
            let shared = Rc::clone(&shared);
            self.on(lifecycle, move |event| (shared.borrow_mut())(event))
        })
    }

    /// Append every lifecycle event to `log`.
    pub fn record_into(&mut self, log: &EventLog) -> [ListenerId; 4] {
        let log = log.clone();
        self.on_any(move |event| log.push(*event))
    }

    /// Remove a listener registered for `lifecycle`.
    pub fn unsubscribe(&mut self, lifecycle: Lifecycle, id: ListenerId) -> bool {
        self.signal_mut(lifecycle).unsubscribe(id)
    }

    fn signal_mut(&mut self, lifecycle: Lifecycle) -> &mut Signal<TransitionEvent> {
        match lifecycle {
            Lifecycle::ShowStart => &mut self.on_show_start,
            Lifecycle::ShowComplete => &mut self.on_show_complete,
            Lifecycle::HideStart => &mut self.on_hide_start,
            Lifecycle::HideComplete => &mut self.on_hide_complete,
        }
    }

    fn allocate_sequence(&mut self) -> SequenceId {
        self.next_sequence += 1;
        SequenceId(self.next_sequence)
    }

    fn cancel_active(&mut self, reason: &'static str) {
        if let Some(sequence) = self.active.take() {
            tracing::debug!(
                sequence = %sequence.id,
                phase = ?sequence.phase.kind(),
                reason,
                "sequence cancelled"
            );
        }
    }

    fn move_panel(&mut self, position: Vec2) {
        if let Some(panel) = self.panel.as_mut() {
            panel.set_anchored_position(position);
        }
    }

    fn emit(&mut self, lifecycle: Lifecycle, sequence: SequenceId, time_secs: f64) {
        let event = TransitionEvent {
            lifecycle,
            sequence,
            time_secs,
            position: self.position().unwrap_or(self.on_screen),
        };
        self.signal_mut(lifecycle).emit(&event);
    }

    /// Run phases until `dt` is used up or the sequence ends.
    fn step(&mut self, dt: f32) {
        let base = self.clock;
        let mut remaining = dt;

        while let Some(sequence) = self.active.as_mut() {
            let id = sequence.id;
            let kind = sequence.phase.kind();
            match sequence.phase.advance(remaining) {
                Progress::Running(position) => {
                    if let Some(position) = position {
                        tracing::trace!(sequence = %id, position = %position, "tween");
                        self.move_panel(position);
                    }
                    break;
                }
                Progress::Finished { overflow, position } => {
                    if let Some(position) = position {
                        self.move_panel(position);
                    }
                    remaining = overflow;
                    let now = base + f64::from(dt - remaining);
                    self.finish_phase(kind, id, now);
                }
            }
        }
    }

    fn finish_phase(&mut self, kind: PhaseKind, id: SequenceId, now: f64) {
        match kind {
            PhaseKind::SlideIn => {
                self.state = TransitionState::Shown;
                self.active = if self.config.auto_hides() {
                    Some(Sequence {
                        id,
                        phase: Phase::Hold {
                            elapsed: 0.0,
                            duration: self.config.on_screen_duration,
                        },
                    })
                } else {
                    None
                };
                tracing::debug!(sequence = %id, holding = self.active.is_some(), "show complete");
                self.emit(Lifecycle::ShowComplete, id, now);
            }
            PhaseKind::Hold => {
                self.state = TransitionState::HidingOut;
                self.active = Some(Sequence {
                    id,
                    phase: Phase::SlideOut(Tween::new(
                        self.on_screen,
                        self.off_screen,
                        self.config.animation_duration,
                    )),
                });
                tracing::debug!(sequence = %id, "hold elapsed, hiding");
                self.emit(Lifecycle::HideStart, id, now);
            }
            PhaseKind::SlideOut => {
                self.state = TransitionState::Hidden;
                self.shown = false;
                self.active = None;
                tracing::debug!(sequence = %id, "hide complete");
                self.emit(Lifecycle::HideComplete, id, now);
            }
        }
    }
}

impl<P: Panel> TimedSequence for TransitionController<P> {
    fn play(&mut self) {
        self.show();
    }

    fn stop(&mut self) {
        self.hide();
    }

    fn is_playing(&self) -> bool {
        self.is_animating()
    }

    fn advance(&mut self, dt: f32) {
        Self::advance(self, dt);
    }
}

impl<P: Panel + std::fmt::Debug> std::fmt::Debug for TransitionController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("config", &self.config)
            .field("panel", &self.panel)
            .field("state", &self.state)
            .field("shown", &self.shown)
            .field("active", &self.active_sequence())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
