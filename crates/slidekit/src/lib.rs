//! Slidekit: slide-in / hold / slide-out transitions for transient UI panels
//!
//! A [`TransitionController`] moves a [`Panel`] between an on-screen anchor
//! and an off-screen anchor derived from the panel's size and a
//! [`SlideDirection`]. The host drives it by calling
//! [`advance`](TransitionController::advance) once per tick; listeners are
//! told when a show or hide starts and completes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                       SLIDEKIT Architecture                      │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌──────────────┐    ┌────────────┐           │
//! │   │ Transition │    │ Transition   │    │ Panel      │           │
//! │   │ Config     │───►│ Controller   │───►│ (anchored  │           │
//! │   │ (YAML/JSON)│    │ (state mach.)│    │  position) │           │
//! │   └────────────┘    └──────┬───────┘    └────────────┘           │
//! │                            │ Signal<TransitionEvent>             │
//! │                            ▼                                     │
//! │   ┌────────────┐    ┌──────────────┐    ┌────────────┐           │
//! │   │ EventLog   │───►│ Timeline     │    │ Simulation │           │
//! │   │            │    │ verification │◄───│ (headless) │           │
//! │   └────────────┘    └──────────────┘    └────────────┘           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use slidekit::{RectPanel, Size, TransitionConfig, TransitionController, TransitionState, Vec2};
//!
//! let panel = RectPanel::new(Vec2::new(0.0, 0.0), Size::new(300.0, 60.0));
//! let mut toast = TransitionController::new(TransitionConfig::default(), Some(panel));
//!
//! toast.show();
//! toast.advance(0.5);
//! assert_eq!(toast.state(), TransitionState::Shown);
//! ```

#![warn(missing_docs)]

/// Single-threaded multi-listener signals
pub mod signal;

mod config;
mod controller;
mod geometry;
mod panel;
mod result;
mod sequence;

/// Frame player for decorative sprite loops
pub mod flipbook;

/// Typewriter text reveal
pub mod reveal;

/// Headless, fixed-tick simulation
pub mod simulation;

/// Expected-versus-observed lifecycle timing
pub mod timeline;

/// Proptest strategies for controller call sequences
#[cfg(any(test, feature = "proptest"))]
pub mod strategies;

pub use config::TransitionConfig;
pub use controller::{
    EventLog, Lifecycle, SequenceId, TransitionController, TransitionEvent, TransitionState,
};
pub use flipbook::FramePlayer;
pub use geometry::{off_screen_anchor, Size, SlideDirection, Vec2, OFF_SCREEN_MARGIN};
pub use panel::{Panel, RectPanel};
pub use result::{SlideError, SlideResult};
pub use reveal::TextReveal;
pub use sequence::{advance_all, TextDisplay, TimedSequence};
pub use signal::{ListenerId, Signal};
pub use simulation::{
    run_simulation, Action, PositionSample, ScriptedAction, SimulationConfig, SimulationRecording,
};
pub use timeline::{
    expected_timeline, verify_timeline, EventResult, ExpectedEvent, ObservedEvent,
    TimelineReport, Verdict,
};
