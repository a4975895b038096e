//! Lifecycle timing verification.
//!
//! Builds the event timeline a configuration should produce and compares
//! it against what a controller actually emitted.

use crate::config::TransitionConfig;
use crate::controller::{Lifecycle, TransitionEvent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A lifecycle event the configuration predicts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedEvent {
    /// Which signal should fire
    pub lifecycle: Lifecycle,
    /// When, in controller seconds
    pub expected_secs: f64,
}

/// A lifecycle event that actually fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedEvent {
    /// Which signal fired
    pub lifecycle: Lifecycle,
    /// When, in controller seconds
    pub time_secs: f64,
}

impl From<&TransitionEvent> for ObservedEvent {
    fn from(event: &TransitionEvent) -> Self {
        Self {
            lifecycle: event.lifecycle,
            time_secs: event.time_secs,
        }
    }
}

/// Overall verification verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every expected event fired on time and nothing else fired
    Pass,
    /// Something was late, early, missing, or unexpected
    Fail,
    /// Nothing expected and nothing observed
    NoEvents,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::NoEvents => write!(f, "NO EVENTS"),
        }
    }
}

/// Result for one expected event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResult {
    /// Expected lifecycle
    pub lifecycle: Lifecycle,
    /// Which occurrence of `lifecycle` this is (0-based)
    pub occurrence: usize,
    /// Expected time in seconds
    pub expected_secs: f64,
    /// Observed time in seconds, if it fired
    pub actual_secs: Option<f64>,
    /// `actual - expected` in milliseconds
    pub delta_ms: Option<f64>,
    /// Within tolerance
    pub passed: bool,
}

/// Summary of a timeline comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineReport {
    /// Overall verdict
    pub verdict: Verdict,
    /// Per-event results, in expected order
    pub events: Vec<EventResult>,
    /// Number of expected events
    pub total_events: usize,
    /// Expected events that fired within tolerance
    pub verified_events: usize,
    /// Observed events with no expected counterpart
    pub unexpected_events: usize,
    /// Largest absolute delta in milliseconds
    pub max_delta_ms: f64,
    /// Mean absolute delta in milliseconds
    pub mean_delta_ms: f64,
}

impl TimelineReport {
    /// Whether the verdict is [`Verdict::Pass`]
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}

/// Events a single uninterrupted show starting at `show_at` produces.
///
/// Instant slides contribute zero seconds. Without auto-hide the timeline
/// ends at `ShowComplete`.
#[must_use]
pub fn expected_timeline(config: &TransitionConfig, show_at: f64) -> Vec<ExpectedEvent> {
    let slide = if config.is_instant() {
        0.0
    } else {
        f64::from(config.animation_duration)
    };
    let event = |lifecycle, expected_secs| ExpectedEvent {
        lifecycle,
        expected_secs,
    };

    let shown_at = show_at + slide;
    let mut timeline = vec![
        event(Lifecycle::ShowStart, show_at),
        event(Lifecycle::ShowComplete, shown_at),
    ];
    if config.auto_hides() {
        let hide_at = shown_at + f64::from(config.on_screen_duration);
        timeline.push(event(Lifecycle::HideStart, hide_at));
        timeline.push(event(Lifecycle::HideComplete, hide_at + slide));
    }
    timeline
}

/// Compare `observed` against `expected`.
///
/// The n-th expected occurrence of a lifecycle is matched with the n-th
/// observed occurrence of the same lifecycle.
#[must_use]
pub fn verify_timeline(
    expected: &[ExpectedEvent],
    observed: &[ObservedEvent],
    tolerance_ms: f64,
) -> TimelineReport {
    let mut by_lifecycle: HashMap<Lifecycle, Vec<f64>> = HashMap::new();
    for event in observed {
        by_lifecycle
            .entry(event.lifecycle)
            .or_default()
            .push(event.time_secs);
    }

    let mut seen: HashMap<Lifecycle, usize> = HashMap::new();
    let mut results = Vec::with_capacity(expected.len());
    let mut verified = 0;
    let mut max_delta: f64 = 0.0;
    let mut delta_sum: f64 = 0.0;
    let mut delta_count: usize = 0;

    for event in expected {
        let occurrence = seen.entry(event.lifecycle).or_insert(0);
        let actual = by_lifecycle
            .get(&event.lifecycle)
            .and_then(|times| times.get(*occurrence))
            .copied();
        let n = *occurrence;
        *occurrence += 1;

        let result = match actual {
            Some(actual_secs) => {
                let delta_ms = (actual_secs - event.expected_secs) * 1000.0;
                let abs_delta = delta_ms.abs();
                let passed = abs_delta <= tolerance_ms;
                if passed {
                    verified += 1;
                }
                max_delta = max_delta.max(abs_delta);
                delta_sum += abs_delta;
                delta_count += 1;
                EventResult {
                    lifecycle: event.lifecycle,
                    occurrence: n,
                    expected_secs: event.expected_secs,
                    actual_secs: Some(actual_secs),
                    delta_ms: Some(delta_ms),
                    passed,
                }
            }
            None => EventResult {
                lifecycle: event.lifecycle,
                occurrence: n,
                expected_secs: event.expected_secs,
                actual_secs: None,
                delta_ms: None,
                passed: false,
            },
        };
        results.push(result);
    }

    let unexpected: usize = by_lifecycle
        .iter()
        .map(|(lifecycle, times)| {
            let matched = seen.get(lifecycle).copied().unwrap_or(0);
            times.len().saturating_sub(matched)
        })
        .sum();
    if unexpected > 0 {
        tracing::debug!(unexpected, "observed events with no expected counterpart");
    }

    #[allow(clippy::cast_precision_loss)]
    let mean_delta = if delta_count > 0 {
        delta_sum / delta_count as f64
    } else {
        0.0
    };

    let verdict = if expected.is_empty() && observed.is_empty() {
        Verdict::NoEvents
    } else if verified == expected.len() && unexpected == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    TimelineReport {
        verdict,
        events: results,
        total_events: expected.len(),
        verified_events: verified,
        unexpected_events: unexpected,
        max_delta_ms: max_delta,
        mean_delta_ms: mean_delta,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn observed(lifecycle: Lifecycle, secs: f64) -> ObservedEvent {
        ObservedEvent {
            lifecycle,
            time_secs: secs,
        }
    }

    fn full_cycle(times: [f64; 4]) -> Vec<ObservedEvent> {
        Lifecycle::ALL
            .iter()
            .zip(times)
            .map(|(l, t)| observed(*l, t))
            .collect()
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Fail.to_string(), "FAIL");
        assert_eq!(Verdict::NoEvents.to_string(), "NO EVENTS");
    }

    #[test]
    fn test_expected_timeline_default() {
        let timeline = expected_timeline(&TransitionConfig::default(), 1.0);
        let times: Vec<f64> = timeline.iter().map(|e| e.expected_secs).collect();
        let lifecycles: Vec<Lifecycle> = timeline.iter().map(|e| e.lifecycle).collect();
        assert_eq!(lifecycles, Lifecycle::ALL.to_vec());
        assert_eq!(times, vec![1.0, 1.5, 4.5, 5.0]);
    }

    #[test]
    fn test_expected_timeline_without_auto_hide() {
        let config = TransitionConfig::new().with_on_screen_duration(0.0);
        let timeline = expected_timeline(&config, 0.0);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[1].lifecycle, Lifecycle::ShowComplete);
    }

    #[test]
    fn test_expected_timeline_instant() {
        let config = TransitionConfig::new()
            .with_animation_duration(f32::NAN)
            .with_on_screen_duration(2.0);
        let times: Vec<f64> = expected_timeline(&config, 0.0)
            .iter()
            .map(|e| e.expected_secs)
            .collect();
        assert_eq!(times, vec![0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn test_perfect_match() {
        let expected = expected_timeline(&TransitionConfig::default(), 0.0);
        let report = verify_timeline(&expected, &full_cycle([0.0, 0.5, 3.5, 4.0]), 1.0);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.verified_events, 4);
        assert!(report.is_pass());
    }

    #[test]
    fn test_within_tolerance() {
        let expected = expected_timeline(&TransitionConfig::default(), 0.0);
        let report = verify_timeline(&expected, &full_cycle([0.0, 0.51, 3.5, 4.0]), 20.0);
        assert_eq!(report.verdict, Verdict::Pass);
        assert!((report.max_delta_ms - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_exceeds_tolerance() {
        let expected = expected_timeline(&TransitionConfig::default(), 0.0);
        let report = verify_timeline(&expected, &full_cycle([0.0, 0.5, 3.2, 4.0]), 20.0);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.verified_events, 3);
        assert!((report.events[2].delta_ms.unwrap() + 300.0).abs() < 0.01);
    }

    #[test]
    fn test_missing_event() {
        let expected = expected_timeline(&TransitionConfig::default(), 0.0);
        let observed = vec![observed(Lifecycle::ShowStart, 0.0)];
        let report = verify_timeline(&expected, &observed, 20.0);
        assert_eq!(report.verdict, Verdict::Fail);
        assert!(report.events[1].actual_secs.is_none());
    }

    #[test]
    fn test_unexpected_event_fails() {
        let expected = expected_timeline(&TransitionConfig::new().with_on_screen_duration(0.0), 0.0);
        let mut observed = full_cycle([0.0, 0.5, 3.5, 4.0]);
        observed.truncate(2);
        observed.push(observed_extra());
        let report = verify_timeline(&expected, &observed, 20.0);
        assert_eq!(report.verified_events, 2);
        assert_eq!(report.unexpected_events, 1);
        assert_eq!(report.verdict, Verdict::Fail);
    }

    fn observed_extra() -> ObservedEvent {
        observed(Lifecycle::ShowStart, 1.0)
    }

    #[test]
    fn test_nth_occurrence_matching() {
        let expected = vec![
            ExpectedEvent {
                lifecycle: Lifecycle::ShowStart,
                expected_secs: 0.0,
            },
            ExpectedEvent {
                lifecycle: Lifecycle::ShowStart,
                expected_secs: 2.0,
            },
        ];
        let observed = vec![
            observed(Lifecycle::ShowStart, 0.0),
            observed(Lifecycle::ShowStart, 2.0),
        ];
        let report = verify_timeline(&expected, &observed, 1.0);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.events[1].occurrence, 1);
    }

    #[test]
    fn test_no_events() {
        let report = verify_timeline(&[], &[], 20.0);
        assert_eq!(report.verdict, Verdict::NoEvents);
        assert_eq!(report.total_events, 0);
    }

    #[test]
    fn test_report_serializes() {
        let expected = expected_timeline(&TransitionConfig::default(), 0.0);
        let report = verify_timeline(&expected, &full_cycle([0.0, 0.5, 3.5, 4.0]), 1.0);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"verdict\":\"pass\""));
        assert!(json.contains("show_complete"));
    }
}
