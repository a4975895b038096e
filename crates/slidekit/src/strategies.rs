//! Proptest strategies for driving a controller with random call sequences.
//!
//! Use these against a real [`TransitionController`] and check its
//! invariants after every step:
//!
//! ```rust,ignore
//! proptest! {
//!     #[test]
//!     fn prop_panel_never_strays(ops in controller_ops(64)) {
//!         let mut controller = TransitionController::new(config, Some(panel));
//!         for op in &ops {
//!             apply_op(&mut controller, op);
//!             // position stays on the off/on segment
//!         }
//!     }
//! }
//! ```

use crate::controller::TransitionController;
use crate::panel::Panel;
use proptest::prelude::*;

/// One host interaction with a controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerOp {
    /// `show()`
    Show,
    /// `hide()`
    Hide,
    /// `activate()`
    Activate,
    /// `advance(dt)`
    Advance(f32),
}

/// Apply `op` to `controller`.
pub fn apply_op<P: Panel>(controller: &mut TransitionController<P>, op: &ControllerOp) {
    match op {
        ControllerOp::Show => controller.show(),
        ControllerOp::Hide => controller.hide(),
        ControllerOp::Activate => {
            controller.activate();
        }
        ControllerOp::Advance(dt) => controller.advance(*dt),
    }
}

/// Tick deltas a host might plausibly report, including stalls.
pub fn any_tick() -> impl Strategy<Value = f32> {
    prop_oneof![
        6 => 0.001f32..0.05,
        2 => 0.05f32..0.5,
        1 => 0.5f32..5.0,
        1 => Just(0.0f32),
    ]
}

/// Any single operation, weighted towards ticking.
pub fn any_op() -> impl Strategy<Value = ControllerOp> {
    prop_oneof![
        2 => Just(ControllerOp::Show),
        2 => Just(ControllerOp::Hide),
        1 => Just(ControllerOp::Activate),
        8 => any_tick().prop_map(ControllerOp::Advance),
    ]
}

/// Sequences of up to `max_len` operations.
pub fn controller_ops(max_len: usize) -> impl Strategy<Value = Vec<ControllerOp>> {
    prop::collection::vec(any_op(), 0..=max_len)
}
