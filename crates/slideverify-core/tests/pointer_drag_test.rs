//! Drags performed with raw pointer events through the drag recognizer.

use slideverify_core::{PointerEvent, VerificationOutcome};
use slideverify_testing::prelude::*;

#[test]
fn pointer_drag_onto_target_passes() {
    let mut robot = SlideRobot::new();
    let outcome = robot.pointer_drag(12.0, 97.0, 10);

    assert_eq!(outcome, Some(VerificationOutcome::Pass));
    assert_approx_eq(robot.offset(), 85.0, 1e-4, "landed offset");
    assert_frames_on_track(robot.frames(), 270.0, "pointer drag");
}

#[test]
fn pointer_drag_beyond_track_fails() {
    let mut robot = SlideRobot::new();
    assert_eq!(
        robot.pointer_drag(0.0, 400.0, 8),
        Some(VerificationOutcome::Fail)
    );
    assert_eq!(robot.offset(), 0.0);
}

#[test]
fn tap_without_moving_is_not_judged() {
    let mut robot = SlideRobot::new();
    robot.pointer(PointerEvent::down(1, 40.0));
    robot.pointer(PointerEvent::moved(1, 44.0));
    assert_eq!(robot.pointer(PointerEvent::up(1, 44.0)), None);

    assert!(robot.outcomes().is_empty());
    assert_eq!(robot.offset(), 0.0);
}

#[test]
fn second_finger_does_not_steer_the_handle() {
    let mut robot = SlideRobot::new();
    robot.pointer(PointerEvent::down(1, 0.0));
    robot.pointer(PointerEvent::moved(1, 50.0));
    robot.pointer(PointerEvent::down(2, 0.0));
    robot.pointer(PointerEvent::moved(2, 200.0));
    assert_eq!(robot.offset(), 50.0);

    robot.pointer(PointerEvent::moved(1, 83.0));
    assert_eq!(
        robot.pointer(PointerEvent::up(1, 83.0)),
        Some(VerificationOutcome::Pass)
    );
}

#[test]
fn system_cancel_fails_pointer_drag() {
    let mut robot = SlideRobot::new();
    robot.pointer(PointerEvent::down(7, 0.0));
    robot.pointer(PointerEvent::moved(7, 85.0));
    assert_eq!(
        robot.pointer(PointerEvent::cancel(7, 85.0)),
        Some(VerificationOutcome::Fail)
    );
    assert_eq!(robot.offset(), 0.0);
}
