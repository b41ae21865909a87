//! Assertion utilities for robot testing
//!
//! Helpers for validating widget state after a scripted drag.

use slideverify_core::{OffsetState, SlideFrame};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert both offset cells.
pub fn assert_offset_state(actual: OffsetState, committed: f32, clamped: f32, msg: &str) {
    assert_approx_eq(
        actual.committed,
        committed,
        f32::EPSILON,
        &format!("{} - committed", msg),
    );
    assert_approx_eq(
        actual.clamped,
        clamped,
        f32::EPSILON,
        &format!("{} - clamped", msg),
    );
}

/// Assert that every frame keeps the handle and piece together inside the track.
pub fn assert_frames_on_track(frames: &[SlideFrame], max_travel: f32, msg: &str) {
    for (index, frame) in frames.iter().enumerate() {
        assert_eq!(
            frame.handle_x, frame.piece_x,
            "{}: frame {} splits handle and piece",
            msg, index
        );
        assert!(
            (0.0..=max_travel).contains(&frame.handle_x),
            "{}: frame {} offset {} outside 0..={}",
            msg,
            index,
            frame.handle_x,
            max_travel
        );
    }
}

/// Assert that a collection has an expected count.
pub fn assert_count<T: std::fmt::Debug>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {:?}",
        msg,
        expected,
        items
    );
}
