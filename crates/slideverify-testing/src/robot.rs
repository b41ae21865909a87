//! Robot driver for scripted drag sessions.
//!
//! This module provides a robot-style testing API that allows tests to:
//! - Feed gesture samples or raw pointer events into a real widget
//! - Advance frame time to exercise stall handling
//! - Collect every rendered frame and reported outcome
//!
//! # Example
//!
//! ```
//! use slideverify_core::VerificationOutcome;
//! use slideverify_testing::robot::SlideRobot;
//!
//! let mut robot = SlideRobot::new();
//! robot.drag_through(&[20.0, 60.0, 85.0]);
//! assert_eq!(robot.release(), Some(VerificationOutcome::Pass));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use slideverify_core::{
    ConfigError, DragGesture, DragSample, PointerEvent, PointerId, SlideFrame, SlideUpdate,
    SlideVerify, SlideVerifyConfig, VerificationOutcome,
};

/// Nanoseconds per frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Drives one widget instance the way a host would.
pub struct SlideRobot {
    widget: SlideVerify,
    recognizer: DragGesture,
    outcomes: Rc<RefCell<Vec<VerificationOutcome>>>,
    frames: Vec<SlideFrame>,
    last_translation: f32,
    frame_time_nanos: u64,
    next_pointer: PointerId,
}

impl Default for SlideRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideRobot {
    /// Robot around a widget with the default configuration.
    pub fn new() -> Self {
        Self::attach(SlideVerify::default())
    }

    pub fn with_config(config: SlideVerifyConfig) -> Result<Self, ConfigError> {
        SlideVerify::new(config).map(Self::attach)
    }

    fn attach(mut widget: SlideVerify) -> Self {
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        {
            let outcomes = Rc::clone(&outcomes);
            widget.set_outcome_listener(move |outcome| outcomes.borrow_mut().push(outcome));
        }
        Self {
            widget,
            recognizer: DragGesture::new(),
            outcomes,
            frames: Vec::new(),
            last_translation: 0.0,
            frame_time_nanos: 0,
            next_pointer: 1,
        }
    }

    pub fn widget(&self) -> &SlideVerify {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut SlideVerify {
        &mut self.widget
    }

    /// Feed a single sample and record the frame it renders.
    pub fn send(&mut self, sample: DragSample) -> SlideUpdate {
        self.last_translation = sample.translation_x;
        let update = self.widget.handle_sample(sample);
        self.frames.push(update.frame);
        update
    }

    /// Send one active sample per translation and return the rendered offsets.
    pub fn drag_through(&mut self, translations: &[f32]) -> Vec<f32> {
        translations
            .iter()
            .map(|&x| self.send(DragSample::active(x)).frame.handle_x)
            .collect()
    }

    /// Lift the pointer at the last translation.
    pub fn release(&mut self) -> Option<VerificationOutcome> {
        self.send(DragSample::end(self.last_translation)).outcome
    }

    /// Abort the gesture at the last translation.
    pub fn cancel(&mut self) -> Option<VerificationOutcome> {
        self.send(DragSample::cancelled(self.last_translation)).outcome
    }

    /// Perform a full pointer drag through the drag recognizer.
    ///
    /// This simulates a pointer down at `from_x`, `steps` evenly spaced moves
    /// to `to_x`, and a pointer up at `to_x`.
    pub fn pointer_drag(
        &mut self,
        from_x: f32,
        to_x: f32,
        steps: u32,
    ) -> Option<VerificationOutcome> {
        let id = self.next_pointer;
        self.next_pointer += 1;

        let mut outcome = self.pointer(PointerEvent::down(id, from_x));
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            outcome = outcome.or(self.pointer(PointerEvent::moved(id, x)));
        }
        outcome.or(self.pointer(PointerEvent::up(id, to_x)))
    }

    /// Route a raw pointer event through the recognizer into the widget.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<VerificationOutcome> {
        let sample = self.recognizer.on_pointer_event(event)?;
        self.send(sample).outcome
    }

    /// Advance frame time by the given duration in nanoseconds and tick the widget.
    pub fn advance_time(&mut self, nanos: u64) -> Option<VerificationOutcome> {
        self.frame_time_nanos += nanos;
        self.widget.on_frame(self.frame_time_nanos)
    }

    /// Tick `count` frames at 60 Hz, stopping at the first outcome.
    pub fn advance_frames(&mut self, count: u32) -> Option<VerificationOutcome> {
        (0..count).find_map(|_| self.advance_time(FRAME_NANOS))
    }

    pub fn outcomes(&self) -> Vec<VerificationOutcome> {
        self.outcomes.borrow().clone()
    }

    pub fn frames(&self) -> &[SlideFrame] {
        &self.frames
    }

    pub fn offset(&self) -> f32 {
        self.widget.frame().handle_x
    }
}
