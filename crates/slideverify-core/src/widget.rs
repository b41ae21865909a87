//! The slide-to-verify widget state machine.
//!
//! [`SlideVerify`] owns one offset tracker, gesture arbiter and judge. Every
//! sample is processed synchronously: the arbiter classifies it, the tracker
//! recomputes the clamped offset, and on the release edge the judge decides
//! the attempt and, on failure, snaps the tracker back to zero before
//! `handle_sample` returns.

use crate::arbiter::{ArbiterAction, ArbiterState, GestureArbiter};
use crate::config::{ConfigError, SlideVerifyConfig};
use crate::input::DragSample;
use crate::judge::{Release, VerificationJudge, VerificationOutcome};
use crate::offset::{OffsetState, OffsetTracker};

/// Horizontal translation for the two visuals driven by the handle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideFrame {
    pub handle_x: f32,
    pub piece_x: f32,
}

impl SlideFrame {
    fn at(offset: f32) -> Self {
        Self {
            handle_x: offset,
            piece_x: offset,
        }
    }
}

/// Result of handling one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideUpdate {
    pub frame: SlideFrame,
    /// Set only on the sample that released the gesture.
    pub outcome: Option<VerificationOutcome>,
}

type OutcomeListener = Box<dyn FnMut(VerificationOutcome)>;

pub struct SlideVerify {
    config: SlideVerifyConfig,
    tracker: OffsetTracker,
    arbiter: GestureArbiter,
    judge: VerificationJudge,
    listener: Option<OutcomeListener>,
    last_outcome: Option<VerificationOutcome>,
    /// Frame time at which the current drag last received a sample.
    last_activity_nanos: Option<u64>,
    /// A sample arrived since the last frame tick.
    pending_activity: bool,
}

impl Default for SlideVerify {
    fn default() -> Self {
        Self::from_valid_config(SlideVerifyConfig::default())
    }
}

impl SlideVerify {
    pub fn new(config: SlideVerifyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SlideVerifyConfig) -> Self {
        Self {
            config,
            tracker: OffsetTracker::new(config.max_travel()),
            arbiter: GestureArbiter::new(),
            judge: VerificationJudge::new(config.target_window()),
            listener: None,
            last_outcome: None,
            last_activity_nanos: None,
            pending_activity: false,
        }
    }

    pub fn config(&self) -> &SlideVerifyConfig {
        &self.config
    }

    /// Registers the completion handler invoked once per released gesture.
    pub fn set_outcome_listener(&mut self, listener: impl FnMut(VerificationOutcome) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_outcome_listener(&mut self) {
        self.listener = None;
    }

    pub fn frame(&self) -> SlideFrame {
        SlideFrame::at(self.tracker.clamped())
    }

    pub fn offset_state(&self) -> OffsetState {
        self.tracker.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.arbiter.is_active()
    }

    pub fn gesture_state(&self) -> ArbiterState {
        self.arbiter.state()
    }

    pub fn last_outcome(&self) -> Option<VerificationOutcome> {
        self.last_outcome
    }

    pub fn handle_sample(&mut self, sample: DragSample) -> SlideUpdate {
        log::trace!(
            "sample {:?} translation {}",
            sample.phase,
            sample.translation_x
        );

        let outcome = match self.arbiter.on_sample(sample) {
            ArbiterAction::Track(translation_x) => {
                self.tracker.track(translation_x);
                self.pending_activity = true;
                None
            }
            ArbiterAction::Release(release) => Some(self.release(release)),
            ArbiterAction::Commit => {
                self.tracker.commit();
                None
            }
            ArbiterAction::Hold => None,
        };

        SlideUpdate {
            frame: self.frame(),
            outcome,
        }
    }

    /// Frame tick from the host's display loop.
    ///
    /// Cancels a drag that has seen no samples for longer than the configured
    /// stall timeout. Returns the outcome of that forced release, if any.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Option<VerificationOutcome> {
        if !self.arbiter.is_active() {
            self.last_activity_nanos = None;
            self.pending_activity = false;
            return None;
        }

        let last_activity = match self.last_activity_nanos {
            Some(last) if !self.pending_activity => last,
            _ => {
                self.last_activity_nanos = Some(frame_time_nanos);
                self.pending_activity = false;
                return None;
            }
        };

        let timeout = self.config.stall_timeout?;
        let idle_nanos = frame_time_nanos.saturating_sub(last_activity);
        if u128::from(idle_nanos) < timeout.as_nanos() {
            return None;
        }

        log::warn!(
            "no drag samples for {} ms, cancelling attempt",
            idle_nanos / 1_000_000
        );
        self.force_cancel()
    }

    /// Host lifecycle hook for suspension or teardown mid-drag.
    ///
    /// An in-flight drag is released as cancelled, which fails the attempt
    /// and resets the offset. Does nothing when no drag is active.
    pub fn suspend(&mut self) -> Option<VerificationOutcome> {
        if self.arbiter.is_active() {
            log::warn!("host suspended during drag, cancelling attempt");
        }
        self.force_cancel()
    }

    /// Starts a fresh attempt without reporting an outcome.
    pub fn restart(&mut self) {
        log::debug!("restarting verification");
        self.tracker.reset();
        self.arbiter.reset();
        self.last_outcome = None;
        self.last_activity_nanos = None;
        self.pending_activity = false;
    }

    fn force_cancel(&mut self) -> Option<VerificationOutcome> {
        let release = self.arbiter.force_release()?;
        Some(self.release(release))
    }

    fn release(&mut self, release: Release) -> VerificationOutcome {
        self.tracker.commit();
        let outcome = self.judge.judge(release, &mut self.tracker);
        self.arbiter.finish_release();

        self.last_outcome = Some(outcome);
        self.last_activity_nanos = None;
        self.pending_activity = false;
        if let Some(listener) = self.listener.as_mut() {
            listener(outcome);
        }
        outcome
    }
}
