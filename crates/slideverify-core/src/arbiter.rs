//! Gesture phase arbitration.
//!
//! The arbiter watches the phase carried by each sample and reports what the
//! widget should do with it. Release is edge-triggered: only the sample that
//! moves the gesture from `Active` to a terminal phase yields a release, so a
//! terminal phase repeated over several frames is judged once.

use crate::input::{DragSample, GesturePhase};
use crate::judge::Release;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArbiterState {
    #[default]
    Idle,
    Active,
    /// Released and waiting for the commit/reset side effect to finish.
    Ended,
}

/// What the widget should do with a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArbiterAction {
    /// Recompute the clamped position from this translation.
    Track(f32),
    /// The gesture was released on this sample; judge it once.
    Release(Release),
    /// The sample is not active; lock the current position in.
    Commit,
    /// A release is being judged; leave the tracker alone.
    Hold,
}

#[derive(Debug, Clone, Default)]
pub struct GestureArbiter {
    state: ArbiterState,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ArbiterState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ArbiterState::Active
    }

    pub fn on_sample(&mut self, sample: DragSample) -> ArbiterAction {
        match (self.state, sample.phase) {
            (ArbiterState::Idle, GesturePhase::Active) => {
                log::debug!("drag started");
                self.state = ArbiterState::Active;
                ArbiterAction::Track(sample.translation_x)
            }
            (ArbiterState::Active, GesturePhase::Active) => {
                ArbiterAction::Track(sample.translation_x)
            }
            (ArbiterState::Active, GesturePhase::End) => {
                log::debug!("drag released");
                self.state = ArbiterState::Ended;
                ArbiterAction::Release(Release::Dropped)
            }
            (ArbiterState::Active, GesturePhase::Cancelled) => {
                log::debug!("drag cancelled");
                self.state = ArbiterState::Ended;
                ArbiterAction::Release(Release::Cancelled)
            }
            // Still dragging, but a non-active sample locks the position in.
            (ArbiterState::Active, GesturePhase::Possible) => ArbiterAction::Commit,
            (ArbiterState::Idle, phase) => {
                if phase.is_terminal() {
                    log::trace!("ignoring {phase:?} with no drag in flight");
                }
                ArbiterAction::Commit
            }
            (ArbiterState::Ended, phase) => {
                log::trace!("ignoring {phase:?} while a release is being judged");
                ArbiterAction::Hold
            }
        }
    }

    /// Forces an in-flight drag into a cancelled release.
    ///
    /// Returns `None` when no drag is active.
    pub fn force_release(&mut self) -> Option<Release> {
        if self.state != ArbiterState::Active {
            return None;
        }
        self.state = ArbiterState::Ended;
        Some(Release::Cancelled)
    }

    /// Called once the release side effect has completed.
    pub fn finish_release(&mut self) {
        if self.state == ArbiterState::Ended {
            self.state = ArbiterState::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.state = ArbiterState::Idle;
    }
}
