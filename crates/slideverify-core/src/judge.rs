//! Pass/fail decision for a released drag.

use crate::offset::OffsetTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Pass,
    Fail,
}

impl VerificationOutcome {
    pub fn is_pass(self) -> bool {
        self == VerificationOutcome::Pass
    }
}

/// Closed interval `target - tolerance ..= target + tolerance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetWindow {
    target: f32,
    tolerance: f32,
}

impl TargetWindow {
    pub fn new(target: f32, tolerance: f32) -> Self {
        Self { target, tolerance }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn lower(&self) -> f32 {
        self.target - self.tolerance
    }

    pub fn upper(&self) -> f32 {
        self.target + self.tolerance
    }

    pub fn contains(&self, position: f32) -> bool {
        position >= self.lower() && position <= self.upper()
    }
}

/// Release reason handed to the judge by the gesture arbiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// The user lifted the pointer; the final position counts.
    Dropped,
    /// The gesture was aborted; the position is never consulted.
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerificationJudge {
    window: TargetWindow,
}

impl VerificationJudge {
    pub fn new(window: TargetWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> TargetWindow {
        self.window
    }

    pub fn decide(&self, position: f32) -> VerificationOutcome {
        if self.window.contains(position) {
            VerificationOutcome::Pass
        } else {
            VerificationOutcome::Fail
        }
    }

    /// Decides a release and applies its side effect: a failed attempt snaps
    /// the tracker back to zero, a passed one leaves the piece where it landed.
    pub fn judge(&self, release: Release, tracker: &mut OffsetTracker) -> VerificationOutcome {
        let position = tracker.clamped();
        let outcome = match release {
            Release::Dropped => self.decide(position),
            Release::Cancelled => VerificationOutcome::Fail,
        };

        match outcome {
            VerificationOutcome::Pass => {
                log::info!("verification passed at offset {position}");
            }
            VerificationOutcome::Fail => {
                log::info!(
                    "verification failed at offset {position} ({release:?}, window {}..={})",
                    self.window.lower(),
                    self.window.upper()
                );
                tracker.reset();
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::OffsetState;

    fn judge() -> VerificationJudge {
        VerificationJudge::new(TargetWindow::new(85.0, 3.0))
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let judge = judge();
        assert_eq!(judge.decide(82.0), VerificationOutcome::Pass);
        assert_eq!(judge.decide(81.9), VerificationOutcome::Fail);
        assert_eq!(judge.decide(88.0), VerificationOutcome::Pass);
        assert_eq!(judge.decide(88.1), VerificationOutcome::Fail);
        assert_eq!(judge.decide(85.0), VerificationOutcome::Pass);
    }

    #[test]
    fn zero_tolerance_accepts_exact_target_only() {
        let judge = VerificationJudge::new(TargetWindow::new(40.0, 0.0));
        assert_eq!(judge.window().target(), 40.0);
        assert_eq!(judge.window().tolerance(), 0.0);
        assert_eq!(judge.window().lower(), judge.window().upper());
        assert!(judge.decide(40.0).is_pass());
        assert!(!judge.decide(40.01).is_pass());
    }

    #[test]
    fn pass_keeps_tracker_position() {
        let mut tracker = OffsetTracker::new(270.0);
        tracker.track(86.0);
        tracker.commit();

        assert_eq!(
            judge().judge(Release::Dropped, &mut tracker),
            VerificationOutcome::Pass
        );
        assert_eq!(tracker.committed(), 86.0);
    }

    #[test]
    fn fail_resets_tracker() {
        let mut tracker = OffsetTracker::new(270.0);
        tracker.track(200.0);
        tracker.commit();

        assert_eq!(
            judge().judge(Release::Dropped, &mut tracker),
            VerificationOutcome::Fail
        );
        assert_eq!(tracker.state(), OffsetState::default());
    }

    #[test]
    fn cancelled_release_fails_even_inside_window() {
        let mut tracker = OffsetTracker::new(270.0);
        tracker.track(85.0);
        tracker.commit();

        assert_eq!(
            judge().judge(Release::Cancelled, &mut tracker),
            VerificationOutcome::Fail
        );
        assert_eq!(tracker.state(), OffsetState::default());
    }
}
