//! Sample queue between the platform integration and the widget.
//!
//! Platform callbacks may deliver several samples between two frames. They are
//! pushed here and drained into the widget, in arrival order, on the frame pass.

use smallvec::SmallVec;

use super::types::DragSample;
use crate::judge::VerificationOutcome;
use crate::widget::SlideVerify;

#[derive(Default)]
pub struct SampleDispatcher {
    queue: SmallVec<[DragSample; 8]>,
}

impl SampleDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, sample: DragSample) {
        self.queue.push(sample);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(DragSample),
    {
        for sample in self.queue.drain(..) {
            handler(sample);
        }
    }

    /// Feeds every queued sample to `widget` and returns the last outcome
    /// produced while doing so.
    pub fn dispatch_to(&mut self, widget: &mut SlideVerify) -> Option<VerificationOutcome> {
        let mut outcome = None;
        self.drain(|sample| {
            if let Some(result) = widget.handle_sample(sample).outcome {
                outcome = Some(result);
            }
        });
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut dispatcher = SampleDispatcher::new();
        dispatcher.push(DragSample::active(1.0));
        dispatcher.push(DragSample::active(2.0));
        dispatcher.push(DragSample::end(2.0));
        assert_eq!(dispatcher.len(), 3);

        let mut seen = Vec::new();
        dispatcher.drain(|sample| seen.push(sample));

        assert_eq!(
            seen,
            vec![
                DragSample::active(1.0),
                DragSample::active(2.0),
                DragSample::end(2.0)
            ]
        );
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn dispatch_reports_release_outcome() {
        let mut widget = SlideVerify::default();
        let mut dispatcher = SampleDispatcher::new();
        for x in [20.0, 60.0, 86.0] {
            dispatcher.push(DragSample::active(x));
        }
        dispatcher.push(DragSample::end(86.0));

        assert_eq!(
            dispatcher.dispatch_to(&mut widget),
            Some(VerificationOutcome::Pass)
        );
        assert_eq!(widget.offset_state().committed, 86.0);
        assert_eq!(dispatcher.dispatch_to(&mut widget), None);
    }
}
