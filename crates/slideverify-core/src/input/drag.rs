//! Horizontal drag recogniser.
//!
//! Turns raw single-pointer events into [`DragSample`]s the same way a pan
//! gesture handler limited to one pointer would: translation is measured from
//! the press position and the gesture only becomes active once the pointer
//! has moved past [`DRAG_THRESHOLD`].

use super::types::{DragSample, GesturePhase, PointerEvent, PointerEventKind, PointerId};
use crate::gesture_constants::DRAG_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedPointer {
    id: PointerId,
    press_x: f32,
    active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pointer: Option<TrackedPointer>,
    touch_slop: f32,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self::with_touch_slop(DRAG_THRESHOLD)
    }

    pub fn with_touch_slop(touch_slop: f32) -> Self {
        Self {
            pointer: None,
            touch_slop,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.pointer.is_some_and(|pointer| pointer.active)
    }

    /// Feeds one pointer event and returns the sample it produces, if any.
    ///
    /// Events from a second pointer are ignored while one is tracked.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Option<DragSample> {
        if event.kind == PointerEventKind::Down {
            if self.pointer.is_some() {
                return None;
            }
            self.pointer = Some(TrackedPointer {
                id: event.id,
                press_x: event.x,
                active: false,
            });
            return Some(DragSample::possible());
        }

        let pointer = self.pointer.as_mut().filter(|p| p.id == event.id)?;
        let translation_x = event.x - pointer.press_x;

        match event.kind {
            PointerEventKind::Down => None,
            PointerEventKind::Move => {
                if !pointer.active && translation_x.abs() > self.touch_slop {
                    pointer.active = true;
                }
                let phase = if pointer.active {
                    GesturePhase::Active
                } else {
                    GesturePhase::Possible
                };
                Some(DragSample::new(translation_x, phase))
            }
            PointerEventKind::Up => {
                let phase = if pointer.active {
                    GesturePhase::End
                } else {
                    GesturePhase::Cancelled
                };
                self.pointer = None;
                Some(DragSample::new(translation_x, phase))
            }
            PointerEventKind::Cancel => {
                self.pointer = None;
                Some(DragSample::cancelled(translation_x))
            }
        }
    }

    pub fn reset(&mut self) {
        self.pointer = None;
    }
}
