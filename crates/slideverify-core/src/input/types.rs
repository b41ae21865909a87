pub type PointerId = u64;

/// Phase of a pan gesture as reported by the gesture runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer is down but has not started dragging.
    Possible,
    Active,
    /// Pointer lifted after an active drag.
    End,
    /// Gesture aborted by the runtime or never activated.
    Cancelled,
}

impl GesturePhase {
    /// Maps the numeric gesture-handler state codes onto a phase.
    ///
    /// `0` undetermined and `2` began are both "not dragging yet", `1` failed is
    /// treated as a cancellation. Unknown codes return `None`.
    pub fn from_state_code(code: i32) -> Option<Self> {
        match code {
            0 | 2 => Some(GesturePhase::Possible),
            1 | 3 => Some(GesturePhase::Cancelled),
            4 => Some(GesturePhase::Active),
            5 => Some(GesturePhase::End),
            _ => None,
        }
    }

    pub fn is_active(self) -> bool {
        self == GesturePhase::Active
    }

    /// Whether this phase releases the gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, GesturePhase::End | GesturePhase::Cancelled)
    }
}

/// One sample from the gesture runtime: the horizontal translation since the
/// pointer went down, and the phase the gesture is in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub translation_x: f32,
    pub phase: GesturePhase,
}

impl DragSample {
    pub fn new(translation_x: f32, phase: GesturePhase) -> Self {
        Self {
            translation_x,
            phase,
        }
    }

    pub fn possible() -> Self {
        Self::new(0.0, GesturePhase::Possible)
    }

    pub fn active(translation_x: f32) -> Self {
        Self::new(translation_x, GesturePhase::Active)
    }

    pub fn end(translation_x: f32) -> Self {
        Self::new(translation_x, GesturePhase::End)
    }

    pub fn cancelled(translation_x: f32) -> Self {
        Self::new(translation_x, GesturePhase::Cancelled)
    }

    /// Builds a sample from a raw `(translationX, state)` pair.
    pub fn from_raw(translation_x: f32, state_code: i32) -> Option<Self> {
        GesturePhase::from_state_code(state_code).map(|phase| Self::new(translation_x, phase))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer event for hosts that do not run their own pan recognizer.
///
/// Only the horizontal coordinate matters for a slide track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub x: f32,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, x: f32) -> Self {
        Self { id, kind, x }
    }

    pub fn down(id: PointerId, x: f32) -> Self {
        Self::new(id, PointerEventKind::Down, x)
    }

    pub fn moved(id: PointerId, x: f32) -> Self {
        Self::new(id, PointerEventKind::Move, x)
    }

    pub fn up(id: PointerId, x: f32) -> Self {
        Self::new(id, PointerEventKind::Up, x)
    }

    pub fn cancel(id: PointerId, x: f32) -> Self {
        Self::new(id, PointerEventKind::Cancel, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes_map_to_phases() {
        assert_eq!(GesturePhase::from_state_code(0), Some(GesturePhase::Possible));
        assert_eq!(GesturePhase::from_state_code(1), Some(GesturePhase::Cancelled));
        assert_eq!(GesturePhase::from_state_code(2), Some(GesturePhase::Possible));
        assert_eq!(GesturePhase::from_state_code(3), Some(GesturePhase::Cancelled));
        assert_eq!(GesturePhase::from_state_code(4), Some(GesturePhase::Active));
        assert_eq!(GesturePhase::from_state_code(5), Some(GesturePhase::End));
        assert_eq!(GesturePhase::from_state_code(-1), None);
        assert_eq!(GesturePhase::from_state_code(6), None);
    }

    #[test]
    fn raw_sample_keeps_translation() {
        let sample = DragSample::from_raw(42.5, 4).expect("active code");
        assert_eq!(sample, DragSample::active(42.5));
        assert!(DragSample::from_raw(10.0, 9).is_none());
    }

    #[test]
    fn terminal_phases() {
        assert!(GesturePhase::End.is_terminal());
        assert!(GesturePhase::Cancelled.is_terminal());
        assert!(!GesturePhase::Active.is_terminal());
        assert!(!GesturePhase::Possible.is_terminal());
        assert!(GesturePhase::Active.is_active());
        assert!(!GesturePhase::End.is_active());
    }
}
