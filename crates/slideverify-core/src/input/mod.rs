pub mod dispatcher;
pub mod drag;
pub mod types;

pub use dispatcher::SampleDispatcher;
pub use drag::DragGesture;
pub use types::{DragSample, GesturePhase, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::types::{DragSample, GesturePhase, PointerEvent, PointerEventKind, PointerId};
}
