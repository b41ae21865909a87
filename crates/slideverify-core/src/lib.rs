//! Slide-to-verify puzzle widget core.
//!
//! A user drags a handle along a track; the drag drives a puzzle piece, and
//! releasing the handle checks whether the piece landed inside a tolerance
//! window around the target offset. This crate holds the numeric side of the
//! widget only: samples in, clamped offsets and a pass/fail outcome out.
//! Rendering and gesture recognition proper belong to the host.

pub mod arbiter;
pub mod config;
pub mod gesture_constants;
pub mod input;
pub mod judge;
pub mod offset;
pub mod widget;

pub use arbiter::{ArbiterAction, ArbiterState, GestureArbiter};
pub use config::{ConfigError, SlideVerifyConfig};
pub use input::{
    DragGesture, DragSample, GesturePhase, PointerEvent, PointerEventKind, PointerId,
    SampleDispatcher,
};
pub use judge::{Release, TargetWindow, VerificationJudge, VerificationOutcome};
pub use offset::{clamp_offset, OffsetState, OffsetTracker};
pub use widget::{SlideFrame, SlideUpdate, SlideVerify};

pub mod prelude {
    pub use crate::config::SlideVerifyConfig;
    pub use crate::input::prelude::*;
    pub use crate::input::{DragGesture, SampleDispatcher};
    pub use crate::judge::VerificationOutcome;
    pub use crate::offset::OffsetState;
    pub use crate::widget::{SlideFrame, SlideUpdate, SlideVerify};
}
