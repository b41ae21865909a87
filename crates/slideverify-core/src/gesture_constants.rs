//! Shared constants for the slide track and drag handling.
//!
//! All distances are in logical pixels. The defaults describe the stock
//! puzzle: a 320 px wide image with a 50 px piece that fits at x = 85.

/// Drag threshold in logical pixels.
///
/// A pressed pointer has to travel more than this distance horizontally before
/// the drag recognizer reports the gesture as active. Smaller movements are
/// treated as finger jitter and never move the handle.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Width of the puzzle image, which is also the length of the slide track.
pub const DEFAULT_TRACK_LENGTH: f32 = 320.0;

/// Height of the puzzle image. Informative only; the core never lays out.
pub const DEFAULT_PUZZLE_HEIGHT: f32 = 160.0;

/// Diameter of the round drag handle.
pub const DEFAULT_HANDLE_SIZE: f32 = 50.0;

/// Width of the puzzle piece overlay.
pub const DEFAULT_PIECE_WIDTH: f32 = 50.0;

/// Horizontal offset at which the piece fills the hole in the image.
pub const DEFAULT_TARGET_OFFSET: f32 = 85.0;

/// Allowed distance from [`DEFAULT_TARGET_OFFSET`] on either side.
pub const DEFAULT_TOLERANCE: f32 = 3.0;
