//! Widget configuration and its validation.

use std::time::Duration;

use crate::gesture_constants::{
    DEFAULT_HANDLE_SIZE, DEFAULT_TARGET_OFFSET, DEFAULT_TOLERANCE, DEFAULT_TRACK_LENGTH,
};
use crate::judge::TargetWindow;

/// Geometry and acceptance parameters for one widget instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideVerifyConfig {
    /// Length of the slide track (the puzzle width).
    pub track_length: f32,
    /// Width of the drag handle. The handle travels `track_length - handle_size`.
    pub handle_size: f32,
    /// Offset at which the piece fits.
    pub target: f32,
    /// Accepted distance from `target`, inclusive on both sides.
    pub tolerance: f32,
    /// Force-cancel a drag after this much frame time passes without samples.
    /// `None` keeps a drag alive indefinitely.
    pub stall_timeout: Option<Duration>,
}

impl Default for SlideVerifyConfig {
    fn default() -> Self {
        Self {
            track_length: DEFAULT_TRACK_LENGTH,
            handle_size: DEFAULT_HANDLE_SIZE,
            target: DEFAULT_TARGET_OFFSET,
            tolerance: DEFAULT_TOLERANCE,
            stall_timeout: None,
        }
    }
}

impl SlideVerifyConfig {
    pub fn with_track(mut self, track_length: f32, handle_size: f32) -> Self {
        self.track_length = track_length;
        self.handle_size = handle_size;
        self
    }

    pub fn with_target(mut self, target: f32, tolerance: f32) -> Self {
        self.target = target;
        self.tolerance = tolerance;
        self
    }

    pub fn with_stall_timeout(mut self, timeout: Duration) -> Self {
        self.stall_timeout = Some(timeout);
        self
    }

    /// Furthest offset the handle can reach.
    pub fn max_travel(&self) -> f32 {
        self.track_length - self.handle_size
    }

    pub fn target_window(&self) -> TargetWindow {
        TargetWindow::new(self.target, self.tolerance)
    }

    /// Checks that the geometry describes a usable track.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("track_length", self.track_length),
            ("handle_size", self.handle_size),
            ("target", self.target),
            ("tolerance", self.tolerance),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if self.handle_size <= 0.0 {
            return Err(ConfigError::NonPositiveHandle {
                handle_size: self.handle_size,
            });
        }
        if self.handle_size >= self.track_length {
            return Err(ConfigError::HandleExceedsTrack {
                track_length: self.track_length,
                handle_size: self.handle_size,
            });
        }
        if self.tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance {
                tolerance: self.tolerance,
            });
        }
        let max_travel = self.max_travel();
        if self.target < 0.0 || self.target > max_travel {
            return Err(ConfigError::TargetOutOfRange {
                target: self.target,
                max_travel,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFinite {
        field: &'static str,
    },
    NonPositiveHandle {
        handle_size: f32,
    },
    HandleExceedsTrack {
        track_length: f32,
        handle_size: f32,
    },
    NegativeTolerance {
        tolerance: f32,
    },
    TargetOutOfRange {
        target: f32,
        max_travel: f32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonFinite { field } => write!(f, "{field} must be a finite number"),
            ConfigError::NonPositiveHandle { handle_size } => {
                write!(f, "handle size {handle_size} must be positive")
            }
            ConfigError::HandleExceedsTrack {
                track_length,
                handle_size,
            } => write!(
                f,
                "handle size {handle_size} leaves no travel on a track of {track_length}"
            ),
            ConfigError::NegativeTolerance { tolerance } => {
                write!(f, "tolerance {tolerance} must not be negative")
            }
            ConfigError::TargetOutOfRange { target, max_travel } => {
                write!(f, "target {target} lies outside the travel range 0..={max_travel}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_puzzle() {
        let config = SlideVerifyConfig::default();
        assert_eq!(config.max_travel(), 270.0);
        assert_eq!(config.target_window().lower(), 82.0);
        assert_eq!(config.target_window().upper(), 88.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_handle_wider_than_track() {
        let config = SlideVerifyConfig::default().with_track(40.0, 50.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HandleExceedsTrack { .. })
        ));
    }

    #[test]
    fn rejects_target_beyond_travel() {
        let config = SlideVerifyConfig::default().with_target(300.0, 3.0);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::TargetOutOfRange {
                target: 300.0,
                max_travel: 270.0
            }
        );
        assert_eq!(
            err.to_string(),
            "target 300 lies outside the travel range 0..=270"
        );
    }

    #[test]
    fn rejects_non_finite_and_negative_values() {
        let nan_track = SlideVerifyConfig::default().with_track(f32::NAN, 50.0);
        assert_eq!(
            nan_track.validate(),
            Err(ConfigError::NonFinite {
                field: "track_length"
            })
        );

        let negative = SlideVerifyConfig::default().with_target(85.0, -1.0);
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::NegativeTolerance { .. })
        ));

        let flat_handle = SlideVerifyConfig::default().with_track(320.0, 0.0);
        assert!(matches!(
            flat_handle.validate(),
            Err(ConfigError::NonPositiveHandle { .. })
        ));
    }
}
