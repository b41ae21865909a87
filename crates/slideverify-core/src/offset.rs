//! Offset tracking for the slide handle.
//!
//! The handle position is kept as two cells: the offset committed when the
//! previous drag segment ended, and the clamped position currently rendered.
//! While a drag is active the rendered position is recomputed from the
//! committed base plus the sample translation; once the drag stops, the
//! rendered position is locked in as the new base.

/// Bounds `raw` to `0..=max_travel`.
///
/// NaN maps to `0.0` so a corrupt sample can never escape the track.
pub fn clamp_offset(raw: f32, max_travel: f32) -> f32 {
    if raw.is_nan() || raw < 0.0 {
        0.0
    } else if raw > max_travel {
        max_travel
    } else {
        raw
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetState {
    /// Offset locked in when the gesture last became inactive.
    pub committed: f32,
    /// Render-ready position, always within `0..=max_travel`.
    pub clamped: f32,
}

#[derive(Debug, Clone)]
pub struct OffsetTracker {
    state: OffsetState,
    max_travel: f32,
}

impl OffsetTracker {
    pub fn new(max_travel: f32) -> Self {
        Self {
            state: OffsetState::default(),
            max_travel,
        }
    }

    pub fn max_travel(&self) -> f32 {
        self.max_travel
    }

    pub fn state(&self) -> OffsetState {
        self.state
    }

    pub fn committed(&self) -> f32 {
        self.state.committed
    }

    pub fn clamped(&self) -> f32 {
        self.state.clamped
    }

    /// Position `translation_x` would produce without touching any state.
    pub fn project(&self, translation_x: f32) -> f32 {
        clamp_offset(self.state.committed + translation_x, self.max_travel)
    }

    /// Applies an active-drag sample. `committed` stays at the segment start.
    pub fn track(&mut self, translation_x: f32) -> f32 {
        self.state.clamped = self.project(translation_x);
        self.state.clamped
    }

    /// Locks the current position in as the base for the next drag segment.
    pub fn commit(&mut self) -> f32 {
        if self.state.committed != self.state.clamped {
            log::debug!(
                "committing offset {} (was {})",
                self.state.clamped,
                self.state.committed
            );
        }
        self.state.committed = self.state.clamped;
        self.state.committed
    }

    pub fn reset(&mut self) {
        self.state = OffsetState::default();
    }
}
