use std::fmt;

/// Seconds skipped by a single `forward` / `rewind`.
pub const SKIP_STEP_SECS: f64 = 15.0;

/// Seconds a single `play` advances the position.
pub const PLAY_INCREMENT_SECS: f64 = 100.0;

/// Playback offset in seconds. Never negative.
///
/// Plain `f64` arithmetic: a skip forward and back returns to the same value
/// only up to rounding when the start isn't exactly representable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PlaybackPosition(f64);

impl PlaybackPosition {
    pub const ZERO: Self = Self(0.0);

    /// Negative and NaN inputs clamp to zero.
    pub fn from_secs(secs: f64) -> Self {
        if secs > 0.0 {
            Self(secs)
        } else {
            Self::ZERO
        }
    }

    pub fn as_secs(self) -> f64 {
        self.0
    }

    pub fn advance(self, secs: f64) -> Self {
        Self::from_secs(self.0 + secs)
    }

    /// Moves back by `secs`, stopping at zero.
    pub fn retreat(self, secs: f64) -> Self {
        Self::from_secs(self.0 - secs)
    }
}

impl From<f64> for PlaybackPosition {
    fn from(secs: f64) -> Self {
        Self::from_secs(secs)
    }
}

impl fmt::Display for PlaybackPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
