//! Tone parameters
//!
//! The defaults describe the promo chime: a 0.6 second A5 ping at 40%
//! volume that fades out quickly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolError};

// ============================================================================
// Constants
// ============================================================================

/// Output sample rate (CD quality)
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Chime length in seconds
pub const DEFAULT_DURATION_SECS: f64 = 0.6;

/// Chime pitch in Hz (A5)
pub const DEFAULT_FREQUENCY_HZ: f64 = 880.0;

/// Peak amplitude as a fraction of full scale
pub const DEFAULT_VOLUME: f64 = 0.4;

/// Exponential decay rate of the amplitude envelope, per second
pub const DEFAULT_DECAY_RATE: f64 = 3.0;

/// Largest frame count whose 16-bit mono data fits in a RIFF chunk
///
/// Chunk sizes are 32-bit; the margin leaves room for the header chunks
/// that count toward the RIFF size.
pub const MAX_FRAMES: u64 = (u32::MAX as u64 - 1024) / 2;

/// Parameters of an exponentially decaying sine tone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneParams {
    /// Frames per second
    pub sample_rate: u32,
    /// Tone length in seconds
    pub duration_secs: f64,
    /// Sine frequency in Hz
    pub frequency_hz: f64,
    /// Peak amplitude, 0.0 to 1.0
    pub volume: f64,
    /// Envelope decay rate; the envelope is `e^(-decay_rate * t)`
    pub decay_rate: f64,
}

impl Default for ToneParams {
    fn default() -> Self {
        ToneParams {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_secs: DEFAULT_DURATION_SECS,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            volume: DEFAULT_VOLUME,
            decay_rate: DEFAULT_DECAY_RATE,
        }
    }
}

impl ToneParams {
    /// Load parameters from a JSON file
    ///
    /// Fields missing from the file keep their default values. The loaded
    /// parameters are validated before being returned.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolError::FileNotFound {
                path: path.display().to_string(),
                source: None,
            });
        }

        let contents = fs::read_to_string(path)?;
        let params: ToneParams = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Check that the parameters describe a tone that fits in 16-bit PCM
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(invalid("sample rate must be greater than zero"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(invalid(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration_secs
            )));
        }
        if !self.frequency_hz.is_finite() || self.frequency_hz < 0.0 {
            return Err(invalid(format!(
                "frequency must be non-negative, got {}",
                self.frequency_hz
            )));
        }
        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            return Err(invalid(format!(
                "volume must be between 0.0 and 1.0, got {}",
                self.volume
            )));
        }
        let frames = (self.sample_rate as f64 * self.duration_secs).round();
        if frames > MAX_FRAMES as f64 {
            return Err(invalid(format!(
                "{}s at {} Hz is {} frames, more than a WAV file can hold ({})",
                self.duration_secs, self.sample_rate, frames, MAX_FRAMES
            )));
        }
        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 {
            return Err(invalid(format!(
                "decay rate must be non-negative, got {}",
                self.decay_rate
            )));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ToolError {
    ToolError::InvalidToneParams {
        reason: reason.into(),
    }
}
