//! Tone synthesis
//!
//! Generates an exponentially decaying sine wave sample by sample and
//! quantizes it to 16-bit PCM.

use std::f64::consts::PI;

use crate::tone::params::ToneParams;

/// Full-scale value used when quantizing to 16-bit PCM
pub const PCM_FULL_SCALE: f64 = 32767.0;

/// Number of frames produced for the given parameters
///
/// Computed as `round(sample_rate * duration_secs)`.
#[inline]
pub fn total_frames(params: &ToneParams) -> usize {
    (params.sample_rate as f64 * params.duration_secs).round() as usize
}

/// Amplitude envelope at time `t` seconds
///
/// Starts at 1.0 and decays exponentially; strictly decreasing for any
/// positive `decay_rate`.
#[inline]
pub fn envelope(t: f64, decay_rate: f64) -> f64 {
    (-decay_rate * t).exp()
}

/// Unquantized sample value for frame `index`
pub fn sample_at(params: &ToneParams, index: usize) -> f64 {
    let t = index as f64 / params.sample_rate as f64;
    params.volume * envelope(t, params.decay_rate) * (2.0 * PI * params.frequency_hz * t).sin()
}

/// Quantize a sample in [-1.0, 1.0] to signed 16-bit PCM
#[inline]
pub fn quantize(sample: f64) -> i16 {
    (sample * PCM_FULL_SCALE)
        .round()
        .clamp(-PCM_FULL_SCALE, PCM_FULL_SCALE) as i16
}

/// A synthesized mono tone in 16-bit PCM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneBuffer {
    /// Samples in playback order
    pub samples: Vec<i16>,
    /// Frames per second
    pub sample_rate: u32,
}

impl ToneBuffer {
    /// Number of frames (one sample per frame, mono)
    pub fn num_frames(&self) -> usize {
        self.samples.len()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Synthesize the tone described by `params`
///
/// Frames are generated in index order, so the buffer can be written out
/// directly without reordering.
pub fn synthesize(params: &ToneParams) -> ToneBuffer {
    let samples = (0..total_frames(params))
        .map(|i| quantize(sample_at(params, i)))
        .collect();

    ToneBuffer {
        samples,
        sample_rate: params.sample_rate,
    }
}
