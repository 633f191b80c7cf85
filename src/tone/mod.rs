//! Tone Generator Module
//!
//! Synthesizes short notification sounds:
//! - Tone parameters and validation
//! - Decaying sine synthesis into a 16-bit sample buffer
//! - WAV serialization

pub mod buffer;
pub mod io;
pub mod params;

pub use buffer::{envelope, quantize, sample_at, synthesize, total_frames, ToneBuffer};
pub use io::{wav_spec, write_tone_file, write_wav, ToneSummary};
pub use params::ToneParams;
