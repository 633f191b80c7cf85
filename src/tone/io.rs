//! WAV serialization for synthesized tones
//!
//! Tones are always written as mono, 16-bit signed integer PCM.

use std::fs;
use std::io::{self, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use log::{debug, info};
use sha2::{Digest, Sha256};

use crate::error::{Result, ToolError};
use crate::tone::buffer::{synthesize, ToneBuffer};
use crate::tone::params::ToneParams;

/// Bits per PCM sample in the output file
pub const BITS_PER_SAMPLE: u16 = 16;

/// Result of writing a tone to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneSummary {
    /// Where the file was written
    pub path: PathBuf,
    /// Number of frames in the data chunk
    pub frames: usize,
    /// Frames per second declared in the header
    pub sample_rate: u32,
    /// Lowercase hex SHA-256 of the complete file
    pub checksum: String,
}

/// WAV header parameters for a mono 16-bit tone
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Serialize a tone buffer as a WAV stream
///
/// Frames are written in buffer order. The header sizes are patched when
/// the writer is finalized, which is why the sink must be seekable.
pub fn write_wav<W: Write + Seek>(
    sink: W,
    buffer: &ToneBuffer,
) -> std::result::Result<(), hound::Error> {
    let mut writer = WavWriter::new(sink, wav_spec(buffer.sample_rate))?;

    for &sample in &buffer.samples {
        writer.write_sample(sample)?;
    }

    writer.finalize()
}

/// Synthesize a tone and write it to `path`
///
/// Creates the parent directory if needed and overwrites any existing file.
/// A failure part way through may leave a truncated file behind.
///
/// # Errors
/// * `InvalidToneParams` - If `params` fail validation
/// * `Io` - If the parent directory cannot be created or the file re-read
/// * `AudioWriteError` - If the WAV file cannot be written
pub fn write_tone_file(path: &Path, params: &ToneParams) -> Result<ToneSummary> {
    params.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    let buffer = synthesize(params);
    debug!(
        "Synthesized {} frames ({:.3}s, peak {})",
        buffer.num_frames(),
        buffer.duration_secs(),
        buffer.peak()
    );

    let to_write_error = |e: hound::Error| ToolError::AudioWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let file = fs::File::create(path)?;
    write_wav(BufWriter::new(file), &buffer).map_err(to_write_error)?;

    let checksum = file_sha256(path)?;
    info!("Wrote {} ({} frames)", path.display(), buffer.num_frames());

    Ok(ToneSummary {
        path: path.to_path_buf(),
        frames: buffer.num_frames(),
        sample_rate: buffer.sample_rate,
        checksum,
    })
}

/// Lowercase hex SHA-256 of the file at `path`
fn file_sha256(path: &Path) -> Result<String> {
    let mut hasher = Sha256::new();
    io::copy(&mut fs::File::open(path)?, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Tests
// ============================================================================
