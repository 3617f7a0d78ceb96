//! Renders one planned time range into a standalone uploadable WAV.

use crate::audio::loader::AudioBuffer;
use crate::chunk::planner::TimeRange;
use crate::defaults::SAMPLE_RATE;
use crate::error::{MeetscribeError, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

/// One encoded chunk, backed by a temporary file.
///
/// The artifact owns the temp file handle: dropping it deletes the file,
/// so cleanup happens on every exit path, success or failure.
pub struct ChunkArtifact {
    index: usize,
    byte_len: u64,
    file: NamedTempFile,
}

impl ChunkArtifact {
    /// Zero-based position of this chunk in the plan.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Encoded size on disk.
    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    /// Upload filename for the multipart form.
    pub fn file_name(&self) -> String {
        format!("chunk-{:03}.wav", self.index)
    }

    /// Read the encoded bytes back for upload.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self.path())?)
    }
}

/// Encode the sub-range `[start, end)` of the buffer as a standalone
/// 16kHz mono 16-bit WAV in a fresh temp file.
///
/// Sample indices are clamped to the buffer, absorbing the planner's
/// float rounding residue at the final range.
pub fn encode_chunk(buffer: &AudioBuffer, range: TimeRange, index: usize) -> Result<ChunkArtifact> {
    let samples = buffer.samples();
    let samples_per_ms = f64::from(SAMPLE_RATE) / 1000.0;

    let start = ((range.start_ms * samples_per_ms) as usize).min(samples.len());
    let end = ((range.end_ms * samples_per_ms) as usize).clamp(start, samples.len());

    let file = NamedTempFile::new()?;
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(file.path(), spec).map_err(|e| {
        MeetscribeError::ChunkEncode {
            message: format!("failed to create WAV writer: {e}"),
        }
    })?;

    for &s in &samples[start..end] {
        writer
            .write_sample(s)
            .map_err(|e| MeetscribeError::ChunkEncode {
                message: format!("failed to write sample: {e}"),
            })?;
    }

    writer.finalize().map_err(|e| MeetscribeError::ChunkEncode {
        message: format!("failed to finalize WAV: {e}"),
    })?;

    let byte_len = file.as_file().metadata()?.len();

    Ok(ChunkArtifact {
        index,
        byte_len,
        file,
    })
}
