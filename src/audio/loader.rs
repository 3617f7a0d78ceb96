//! Decodes an uploaded recording into an addressable PCM buffer.
//!
//! Accepts WAV, MP3 and M4A/AAC containers via symphonia. Output is always
//! 16kHz mono 16-bit PCM, the format chunks are re-encoded in for upload.

use crate::defaults::SAMPLE_RATE;
use crate::error::{MeetscribeError, Result};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// One decoded input recording.
///
/// Holds 16kHz mono samples plus the source file's encoded byte size
/// (the size the chunk planner divides by). Immutable after load.
pub struct AudioBuffer {
    samples: Vec<i16>,
    source_bytes: u64,
}

impl AudioBuffer {
    /// Load and decode a recording from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        Self::from_bytes(data, extension.as_deref())
    }

    /// Decode a recording from raw bytes.
    ///
    /// `extension` is a container hint ("wav", "mp3", "m4a"); decoding
    /// still works without it as long as the probe recognizes the format.
    pub fn from_bytes(data: Vec<u8>, extension: Option<&str>) -> Result<Self> {
        let source_bytes = data.len() as u64;
        let (mono, source_rate) = decode_to_mono(data, extension)?;

        let resampled = if source_rate != SAMPLE_RATE {
            resample(&mono, source_rate, SAMPLE_RATE)
        } else {
            mono
        };

        let samples = resampled
            .iter()
            .map(|&s| (s.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16)
            .collect();

        Ok(Self {
            samples,
            source_bytes,
        })
    }

    /// 16kHz mono PCM samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Encoded byte size of the original file, used for chunk planning.
    pub fn source_bytes(&self) -> u64 {
        self.source_bytes
    }

    /// Total duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.samples.len() as f64 * 1000.0 / f64::from(SAMPLE_RATE)
    }
}

/// Decode any supported container into interleaved-to-mono f32 samples.
fn decode_to_mono(data: Vec<u8>, extension: Option<&str>) -> Result<(Vec<f32>, u32)> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(data)), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| MeetscribeError::AudioDecode {
            message: format!("probe failed: {e}"),
        })?;

    let mut format = probed.format;

    // Find the first audio track
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| MeetscribeError::AudioDecode {
            message: "no audio track found".to_string(),
        })?;

    let codec_params = track.codec_params.clone();
    let track_id = track.id;
    let source_rate = codec_params.sample_rate.unwrap_or(SAMPLE_RATE);
    let channels = codec_params.channels.map_or(1, |c| c.count());

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| MeetscribeError::AudioDecode {
            message: format!("codec init failed: {e}"),
        })?;

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(MeetscribeError::AudioDecode {
                    message: format!("packet read: {e}"),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder
            .decode(&packet)
            .map_err(|e| MeetscribeError::AudioDecode {
                message: format!("decode: {e}"),
            })?;

        let spec = *decoded.spec();
        let n_frames = decoded.capacity();
        let mut sample_buf = SampleBuffer::<f32>::new(n_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let samples = sample_buf.samples();

        // Mix to mono
        if channels > 1 {
            for frame in samples.chunks(channels) {
                let mono: f32 = frame.iter().sum::<f32>() / channels as f32;
                all_samples.push(mono);
            }
        } else {
            all_samples.extend_from_slice(samples);
        }
    }

    if all_samples.is_empty() {
        return Err(MeetscribeError::AudioDecode {
            message: "no audio samples decoded".to_string(),
        });
    }

    Ok((all_samples, source_rate))
}

/// Simple linear interpolation resampling.
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = f64::from(from_rate) / f64::from(to_rate);
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = (source_pos.floor() as usize).min(samples.len() - 1);
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx]
            } else {
                let left = f64::from(samples[source_idx]);
                let right = f64::from(samples[source_idx + 1]);
                (left + (right - left) * fraction) as f32
            }
        })
        .collect()
}
