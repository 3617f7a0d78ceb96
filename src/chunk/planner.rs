//! Computes how a recording is split before upload.
//!
//! The plan divides the full duration into `ceil(file_bytes / max_bytes)`
//! equal real-valued slices. Chunk count is estimated from the whole file's
//! average bitrate, not measured per chunk, so a variable-bitrate source can
//! still produce a chunk over the limit after re-encoding.

/// One half-open time slice `[start_ms, end_ms)` of the recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start_ms: f64,
    pub end_ms: f64,
}

impl TimeRange {
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

/// Ordered, contiguous, non-overlapping slices covering the full recording.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkPlan {
    ranges: Vec<TimeRange>,
}

impl ChunkPlan {
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    /// Number of chunks the recording will be split into. Always ≥ 1.
    pub fn part_count(&self) -> usize {
        self.ranges.len()
    }
}

/// Plan the split of a recording into upload-sized slices.
///
/// `part_count = ceil(total_bytes / max_chunk_bytes)`, minimum 1: a file
/// under the limit still yields a single range spanning the whole duration.
/// Slice length is `total_duration_ms / part_count` with no rounding
/// correction; cumulative float error can leave the final range a hair
/// short of `total_duration_ms`. Downstream sample clamping absorbs it.
pub fn plan(total_duration_ms: f64, total_bytes: u64, max_chunk_bytes: u64) -> ChunkPlan {
    let part_count = total_bytes.div_ceil(max_chunk_bytes.max(1)).max(1);
    let chunk_length_ms = total_duration_ms / part_count as f64;

    let ranges = (0..part_count)
        .map(|i| TimeRange {
            start_ms: i as f64 * chunk_length_ms,
            end_ms: (i + 1) as f64 * chunk_length_ms,
        })
        .collect();

    ChunkPlan { ranges }
}
