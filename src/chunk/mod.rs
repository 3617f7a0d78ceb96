//! Chunk planning: splitting a recording into upload-sized time slices.

pub mod planner;

pub use planner::{ChunkPlan, TimeRange, plan};
