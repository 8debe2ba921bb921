//! Core data structures for waveform segment analysis.

mod segments;

pub use segments::SegmentSet;
