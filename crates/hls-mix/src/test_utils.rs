//! Shared helpers for the unit tests of this crate.

use crate::{Manifest, Segment, SegmentGroup};

pub const STREAM0: &str = include_str!("../testdata/stream0.m3u8");
pub const STREAM1: &str = include_str!("../testdata/stream1.m3u8");
pub const STREAM2: &str = include_str!("../testdata/stream2.m3u8");

/// Initialize tracing for tests with appropriate settings
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Parse a fixture, panicking on error.
pub fn fixture(text: &str) -> Manifest {
    crate::parse(text).expect("fixture should parse")
}

/// Create a group of `count` two-second segments named `{prefix}{i}.ts`
pub fn group_of(prefix: &str, count: usize) -> SegmentGroup {
    (0..count)
        .map(|i| Segment::new(format!("{prefix}{i}.ts"), 2.0))
        .collect()
}

/// Create a manifest whose groups have the given sizes, both counters at zero
pub fn manifest_with_groups(sizes: &[usize]) -> Manifest {
    Manifest {
        version: 3,
        target_duration: 2,
        segment_groups: sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| group_of(&format!("g{i}-"), size))
            .collect(),
        ..Default::default()
    }
}

/// Sizes of every group, in order
pub fn group_sizes(manifest: &Manifest) -> Vec<usize> {
    manifest
        .segment_groups
        .iter()
        .map(SegmentGroup::segment_count)
        .collect()
}

/// Paths of every segment, in playback order
pub fn paths(manifest: &Manifest) -> Vec<String> {
    manifest.segments().map(|s| s.path().to_string()).collect()
}
