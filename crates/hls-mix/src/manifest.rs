use serde::{Deserialize, Serialize};

use crate::segment::{Segment, SegmentGroup};

/// A parsed HLS media playlist.
///
/// Segment groups are in playback order and every boundary between two groups
/// is a discontinuity. All derived values are computed from the current state
/// on each call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// `#EXT-X-VERSION`
    pub version: u8,
    /// `#EXT-X-TARGETDURATION`, in whole seconds
    pub target_duration: u8,
    /// Number of segments ever removed from the head of the stream
    pub media_sequence: u32,
    /// Number of discontinuity boundaries consumed since the start of the stream
    pub discontinuity_sequence: u32,
    /// Whether the playlist carries `#EXT-X-ENDLIST`
    pub has_end_list: bool,
    pub segment_groups: Vec<SegmentGroup>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment_group_count(&self) -> usize {
        self.segment_groups.len()
    }

    /// Number of segments across all groups.
    pub fn segment_count(&self) -> usize {
        self.segment_groups
            .iter()
            .map(SegmentGroup::segment_count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segment_groups.iter().all(SegmentGroup::is_empty)
    }

    /// All segments in playback order, across group boundaries.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segment_groups.iter().flat_map(|g| g.segments().iter())
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.segment_groups.iter().map(SegmentGroup::duration).sum()
    }

    /// Longest segment duration in seconds, `0.0` for an empty playlist.
    pub fn max_duration(&self) -> f32 {
        self.segments().map(Segment::duration).fold(0.0, f32::max)
    }

    /// Largest rounded segment duration, the smallest target duration this
    /// playlist could legally declare.
    pub fn max_target_duration(&self) -> u32 {
        self.segments()
            .map(Segment::target_duration)
            .max()
            .unwrap_or(0)
    }

    /// Whether any segment, once rounded, is longer than the declared target duration.
    pub fn exceeds_target_duration(&self) -> bool {
        self.max_target_duration() > u32::from(self.target_duration)
    }

    pub fn has_valid_target_duration(&self) -> bool {
        !self.exceeds_target_duration()
    }
}
