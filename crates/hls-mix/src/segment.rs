use serde::{Deserialize, Serialize};

/// A single media segment reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    path: String,
    duration: f32,
    #[serde(default)]
    title: String,
}

impl Segment {
    /// Create a segment with an empty title.
    pub fn new(path: impl Into<String>, duration: f32) -> Self {
        Self {
            path: path.into(),
            duration,
            title: String::new(),
        }
    }

    /// Set the free-text title written after the duration in `#EXTINF`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// URI of the segment, as written in the playlist.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Title from `#EXTINF`, empty when absent.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The duration rounded to the nearest integer, the value compared against
    /// `#EXT-X-TARGETDURATION`.
    #[inline]
    pub fn target_duration(&self) -> u32 {
        self.duration.round() as u32
    }
}

/// A run of segments with no discontinuity between them.
///
/// Order is playback order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentGroup {
    segments: Vec<Segment>,
}

impl SegmentGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total duration of the group in seconds.
    pub fn duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration as f64).sum()
    }

    /// Removes up to `n` segments from the head of the group and returns how many
    /// were removed.
    ///
    /// Counters live on the manifest, so this does not update the media or
    /// discontinuity sequence; prefer [`crate::Manifest::remove_from_start`].
    pub fn remove_from_start(&mut self, n: usize) -> usize {
        let removed = n.min(self.segments.len());
        self.segments.drain(..removed);
        removed
    }

    /// Removes up to `n` segments from the tail of the group and returns how many
    /// were removed. Counters are left untouched.
    pub fn remove_from_end(&mut self, n: usize) -> usize {
        let removed = n.min(self.segments.len());
        self.segments.truncate(self.segments.len() - removed);
        removed
    }
}

impl From<Vec<Segment>> for SegmentGroup {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for SegmentGroup {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SegmentGroup {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
