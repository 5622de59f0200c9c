// Count-based segment removal. Both directions drop groups that end up empty and
// count one consumed discontinuity per dropped group.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::manifest::Manifest;

/// How much a trim removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    /// Groups that were emptied and dropped
    pub groups: usize,
    /// Segments removed, which may be fewer than requested
    pub segments: usize,
}

impl Removal {
    pub fn is_empty(&self) -> bool {
        self.segments == 0 && self.groups == 0
    }
}

#[inline]
fn advance(counter: &mut u32, by: usize) {
    *counter = counter.saturating_add(u32::try_from(by).unwrap_or(u32::MAX));
}

impl Manifest {
    /// Removes up to `n` segments from the head of the playlist.
    ///
    /// The media sequence advances by every segment removed. Each group that is
    /// fully consumed is dropped and advances the discontinuity sequence by one.
    /// Asking for more segments than exist empties the playlist.
    pub fn remove_from_start(&mut self, n: usize) -> Removal {
        let mut removal = Removal::default();
        if n == 0 {
            return removal;
        }

        let mut budget = n;
        let groups = std::mem::take(&mut self.segment_groups);
        self.segment_groups.reserve(groups.len());

        for mut group in groups {
            if budget == 0 {
                self.segment_groups.push(group);
                continue;
            }

            let removed = group.remove_from_start(budget);
            budget -= removed;
            removal.segments += removed;
            advance(&mut self.media_sequence, removed);

            if group.is_empty() {
                advance(&mut self.discontinuity_sequence, 1);
                removal.groups += 1;
                continue;
            }

            self.segment_groups.push(group);
        }

        debug!(
            "Removed {} segments ({} groups) from start, media sequence {}, discontinuity sequence {}",
            removal.segments, removal.groups, self.media_sequence, self.discontinuity_sequence
        );
        removal
    }

    /// Removes up to `n` segments from the tail of the playlist.
    ///
    /// Fully consumed groups are dropped and advance the discontinuity sequence
    /// by one each, as when trimming the head. Unlike [`Manifest::remove_from_start`],
    /// the media sequence is advanced once, by the total number of segments
    /// removed, after the walk.
    pub fn remove_from_end(&mut self, n: usize) -> Removal {
        let mut removal = Removal::default();
        if n == 0 {
            return removal;
        }

        let mut budget = n;
        let groups = std::mem::take(&mut self.segment_groups);
        let mut kept = Vec::with_capacity(groups.len());

        for mut group in groups.into_iter().rev() {
            if budget == 0 {
                kept.push(group);
                continue;
            }

            let removed = group.remove_from_end(budget);
            budget -= removed;
            removal.segments += removed;

            if group.is_empty() {
                advance(&mut self.discontinuity_sequence, 1);
                removal.groups += 1;
                continue;
            }

            kept.push(group);
        }

        kept.reverse();
        self.segment_groups = kept;
        advance(&mut self.media_sequence, removal.segments);

        debug!(
            "Removed {} segments ({} groups) from end, media sequence {}, discontinuity sequence {}",
            removal.segments, removal.groups, self.media_sequence, self.discontinuity_sequence
        );
        removal
    }
}
