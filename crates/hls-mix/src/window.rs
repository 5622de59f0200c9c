use tracing::{debug, trace};

use crate::config::{TrimEdge, WindowConfig};
use crate::manifest::Manifest;
use crate::trim::Removal;

impl Manifest {
    /// Trims the playlist down to at most `config.max_segments` segments.
    ///
    /// Trimming goes through [`Manifest::remove_from_start`] or
    /// [`Manifest::remove_from_end`], so the sequence counters follow the same
    /// rules. Does nothing when the window is unbounded, already satisfied, or the
    /// playlist is finished and `close_on_end_list` is set.
    pub fn enforce_window(&mut self, config: &WindowConfig) -> Removal {
        let Some(max_segments) = config.max_segments else {
            return Removal::default();
        };

        if config.close_on_end_list && self.has_end_list {
            trace!("Playlist has ended, window not enforced");
            return Removal::default();
        }

        let count = self.segment_count();
        if count <= max_segments {
            return Removal::default();
        }

        let excess = count - max_segments;
        debug!(
            "Window overflow: {} > {}, trimming {} segments from {:?}",
            count, max_segments, excess, config.trim_from
        );

        match config.trim_from {
            TrimEdge::Start => self.remove_from_start(excess),
            TrimEdge::End => self.remove_from_end(excess),
        }
    }
}
