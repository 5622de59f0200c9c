use tracing::debug;

use crate::manifest::Manifest;

impl Manifest {
    /// Appends the segment groups of `other` after this manifest's groups.
    ///
    /// Version and target duration are raised to the larger of the two. Returns
    /// `true` when either had to be raised, meaning the merged playlist demands
    /// more from players than this one did before.
    ///
    /// No extra discontinuity is counted at the join: the last group of `self`
    /// and the first group of `other` simply stay separate groups.
    pub fn merge(&mut self, other: Manifest) -> bool {
        let mut breaking = false;

        if self.target_duration < other.target_duration {
            debug!(
                "Merge raises target duration: {} -> {}",
                self.target_duration, other.target_duration
            );
            self.target_duration = other.target_duration;
            breaking = true;
        }

        if self.version < other.version {
            debug!("Merge raises version: {} -> {}", self.version, other.version);
            self.version = other.version;
            breaking = true;
        }

        self.segment_groups.extend(other.segment_groups);
        breaking
    }

    /// Whether this manifest can stand in for `other`: its version and target
    /// duration are both at least as large.
    ///
    /// This relation is not symmetric.
    pub fn is_compatible(&self, other: &Manifest) -> bool {
        self.version >= other.version && self.target_duration >= other.target_duration
    }
}
