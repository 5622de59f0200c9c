use std::fmt;

use crate::manifest::Manifest;
use crate::tag::Tag;

/// Renders a manifest back to playlist text.
///
/// The four scalar tags are always written, in a fixed order, followed by the
/// segments with a discontinuity marker between consecutive groups. The output
/// parses back to an equal manifest, provided no path or title contains a line
/// break.
pub fn render(manifest: &Manifest) -> String {
    manifest.to_string()
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Tag::Declaration)?;
        writeln!(f, "{}:{}", Tag::Version, self.version)?;
        writeln!(f, "{}:{}", Tag::TargetDuration, self.target_duration)?;
        writeln!(f, "{}:{}", Tag::MediaSequence, self.media_sequence)?;
        writeln!(
            f,
            "{}:{}",
            Tag::DiscontinuitySequence,
            self.discontinuity_sequence
        )?;

        for (i, group) in self.segment_groups.iter().enumerate() {
            // `Display` for f32 is the shortest text that parses back to the same value.
            for segment in group {
                writeln!(
                    f,
                    "{}:{},{}",
                    Tag::Segment,
                    segment.duration(),
                    segment.title()
                )?;
                writeln!(f, "{}", segment.path())?;
            }

            if i + 1 < self.segment_groups.len() {
                writeln!(f, "{}", Tag::Discontinuity)?;
            }
        }

        if self.has_end_list {
            writeln!(f, "{}", Tag::EndList)?;
        }

        Ok(())
    }
}
