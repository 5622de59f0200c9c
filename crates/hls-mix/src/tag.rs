use std::fmt;

/// Playlist tags understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `#EXTM3U`, must open the playlist
    Declaration,
    /// `#EXT-X-VERSION`
    Version,
    /// `#EXT-X-TARGETDURATION`
    TargetDuration,
    /// `#EXT-X-MEDIA-SEQUENCE`
    MediaSequence,
    /// `#EXT-X-DISCONTINUITY-SEQUENCE`
    DiscontinuitySequence,
    /// `#EXTINF`, opens a segment
    Segment,
    /// `#EXT-DISCONTINUITY`, separates two segment groups
    Discontinuity,
    /// `#EXT-X-ENDLIST`
    EndList,
}

impl Tag {
    /// Spelling of the standard discontinuity tag, accepted as an alias when parsing.
    pub const DISCONTINUITY_ALIAS: &'static str = "#EXT-X-DISCONTINUITY";

    /// The canonical spelling of the tag, as rendered.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Declaration => "#EXTM3U",
            Tag::Version => "#EXT-X-VERSION",
            Tag::TargetDuration => "#EXT-X-TARGETDURATION",
            Tag::MediaSequence => "#EXT-X-MEDIA-SEQUENCE",
            Tag::DiscontinuitySequence => "#EXT-X-DISCONTINUITY-SEQUENCE",
            Tag::Segment => "#EXTINF",
            Tag::Discontinuity => "#EXT-DISCONTINUITY",
            Tag::EndList => "#EXT-X-ENDLIST",
        }
    }

    /// Look up a tag by its exact name (the text before the first `:`).
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "#EXTM3U" => Tag::Declaration,
            "#EXT-X-VERSION" => Tag::Version,
            "#EXT-X-TARGETDURATION" => Tag::TargetDuration,
            "#EXT-X-MEDIA-SEQUENCE" => Tag::MediaSequence,
            "#EXT-X-DISCONTINUITY-SEQUENCE" => Tag::DiscontinuitySequence,
            "#EXTINF" => Tag::Segment,
            "#EXT-DISCONTINUITY" | Self::DISCONTINUITY_ALIAS => Tag::Discontinuity,
            "#EXT-X-ENDLIST" => Tag::EndList,
            _ => return None,
        };
        Some(tag)
    }

    /// Split a playlist line into its tag and the raw value after the `:`.
    ///
    /// Returns `None` for lines that are not one of the known tags, which the
    /// parser treats as segment paths.
    pub(crate) fn split_line(line: &str) -> Option<(Self, Option<&str>)> {
        let (name, value) = match line.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (line, None),
        };
        Self::from_name(name).map(|tag| (tag, value))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
