// Playlist parser: a single forward pass over the lines with one line of lookahead.

use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{ParseError, ValueError};
use crate::manifest::Manifest;
use crate::segment::{Segment, SegmentGroup};
use crate::tag::Tag;

/// What the parser expects from the next non-empty line.
#[derive(Debug)]
enum LineState {
    /// Any tag; a bare line here is invalid.
    Idle,
    /// An `#EXTINF` was read on `line`; the next bare line is its path.
    AwaitingPath {
        duration: f32,
        title: String,
        line: usize,
    },
}

struct Parser {
    manifest: Manifest,
    group: SegmentGroup,
    state: LineState,
}

impl Parser {
    fn new() -> Self {
        Self {
            manifest: Manifest::default(),
            group: SegmentGroup::new(),
            state: LineState::Idle,
        }
    }

    /// Closes the pending group, keeping it only if it holds segments.
    fn close_group(&mut self) {
        let group = std::mem::take(&mut self.group);
        if !group.is_empty() {
            self.manifest.segment_groups.push(group);
        }
    }

    /// Fails if a segment is still waiting for its path.
    fn ensure_no_pending_segment(&self, line: usize) -> Result<(), ParseError> {
        match self.state {
            LineState::Idle => Ok(()),
            LineState::AwaitingPath { .. } => Err(ParseError::MissingSegmentPath { line }),
        }
    }

    /// Handles one non-empty line. Returns `false` once the end marker is reached.
    fn line(&mut self, text: &str, line: usize) -> Result<bool, ParseError> {
        let Some((tag, value)) = Tag::split_line(text) else {
            return self.path(text, line).map(|()| true);
        };

        match tag {
            Tag::Version => self.manifest.version = parse_number(tag, value, line)?,
            Tag::TargetDuration => self.manifest.target_duration = parse_number(tag, value, line)?,
            Tag::MediaSequence => self.manifest.media_sequence = parse_number(tag, value, line)?,
            Tag::DiscontinuitySequence => {
                self.manifest.discontinuity_sequence = parse_number(tag, value, line)?
            }
            Tag::Segment => {
                self.ensure_no_pending_segment(line)?;
                let (duration, title) = parse_segment_info(value, line)?;
                self.state = LineState::AwaitingPath {
                    duration,
                    title: title.to_string(),
                    line,
                };
            }
            Tag::Discontinuity => {
                self.ensure_no_pending_segment(line)?;
                self.close_group();
            }
            Tag::EndList => {
                self.ensure_no_pending_segment(line)?;
                self.manifest.has_end_list = true;
                return Ok(false);
            }
            Tag::Declaration => {
                return Err(ParseError::InvalidLine {
                    content: text.to_string(),
                    line,
                });
            }
        }

        Ok(true)
    }

    fn path(&mut self, text: &str, line: usize) -> Result<(), ParseError> {
        match std::mem::replace(&mut self.state, LineState::Idle) {
            LineState::AwaitingPath {
                duration, title, ..
            } => {
                trace!("Segment {} ({}s) at line {}", text, duration, line);
                self.group
                    .push(Segment::new(text, duration).with_title(title));
                Ok(())
            }
            LineState::Idle => Err(ParseError::InvalidLine {
                content: text.to_string(),
                line,
            }),
        }
    }

    fn finish(mut self, past_end: usize) -> Result<Manifest, ParseError> {
        if let LineState::AwaitingPath { line, .. } = self.state {
            debug!("Segment opened at line {} has no path", line);
            return Err(ParseError::MissingSegmentPath { line: past_end });
        }

        self.close_group();
        Ok(self.manifest)
    }
}

/// Returns the trimmed value of a tag, failing if there is none.
fn require_value(tag: Tag, value: Option<&str>, line: usize) -> Result<&str, ParseError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ParseError::MissingFieldValue { tag, line }),
    }
}

fn parse_number<T>(tag: Tag, value: Option<&str>, line: usize) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Into<ValueError>,
{
    require_value(tag, value, line)?
        .parse()
        .map_err(|e: T::Err| ParseError::FieldParse {
            tag,
            line,
            source: e.into(),
        })
}

/// Splits `#EXTINF:<duration>,<title>` into its duration and title.
///
/// The comma is required even when the title is empty. The duration must be
/// finite and non-negative.
fn parse_segment_info(value: Option<&str>, line: usize) -> Result<(f32, &str), ParseError> {
    let Some((duration, title)) = value.and_then(|value| value.split_once(',')) else {
        return Err(ParseError::MissingFieldValue {
            tag: Tag::Segment,
            line,
        });
    };

    let duration: f32 = parse_number(Tag::Segment, Some(duration), line)?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(ParseError::FieldParse {
            tag: Tag::Segment,
            line,
            source: ValueError::InvalidDuration,
        });
    }
    Ok((duration, title))
}

/// Parses playlist text into a [`Manifest`].
///
/// The first non-empty line must be `#EXTM3U`. Parsing stops at `#EXT-X-ENDLIST`;
/// anything after it is ignored. The first error aborts the parse.
pub fn parse(text: &str) -> Result<Manifest, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    match lines.next() {
        Some((_, line)) if line.trim_end() == Tag::Declaration.as_str() => {}
        _ => return Err(ParseError::MissingDeclaration { line: 1 }),
    }

    let mut parser = Parser::new();
    for (number, line) in lines {
        if !parser.line(line, number)? {
            break;
        }
    }

    let manifest = parser.finish(text.lines().count() + 1)?;
    debug!(
        "Parsed playlist: {} groups, {} segments, media sequence {}, discontinuity sequence {}",
        manifest.segment_group_count(),
        manifest.segment_count(),
        manifest.media_sequence,
        manifest.discontinuity_sequence
    );
    Ok(manifest)
}

impl FromStr for Manifest {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
