//! HLS media playlist toolkit
//!
//! This crate parses, validates, merges and re-serializes HLS media playlists
//! (`.m3u8`), and trims segments from either end of a playlist while keeping the
//! media sequence and discontinuity sequence counters consistent.
//!
//! ## Component Overview
//!
//! - `parser`: playlist text to [`Manifest`]
//! - `render`: [`Manifest`] back to playlist text
//! - `merge`: appending one manifest to another with a compatibility signal
//! - `trim`: count-based segment removal from the head or the tail
//! - `window`: sliding-window rotation driven by a [`WindowConfig`]
//!
//! ```rust
//! # fn main() -> Result<(), hls_mix::ParseError> {
//! use hls_mix::Manifest;
//!
//! let text = "#EXTM3U\n#EXT-X-TARGETDURATION:4\n#EXTINF:4.0,\na.ts\n#EXTINF:3.5,\nb.ts\n";
//! let mut manifest: Manifest = text.parse()?;
//!
//! let removal = manifest.remove_from_start(1);
//! assert_eq!(removal.segments, 1);
//! assert_eq!(manifest.media_sequence, 1);
//! assert!(manifest.to_string().contains("b.ts"));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(unsafe_code)]

mod config;
mod error;
mod manifest;
mod merge;
mod parser;
mod render;
mod segment;
mod tag;
#[cfg(test)]
mod test_utils;
mod trim;
mod window;

pub use crate::config::{TrimEdge, WindowConfig, WindowConfigBuilder};
pub use crate::error::{ParseError, ValueError};
pub use crate::manifest::Manifest;
pub use crate::parser::parse;
pub use crate::render::render;
pub use crate::segment::{Segment, SegmentGroup};
pub use crate::tag::Tag;
pub use crate::trim::Removal;
