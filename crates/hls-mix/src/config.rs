use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Which end of the playlist a sliding window trims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimEdge {
    /// Drop the oldest segments (a live rolling window)
    #[default]
    Start,
    /// Drop the newest segments
    End,
}

/// Sliding-window settings for [`crate::Manifest::enforce_window`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Maximum number of segments to keep (None = unlimited)
    pub max_segments: Option<usize>,

    /// End of the playlist to trim when the window overflows
    pub trim_from: TrimEdge,

    /// Leave playlists carrying `#EXT-X-ENDLIST` untouched
    pub close_on_end_list: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_segments: None,
            trim_from: TrimEdge::Start,
            close_on_end_list: true,
        }
    }
}

impl Display for WindowConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max_segments_display = match self.max_segments {
            Some(max) => format!("{max} segments"),
            None => "unlimited".to_string(),
        };

        write!(
            f,
            "WindowConfig {{ max_segments: {}, trim_from: {:?}, close_on_end_list: {} }}",
            max_segments_display, self.trim_from, self.close_on_end_list
        )
    }
}

impl WindowConfig {
    pub fn builder() -> WindowConfigBuilder {
        WindowConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WindowConfigBuilder {
    config: WindowConfig,
}

impl WindowConfigBuilder {
    pub fn max_segments(mut self, max_segments: usize) -> Self {
        self.config.max_segments = Some(max_segments);
        self
    }

    pub fn trim_from(mut self, edge: TrimEdge) -> Self {
        self.config.trim_from = edge;
        self
    }

    pub fn close_on_end_list(mut self, close: bool) -> Self {
        self.config.close_on_end_list = close;
        self
    }

    pub fn build(self) -> WindowConfig {
        self.config
    }
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.max_segments, None);
        assert_eq!(config.trim_from, TrimEdge::Start);
        assert!(config.close_on_end_list);
        assert_eq!(
            config.to_string(),
            "WindowConfig { max_segments: unlimited, trim_from: Start, close_on_end_list: true }"
        );
    }

    #[test]
    fn test_builder() {
        let config = WindowConfig::builder()
            .max_segments(6)
            .trim_from(TrimEdge::End)
            .close_on_end_list(false)
            .build();
        assert_eq!(config.max_segments, Some(6));
        assert_eq!(config.trim_from, TrimEdge::End);
        assert!(!config.close_on_end_list);
        assert_eq!(
            config.to_string(),
            "WindowConfig { max_segments: 6 segments, trim_from: End, close_on_end_list: false }"
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: WindowConfig = serde_json::from_str(r#"{"max_segments": 10}"#).unwrap();
        assert_eq!(config.max_segments, Some(10));
        assert_eq!(config.trim_from, TrimEdge::Start);
        assert!(config.close_on_end_list);

        let config: WindowConfig =
            serde_json::from_str(r#"{"trim_from": "end", "close_on_end_list": false}"#).unwrap();
        assert_eq!(config.max_segments, None);
        assert_eq!(config.trim_from, TrimEdge::End);
        assert!(!config.close_on_end_list);
    }
}
