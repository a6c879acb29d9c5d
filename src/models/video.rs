// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video record.
//!
//! A video is a plain value: title, duration in seconds and view count.
//! It is serialized as a flat three-field record, both as one line of a
//! playlist file and inside the channel document.

use crate::error::{Error, Result};
use crate::util::format::format_duration;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    /// Length in seconds
    pub duration: u64,
    pub views: u64,
}

impl Video {
    /// Create a new video record.
    pub fn new(title: impl Into<String>, duration: u64, views: u64) -> Self {
        Self {
            title: title.into(),
            duration,
            views,
        }
    }

    /// Build a video from raw form input.
    ///
    /// The title is trimmed and must not be empty; duration and views must
    /// parse as non-negative integers.
    pub fn from_input(title: &str, duration: &str, views: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::Validation("Title required".to_string()));
        }
        let duration = parse_count("duration", duration)?;
        let views = parse_count("views", views)?;
        Ok(Self::new(title, duration, views))
    }
}

fn parse_count(field: &str, raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        Error::Validation(format!(
            "{} must be a non-negative whole number, got '{}'",
            field,
            raw.trim()
        ))
    })
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {} — {} views",
            self.title,
            format_duration(self.duration),
            self.views
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let video = Video::new("Intro", 125, 10);
        assert_eq!(video.to_string(), "Intro — 2m5s — 10 views");

        let short = Video::new("Clip", 45, 0);
        assert_eq!(short.to_string(), "Clip — 45s — 0 views");
    }

    #[test]
    fn test_record_has_exactly_three_fields() {
        let value = serde_json::to_value(Video::new("Intro", 125, 10)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["title"], "Intro");
        assert_eq!(object["duration"], 125);
        assert_eq!(object["views"], 10);
    }

    #[test]
    fn test_record_roundtrip_keeps_unicode_title() {
        let video = Video::new("Café ☕ — live", 3600, 42);
        let line = serde_json::to_string(&video).unwrap();
        assert!(line.contains("Café ☕"));
        let decoded: Video = serde_json::from_str(&line).unwrap();
        assert_eq!(decoded, video);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = serde_json::from_str::<Video>(r#"{"title":"x","duration":-1,"views":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_input_trims_and_parses() {
        let video = Video::from_input("  Intro ", " 125", "10 ").unwrap();
        assert_eq!(video, Video::new("Intro", 125, 10));
    }

    #[test]
    fn test_from_input_rejects_bad_values() {
        assert!(matches!(
            Video::from_input("   ", "1", "1"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            Video::from_input("Intro", "two", "1"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            Video::from_input("Intro", "1", "-3"),
            Err(Error::Validation(_))
        ));
    }
}
