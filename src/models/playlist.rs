// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playlist: a named, identified, ordered list of videos.
//!
//! Insertion order is meaningful: it is both the display order and the
//! order videos are written to a playlist file.

use super::video::Video;
use crate::error::Result;
use crate::io::serialization;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "playListName")]
    pub name: String,
    /// Assigned once by the owning channel's allocator
    #[serde(rename = "plID")]
    id: u64,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Playlist {
    /// Create an empty playlist.
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
            videos: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Append a video to the end of the playlist. Duplicates are allowed.
    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
    }

    /// Remove the video at `index`.
    ///
    /// An out-of-range index leaves the playlist unchanged and returns `None`.
    pub fn remove_video(&mut self, index: usize) -> Option<Video> {
        if index < self.videos.len() {
            Some(self.videos.remove(index))
        } else {
            None
        }
    }

    /// Write one JSON record per video, one per line, in playlist order.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        serialization::write_video_lines(&self.videos, path)?;
        log::info!(
            "Saved {} videos of '{}' to {}",
            self.videos.len(),
            self.name,
            path.display()
        );
        Ok(())
    }

    /// Replace the videos with the records read from a playlist file.
    ///
    /// The whole file is decoded before anything is replaced, so a failed
    /// load leaves the playlist as it was.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let videos = serialization::read_video_lines(path)?;
        log::info!(
            "Loaded {} videos into '{}' from {}",
            videos.len(),
            self.name,
            path.display()
        );
        self.videos = videos;
        Ok(())
    }

    /// Structured `{playListName, plID, videos}` form for the channel document.
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::json!({
            "playListName": self.name,
            "plID": self.id,
            "videos": self.videos,
        })
    }

    /// Rebuild a playlist from its document form. A missing `videos` key
    /// yields an empty playlist. The playlist and each video must be objects.
    pub fn from_document(document: serde_json::Value) -> serde_json::Result<Self> {
        if let Some(videos) = document.get("videos").and_then(|v| v.as_array()) {
            for video in videos {
                serialization::ensure_object(video)?;
            }
        }
        serialization::from_object(document)
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {}) — {} videos", self.name, self.id, self.videos.len())
    }
}
