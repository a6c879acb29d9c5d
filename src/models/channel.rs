// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Channel: the top-level container of playlists.
//!
//! The channel owns the whole-channel document format. Loading is strict
//! about malformed documents but lenient about missing keys: an absent
//! `name` keeps the current name and absent `playlists` means none.

use super::playlist::Playlist;
use crate::error::{Error, Result};
use crate::io::serialization;
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_CHANNEL_NAME: &str = "My Channel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub playlists: Vec<Playlist>,
}

impl Default for Channel {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_NAME)
    }
}

impl Channel {
    /// Create a channel with no playlists.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            playlists: Vec::new(),
        }
    }

    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Remove the playlist at `index`; out of range is a no-op returning `None`.
    pub fn remove_playlist(&mut self, index: usize) -> Option<Playlist> {
        if index < self.playlists.len() {
            Some(self.playlists.remove(index))
        } else {
            None
        }
    }

    /// Display lines for every playlist, in channel order.
    pub fn playlist_lines(&self) -> Vec<String> {
        self.playlists.iter().map(|p| p.to_string()).collect()
    }

    /// Index of the first playlist whose name matches `name`, ignoring case.
    pub fn search_playlist(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.playlists
            .iter()
            .position(|p| p.name.to_lowercase() == needle)
    }

    /// Smallest id greater than every current playlist id (1 when empty).
    pub fn next_playlist_id(&self) -> u64 {
        self.playlists.iter().map(Playlist::id).max().unwrap_or(0) + 1
    }

    /// Write the whole channel as a single document.
    pub fn save_to_document(&self, path: &Path) -> Result<()> {
        serialization::export_channel(self, path)?;
        log::info!(
            "Saved channel '{}' ({} playlists) to {}",
            self.name,
            self.playlists.len(),
            path.display()
        );
        Ok(())
    }

    /// Replace name and playlists with the contents of a channel document.
    ///
    /// The document is fully parsed and checked before anything changes.
    /// Playlists sharing an id are rejected.
    pub fn load_from_document(&mut self, path: &Path) -> Result<()> {
        let document = serialization::import_channel(path)?;

        let mut seen = HashSet::new();
        for playlist in &document.playlists {
            if !seen.insert(playlist.id()) {
                return Err(Error::DuplicatePlaylistId(playlist.id()));
            }
        }

        if let Some(name) = document.name {
            self.name = name;
        }
        self.playlists = document.playlists;
        log::info!(
            "Loaded channel '{}' ({} playlists) from {}",
            self.name,
            self.playlists.len(),
            path.display()
        );
        Ok(())
    }
}
