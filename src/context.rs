// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application context and command interface.
//!
//! The UI never touches the model directly: every user action goes through
//! one of the commands below, which own the single channel and the
//! playlist id allocator.

use crate::error::{Error, Result};
use crate::models::{Channel, Playlist, Video};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AppContext {
    channel: Channel,
    /// Next id handed out by `create_playlist`
    next_id: u64,
}

impl AppContext {
    pub fn new(channel_name: impl Into<String>) -> Self {
        let channel = Channel::new(channel_name);
        let next_id = channel.next_playlist_id();
        Self { channel, next_id }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn playlist(&self, index: usize) -> Option<&Playlist> {
        self.channel.playlists.get(index)
    }

    pub fn playlist_lines(&self) -> Vec<String> {
        self.channel.playlist_lines()
    }

    /// Create a playlist with the next free id. A blank name becomes
    /// `Playlist <id>`.
    pub fn create_playlist(&mut self, name: &str) -> &Playlist {
        let id = self.next_id;
        let name = match name.trim() {
            "" => format!("Playlist {}", id),
            trimmed => trimmed.to_string(),
        };
        self.next_id += 1;
        log::info!("Created playlist '{}' (ID: {})", name, id);
        self.channel.add_playlist(Playlist::new(name, id));
        let last = self.channel.playlists.len() - 1;
        &self.channel.playlists[last]
    }

    /// Delete the playlist at `index`; out of range is a no-op.
    pub fn delete_playlist(&mut self, index: usize) -> Option<Playlist> {
        let removed = self.channel.remove_playlist(index);
        match &removed {
            Some(playlist) => log::info!("Deleted playlist '{}' (ID: {})", playlist.name, playlist.id()),
            None => log::debug!("No playlist at index {}, nothing deleted", index),
        }
        removed
    }

    pub fn add_video(&mut self, playlist_index: usize, video: Video) -> Result<()> {
        let playlist = self.playlist_mut(playlist_index)?;
        log::info!("Added '{}' to '{}'", video.title, playlist.name);
        playlist.add_video(video);
        Ok(())
    }

    /// Validate raw form fields and append the resulting video.
    pub fn add_video_from_input(
        &mut self,
        playlist_index: usize,
        title: &str,
        duration: &str,
        views: &str,
    ) -> Result<()> {
        // Check the target first so a bad index is reported over bad input
        self.playlist_mut(playlist_index)?;
        let video = Video::from_input(title, duration, views)?;
        self.add_video(playlist_index, video)
    }

    /// Remove a video; an invalid playlist or video index is a no-op.
    pub fn remove_video(&mut self, playlist_index: usize, video_index: usize) -> Option<Video> {
        let playlist = self.channel.playlists.get_mut(playlist_index)?;
        let removed = playlist.remove_video(video_index);
        if let Some(video) = &removed {
            log::info!("Removed '{}' from '{}'", video.title, playlist.name);
        }
        removed
    }

    pub fn save_playlist(&self, playlist_index: usize, path: &Path) -> Result<()> {
        self.channel
            .playlists
            .get(playlist_index)
            .ok_or(Error::NoSuchPlaylist(playlist_index))?
            .save_to_file(path)
    }

    pub fn load_playlist(&mut self, playlist_index: usize, path: &Path) -> Result<()> {
        self.playlist_mut(playlist_index)?.load_from_file(path)
    }

    pub fn save_channel(&self, path: &Path) -> Result<()> {
        self.channel.save_to_document(path)
    }

    /// Replace the channel from a document and reset the id allocator to
    /// `max(id) + 1`. On failure neither changes.
    pub fn load_channel(&mut self, path: &Path) -> Result<()> {
        self.channel.load_from_document(path)?;
        self.next_id = self.channel.next_playlist_id();
        log::debug!("Next playlist id is {}", self.next_id);
        Ok(())
    }

    pub fn rename_channel(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Enter a valid channel name".to_string()));
        }
        log::info!("Channel renamed from '{}' to '{}'", self.channel.name, name);
        self.channel.name = name.to_string();
        Ok(())
    }

    /// Index of the first playlist named `name`, ignoring case.
    pub fn search_playlist(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        let found = self.channel.search_playlist(name);
        if found.is_none() {
            log::info!("Playlist '{}' not found", name);
        }
        found
    }

    fn playlist_mut(&mut self, index: usize) -> Result<&mut Playlist> {
        self.channel
            .playlists
            .get_mut(index)
            .ok_or(Error::NoSuchPlaylist(index))
    }
}
