// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: videos, playlists and the channel that owns them.

pub mod channel;
pub mod playlist;
pub mod video;

pub use channel::Channel;
pub use playlist::Playlist;
pub use video::Video;
