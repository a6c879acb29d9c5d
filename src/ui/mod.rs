// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the playlist manager.

pub mod channel_bar;
pub mod playlists;
pub mod video_form;
pub mod videos;
