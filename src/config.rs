// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.

use crate::models::channel::DEFAULT_CHANNEL_NAME;
use std::env;

/// Environment variable overriding the startup channel name.
pub const CHANNEL_NAME_VAR: &str = "PLAYLIST_MANAGER_CHANNEL_NAME";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub default_channel_name: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Playlist Manager".to_string(),
            default_channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            window_size: [1000.0, 680.0],
            min_window_size: [720.0, 480.0],
        }
    }
}

impl AppConfig {
    /// Defaults, with the channel name taken from the environment if set.
    pub fn from_env() -> Self {
        Self::from_channel_name(env::var(CHANNEL_NAME_VAR).ok())
    }

    fn from_channel_name(name: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(name) = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            config.default_channel_name = name;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_name_override() {
        let config = AppConfig::from_channel_name(Some("  Cooking  ".to_string()));
        assert_eq!(config.default_channel_name, "Cooking");
    }

    #[test]
    fn test_blank_override_ignored() {
        assert_eq!(AppConfig::from_channel_name(Some("   ".to_string())), AppConfig::default());
        assert_eq!(AppConfig::from_channel_name(None).default_channel_name, "My Channel");
    }
}
