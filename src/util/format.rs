// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Display formatting helpers.

/// Format a duration in seconds as `XmYs`, or `Ys` under a minute.
pub fn format_duration(seconds: u64) -> String {
    let (mins, secs) = (seconds / 60, seconds % 60);
    if mins > 0 {
        format!("{}m{}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}
