// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Videos of the selected playlist.

use crate::models::Playlist;

/// Result of video panel interaction.
pub enum VideosAction {
    None,
    Select(usize),
    Remove(usize),
    Export,
}

pub fn show(
    ui: &mut egui::Ui,
    playlist: Option<&Playlist>,
    selected: Option<usize>,
) -> VideosAction {
    let mut action = VideosAction::None;

    ui.heading("Videos in Selected Playlist");
    ui.separator();

    let Some(playlist) = playlist else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Select a playlist to see its videos")
                    .color(egui::Color32::from_gray(160)),
            );
        });
        return action;
    };

    ui.horizontal(|ui| {
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Remove Video"))
            .clicked()
        {
            if let Some(idx) = selected {
                action = VideosAction::Remove(idx);
            }
        }
        if ui.button("Export Playlist to File").clicked() {
            action = VideosAction::Export;
        }
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .id_source("video_list")
        .show(ui, |ui| {
            for (idx, video) in playlist.videos.iter().enumerate() {
                if ui
                    .selectable_label(selected == Some(idx), video.to_string())
                    .clicked()
                {
                    action = VideosAction::Select(idx);
                }
            }
        });

    action
}
