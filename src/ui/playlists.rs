// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playlist list panel.
//!
//! Shows every playlist in channel order, plus the controls for creating,
//! deleting and loading/saving a single playlist file.

/// Result of playlist panel interaction.
pub enum PlaylistsAction {
    None,
    Select(usize),
    Create,
    Delete(usize),
    Load(usize),
    Save(usize),
}

/// Display the playlist list and its controls.
pub fn show(
    ui: &mut egui::Ui,
    lines: &[String],
    selected: Option<usize>,
    new_name: &mut String,
) -> PlaylistsAction {
    let mut action = PlaylistsAction::None;

    ui.heading("Playlists");
    ui.separator();

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(new_name)
                .hint_text("New playlist name")
                .desired_width(160.0),
        );
        if ui.button("➕ New").clicked() {
            action = PlaylistsAction::Create;
        }
    });

    ui.horizontal(|ui| {
        let has_selection = selected.is_some();
        if ui.add_enabled(has_selection, egui::Button::new("📂 Load")).clicked() {
            if let Some(idx) = selected {
                action = PlaylistsAction::Load(idx);
            }
        }
        if ui.add_enabled(has_selection, egui::Button::new("💾 Save")).clicked() {
            if let Some(idx) = selected {
                action = PlaylistsAction::Save(idx);
            }
        }
        if ui.add_enabled(has_selection, egui::Button::new("🗑 Delete")).clicked() {
            if let Some(idx) = selected {
                action = PlaylistsAction::Delete(idx);
            }
        }
    });

    ui.separator();

    if lines.is_empty() {
        ui.label(egui::RichText::new("No playlists yet").italics().weak());
        return action;
    }

    egui::ScrollArea::vertical()
        .id_source("playlist_list")
        .show(ui, |ui| {
            for (idx, line) in lines.iter().enumerate() {
                if ui.selectable_label(selected == Some(idx), line.as_str()).clicked() {
                    action = PlaylistsAction::Select(idx);
                }
            }
        });

    action
}
