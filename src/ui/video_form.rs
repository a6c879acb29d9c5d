// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Add-video form and playlist search.

/// Raw text of the add-video form. Parsed by the command layer.
#[derive(Debug, Default)]
pub struct VideoForm {
    pub title: String,
    pub duration: String,
    pub views: String,
}

impl VideoForm {
    pub fn clear(&mut self) {
        self.title.clear();
        self.duration.clear();
        self.views.clear();
    }
}

pub enum FormAction {
    None,
    AddVideo,
    Search,
}

/// Display the add-video form and the search box.
pub fn show(
    ui: &mut egui::Ui,
    form: &mut VideoForm,
    search: &mut String,
    can_add: bool,
) -> FormAction {
    let mut action = FormAction::None;

    ui.heading("Create / Add Video");
    ui.separator();

    egui::Grid::new("video_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Title:");
            ui.text_edit_singleline(&mut form.title);
            ui.end_row();

            ui.label("Duration (sec):");
            ui.text_edit_singleline(&mut form.duration);
            ui.end_row();

            ui.label("Views:");
            ui.text_edit_singleline(&mut form.views);
            ui.end_row();
        });

    ui.add_space(6.0);
    if ui
        .add_enabled(can_add, egui::Button::new("Add to Selected Playlist"))
        .clicked()
    {
        action = FormAction::AddVideo;
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label("Search Playlist");
    let response = ui.text_edit_singleline(search);
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if ui.button("🔍 Search").clicked() || submitted {
        action = FormAction::Search;
    }

    action
}
