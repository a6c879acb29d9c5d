// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Channel controls: rename, save and load the whole channel.

pub enum ChannelAction {
    None,
    Rename,
    Save,
    Load,
}

pub fn show(ui: &mut egui::Ui, channel_name: &str) -> ChannelAction {
    let mut action = ChannelAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(egui::RichText::new(channel_name).strong());
        ui.separator();

        if ui.button("Rename Channel").clicked() {
            action = ChannelAction::Rename;
        }
        if ui.button("Save Channel").clicked() {
            action = ChannelAction::Save;
        }
        if ui.button("Load Channel").clicked() {
            action = ChannelAction::Load;
        }

        ui.separator();
        ui.label(
            egui::RichText::new("Rename uses the text in the search box")
                .italics()
                .weak(),
        );
    });

    action
}
