// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application structure that implements the
//! egui::App trait. It holds UI-only state (selections, form text, status)
//! and forwards every user action to the command interface in `context`.

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::ui::{
    channel_bar::{self, ChannelAction},
    playlists::{self, PlaylistsAction},
    video_form::{self, FormAction, VideoForm},
    videos::{self, VideosAction},
};
use anyhow::Context;
use std::path::PathBuf;

/// Error shown in a modal window until dismissed.
struct ErrorDialog {
    title: String,
    message: String,
}

/// Main application state.
pub struct PlaylistManagerApp {
    /// Channel, playlists and id allocator
    ctx: AppContext,

    /// Index of the selected playlist
    selected_playlist: Option<usize>,

    /// Index of the selected video within the selected playlist
    selected_video: Option<usize>,

    /// Name typed for the next playlist
    new_playlist_name: String,

    video_form: VideoForm,

    /// Search box text (also used for renaming the channel)
    search_text: String,

    /// Status bar message
    status: String,

    error: Option<ErrorDialog>,
}

impl PlaylistManagerApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ctx: AppContext::new(config.default_channel_name.clone()),
            selected_playlist: None,
            selected_video: None,
            new_playlist_name: String::new(),
            video_form: VideoForm::default(),
            search_text: String::new(),
            status: "Ready".to_string(),
            error: None,
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Log a failed command and show it to the user.
    fn report(&mut self, title: &str, err: anyhow::Error) {
        log::error!("{}: {:#}", title, err);
        self.error = Some(ErrorDialog {
            title: title.to_string(),
            message: format!("{:#}", err),
        });
    }

    fn select_playlist(&mut self, index: Option<usize>) {
        self.selected_playlist = index;
        self.selected_video = None;
    }

    fn create_playlist(&mut self) {
        let name = self.ctx.create_playlist(&self.new_playlist_name).name.clone();
        self.new_playlist_name.clear();
        self.set_status(format!("Created playlist: {}", name));
    }

    fn delete_playlist(&mut self, index: usize) {
        if let Some(playlist) = self.ctx.delete_playlist(index) {
            self.select_playlist(None);
            self.set_status(format!("Deleted playlist: {}", playlist.name));
        }
    }

    fn save_playlist(&mut self, index: usize) {
        let Some(playlist) = self.ctx.playlist(index) else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .set_file_name(format!("{}.txt", playlist.name))
            .save_file()
        else {
            return;
        };

        let result = self
            .ctx
            .save_playlist(index, &path)
            .with_context(|| format!("Saving playlist to {}", path.display()));
        match result {
            Ok(()) => self.set_status(format!("Saved playlist to {}", file_name(&path))),
            Err(e) => self.report("Save Error", e),
        }
    }

    fn load_playlist(&mut self, index: usize) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .pick_file()
        else {
            return;
        };

        let result = self
            .ctx
            .load_playlist(index, &path)
            .with_context(|| format!("Loading playlist from {}", path.display()));
        match result {
            Ok(()) => {
                self.selected_video = None;
                self.set_status(format!("Loaded playlist from {}", file_name(&path)));
            }
            Err(e) => self.report("Load Error", e),
        }
    }

    fn add_video(&mut self) {
        let Some(index) = self.selected_playlist else {
            self.set_status("Select a playlist first to add video");
            return;
        };
        let form = &self.video_form;
        let result = self
            .ctx
            .add_video_from_input(index, &form.title, &form.duration, &form.views)
            .context("Check input");
        match result {
            Ok(()) => {
                self.video_form.clear();
                let name = self
                    .ctx
                    .playlist(index)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                self.set_status(format!("Added video to {}", name));
            }
            Err(e) => self.report("Invalid data", e),
        }
    }

    fn remove_video(&mut self, video_index: usize) {
        let Some(playlist_index) = self.selected_playlist else {
            return;
        };
        if self.ctx.remove_video(playlist_index, video_index).is_some() {
            self.selected_video = None;
            self.set_status("Video removed");
        }
    }

    fn search_playlist(&mut self) {
        if self.search_text.trim().is_empty() {
            self.set_status("Enter a playlist name to search");
            return;
        }
        match self.ctx.search_playlist(&self.search_text) {
            Some(index) => {
                self.select_playlist(Some(index));
                let name = self.ctx.channel().playlists[index].name.clone();
                self.set_status(format!("Found playlist: {}", name));
            }
            None => self.set_status("Search finished: playlist not found"),
        }
    }

    fn rename_channel(&mut self) {
        let result = self
            .ctx
            .rename_channel(&self.search_text)
            .map_err(anyhow::Error::from);
        match result {
            Ok(()) => {
                let name = self.ctx.channel().name.clone();
                self.set_status(format!("Channel renamed to: {}", name));
            }
            Err(e) => self.report("Name required", e),
        }
    }

    fn save_channel(&mut self, path: PathBuf) {
        let result = self
            .ctx
            .save_channel(&path)
            .with_context(|| format!("Saving channel to {}", path.display()));
        match result {
            Ok(()) => self.set_status(format!("Channel saved to {}", file_name(&path))),
            Err(e) => self.report("Save Error", e),
        }
    }

    fn load_channel(&mut self, path: PathBuf) {
        let result = self
            .ctx
            .load_channel(&path)
            .with_context(|| format!("Loading channel from {}", path.display()));
        match result {
            Ok(()) => {
                self.select_playlist(None);
                self.set_status(format!("Channel loaded from {}", file_name(&path)));
            }
            Err(e) => self.report("Load Error", e),
        }
    }

    fn pick_channel_save_path() -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .add_filter("YAML files", &["yaml", "yml"])
            .set_file_name("channel.json")
            .save_file()
    }

    fn pick_channel_open_path() -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("Channel documents", &["json", "yaml", "yml"])
            .pick_file()
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(error) = &self.error else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(error.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(error.message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.error = None;
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for PlaylistManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Channel...").clicked() {
                        if let Some(path) = Self::pick_channel_open_path() {
                            self.load_channel(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Save Channel...").clicked() {
                        if let Some(path) = Self::pick_channel_save_path() {
                            self.save_channel(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        // Channel controls
        let channel_action = egui::TopBottomPanel::bottom("channel_bar")
            .show(ctx, |ui| channel_bar::show(ui, &self.ctx.channel().name))
            .inner;

        match channel_action {
            ChannelAction::Rename => self.rename_channel(),
            ChannelAction::Save => {
                if let Some(path) = Self::pick_channel_save_path() {
                    self.save_channel(path);
                }
            }
            ChannelAction::Load => {
                if let Some(path) = Self::pick_channel_open_path() {
                    self.load_channel(path);
                }
            }
            ChannelAction::None => {}
        }

        // Playlist list (left side)
        let lines = self.ctx.playlist_lines();
        let playlists_action = egui::SidePanel::left("playlists")
            .default_width(340.0)
            .show(ctx, |ui| {
                playlists::show(
                    ui,
                    &lines,
                    self.selected_playlist,
                    &mut self.new_playlist_name,
                )
            })
            .inner;

        match playlists_action {
            PlaylistsAction::Select(idx) => self.select_playlist(Some(idx)),
            PlaylistsAction::Create => self.create_playlist(),
            PlaylistsAction::Delete(idx) => self.delete_playlist(idx),
            PlaylistsAction::Load(idx) => self.load_playlist(idx),
            PlaylistsAction::Save(idx) => self.save_playlist(idx),
            PlaylistsAction::None => {}
        }

        // Add-video form and search (right side)
        let can_add = self.selected_playlist.is_some();
        let form_action = egui::SidePanel::right("video_form")
            .default_width(300.0)
            .show(ctx, |ui| {
                video_form::show(ui, &mut self.video_form, &mut self.search_text, can_add)
            })
            .inner;

        match form_action {
            FormAction::AddVideo => self.add_video(),
            FormAction::Search => self.search_playlist(),
            FormAction::None => {}
        }

        // Videos of the selected playlist (center)
        let videos_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let playlist = self.selected_playlist.and_then(|i| self.ctx.playlist(i));
                videos::show(ui, playlist, self.selected_video)
            })
            .inner;

        match videos_action {
            VideosAction::Select(idx) => self.selected_video = Some(idx),
            VideosAction::Remove(idx) => self.remove_video(idx),
            VideosAction::Export => {
                if let Some(idx) = self.selected_playlist {
                    self.save_playlist(idx);
                }
            }
            VideosAction::None => {}
        }

        self.show_error_dialog(ctx);
    }
}
