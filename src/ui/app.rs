use chrono::{Local, NaiveDate};
use eframe::egui;
use egui::{Color32, RichText};

use crate::config::{ClockFormat, Config};
use crate::export;
use crate::schedule::{
    shift_week, time_slots, week_days, week_start, ScheduleStore, SessionType, WeekDirection,
};
use super::views;

pub struct StudyBoxApp {
    config: Config,

    // Current view
    week_reference: NaiveDate,

    // Data
    store: ScheduleStore,
    selected_session: SessionType,
    slot_labels: Vec<String>,

    // Settings dialog
    show_settings: bool,
    settings_font_scale: f32,
    settings_clock_format: ClockFormat,
    settings_default_session: SessionType,

    // Clear-week confirmation
    show_clear_confirm: bool,

    // Status
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl StudyBoxApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_default();
        super::setup_fonts(&cc.egui_ctx);
        super::setup_theme(&cc.egui_ctx);

        Self {
            settings_font_scale: config.font_scale,
            settings_clock_format: config.clock_format,
            settings_default_session: config.default_session,
            selected_session: config.default_session,
            config,
            week_reference: Local::now().date_naive(),
            store: ScheduleStore::new(),
            slot_labels: time_slots(),
            show_settings: false,
            show_clear_confirm: false,
            status_message: None,
        }
    }

    fn save_settings(&mut self) {
        self.config.font_scale = self.settings_font_scale;
        self.config.clock_format = self.settings_clock_format;
        self.config.default_session = self.settings_default_session;

        match self.config.save() {
            Ok(_) => {
                self.show_settings = false;
            }
            Err(e) => {
                self.status_message = Some((format!("Failed to save: {}", e), true));
            }
        }
    }

    fn render_main(&mut self, ui: &mut egui::Ui) {
        // Header with week navigation
        ui.horizontal(|ui| {
            // Week navigation styled like a button but pill-shaped
            let (button_bg, button_text) = super::theme::button_colors();

            egui::Frame::none()
                .fill(button_bg)
                .rounding(egui::Rounding::same(12.0)) // Pill-shaped (fully rounded)
                .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        // Left arrow
                        let left_arrow = ui.add(egui::Label::new(
                            RichText::new(egui_phosphor::regular::CARET_LEFT).size(14.0).color(button_text)
                        ).sense(egui::Sense::click()));
                        if left_arrow.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if left_arrow.clicked() {
                            self.week_reference =
                                shift_week(self.week_reference, WeekDirection::Previous);
                        }

                        ui.add_space(4.0);

                        // Date text with min width to prevent resizing
                        let days = week_days(self.week_reference);
                        let date_text = format!(
                            "{} - {}",
                            days[0].format("%b %-d"),
                            days[6].format("%b %-d, %Y")
                        );
                        // Min width for longest possible text like "Sep 29 - Oct 5, 2025"
                        ui.allocate_ui_with_layout(
                            egui::vec2(140.0, 14.0),
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                ui.label(RichText::new(&date_text).size(14.0).color(button_text));
                            }
                        );

                        ui.add_space(4.0);

                        // Right arrow
                        let right_arrow = ui.add(egui::Label::new(
                            RichText::new(egui_phosphor::regular::CARET_RIGHT).size(14.0).color(button_text)
                        ).sense(egui::Sense::click()));
                        if right_arrow.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if right_arrow.clicked() {
                            self.week_reference =
                                shift_week(self.week_reference, WeekDirection::Next);
                        }
                    });
                });

            // Jump back to the current week
            let today = Local::now().date_naive();
            if week_start(self.week_reference) != week_start(today) {
                ui.add_space(8.0);
                let today_btn = ui.add(egui::Label::new(
                    RichText::new("Today").size(14.0).color(super::theme::accent_color())
                ).sense(egui::Sense::click()));
                if today_btn.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if today_btn.clicked() {
                    self.week_reference = today;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Icon-only buttons - gray, white on hover
                let text_color = Color32::from_rgb(150, 150, 150);
                let hover_color = Color32::WHITE;
                let font_id = egui::FontId::proportional(18.0);

                // Settings button
                let settings_icon = egui_phosphor::regular::FADERS_HORIZONTAL;
                let icon_size = ui.fonts(|f| f.layout_no_wrap(settings_icon.to_string(), font_id.clone(), Color32::WHITE).size());
                let (settings_rect, settings_response) = ui.allocate_exact_size(icon_size + egui::vec2(8.0, 4.0), egui::Sense::click());
                let settings_col = if settings_response.hovered() { hover_color } else { text_color };
                ui.painter().text(settings_rect.center(), egui::Align2::CENTER_CENTER, settings_icon, font_id.clone(), settings_col);
                if settings_response.on_hover_text("Settings").clicked() {
                    // Reset scratch state to current config values
                    self.settings_font_scale = self.config.font_scale;
                    self.settings_clock_format = self.config.clock_format;
                    self.settings_default_session = self.config.default_session;
                    self.show_settings = true;
                }

                ui.add_space(12.0);

                // Export button (JSON icon)
                let export_icon = egui_phosphor::regular::BRACKETS_CURLY;
                let icon_size = ui.fonts(|f| f.layout_no_wrap(export_icon.to_string(), font_id.clone(), Color32::WHITE).size());
                let (export_rect, export_response) = ui.allocate_exact_size(icon_size + egui::vec2(8.0, 4.0), egui::Sense::click());
                let export_col = if export_response.hovered() { hover_color } else { text_color };
                ui.painter().text(export_rect.center(), egui::Align2::CENTER_CENTER, export_icon, font_id.clone(), export_col);
                if export_response.on_hover_text("Export week to JSON").clicked() {
                    match export::export_week(&self.store, self.week_reference) {
                        Ok(path) => {
                            self.status_message = Some((format!("Exported to {}", path.display()), false));
                        }
                        Err(e) => {
                            self.status_message = Some((format!("Export failed: {}", e), true));
                        }
                    }
                }

                ui.add_space(12.0);

                // Clear-week button
                let clear_icon = egui_phosphor::regular::TRASH;
                let icon_size = ui.fonts(|f| f.layout_no_wrap(clear_icon.to_string(), font_id.clone(), Color32::WHITE).size());
                let (clear_rect, clear_response) = ui.allocate_exact_size(icon_size + egui::vec2(8.0, 4.0), egui::Sense::click());
                let clear_col = if clear_response.hovered() { hover_color } else { text_color };
                ui.painter().text(clear_rect.center(), egui::Align2::CENTER_CENTER, clear_icon, font_id, clear_col);
                if clear_response.on_hover_text("Clear the week").clicked() && !self.store.is_empty() {
                    self.show_clear_confirm = true;
                }
            });
        });

        ui.add_space(8.0);

        views::render_goal_tracker(ui, &self.store.goal_summary());

        ui.add_space(8.0);

        // Session type selector, legend right-aligned on the same row
        ui.horizontal(|ui| {
            ui.label(RichText::new("Session type").size(14.0).color(Color32::from_rgb(176, 176, 168)));
            if let Some(picked) = views::render_session_picker(ui, self.selected_session) {
                self.selected_session = picked;
            }

            ui.add_space(24.0);
            views::render_legend(ui);
        });

        ui.add_space(8.0);

        // The grid reports interactions; mutations happen here
        let days = week_days(self.week_reference);
        let grid = views::render_schedule_grid(
            ui,
            &days,
            &self.slot_labels,
            &self.store,
            self.config.clock_format,
        );
        if let Some((day, time)) = grid.toggle_slot {
            self.store.toggle_slot(day, &time, self.selected_session);
        }
        if let Some((day, time)) = grid.toggle_completed {
            self.store.toggle_completed(day, &time);
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let section_color = Color32::from_rgb(140, 140, 160);

        // === Display ===
        ui.label(RichText::new("Display").color(section_color).strong());
        ui.add_space(8.0);

        egui::Grid::new("display_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Font scale");
                ui.horizontal(|ui| {
                    ui.add(egui::Slider::new(&mut self.settings_font_scale, 0.75..=2.0).show_value(false));
                    ui.label(format!("{:.0}%", self.settings_font_scale * 100.0));
                });
                ui.end_row();

                ui.label("Clock format");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.settings_clock_format, ClockFormat::Hour24, "14:30");
                    ui.radio_value(&mut self.settings_clock_format, ClockFormat::Hour12, "2:30pm");
                });
                ui.end_row();
            });

        ui.add_space(20.0);

        // === Planning ===
        ui.label(RichText::new("Planning").color(section_color).strong());
        ui.add_space(8.0);

        egui::Grid::new("planning_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Startup session type");
                ui.horizontal(|ui| {
                    for session in SessionType::ALL {
                        ui.radio_value(&mut self.settings_default_session, session, session.label());
                    }
                });
                ui.end_row();
            });

        ui.add_space(24.0);

        ui.horizontal(|ui| {
            // Custom buttons with hover effect
            let btn_bg = Color32::from_rgb(0x28, 0x28, 0x26);
            let btn_hover = Color32::from_rgb(0x50, 0x50, 0x4a);
            let text_color = Color32::from_rgb(180, 180, 190);
            let font_id = egui::FontId::proportional(17.0);
            let padding = egui::vec2(18.0, 10.0);
            let rounding = egui::Rounding::same(6.0);

            // Save button
            let save_text = "Save";
            let save_size = ui.fonts(|f| f.layout_no_wrap(save_text.to_string(), font_id.clone(), text_color).size());
            let (save_rect, save_response) = ui.allocate_exact_size(save_size + padding * 2.0, egui::Sense::click());
            let save_bg = if save_response.hovered() { btn_hover } else { btn_bg };
            ui.painter().rect_filled(save_rect, rounding, save_bg);
            ui.painter().text(save_rect.center(), egui::Align2::CENTER_CENTER, save_text, font_id.clone(), text_color);
            if save_response.clicked() {
                self.save_settings();
            }

            // Cancel button
            let cancel_text = "Cancel";
            let cancel_size = ui.fonts(|f| f.layout_no_wrap(cancel_text.to_string(), font_id.clone(), text_color).size());
            let (cancel_rect, cancel_response) = ui.allocate_exact_size(cancel_size + padding * 2.0, egui::Sense::click());
            let cancel_bg = if cancel_response.hovered() { btn_hover } else { btn_bg };
            ui.painter().rect_filled(cancel_rect, rounding, cancel_bg);
            ui.painter().text(cancel_rect.center(), egui::Align2::CENTER_CENTER, cancel_text, font_id, text_color);
            if cancel_response.clicked() {
                self.show_settings = false;
            }
        });
    }
}

impl eframe::App for StudyBoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle pinch-to-zoom (trackpad pinch or Ctrl+scroll)
        let zoom_delta = ctx.input(|i| i.zoom_delta());
        if zoom_delta != 1.0 {
            // Apply zoom to font scale, clamped to reasonable range
            self.config.font_scale = (self.config.font_scale * zoom_delta).clamp(0.75, 2.5);
            let _ = self.config.save();
        }

        ctx.set_pixels_per_point(self.config.font_scale);

        // Render the settings window if open
        if self.show_settings {
            let (content_bg, frame_color, _) = super::theme::dialog_colors();
            let dialog_frame = egui::Frame::none()
                .fill(content_bg)
                .stroke(egui::Stroke::new(2.0, frame_color))
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(20.0));

            egui::Window::new("Settings")
                .collapsible(false)
                .resizable(false)
                .default_width(500.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .frame(dialog_frame)
                .show(ctx, |ui| {
                    self.render_settings(ui);
                });
        }

        // Render clear-week confirmation dialog
        if self.show_clear_confirm {
            let mut do_clear = false;
            let mut cancel_clear = false;

            let (content_bg, frame_color, _) = super::theme::dialog_colors();
            let dialog_frame = egui::Frame::none()
                .fill(content_bg)
                .stroke(egui::Stroke::new(2.0, frame_color))
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(20.0));

            egui::Window::new("Clear week")
                .collapsible(false)
                .resizable(false)
                .default_width(400.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .frame(dialog_frame)
                .show(ctx, |ui| {
                    ui.add_space(10.0);
                    ui.label(RichText::new(format!(
                        "Remove all {} scheduled sessions?",
                        self.store.len()
                    )).size(14.0));
                    ui.add_space(20.0);

                    ui.horizontal(|ui| {
                        // Custom buttons with hover effect
                        let btn_bg = Color32::from_rgb(0x28, 0x28, 0x26);
                        let btn_hover = Color32::from_rgb(0x50, 0x50, 0x4a);
                        let text_color = Color32::from_rgb(180, 180, 190);
                        let clear_color = Color32::from_rgb(224, 108, 117);
                        let font_id = egui::FontId::proportional(17.0);
                        let padding = egui::vec2(18.0, 10.0);
                        let rounding = egui::Rounding::same(6.0);

                        // Clear button - red text for emphasis
                        let clear_text = "Clear";
                        let clear_size = ui.fonts(|f| f.layout_no_wrap(clear_text.to_string(), font_id.clone(), clear_color).size());
                        let (clear_rect, clear_response) = ui.allocate_exact_size(clear_size + padding * 2.0, egui::Sense::click());
                        let clear_bg = if clear_response.hovered() { btn_hover } else { btn_bg };
                        ui.painter().rect_filled(clear_rect, rounding, clear_bg);
                        ui.painter().text(clear_rect.center(), egui::Align2::CENTER_CENTER, clear_text, font_id.clone(), clear_color);
                        if clear_response.clicked() {
                            do_clear = true;
                        }

                        // Cancel button
                        let cancel_text = "Cancel";
                        let cancel_size = ui.fonts(|f| f.layout_no_wrap(cancel_text.to_string(), font_id.clone(), text_color).size());
                        let (cancel_rect, cancel_response) = ui.allocate_exact_size(cancel_size + padding * 2.0, egui::Sense::click());
                        let cancel_bg = if cancel_response.hovered() { btn_hover } else { btn_bg };
                        ui.painter().rect_filled(cancel_rect, rounding, cancel_bg);
                        ui.painter().text(cancel_rect.center(), egui::Align2::CENTER_CENTER, cancel_text, font_id, text_color);
                        if cancel_response.clicked() {
                            cancel_clear = true;
                        }
                    });
                });

            if do_clear {
                self.store.clear();
                self.show_clear_confirm = false;
            }
            if cancel_clear {
                self.show_clear_confirm = false;
            }
        }

        egui::CentralPanel::default().frame(
            egui::Frame::none().inner_margin(egui::Margin::symmetric(12.0, 8.0))
        ).show(ctx, |ui| {
            // Status message - selectable with copy and close buttons
            let mut dismiss_message = false;
            let mut copy_message: Option<String> = None;
            if let Some((msg, is_error)) = &self.status_message {
                let color = if *is_error {
                    Color32::from_rgb(224, 108, 117)
                } else {
                    Color32::from_rgb(152, 195, 121)
                };
                let dim_color = Color32::from_rgb(120, 120, 130);
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new(RichText::new(msg).color(color)));

                    ui.add_space(8.0);

                    // Copy button
                    let copy_btn = ui.add(egui::Label::new(
                        RichText::new(egui_phosphor::regular::COPY).size(14.0).color(dim_color)
                    ).sense(egui::Sense::click()));
                    if copy_btn.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if copy_btn.clicked() {
                        copy_message = Some(msg.clone());
                    }

                    // Close button
                    let close_btn = ui.add(egui::Label::new(
                        RichText::new(egui_phosphor::regular::X).size(14.0).color(dim_color)
                    ).sense(egui::Sense::click()));
                    if close_btn.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if close_btn.clicked() {
                        dismiss_message = true;
                    }
                });
                ui.add_space(8.0);
            }
            if let Some(text) = copy_message {
                ui.ctx().copy_text(text);
            }
            if dismiss_message {
                self.status_message = None;
            }

            self.render_main(ui);
        });
    }
}
