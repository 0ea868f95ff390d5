use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};

use crate::config::ClockFormat;
use crate::schedule::{is_today, GoalSummary, ScheduleStore, SessionType, DAY_NAMES};
use super::theme::{
    accent_color, completed_colors, goal_colors, phosphor_fill_family, session_colors,
};

/// Result from schedule grid interactions
#[derive(Default)]
pub struct ScheduleGridResult {
    pub toggle_slot: Option<(usize, String)>,      // (day index, time label)
    pub toggle_completed: Option<(usize, String)>, // (day index, time label)
}

/// Format a time label "HH:MM" according to clock format
pub fn format_clock_time(time_24: &str, clock_format: ClockFormat) -> String {
    match clock_format {
        ClockFormat::Hour24 => time_24.to_string(),
        ClockFormat::Hour12 => {
            // Parse "HH:MM" and convert to 12-hour format
            let parts: Vec<&str> = time_24.split(':').collect();
            if parts.len() >= 2 {
                if let (Ok(hour), Ok(min)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                    let (h12, ampm) = if hour == 0 {
                        (12, "am")
                    } else if hour < 12 {
                        (hour, "am")
                    } else if hour == 12 {
                        (12, "pm")
                    } else {
                        (hour - 12, "pm")
                    };
                    return format!("{}:{:02}{}", h12, min, ampm);
                }
            }
            time_24.to_string()
        }
    }
}

/// Render the weekly goal card: points badge, study progress bar, stat tiles
/// and the perfect-week banner
pub fn render_goal_tracker(ui: &mut Ui, summary: &GoalSummary) {
    let (points_color, success_color) = goal_colors();
    let secondary = Color32::from_rgb(144, 144, 136);

    let card_frame = egui::Frame::none()
        .fill(Color32::BLACK)
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(40, 40, 38)))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0));

    card_frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Header row: trophy + title, points badge right-aligned
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(egui_phosphor::fill::TROPHY)
                    .size(20.0)
                    .color(points_color)
                    .family(phosphor_fill_family()),
            );
            ui.label(RichText::new("Weekly goal").size(18.0).color(Color32::WHITE).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::Frame::none()
                    .fill(Color32::from_rgb(40, 40, 38))
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.x = 5.0;
                        ui.label(RichText::new("points").size(13.0).color(secondary));
                        ui.label(
                            RichText::new(summary.total_points.to_string())
                                .size(16.0)
                                .color(points_color)
                                .strong(),
                        );
                    });
            });
        });

        ui.add_space(10.0);

        // Progress line
        ui.horizontal(|ui| {
            ui.label(RichText::new(egui_phosphor::regular::TARGET).size(16.0).color(accent_color()));
            ui.label(
                RichText::new(format!(
                    "Study progress: {} / {}",
                    summary.completed_study, summary.scheduled_study
                ))
                .size(14.0)
                .color(Color32::WHITE),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{:.0}% complete", summary.progress_percentage))
                        .size(13.0)
                        .color(secondary),
                );
            });
        });

        ui.add_space(6.0);

        // Progress bar
        let bar_height = 8.0;
        let (bar_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), bar_height),
            egui::Sense::hover(),
        );
        ui.painter()
            .rect_filled(bar_rect, 4.0, Color32::from_rgb(0x28, 0x28, 0x26));
        let fill_width = bar_rect.width() * (summary.progress_percentage / 100.0).clamp(0.0, 1.0);
        if fill_width > 0.0 {
            let fill_rect =
                egui::Rect::from_min_size(bar_rect.min, egui::vec2(fill_width, bar_height));
            ui.painter().rect_filled(fill_rect, 4.0, accent_color());
        }

        ui.add_space(12.0);

        // Stat tiles
        ui.columns(3, |cols| {
            stat_tile(&mut cols[0], &summary.completed_study.to_string(), "Completed", success_color);
            stat_tile(&mut cols[1], &summary.total_points.to_string(), "Total points", points_color);
            stat_tile(&mut cols[2], &summary.remaining.to_string(), "Remaining", Color32::WHITE);
        });

        if summary.all_complete() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{}  All study sessions completed - perfect week!",
                        egui_phosphor::regular::TROPHY
                    ))
                    .size(15.0)
                    .color(success_color),
                );
            });
        }
    });
}

fn stat_tile(ui: &mut Ui, value: &str, caption: &str, value_color: Color32) {
    egui::Frame::none()
        .fill(Color32::from_rgb(20, 20, 18))
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(40, 40, 38)))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).size(22.0).color(value_color).strong());
                ui.label(RichText::new(caption).size(12.0).color(Color32::from_rgb(144, 144, 136)));
            });
        });
}

/// Chip row for picking the session type applied to newly scheduled slots.
/// Returns the clicked type, if any.
pub fn render_session_picker(ui: &mut Ui, selected: SessionType) -> Option<SessionType> {
    let mut picked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for session in SessionType::ALL {
            let is_selected = session == selected;
            let (fill, text_on_fill) = session_colors(session);
            let font_id = egui::FontId::proportional(14.0);
            let text_size = ui.fonts(|f| {
                f.layout_no_wrap(session.label().to_string(), font_id.clone(), Color32::WHITE)
                    .size()
            });
            let padding = egui::vec2(12.0, 6.0);
            let (rect, response) = ui.allocate_exact_size(text_size + padding * 2.0, egui::Sense::click());

            // Filled with the session color when active, outlined otherwise
            let text_color = if is_selected {
                ui.painter().rect_filled(rect, egui::Rounding::same(4.0), fill);
                text_on_fill
            } else {
                ui.painter().rect_stroke(
                    rect,
                    egui::Rounding::same(4.0),
                    egui::Stroke::new(1.0, Color32::from_rgb(56, 56, 52)),
                );
                Color32::from_rgb(120, 120, 130)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                session.label(),
                font_id,
                text_color,
            );

            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if response.clicked() {
                picked = Some(session);
            }
        }
    });

    picked
}

/// Color key shown under the grid
pub fn render_legend(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;
        for session in SessionType::ALL {
            let (fill, _) = session_colors(session);
            legend_entry(ui, fill, &format!("{} session", session.label()));
        }
        let (completed_fill, _) = completed_colors();
        legend_entry(ui, completed_fill, "Completed (+10 pts for study)");
    });
}

fn legend_entry(ui: &mut Ui, color: Color32, label: &str) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 3.0, color);
        ui.label(RichText::new(label).size(12.0).color(Color32::from_rgb(144, 144, 136)));
    });
}

/// Render the week grid: a fixed header of day columns over a scrollable
/// body of 45-minute rows. Primary click on a cell toggles the slot,
/// secondary click toggles its completed flag; the store itself is never
/// touched here.
pub fn render_schedule_grid(
    ui: &mut Ui,
    days: &[NaiveDate; 7],
    slot_labels: &[String],
    store: &ScheduleStore,
    clock_format: ClockFormat,
) -> ScheduleGridResult {
    let mut result = ScheduleGridResult::default();

    // Layout constants
    let gutter_width = 60.0;
    let header_height = 40.0;
    let row_height = 26.0;
    let grid_line_color = Color32::from_rgb(0x40, 0x40, 0x3c);
    let hour_line_color = Color32::from_rgb(0x50, 0x50, 0x4a);
    let label_color = Color32::from_rgb(0x70, 0x70, 0x68);

    let available_width = ui.available_width();
    let day_width = (available_width - gutter_width) / days.len() as f32;

    // Fixed day headers (outside the scroll area)
    let (header_rect, _) = ui.allocate_exact_size(
        egui::vec2(available_width, header_height),
        egui::Sense::hover(),
    );
    let painter = ui.painter();

    for (day_idx, date) in days.iter().enumerate() {
        let x = header_rect.min.x + gutter_width + day_idx as f32 * day_width;
        let center_x = x + day_width / 2.0;
        let today = is_today(*date);

        let name_color = if today { accent_color() } else { Color32::from_rgb(0xb0, 0xb0, 0xa8) };
        let date_color = if today { accent_color() } else { label_color };

        painter.text(
            egui::pos2(center_x, header_rect.min.y + 12.0),
            egui::Align2::CENTER_CENTER,
            DAY_NAMES[day_idx],
            egui::FontId::proportional(14.0),
            name_color,
        );
        painter.text(
            egui::pos2(center_x, header_rect.min.y + 28.0),
            egui::Align2::CENTER_CENTER,
            date.format("%-d").to_string(),
            egui::FontId::proportional(11.0),
            date_color,
        );

        // Vertical separator line between columns
        if day_idx > 0 {
            painter.line_segment(
                [
                    egui::pos2(x, header_rect.min.y + 4.0),
                    egui::pos2(x, header_rect.max.y - 4.0),
                ],
                egui::Stroke::new(1.0, grid_line_color),
            );
        }
    }

    let total_grid_height = slot_labels.len() as f32 * row_height;

    // Scrollable grid body
    egui::ScrollArea::vertical().show(ui, |ui| {
        let (grid_rect, _) = ui.allocate_exact_size(
            egui::vec2(available_width, total_grid_height),
            egui::Sense::hover(),
        );
        let painter = ui.painter();

        // Highlight the current day column with a dim background
        for (day_idx, date) in days.iter().enumerate() {
            if is_today(*date) {
                let col_x = grid_rect.min.x + gutter_width + day_idx as f32 * day_width;
                let col_rect = egui::Rect::from_min_size(
                    egui::pos2(col_x, grid_rect.min.y),
                    egui::vec2(day_width, total_grid_height),
                );
                painter.rect_filled(col_rect, 0.0, Color32::from_rgb(0x11, 0x11, 0x10));
                break;
            }
        }

        // Vertical column lines
        for day_idx in 0..days.len() {
            let x = grid_rect.min.x + gutter_width + day_idx as f32 * day_width;
            painter.line_segment(
                [egui::pos2(x, grid_rect.min.y), egui::pos2(x, grid_rect.max.y)],
                egui::Stroke::new(1.0, grid_line_color),
            );
        }

        // Right edge line
        painter.line_segment(
            [
                egui::pos2(grid_rect.max.x, grid_rect.min.y),
                egui::pos2(grid_rect.max.x, grid_rect.max.y),
            ],
            egui::Stroke::new(1.0, grid_line_color),
        );

        // Row lines and gutter time labels; on-the-hour lines are brighter
        for (row_idx, label) in slot_labels.iter().enumerate() {
            let y = grid_rect.min.y + row_idx as f32 * row_height;
            let on_the_hour = label.ends_with(":00");

            painter.line_segment(
                [
                    egui::pos2(grid_rect.min.x + gutter_width, y),
                    egui::pos2(grid_rect.max.x, y),
                ],
                egui::Stroke::new(1.0, if on_the_hour { hour_line_color } else { grid_line_color }),
            );
            painter.text(
                egui::pos2(grid_rect.min.x + gutter_width - 8.0, y + row_height / 2.0),
                egui::Align2::RIGHT_CENTER,
                format_clock_time(label, clock_format),
                egui::FontId::proportional(11.0),
                label_color,
            );
        }

        // Cells
        for day_idx in 0..days.len() {
            let col_x = grid_rect.min.x + gutter_width + day_idx as f32 * day_width;

            for (row_idx, label) in slot_labels.iter().enumerate() {
                let y = grid_rect.min.y + row_idx as f32 * row_height;
                let cell_rect = egui::Rect::from_min_size(
                    egui::pos2(col_x, y),
                    egui::vec2(day_width, row_height),
                );
                let response = ui.interact(
                    cell_rect,
                    ui.id().with(("slot", day_idx, row_idx)),
                    egui::Sense::click(),
                );

                let session = store.session_at(day_idx, label);
                let response = if session.is_some() {
                    response.on_hover_text("Click to remove, right-click to toggle done")
                } else {
                    response
                };

                let block_rect = cell_rect.shrink(1.5);
                if let Some(session) = session {
                    let completed = store.is_completed(day_idx, label);
                    let (fill, text_color) = if completed {
                        completed_colors()
                    } else {
                        session_colors(session)
                    };
                    ui.painter().rect_filled(block_rect, 3.0, fill);

                    let cell_text = if completed {
                        format!("{} Done", egui_phosphor::regular::CHECK_FAT)
                    } else {
                        session.label().to_string()
                    };
                    ui.painter().text(
                        block_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        cell_text,
                        egui::FontId::proportional(11.0),
                        text_color,
                    );
                } else if response.hovered() {
                    ui.painter().rect_filled(block_rect, 3.0, Color32::from_rgb(32, 32, 30));
                }

                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    result.toggle_slot = Some((day_idx, label.clone()));
                }
                if response.secondary_clicked() {
                    result.toggle_completed = Some((day_idx, label.clone()));
                }
            }
        }
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_time() {
        assert_eq!(format_clock_time("06:00", ClockFormat::Hour24), "06:00");
        assert_eq!(format_clock_time("21:45", ClockFormat::Hour24), "21:45");

        assert_eq!(format_clock_time("06:00", ClockFormat::Hour12), "6:00am");
        assert_eq!(format_clock_time("12:00", ClockFormat::Hour12), "12:00pm");
        assert_eq!(format_clock_time("21:45", ClockFormat::Hour12), "9:45pm");
        assert_eq!(format_clock_time("00:30", ClockFormat::Hour12), "12:30am");
    }
}
