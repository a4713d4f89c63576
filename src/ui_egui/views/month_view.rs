use chrono::{Datelike, Local};
use egui::{Margin, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use super::{MonthViewAction, CELL_HEIGHT};
use crate::services::store::EventStore;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{month_cells, DayCell, DisplayMonth, DAY_LABELS};

const HEADER_HEIGHT: f32 = 30.0;
const GRID_SPACING: f32 = 2.0;

pub struct MonthView;

impl MonthView {
    /// Render the weekday header strip and the day grid for the given
    /// month, attaching cached events to their cells. Returns the single
    /// action produced by this frame's clicks, if any.
    pub fn show(
        ui: &mut egui::Ui,
        month: DisplayMonth,
        store: &EventStore,
        theme: &CalendarTheme,
    ) -> MonthViewAction {
        let palette = CalendarCellPalette::from_theme(theme);
        let total_spacing = GRID_SPACING * 6.0; // 6 gaps between 7 columns
        let col_width = (ui.available_width() - total_spacing) / 7.0;

        Self::show_header(ui, theme, col_width);

        ui.add_space(4.0);

        let today = Local::now().date_naive();
        let today_iso = if today.year() == month.year && today.month0() == month.month0 {
            Some(today.format("%Y-%m-%d").to_string())
        } else {
            None
        };

        let cells = month_cells(month.year, month.month0);
        let mut action = MonthViewAction::None;

        egui::Grid::new("month_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for (index, cell) in cells.iter().enumerate() {
                    match cell {
                        DayCell::Blank => {
                            let (rect, _response) = ui.allocate_exact_size(
                                Vec2::new(col_width, CELL_HEIGHT),
                                Sense::hover(),
                            );
                            ui.painter().rect_filled(rect, 2.0, palette.blank_bg);
                        }
                        DayCell::Date { day, iso } => {
                            let events = store.events_for_date(iso);
                            let is_today = today_iso.as_deref() == Some(iso.as_str());
                            let cell_action = Self::render_day_cell(
                                ui, *day, iso, is_today, &events, palette, theme, col_width,
                            );
                            if !matches!(cell_action, MonthViewAction::None) {
                                action = cell_action;
                            }
                        }
                    }
                    if index % 7 == 6 {
                        ui.end_row();
                    }
                }
            });

        action
    }

    fn show_header(ui: &mut egui::Ui, theme: &CalendarTheme, col_width: f32) {
        egui::Grid::new("month_header_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for label in DAY_LABELS {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(theme.header_background)
                                .rounding(egui::Rounding::same(4.0))
                                .stroke(Stroke::new(1.0, theme.day_border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(label)
                                                .size(14.0)
                                                .color(theme.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
                ui.end_row();
            });
    }
}
