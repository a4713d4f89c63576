//! Day cell rendering for the month view.
//!
//! Paints the day number and event chips for one dated cell and resolves
//! clicks: a hit on a chip opens edit, anywhere else in the cell opens
//! create. Chip hitboxes are tested before the cell-level click so one
//! click produces exactly one action.

use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::{field_chip_color, CalendarCellPalette};
use super::{resolve_cell_click, MonthView, MonthViewAction, CELL_HEIGHT};
use crate::models::event::{Event, Field};
use crate::ui_egui::theme::CalendarTheme;

const CHIP_HEIGHT: f32 = 16.0;
const CHIP_SPACING: f32 = 2.0;
const MAX_VISIBLE_CHIPS: usize = 3;

impl MonthView {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        day: u32,
        date: &str,
        is_today: bool,
        events: &[&Event],
        palette: CalendarCellPalette,
        theme: &CalendarTheme,
        col_width: f32,
    ) -> MonthViewAction {
        let desired_size = Vec2::new(col_width, CELL_HEIGHT);
        let (rect, response) =
            ui.allocate_exact_size(desired_size, Sense::click().union(Sense::hover()));

        let bg_color = if is_today {
            palette.today_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        let border_color = if is_today {
            palette.today_border
        } else {
            palette.border
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            day.to_string(),
            egui::FontId::proportional(14.0),
            palette.text,
        );

        // Chips, with hitboxes retained for click resolution
        let mut chip_hitboxes: Vec<(Rect, Event)> = Vec::new();
        let mut y_offset = 22.0;

        for &event in events.iter().take(MAX_VISIBLE_CHIPS) {
            let chip_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );

            let chip_color = field_chip_color(Field::from_place(&event.place), theme.is_dark);
            ui.painter().rect_filled(chip_rect, 2.0, chip_color);
            chip_hitboxes.push((chip_rect, event.clone()));

            let font_id = egui::FontId::proportional(11.0);
            let label = Self::truncate_to_width(
                ui,
                &event.chip_label(),
                &font_id,
                chip_rect.width() - 6.0,
            );
            ui.painter().text(
                Pos2::new(chip_rect.left() + 3.0, chip_rect.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                font_id,
                Color32::WHITE,
            );

            y_offset += CHIP_HEIGHT + CHIP_SPACING;
        }

        if events.len() > MAX_VISIBLE_CHIPS {
            ui.painter().text(
                Pos2::new(rect.left() + 5.0, rect.top() + y_offset),
                egui::Align2::LEFT_TOP,
                format!("+{} more", events.len() - MAX_VISIBLE_CHIPS),
                egui::FontId::proportional(10.0),
                palette.muted_text,
            );
        }

        let pointer_pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));
        let chip_hit = pointer_pos.and_then(|pos| {
            chip_hitboxes
                .iter()
                .find(|(hit_rect, _)| hit_rect.contains(pos))
                .map(|(_, event)| event.clone())
        });

        if let Some(hovered) = &chip_hit {
            if response.hovered() {
                response.clone().on_hover_text(hovered.chip_label());
            }
        }

        if response.clicked() {
            return resolve_cell_click(date, chip_hit);
        }

        MonthViewAction::None
    }

    /// Truncate text to fit within a pixel width, appending "…" when
    /// needed. Binary-searches the longest fitting prefix.
    fn truncate_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                Color32::WHITE,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = boundaries.len().saturating_sub(1);
        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..boundaries[mid]], ellipsis);
            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        if low == 0 {
            ellipsis.to_string()
        } else {
            format!("{}{}", &text[..boundaries[low]], ellipsis)
        }
    }
}
