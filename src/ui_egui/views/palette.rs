use egui::Color32;

use crate::models::event::Field;
use crate::ui_egui::theme::CalendarTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub today_bg: Color32,
    pub blank_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub hover_border: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            today_bg: theme.today_background,
            blank_bg: theme.blank_background,
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            muted_text: theme.text_muted,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
        }
    }
}

/// Chip color per field. Visual grouping only; an unknown place maps to
/// the first field's color.
pub(crate) fn field_chip_color(field: Field, is_dark: bool) -> Color32 {
    let base = match field {
        Field::One => Color32::from_rgb(59, 130, 246),
        Field::Two => Color32::from_rgb(16, 185, 129),
        Field::Three => Color32::from_rgb(245, 158, 11),
    };
    if is_dark {
        Color32::from_rgb(
            (base.r() as f32 * 0.85) as u8,
            (base.g() as f32 * 0.85) as u8,
            (base.b() as f32 * 0.85) as u8,
        )
    } else {
        base
    }
}
