//! Light and dark color sets for the calendar surface.

use egui::Color32;

#[derive(Debug, Clone, Copy)]
pub struct CalendarTheme {
    pub is_dark: bool,
    pub day_background: Color32,
    pub today_background: Color32,
    pub blank_background: Color32,
    pub day_border: Color32,
    pub today_border: Color32,
    pub header_background: Color32,
    pub header_text: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            day_background: Color32::from_rgb(252, 252, 252),
            today_background: Color32::from_rgb(224, 238, 255),
            blank_background: Color32::from_rgb(240, 240, 240),
            day_border: Color32::from_rgb(205, 205, 205),
            today_border: Color32::from_rgb(59, 130, 246),
            header_background: Color32::from_rgb(228, 232, 240),
            header_text: Color32::from_rgb(40, 45, 55),
            text_primary: Color32::from_rgb(30, 30, 30),
            text_muted: Color32::from_rgb(120, 120, 120),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            day_background: Color32::from_rgb(38, 40, 46),
            today_background: Color32::from_rgb(34, 52, 82),
            blank_background: Color32::from_rgb(28, 29, 33),
            day_border: Color32::from_rgb(62, 65, 72),
            today_border: Color32::from_rgb(96, 156, 240),
            header_background: Color32::from_rgb(48, 52, 60),
            header_text: Color32::from_rgb(218, 222, 230),
            text_primary: Color32::from_rgb(228, 228, 228),
            text_muted: Color32::from_rgb(140, 144, 152),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
