use chrono::{NaiveTime, Timelike};
use egui::{Color32, RichText};

use crate::models::event::{Event, EventPayload, Field};

/// State for the event editing dialog.
///
/// Holding a value of this type is the "open" dialog state; the app drops
/// it to close. `event_id` discriminates create (`None`) from edit
/// (`Some`). `date` is captured when the dialog opens and never changes
/// for the life of the dialog.
pub struct EventDialogState {
    pub event_id: Option<i64>,
    pub date: String,
    pub time: NaiveTime,
    pub place: Field,
    pub note: String,
}

/// Outcome of rendering the dialog for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDialogResult {
    None,
    Save,
    Delete(i64),
    Cancel,
}

impl EventDialogState {
    /// Fresh draft for a new event on the given date.
    pub fn new_event(date: impl Into<String>) -> Self {
        Self {
            event_id: None,
            date: date.into(),
            time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid default time"),
            place: Field::One,
            note: String::new(),
        }
    }

    /// Draft pre-filled from an existing event.
    pub fn from_event(event: &Event) -> Self {
        let time = NaiveTime::parse_from_str(&event.time, "%H:%M")
            .unwrap_or_else(|_| NaiveTime::from_hms_opt(9, 0, 0).expect("valid default time"));
        Self {
            event_id: event.id,
            date: event.date.clone(),
            time,
            place: Field::from_place(&event.place),
            note: event.note.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.event_id.is_some()
    }

    /// Mutation body built from the draft plus the date captured at open.
    pub fn payload(&self) -> EventPayload {
        EventPayload {
            date: self.date.clone(),
            time: self.time.format("%H:%M").to_string(),
            place: self.place.label().to_string(),
            note: self.note.clone(),
        }
    }
}

/// Render the modal. The closed choice for `place` and the structured
/// time picker mean an empty time or place cannot be submitted; `note`
/// stays optional.
pub fn render_event_dialog(ctx: &egui::Context, state: &mut EventDialogState) -> EventDialogResult {
    let mut result = EventDialogResult::None;

    let title = if state.is_edit() {
        format!("Edit Event for {}", state.date)
    } else {
        format!("Add Event for {}", state.date)
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Time:");
                render_time_picker(ui, &mut state.time);
            });

            ui.horizontal(|ui| {
                ui.label("Place:");
                egui::ComboBox::from_id_source("event_place_combo")
                    .selected_text(state.place.label())
                    .show_ui(ui, |ui| {
                        for field in Field::ALL {
                            ui.selectable_value(&mut state.place, field, field.label());
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label("Note:");
                ui.text_edit_singleline(&mut state.note);
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let save_label = if state.is_edit() {
                    "Save Changes"
                } else {
                    "Add Event"
                };
                if ui.button(save_label).clicked() {
                    result = EventDialogResult::Save;
                }

                if let Some(id) = state.event_id {
                    if ui
                        .button(RichText::new("Delete").color(Color32::RED))
                        .clicked()
                    {
                        result = EventDialogResult::Delete(id);
                    }
                }

                if ui.button("Cancel").clicked() {
                    result = EventDialogResult::Cancel;
                }
            });
        });

    result
}

/// Simple time picker using hour and minute dropdowns.
fn render_time_picker(ui: &mut egui::Ui, time: &mut NaiveTime) {
    let mut hour = time.hour();
    let mut minute = time.minute();

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_source("event_time_hour")
            .width(60.0)
            .selected_text(format!("{:02}", hour))
            .show_ui(ui, |ui| {
                for h in 0..24 {
                    ui.selectable_value(&mut hour, h, format!("{:02}", h));
                }
            });

        ui.label(":");

        egui::ComboBox::from_id_source("event_time_minute")
            .width(60.0)
            .selected_text(format!("{:02}", minute))
            .show_ui(ui, |ui| {
                for m in (0..60).step_by(5) {
                    ui.selectable_value(&mut minute, m, format!("{:02}", m));
                }
            });
    });

    if let Some(new_time) = NaiveTime::from_hms_opt(hour, minute, 0) {
        *time = new_time;
    }
}
