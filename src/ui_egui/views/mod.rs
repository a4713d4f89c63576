use crate::models::event::Event;

pub mod month_day_cell;
pub mod month_view;
mod palette;

pub use month_view::MonthView;

/// Height of a day cell and of the blank padding cells.
pub(crate) const CELL_HEIGHT: f32 = 96.0;

/// Action produced by the month grid. At most one action fires per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthViewAction {
    None,
    /// Blank area of a day cell was clicked; open the create dialog.
    CreateEvent(String),
    /// An event chip was clicked; open the edit dialog pre-filled.
    EditEvent(String, Event),
}

/// Decide what a click inside a dated cell means. A chip hit always wins
/// over the cell itself, so a single click never opens both the edit and
/// the create dialog.
pub(crate) fn resolve_cell_click(date: &str, chip_hit: Option<Event>) -> MonthViewAction {
    match chip_hit {
        Some(event) => MonthViewAction::EditEvent(date.to_string(), event),
        None => MonthViewAction::CreateEvent(date.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event {
            id: Some(42),
            date: "2024-01-05".to_string(),
            time: "18:30".to_string(),
            place: "Field 2".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn chip_hit_opens_edit_and_never_create() {
        let action = resolve_cell_click("2024-01-05", Some(sample_event()));
        assert_eq!(
            action,
            MonthViewAction::EditEvent("2024-01-05".to_string(), sample_event())
        );
    }

    #[test]
    fn click_outside_chips_opens_create() {
        let action = resolve_cell_click("2024-01-05", None);
        assert_eq!(action, MonthViewAction::CreateEvent("2024-01-05".to_string()));
    }
}
