// Event module
// Scheduled event model mirroring the backend's wire shape

use serde::{Deserialize, Serialize};

/// A scheduled event as stored by the REST backend.
///
/// `date` is an ISO `YYYY-MM-DD` string and determines which calendar cell
/// the event renders in. `place` is stored as entered; the edit dialog
/// constrains it to the known fields, but older records may hold anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: String,
    pub time: String,
    pub place: String,
    #[serde(default)]
    pub note: String,
}

impl Event {
    /// The place to show in the grid; an empty place displays as the first
    /// field but is never rewritten in storage.
    pub fn display_place(&self) -> &str {
        if self.place.is_empty() {
            Field::One.label()
        } else {
            &self.place
        }
    }

    /// Label rendered on the event chip: `"{time} - {place}"`, with
    /// `" | {note}"` appended when a note is present.
    pub fn chip_label(&self) -> String {
        if self.note.is_empty() {
            format!("{} - {}", self.time, self.display_place())
        } else {
            format!("{} - {} | {}", self.time, self.display_place(), self.note)
        }
    }
}

/// Request body for creating or updating an event. The backend assigns
/// and keeps ownership of `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub date: String,
    pub time: String,
    pub place: String,
    pub note: String,
}

/// The closed set of playing fields offered by the edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    One,
    Two,
    Three,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::One, Field::Two, Field::Three];

    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "Field 1",
            Self::Two => "Field 2",
            Self::Three => "Field 3",
        }
    }

    /// Map a stored place back onto a field. Unrecognized or empty places
    /// fall back to the first field; this drives chip coloring and the
    /// dialog preselection only, never the stored value.
    pub fn from_place(place: &str) -> Self {
        match place {
            "Field 2" => Self::Two,
            "Field 3" => Self::Three,
            _ => Self::One,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event {
            id: Some(1),
            date: "2024-01-05".to_string(),
            time: "18:30".to_string(),
            place: "Field 2".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn chip_label_without_note() {
        let event = sample_event();
        assert_eq!(event.chip_label(), "18:30 - Field 2");
    }

    #[test]
    fn chip_label_appends_note() {
        let mut event = sample_event();
        event.note = "Scrimmage".to_string();
        assert_eq!(event.chip_label(), "18:30 - Field 2 | Scrimmage");
    }

    #[test]
    fn empty_place_displays_as_first_field() {
        let mut event = sample_event();
        event.place = String::new();
        assert_eq!(event.display_place(), "Field 1");
        // The stored value stays empty
        assert_eq!(event.place, "");
    }

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{"id":42,"date":"2024-03-10","time":"18:30","place":"Field 2","note":"Scrimmage"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, Some(42));
        assert_eq!(event.date, "2024-03-10");
        assert_eq!(event.note, "Scrimmage");
    }

    #[test]
    fn deserializes_record_without_optional_fields() {
        let json = r#"{"date":"2024-03-10","time":"09:00","place":"Field 1"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, None);
        assert_eq!(event.note, "");
    }

    #[test]
    fn payload_serializes_all_fields() {
        let payload = EventPayload {
            date: "2024-03-10".to_string(),
            time: "18:30".to_string(),
            place: "Field 2".to_string(),
            note: "Scrimmage".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["date"], "2024-03-10");
        assert_eq!(json["time"], "18:30");
        assert_eq!(json["place"], "Field 2");
        assert_eq!(json["note"], "Scrimmage");
    }

    #[test]
    fn field_from_place_recognizes_known_fields() {
        assert_eq!(Field::from_place("Field 1"), Field::One);
        assert_eq!(Field::from_place("Field 2"), Field::Two);
        assert_eq!(Field::from_place("Field 3"), Field::Three);
    }

    #[test]
    fn field_from_place_defaults_to_first_field() {
        assert_eq!(Field::from_place(""), Field::One);
        assert_eq!(Field::from_place("City Park"), Field::One);
    }
}
