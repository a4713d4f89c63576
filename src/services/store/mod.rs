//! Client-side event cache.
//!
//! Holds the last collection fetched from the backend. The cache is only
//! ever replaced wholesale, so readers see either the old or the new list;
//! staleness is bounded by one round trip. A failed fetch clears the
//! cache rather than leaving stale data or surfacing an error to the grid.

use crate::models::event::Event;
use crate::services::gateway::EventGateway;

#[derive(Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache with a refreshed collection. `None` signals a
    /// failed fetch and falls back to empty.
    pub fn replace(&mut self, events: Option<Vec<Event>>) {
        self.events = events.unwrap_or_default();
    }

    /// Fetch the full collection through the gateway and replace the
    /// cache. Used at points where a synchronous refresh is acceptable;
    /// the UI goes through the gateway worker instead.
    pub fn refresh_from(&mut self, gateway: &dyn EventGateway) {
        match gateway.list() {
            Ok(events) => self.events = events,
            Err(err) => {
                log::warn!("Event refresh failed, clearing cache: {}", err);
                self.events.clear();
            }
        }
    }

    /// All cached events whose `date` equals the given string, in cache
    /// order. Ordering is whatever the backend returned.
    pub fn events_for_date(&self, date: &str) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date == date).collect()
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gateway::{GatewayError, MockEventGateway};
    use pretty_assertions::assert_eq;

    fn event(id: i64, date: &str) -> Event {
        Event {
            id: Some(id),
            date: date.to_string(),
            time: "18:30".to_string(),
            place: "Field 1".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn events_for_date_matches_exact_date_only() {
        let mut store = EventStore::new();
        store.replace(Some(vec![event(1, "2024-01-05"), event(2, "2024-01-06")]));

        let matched = store.events_for_date("2024-01-05");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, Some(1));

        assert!(store.events_for_date("2024-01-07").is_empty());
    }

    #[test]
    fn events_for_date_keeps_cache_order() {
        let mut store = EventStore::new();
        store.replace(Some(vec![
            event(3, "2024-01-05"),
            event(1, "2024-01-05"),
            event(2, "2024-01-06"),
        ]));

        let ids: Vec<Option<i64>> = store
            .events_for_date("2024-01-05")
            .iter()
            .map(|event| event.id)
            .collect();
        assert_eq!(ids, vec![Some(3), Some(1)]);
    }

    #[test]
    fn refresh_is_idempotent_for_an_unchanged_backend() {
        let mut gateway = MockEventGateway::new();
        gateway
            .expect_list()
            .times(2)
            .returning(|| Ok(vec![event(1, "2024-01-05"), event(2, "2024-01-06")]));

        let mut store = EventStore::new();
        store.refresh_from(&gateway);
        let first = store.all().to_vec();
        store.refresh_from(&gateway);

        assert_eq!(store.all(), first.as_slice());
    }

    #[test]
    fn failed_refresh_clears_the_cache() {
        let mut gateway = MockEventGateway::new();
        gateway
            .expect_list()
            .returning(|| Err(GatewayError::Decode("bad response".to_string())));

        let mut store = EventStore::new();
        store.replace(Some(vec![event(1, "2024-01-05")]));
        assert!(!store.is_empty());

        store.refresh_from(&gateway);
        assert!(store.is_empty());
    }

    #[test]
    fn replace_with_none_falls_back_to_empty() {
        let mut store = EventStore::new();
        store.replace(Some(vec![event(1, "2024-01-05")]));
        store.replace(None);
        assert_eq!(store.len(), 0);
    }
}
