//! Backend gateway for the events resource.
//!
//! The REST backend owns durable storage; the client only ever issues
//! `GET {base}`, `POST {base}`, `PUT {base}{id}` and `DELETE {base}{id}`
//! and re-fetches the whole collection after every mutation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::event::{Event, EventPayload};

pub mod worker;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error during backend request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend list request failed with HTTP status {0}")]
    Status(StatusCode),
    #[error("backend response was not a valid event list: {0}")]
    Decode(String),
}

/// Contract with the external REST collaborator. Mutation response bodies
/// are ignored; only transport failures are reported.
#[cfg_attr(test, mockall::automock)]
pub trait EventGateway {
    fn list(&self) -> Result<Vec<Event>, GatewayError>;
    fn create(&self, payload: &EventPayload) -> Result<(), GatewayError>;
    fn update(&self, id: i64, payload: &EventPayload) -> Result<(), GatewayError>;
    fn delete(&self, id: i64) -> Result<(), GatewayError>;
}

/// HTTP implementation of the gateway over `reqwest::blocking`. Always
/// constructed with a request timeout so a wedged backend cannot hold the
/// worker thread forever.
pub struct RestGateway {
    client: Client,
    base_url: String,
}

impl RestGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { client, base_url })
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}", self.base_url, id)
    }

    /// Writes proceed regardless of the response status; a non-success
    /// status is only logged. The backend does not specify failure
    /// semantics for mutations, so none are invented here.
    fn log_mutation_status(operation: &str, status: StatusCode) {
        if !status.is_success() {
            log::warn!("Backend {} returned HTTP status {}", operation, status);
        }
    }
}

impl EventGateway for RestGateway {
    fn list(&self) -> Result<Vec<Event>, GatewayError> {
        let response = self.client.get(&self.base_url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|err| GatewayError::Decode(err.to_string()))
    }

    fn create(&self, payload: &EventPayload) -> Result<(), GatewayError> {
        let response = self.client.post(&self.base_url).json(payload).send()?;
        Self::log_mutation_status("create", response.status());
        Ok(())
    }

    fn update(&self, id: i64, payload: &EventPayload) -> Result<(), GatewayError> {
        let response = self.client.put(self.item_url(id)).json(payload).send()?;
        Self::log_mutation_status("update", response.status());
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), GatewayError> {
        let response = self.client.delete(self.item_url(id)).send()?;
        Self::log_mutation_status("delete", response.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_url_appends_id_to_base() {
        let gateway =
            RestGateway::new("http://127.0.0.1:8000/events/", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.item_url(42), "http://127.0.0.1:8000/events/42");
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let gateway =
            RestGateway::new("http://127.0.0.1:8000/events", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.base_url, "http://127.0.0.1:8000/events/");
        assert_eq!(gateway.item_url(7), "http://127.0.0.1:8000/events/7");
    }

    #[test]
    fn decode_error_carries_detail() {
        let err = GatewayError::Decode("expected value at line 1".to_string());
        assert!(err.to_string().contains("not a valid event list"));
        assert!(err.to_string().contains("expected value"));
    }
}
