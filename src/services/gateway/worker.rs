//! Background execution of gateway requests.
//!
//! One worker thread owns the gateway. The UI submits commands over an
//! mpsc channel and drains refreshed event lists each frame, so the egui
//! loop never blocks on HTTP. Every mutation is followed by an
//! unconditional re-fetch of the whole collection; when results overlap,
//! the last one drained replaces the cache.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::models::event::{Event, EventPayload};

use super::EventGateway;

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCommand {
    Refresh,
    Create(EventPayload),
    Update(i64, EventPayload),
    Delete(i64),
}

/// Handle to the worker thread. The thread exits when this handle is
/// dropped and the command channel disconnects.
pub struct GatewayWorker {
    commands: Sender<GatewayCommand>,
    results: Receiver<Option<Vec<Event>>>,
}

impl GatewayWorker {
    pub fn spawn<G>(gateway: G) -> Self
    where
        G: EventGateway + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        thread::Builder::new()
            .name("gateway-worker".to_string())
            .spawn(move || run_worker(gateway, command_rx, result_tx))
            .expect("failed to spawn gateway worker thread");

        Self {
            commands: command_tx,
            results: result_rx,
        }
    }

    pub fn submit(&self, command: GatewayCommand) {
        if self.commands.send(command).is_err() {
            log::error!("Gateway worker is gone; dropping command");
        }
    }

    /// Non-blocking poll for the next refreshed event list. `Some(None)`
    /// means the re-fetch failed and the cache should fall back to empty.
    pub fn try_recv_events(&self) -> Option<Option<Vec<Event>>> {
        self.results.try_recv().ok()
    }
}

fn run_worker<G: EventGateway>(
    gateway: G,
    commands: Receiver<GatewayCommand>,
    results: Sender<Option<Vec<Event>>>,
) {
    while let Ok(command) = commands.recv() {
        match &command {
            GatewayCommand::Refresh => {}
            GatewayCommand::Create(payload) => {
                if let Err(err) = gateway.create(payload) {
                    log::warn!("Event create failed: {}", err);
                }
            }
            GatewayCommand::Update(id, payload) => {
                if let Err(err) = gateway.update(*id, payload) {
                    log::warn!("Event update for id {} failed: {}", id, err);
                }
            }
            GatewayCommand::Delete(id) => {
                if let Err(err) = gateway.delete(*id) {
                    log::warn!("Event delete for id {} failed: {}", id, err);
                }
            }
        }

        // Completion policy is unconditional: mutations refresh whether
        // they succeeded or not.
        let events = match gateway.list() {
            Ok(events) => Some(events),
            Err(err) => {
                log::warn!("Event list fetch failed: {}", err);
                None
            }
        };

        if results.send(events).is_err() {
            break;
        }
    }
}
