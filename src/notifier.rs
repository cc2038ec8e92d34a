// SPDX-License-Identifier: Apache-2.0

// Notifier fans mutation events out to registered listeners over
// plain channels. The store publishes after each successful mutation;
// listeners that dropped their receiver are pruned on the next send.
// Sends never block: a listener that stops draining its channel only
// grows its own queue.

use std::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Update { key: String, value: Vec<u8> },
    Remove { key: String },
    Clear,
}

pub struct Notifier {
    listeners: Vec<mpsc::Sender<StoreEvent>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    pub fn send_update(&mut self, key: &str, value: &[u8]) {
        self.send(StoreEvent::Update {
            key: key.to_string(),
            value: value.to_vec(),
        });
    }

    pub fn send_remove(&mut self, key: &str) {
        self.send(StoreEvent::Remove {
            key: key.to_string(),
        });
    }

    pub fn send_clear(&mut self) {
        self.send(StoreEvent::Clear);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn send(&mut self, event: StoreEvent) {
        self.listeners
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
