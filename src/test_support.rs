//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::state::Session;
use crate::notify::{EventNotification, Notifier};

/// A notifier that records every event for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<EventNotification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Drains and returns everything recorded so far, in send order.
    pub fn take_events(&self) -> Vec<EventNotification> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn send_event(&self, event: EventNotification) {
        self.events.lock().unwrap().push(event);
    }
}

/// Creates an unmuted session with the given timeout in seconds, plus the
/// recording notifier it reports to. The construction-time Pause event is
/// already recorded when this returns.
pub fn test_session(timeout_secs: u64) -> (Session, Arc<RecordingNotifier>) {
    let notifier = RecordingNotifier::new();
    let session = Session::new(
        Duration::from_secs(timeout_secs),
        false,
        notifier.clone(),
    );
    (session, notifier)
}
