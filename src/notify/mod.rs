//! # Notifier Boundary
//!
//! Session lifecycle events leave the process through a single capability:
//! [`Notifier::send_event`]. The session holds the notifier as a trait object
//! and never learns whether delivery succeeded — fire-and-forget by contract.
//!
//! Implementations:
//! - [`HttpNotifier`]: posts JSON to the configured webhook endpoint.
//! - `RecordingNotifier` (test-only, in `test_support`): captures events for
//!   assertions.

pub mod http;

pub use http::HttpNotifier;

use serde::Serialize;
use std::fmt;

/// The fixed event category for this tool.
pub const ROUND: &str = "Work Session";

/// Lifecycle event kinds, serialized verbatim into the webhook body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Start,
    Pause,
    Complete,
    Quit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Start => write!(f, "Start"),
            EventKind::Pause => write!(f, "Pause"),
            EventKind::Complete => write!(f, "Complete"),
            EventKind::Quit => write!(f, "Quit"),
        }
    }
}

/// Webhook wire format: `{"round":"Work Session","type":"Start"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventNotification {
    pub round: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl EventNotification {
    pub fn new(kind: EventKind) -> Self {
        Self {
            round: ROUND.to_string(),
            kind,
        }
    }
}

/// One-method capability for delivering session events.
///
/// `send_event` must never block the caller and must never fail loudly:
/// delivery errors are the implementation's problem (log and drop).
pub trait Notifier: Send + Sync {
    fn send_event(&self, event: EventNotification);
}
