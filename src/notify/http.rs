//! HTTP-backed notifier.
//!
//! Deliveries are serialized through one background worker draining an
//! unbounded channel, so events hit the wire in the order they were sent.
//! The worker POSTs each event and logs anything other than HTTP 200; the
//! sending side never observes the outcome.
//!
//! The worker outlives the session but not the runtime: callers must invoke
//! [`HttpNotifier::shutdown`] once after the session ends, or a terminal
//! Complete/Quit event still sitting in the queue is lost when the runtime
//! tears the worker down.

use log::{debug, warn};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use super::{EventNotification, Notifier};

enum WorkerMessage {
    Deliver(EventNotification),
    /// Answered once every delivery queued before it has been attempted.
    Flush(oneshot::Sender<()>),
}

pub struct HttpNotifier {
    tx: mpsc::UnboundedSender<WorkerMessage>,
}

impl HttpNotifier {
    /// Spawns the delivery worker on the current tokio runtime.
    pub fn new(webhook_url: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<WorkerMessage>();

        tokio::spawn(async move {
            let client = reqwest::Client::new();
            while let Some(message) = rx.recv().await {
                match message {
                    WorkerMessage::Deliver(event) => {
                        debug!("delivering {} event to {}", event.kind, webhook_url);
                        match client.post(&webhook_url).json(&event).send().await {
                            Ok(resp) if resp.status() == StatusCode::OK => {}
                            Ok(resp) => {
                                warn!("webhook returned status {}", resp.status());
                            }
                            Err(e) => {
                                warn!("webhook delivery failed: {}", e);
                            }
                        }
                    }
                    WorkerMessage::Flush(done) => {
                        // The channel is FIFO: everything queued before this
                        // marker has already been attempted.
                        let _ = done.send(());
                    }
                }
            }
        });

        Self { tx }
    }

    /// Waits until every event queued so far has been delivered or failed,
    /// up to `limit`. In-flight sends are never cancelled; past the limit
    /// they are abandoned to the runtime's own shutdown.
    pub async fn shutdown(&self, limit: Duration) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WorkerMessage::Flush(done_tx)).is_err() {
            return;
        }
        if tokio::time::timeout(limit, done_rx).await.is_err() {
            warn!("webhook deliveries still pending after {:?}, giving up", limit);
        }
    }
}

impl Notifier for HttpNotifier {
    fn send_event(&self, event: EventNotification) {
        // The worker only goes away when the runtime shuts down; at that
        // point dropping the event is the correct fire-and-forget behavior.
        if self.tx.send(WorkerMessage::Deliver(event)).is_err() {
            warn!("notifier worker gone, dropping event");
        }
    }
}
