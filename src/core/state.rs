//! # Session State
//!
//! Core business state for a work session. This module contains domain logic
//! only — no terminal or network types. Presentation lives in the `tui`
//! module, delivery in `notify`.
//!
//! ```text
//! Session
//! ├── timer: Timer                 // countdown state machine
//! ├── tasks: TaskList              // checklist with wrapping cursor
//! ├── focus: Focus                 // which pane receives key bindings
//! ├── muted: bool                  // suppress all notifications
//! ├── quitting: bool               // terminal flag, set on quit/timeout
//! ├── insert_field: Option<String> // pending task text while inserting
//! └── notifier: Arc<dyn Notifier>  // shared send-only capability
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::core::bindings::{Command, enabled_commands};
use crate::core::tasklist::TaskList;
use crate::core::timer::Timer;
use crate::notify::{EventKind, EventNotification, Notifier};

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Timer,
    TaskList,
}

impl Focus {
    pub fn flipped(self) -> Self {
        match self {
            Focus::Timer => Focus::TaskList,
            Focus::TaskList => Focus::Timer,
        }
    }
}

pub struct Session {
    pub timer: Timer,
    pub tasks: TaskList,
    pub focus: Focus,
    pub muted: bool,
    pub quitting: bool,
    /// `Some` while the task-insertion field has input focus. Holds the
    /// uncommitted text; committed or discarded on confirm.
    pub insert_field: Option<String>,
    notifier: Arc<dyn Notifier>,
}

impl Session {
    /// Builds a session around a stopped timer and announces the initial
    /// (non-running) state with a single Pause notification.
    pub fn new(timeout: Duration, muted: bool, notifier: Arc<dyn Notifier>) -> Self {
        let session = Self {
            timer: Timer::new(timeout),
            tasks: TaskList::new(),
            focus: Focus::TaskList,
            muted,
            quitting: false,
            insert_field: None,
            notifier,
        };
        session.send_start_stop();
        session
    }

    /// True while the task-insertion field has input focus.
    pub fn inserting(&self) -> bool {
        self.insert_field.is_some()
    }

    /// Commands that may match key presses right now.
    pub fn enabled_commands(&self) -> Vec<Command> {
        enabled_commands(self.focus, &self.timer)
    }

    /// Sends an event unless the session is muted. Never blocks, never fails.
    pub(crate) fn notify(&self, kind: EventKind) {
        if !self.muted {
            self.notifier.send_event(EventNotification::new(kind));
        }
    }

    /// Sends Start or Pause, whichever matches the timer's running state.
    pub(crate) fn send_start_stop(&self) {
        let kind = if self.timer.running() {
            EventKind::Start
        } else {
            EventKind::Pause
        };
        self.notify(kind);
    }
}
