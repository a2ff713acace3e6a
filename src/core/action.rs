//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`. The host
//! loop delivers one action at a time; [`update`] applies it to the session
//! and returns an [`Effect`] telling the loop what to do next.
//!
//! ```text
//! Session + Action  →  update()  →  mutated Session + Effect
//! ```
//!
//! Notifications fire from inside `update` through the session's notifier
//! capability; they are dispatch-only (the send never blocks, delivery
//! outcomes never flow back into the state machine). The `quitting` flag is
//! terminal: once set, every further action is ignored and answered with
//! `Effect::Quit`.

use log::{debug, info};

use crate::core::state::Session;
use crate::notify::EventKind;

/// Discrete inputs to the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One second of countdown, delivered by the host loop.
    Tick,
    ToggleTimer,
    ResetTimer,
    Quit,
    SwitchFocus,
    NextTask,
    PrevTask,
    ToggleDone,
    DeleteTask,
    /// Give the task-insertion field input focus.
    StartInsert,
    InsertChar(char),
    InsertBackspace,
    /// Commit the pending text as a task (empty text cancels).
    ConfirmInsert,
}

/// Follow-up instruction for the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Applies one action to the session. The single mutation entry point.
pub fn update(session: &mut Session, action: Action) -> Effect {
    debug!(
        "update: {:?} (running={}, remaining={:?})",
        action,
        session.timer.running(),
        session.timer.remaining()
    );

    if session.quitting {
        return Effect::Quit;
    }

    match action {
        Action::Tick => {
            if session.timer.tick() {
                info!("work session complete");
                session.quitting = true;
                session.notify(EventKind::Complete);
                return Effect::Quit;
            }
            Effect::None
        }
        Action::ToggleTimer => {
            if session.timer.timed_out() {
                return Effect::None;
            }
            session.timer.toggle();
            info!(
                "timer {}",
                if session.timer.running() {
                    "started"
                } else {
                    "paused"
                }
            );
            session.send_start_stop();
            Effect::None
        }
        Action::ResetTimer => {
            session.timer.reset();
            Effect::None
        }
        Action::Quit => {
            info!("user quit");
            session.quitting = true;
            session.notify(EventKind::Quit);
            Effect::Quit
        }
        Action::SwitchFocus => {
            session.focus = session.focus.flipped();
            Effect::None
        }
        Action::NextTask => {
            session.tasks.next();
            Effect::None
        }
        Action::PrevTask => {
            session.tasks.prev();
            Effect::None
        }
        Action::ToggleDone => {
            session.tasks.toggle_done();
            Effect::None
        }
        Action::DeleteTask => {
            session.tasks.delete();
            Effect::None
        }
        Action::StartInsert => {
            session.insert_field = Some(String::new());
            Effect::None
        }
        Action::InsertChar(c) => {
            if let Some(buffer) = &mut session.insert_field {
                buffer.push(c);
            }
            Effect::None
        }
        Action::InsertBackspace => {
            if let Some(buffer) = &mut session.insert_field {
                buffer.pop();
            }
            Effect::None
        }
        Action::ConfirmInsert => {
            if let Some(text) = session.insert_field.take() {
                // TaskList::insert treats empty text as commit-cancel.
                session.tasks.insert(text);
            }
            Effect::None
        }
    }
}
