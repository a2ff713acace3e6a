//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! One event at a time, processed to completion: the loop polls the keyboard
//! with a short timeout, then checks whether a wall-clock second has elapsed
//! and, if so, delivers a `Tick`. Ticks are delivered in every mode — typing
//! in the insert field never pauses the countdown.
//!
//! ## Dispatch
//!
//! While the insert field is focused, Enter commits and every other key is
//! routed into the field (Ctrl+C excepted, which force-quits from anywhere).
//! Otherwise a key is first mapped to a `Command` and then checked against
//! the derived enabled set, so disabled bindings never match.

mod event;
mod ui;

use log::info;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::action::{Action, Effect, update};
use crate::core::bindings::Command;
use crate::core::state::Session;
use crate::notify::Notifier;
use crate::tui::event::{TuiEvent, poll_event_timeout};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Restores the terminal on every exit path, including `?` bail-outs from
/// `terminal.draw`.
struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Runs a session to completion. Returns once the user quits or the
/// countdown finishes.
///
/// The caller owns the notifier and is responsible for flushing it after
/// this returns; the session only borrows the send capability.
pub fn run(notifier: Arc<dyn Notifier>, muted: bool, timeout: Duration) -> std::io::Result<()> {
    let mut session = Session::new(timeout, muted, notifier);

    let mut terminal = ratatui::init();
    let _restore_guard = TerminalRestoreGuard;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw_ui(f, &session))?;

        let poll_budget = TICK_INTERVAL
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(100));
        let mut effect = Effect::None;

        if let Some(event) = poll_event_timeout(poll_budget) {
            effect = dispatch(&mut session, event);
        }

        if effect != Effect::Quit && last_tick.elapsed() >= TICK_INTERVAL {
            last_tick = Instant::now();
            effect = update(&mut session, Action::Tick);
        }

        if effect == Effect::Quit {
            break;
        }
    }

    info!("session over, exiting");
    Ok(())
}

/// Routes one terminal event into the session.
fn dispatch(session: &mut Session, event: TuiEvent) -> Effect {
    if event == TuiEvent::ForceQuit {
        return update(session, Action::Quit);
    }

    if session.inserting() {
        return match event {
            TuiEvent::Confirm => update(session, Action::ConfirmInsert),
            TuiEvent::InputChar(c) => update(session, Action::InsertChar(c)),
            TuiEvent::Backspace => update(session, Action::InsertBackspace),
            // Everything else goes to the text field, which has no use for it.
            _ => Effect::None,
        };
    }

    let Some(command) = command_for(&event) else {
        return Effect::None;
    };
    if !session.enabled_commands().contains(&command) {
        return Effect::None;
    }
    update(session, action_for(command))
}

/// Default key bindings, matched in command precedence order.
fn command_for(event: &TuiEvent) -> Option<Command> {
    match event {
        TuiEvent::InputChar('q') => Some(Command::Quit),
        TuiEvent::InputChar('r') => Some(Command::Reset),
        TuiEvent::InputChar('s') => Some(Command::ToggleTimer),
        TuiEvent::SwitchFocus => Some(Command::SwitchFocus),
        TuiEvent::InputChar('j') | TuiEvent::Down => Some(Command::NextTask),
        TuiEvent::InputChar('k') | TuiEvent::Up => Some(Command::PrevTask),
        TuiEvent::InputChar(' ') | TuiEvent::InputChar('t') => Some(Command::ToggleDone),
        TuiEvent::InputChar('i') => Some(Command::InsertTask),
        TuiEvent::InputChar('d') => Some(Command::DeleteTask),
        _ => None,
    }
}

fn action_for(command: Command) -> Action {
    match command {
        Command::Quit => Action::Quit,
        Command::Reset => Action::ResetTimer,
        Command::ToggleTimer => Action::ToggleTimer,
        Command::SwitchFocus => Action::SwitchFocus,
        Command::NextTask => Action::NextTask,
        Command::PrevTask => Action::PrevTask,
        Command::ToggleDone => Action::ToggleDone,
        Command::InsertTask => Action::StartInsert,
        Command::DeleteTask => Action::DeleteTask,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Focus;
    use crate::notify::EventKind;
    use crate::test_support::test_session;

    #[test]
    fn test_restore_guard_drop_is_safe_without_a_live_terminal() {
        // Error paths drop the guard before any explicit cleanup runs;
        // restoring an untouched terminal must be harmless.
        let guard = TerminalRestoreGuard;
        drop(guard);
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let (mut session, notifier) = test_session(60);
        notifier.take_events();
        assert_eq!(session.focus, Focus::TaskList);

        // 's' is the toggle key, but the timer pane is not focused.
        let effect = dispatch(&mut session, TuiEvent::InputChar('s'));
        assert_eq!(effect, Effect::None);
        assert!(!session.timer.running());
        assert!(notifier.take_events().is_empty());
    }

    #[test]
    fn test_toggle_after_focus_switch() {
        let (mut session, notifier) = test_session(60);
        notifier.take_events();

        dispatch(&mut session, TuiEvent::SwitchFocus);
        dispatch(&mut session, TuiEvent::InputChar('s'));

        assert!(session.timer.running());
        let kinds: Vec<_> = notifier.take_events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Start]);
    }

    #[test]
    fn test_quit_key_works_from_any_focus() {
        let (mut session, _notifier) = test_session(60);
        let effect = dispatch(&mut session, TuiEvent::InputChar('q'));
        assert_eq!(effect, Effect::Quit);
        assert!(session.quitting);
    }

    #[test]
    fn test_insert_flow_through_dispatch() {
        let (mut session, _notifier) = test_session(60);

        dispatch(&mut session, TuiEvent::InputChar('i'));
        assert!(session.inserting());

        // 'q' is quit elsewhere, but here it is literal text.
        for c in "quick fix".chars() {
            dispatch(&mut session, TuiEvent::InputChar(c));
        }
        dispatch(&mut session, TuiEvent::Confirm);

        assert!(!session.inserting());
        assert!(!session.quitting);
        assert_eq!(session.tasks.items()[0].text, "quick fix");
    }

    #[test]
    fn test_arrows_are_swallowed_while_inserting() {
        let (mut session, _notifier) = test_session(60);
        session.tasks.insert("a".to_string());
        session.tasks.insert("b".to_string());

        dispatch(&mut session, TuiEvent::InputChar('i'));
        dispatch(&mut session, TuiEvent::Down);
        assert_eq!(session.tasks.selected_index(), Some(0));
    }

    #[test]
    fn test_force_quit_wins_over_insert_field() {
        let (mut session, notifier) = test_session(60);
        notifier.take_events();
        dispatch(&mut session, TuiEvent::InputChar('i'));

        let effect = dispatch(&mut session, TuiEvent::ForceQuit);
        assert_eq!(effect, Effect::Quit);
        let kinds: Vec<_> = notifier.take_events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Quit]);
    }

    #[test]
    fn test_arrow_keys_move_task_cursor() {
        let (mut session, _notifier) = test_session(60);
        session.tasks.insert("a".to_string());
        session.tasks.insert("b".to_string());

        dispatch(&mut session, TuiEvent::Down);
        assert_eq!(session.tasks.selected_index(), Some(1));
        dispatch(&mut session, TuiEvent::Up);
        assert_eq!(session.tasks.selected_index(), Some(0));
    }

    #[test]
    fn test_reset_requires_timer_focus() {
        let (mut session, _notifier) = test_session(60);
        dispatch(&mut session, TuiEvent::SwitchFocus);
        dispatch(&mut session, TuiEvent::InputChar('s'));
        update(&mut session, Action::Tick);
        update(&mut session, Action::Tick);

        dispatch(&mut session, TuiEvent::InputChar('r'));
        assert_eq!(session.timer.remaining(), Duration::from_secs(60));

        // Back on the task pane, 'r' does nothing.
        dispatch(&mut session, TuiEvent::SwitchFocus);
        update(&mut session, Action::Tick);
        dispatch(&mut session, TuiEvent::InputChar('r'));
        assert_eq!(session.timer.remaining(), Duration::from_secs(59));
    }
}
