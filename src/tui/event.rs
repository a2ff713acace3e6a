use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events, already stripped of crossterm detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C — quits in any mode, including while inserting a task.
    ForceQuit,
    /// Enter.
    Confirm,
    Backspace,
    /// Any plain character key. Command matching happens in the dispatch
    /// layer; while the insert field is focused this is literal text.
    InputChar(char),
    Up,
    Down,
    /// Tab.
    SwitchFocus,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key) => {
            log::debug!("key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Enter) => Some(TuiEvent::Confirm),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Up) => Some(TuiEvent::Up),
                (_, KeyCode::Down) => Some(TuiEvent::Down),
                (_, KeyCode::Tab) => Some(TuiEvent::SwitchFocus),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
