//! # Key Commands
//!
//! Every key binding maps to one `Command`. Which commands are live at any
//! moment is *derived* from the current focus and timer state rather than
//! toggled imperatively on each binding — one function, recomputed fresh,
//! so the enabled set can never drift out of sync with the focus.
//!
//! The TUI dispatch layer consults [`enabled_commands`] before translating a
//! key press into an action, and the help line renders from the same set, so
//! a disabled binding neither matches nor shows up.

use super::state::Focus;
use super::timer::Timer;

/// User commands, in dispatch precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    ToggleTimer,
    SwitchFocus,
    NextTask,
    PrevTask,
    ToggleDone,
    InsertTask,
    DeleteTask,
}

/// Commands that may match key presses given the current focus and timer.
///
/// Quit and focus switching work from either pane. Timer controls are only
/// live while the timer pane is focused and the timer has not finished; task
/// commands only while the task pane is focused.
pub fn enabled_commands(focus: Focus, timer: &Timer) -> Vec<Command> {
    let mut commands = vec![Command::Quit];
    match focus {
        Focus::Timer => {
            if !timer.timed_out() {
                commands.push(Command::Reset);
                commands.push(Command::ToggleTimer);
            }
        }
        Focus::TaskList => {
            commands.extend([
                Command::NextTask,
                Command::PrevTask,
                Command::ToggleDone,
                Command::InsertTask,
                Command::DeleteTask,
            ]);
        }
    }
    commands.push(Command::SwitchFocus);
    commands
}
