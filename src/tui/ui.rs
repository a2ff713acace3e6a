//! Pure view layer: `Session` in, frame out.
//!
//! Styles are built fresh per frame from local constants — no shared mutable
//! style state. The focused pane gets a colored border; the other pane is
//! dimmed. The help line is compiled from the same derived command set the
//! dispatch layer filters on, so it can never advertise a dead binding.

use crate::core::bindings::Command;
use crate::core::state::{Focus, Session};
use crate::core::tasklist::Task;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const HIGHLIGHT: Color = Color::Indexed(69);

pub fn draw_ui(frame: &mut Frame, session: &Session) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(5), Min(3), Length(1), Length(1)]);
    let [timer_area, tasks_area, help_area, insert_area] = layout.areas(frame.area());

    draw_timer_pane(frame, timer_area, session);
    draw_task_pane(frame, tasks_area, session);
    frame.render_widget(help_line(session), help_area);

    if let Some(buffer) = &session.insert_field {
        draw_insert_line(frame, insert_area, buffer);
    }
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Block::bordered().title(title).border_style(border_style)
}

fn draw_timer_pane(frame: &mut Frame, area: Rect, session: &Session) {
    let text = if session.timer.timed_out() {
        "All done!".to_string()
    } else {
        format!("Exiting in {}", format_remaining(session.timer.remaining()))
    };

    let pane = Paragraph::new(text)
        .block(pane_block("Timer", session.focus == Focus::Timer))
        .alignment(Alignment::Center);
    frame.render_widget(pane, area);
}

fn draw_task_pane(frame: &mut Frame, area: Rect, session: &Session) {
    let selected = session.tasks.selected_index();
    let lines: Vec<Line> = session
        .tasks
        .items()
        .iter()
        .enumerate()
        .map(|(index, task)| task_line(task, selected == Some(index)))
        .collect();

    let pane = Paragraph::new(lines)
        .block(pane_block("Tasks", session.focus == Focus::TaskList));
    frame.render_widget(pane, area);
}

fn task_line(task: &Task, selected: bool) -> Line<'_> {
    let mut style = Style::default();
    if task.done {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if selected {
        style = style.fg(HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    let marker = if selected { "> " } else { "  " };
    Line::from(vec![Span::raw(marker), Span::styled(task.text.as_str(), style)])
}

/// Short-help line: `key desc` pairs for every currently enabled command.
fn help_line(session: &Session) -> Line<'static> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut spans = Vec::new();
    for command in session.enabled_commands() {
        if !spans.is_empty() {
            spans.push(Span::styled(" • ", dim));
        }
        let (key, desc) = help_entry(command, session);
        spans.push(Span::styled(format!("{key} "), dim.add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(desc, dim));
    }
    Line::from(spans)
}

fn help_entry(command: Command, session: &Session) -> (&'static str, &'static str) {
    match command {
        Command::Quit => ("q", "quit"),
        Command::Reset => ("r", "reset"),
        Command::ToggleTimer => {
            if session.timer.running() {
                ("s", "stop")
            } else {
                ("s", "start")
            }
        }
        // The label names the pane Tab switches to.
        Command::SwitchFocus => match session.focus {
            Focus::Timer => ("tab", "tasklist"),
            Focus::TaskList => ("tab", "timer"),
        },
        Command::NextTask => ("j/↓", "next"),
        Command::PrevTask => ("k/↑", "prev"),
        Command::ToggleDone => ("space", "done"),
        Command::InsertTask => ("i", "insert"),
        Command::DeleteTask => ("d", "delete"),
    }
}

fn draw_insert_line(frame: &mut Frame, area: Rect, buffer: &str) {
    const PROMPT: &str = "New task: ";
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(HIGHLIGHT)),
        Span::raw(buffer),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let cursor_x = area.x + (PROMPT.len() + buffer.chars().count()) as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

/// Formats a remaining duration as `m:ss`.
fn format_remaining(remaining: std::time::Duration) -> String {
    let total = remaining.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_session;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn render_to_text(session: &Session) -> String {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, session)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(Duration::from_secs(90)), "1:30");
        assert_eq!(format_remaining(Duration::from_secs(60)), "1:00");
        assert_eq!(format_remaining(Duration::from_secs(5)), "0:05");
        assert_eq!(format_remaining(Duration::ZERO), "0:00");
    }

    #[test]
    fn test_draw_shows_countdown_and_tasks() {
        let (mut session, _notifier) = test_session(75);
        session.tasks.insert("write tests".to_string());

        let text = render_to_text(&session);
        assert!(text.contains("Exiting in 1:15"));
        assert!(text.contains("write tests"));
        assert!(text.contains("> "), "selected task carries a marker");
    }

    #[test]
    fn test_draw_shows_all_done_after_timeout() {
        let (mut session, _notifier) = test_session(1);
        update(&mut session, Action::ToggleTimer);
        update(&mut session, Action::Tick);
        assert!(session.timer.timed_out());

        let text = render_to_text(&session);
        assert!(text.contains("All done!"));
        assert!(!text.contains("Exiting in"));
    }

    #[test]
    fn test_help_line_follows_focus() {
        let (mut session, _notifier) = test_session(60);

        // Task pane focused: task commands visible, timer controls hidden.
        let text = render_to_text(&session);
        assert!(text.contains("insert"));
        assert!(text.contains("delete"));
        assert!(!text.contains("start"));

        update(&mut session, Action::SwitchFocus);
        let text = render_to_text(&session);
        assert!(text.contains("start"));
        assert!(text.contains("reset"));
        assert!(!text.contains("insert"));
    }

    #[test]
    fn test_help_toggle_label_tracks_running_state() {
        let (mut session, _notifier) = test_session(60);
        update(&mut session, Action::SwitchFocus);
        update(&mut session, Action::ToggleTimer);

        let text = render_to_text(&session);
        assert!(text.contains("stop"));
        assert!(!text.contains("start"));
    }

    #[test]
    fn test_insert_line_shows_pending_text() {
        let (mut session, _notifier) = test_session(60);
        update(&mut session, Action::StartInsert);
        for c in "buy milk".chars() {
            update(&mut session, Action::InsertChar(c));
        }

        let text = render_to_text(&session);
        assert!(text.contains("New task: buy milk"));
    }

    #[test]
    fn test_insert_line_hidden_when_not_inserting() {
        let (session, _notifier) = test_session(60);
        let text = render_to_text(&session);
        assert!(!text.contains("New task:"));
    }
}
