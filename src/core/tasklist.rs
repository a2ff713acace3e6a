//! # Task List
//!
//! An ordered checklist with a single wrapping cursor. Insertion order is
//! display order. Every operation is total: on an empty list, anything that
//! needs a selection is a no-op rather than an error.

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Default, Clone)]
pub struct TaskList {
    items: Vec<Task>,
    selected: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cursor position, or `None` when the list is empty.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selected)
    }

    /// Appends a new not-done task. The cursor does not move to the new item.
    /// Empty text inserts nothing.
    pub fn insert(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        self.items.push(Task { text, done: false });
    }

    /// Moves the cursor forward, wrapping to the top.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Moves the cursor backward, wrapping to the bottom.
    pub fn prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
    }

    /// Flips `done` on the selected task.
    pub fn toggle_done(&mut self) {
        if let Some(task) = self.items.get_mut(self.selected) {
            task.done = !task.done;
            debug!("toggled task '{}' done={}", task.text, task.done);
        }
    }

    /// Removes the selected task. The cursor decrements by one, wrapping to
    /// the last remaining item.
    pub fn delete(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.remove(self.selected);
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.items.len().saturating_sub(1));
    }
}
