//! # Core Session Logic
//!
//! The business logic of the work-session timer. It knows nothing about the
//! terminal or the network.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │          CORE            │
//!                 │                          │
//!                 │  • Session (state)       │
//!                 │  • Action (events)       │
//!                 │  • update() (reducer)    │
//!                 │  • Timer / TaskList      │
//!                 │                          │
//!                 │  No terminal. No HTTP.   │
//!                 └──────────┬───────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!       ┌────────────┐              ┌────────────┐
//!       │    TUI     │              │  Notifier  │
//!       │  adapter   │              │  boundary  │
//!       │ (ratatui)  │              │ (reqwest)  │
//!       └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `Session` struct — all session state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`timer`]: the countdown state machine
//! - [`tasklist`]: the checklist with its wrapping cursor
//! - [`bindings`]: derived set of currently enabled key commands
//! - [`config`]: startup configuration loading

pub mod action;
pub mod bindings;
pub mod config;
pub mod state;
pub mod tasklist;
pub mod timer;
