//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the headless core builds without terminal crates.

pub mod crossterm;
pub mod terminal_guard;
pub mod view;
