//! userdesk: a counter, a user-information form and a rich-text viewer that mirrors the
//! form through shared storage.
//!
//! Modules:
//! - core: frontend-neutral input events and commands
//! - kernel: headless state/action/effect store plus storage and settings services
//! - app: workbench that drives the store and renders it (feature `tui`)
//! - tui: crossterm/ratatui glue (feature `tui`)

pub mod core;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
