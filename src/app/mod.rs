//! Application layer: wires the kernel store to storage, keybindings and the terminal UI.

pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
