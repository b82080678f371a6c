//! Service adapters: OS/runtime specific implementations (IO, watchers).

pub mod keybinding;
pub mod memory;
pub mod paths;
pub mod settings;
pub mod storage;

pub use keybinding::{KeybindingContext, KeybindingService};
pub use memory::{MemoryStorage, MemoryStorageHub};
pub use paths::{ensure_log_dir, ensure_storage_dir, get_log_dir, get_storage_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, parse_keybinding, SettingsError,
};
pub use storage::FileStorage;
