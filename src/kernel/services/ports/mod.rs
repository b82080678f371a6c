//! Service ports: traits + data contracts.

pub mod settings;
pub mod storage;

pub use settings::{KeybindingRule, Settings, StorageSettings, UiSettings};
pub use storage::{
    ChangeListener, ChangeOrigin, ContextId, NotifyScope, SharedStorage, StorageChange,
    StorageError, Subscription,
};
