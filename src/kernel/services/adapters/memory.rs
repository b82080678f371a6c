//! In-memory storage shared between any number of contexts.
//!
//! Each [`MemoryStorage`] handed out by a [`MemoryStorageHub`] acts like one browser tab
//! over the same origin: values are shared, notifications cross contexts synchronously.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use crate::kernel::services::ports::settings::DEFAULT_QUOTA_BYTES;
use crate::kernel::services::ports::storage::check_quota;
use crate::kernel::services::ports::{
    ChangeListener, ChangeOrigin, ContextId, NotifyScope, SharedStorage, StorageChange,
    StorageError, Subscription,
};

struct ListenerEntry {
    id: u64,
    context: ContextId,
    scope: NotifyScope,
    listener: ChangeListener,
}

struct HubState {
    values: FxHashMap<String, String>,
    listeners: Vec<ListenerEntry>,
    next_listener_id: u64,
    quota_bytes: u64,
    unavailable: bool,
}

#[derive(Clone)]
pub struct MemoryStorageHub {
    shared: Arc<Mutex<HubState>>,
}

impl Default for MemoryStorageHub {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorageHub {
    pub fn new() -> Self {
        Self::with_quota(DEFAULT_QUOTA_BYTES)
    }

    pub fn with_quota(quota_bytes: u64) -> Self {
        Self {
            shared: Arc::new(Mutex::new(HubState {
                values: FxHashMap::default(),
                listeners: Vec::new(),
                next_listener_id: 1,
                quota_bytes,
                unavailable: false,
            })),
        }
    }

    pub fn context(&self) -> MemoryStorage {
        self.context_with_scope(NotifyScope::default())
    }

    pub fn context_with_scope(&self, scope: NotifyScope) -> MemoryStorage {
        MemoryStorage {
            shared: self.shared.clone(),
            context: ContextId::generate(),
            scope,
        }
    }

    /// Makes every load and save fail until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        lock(&self.shared).unavailable = unavailable;
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.shared).listeners.len()
    }

    pub fn raw_value(&self, key: &str) -> Option<String> {
        lock(&self.shared).values.get(key).cloned()
    }
}

#[derive(Clone)]
pub struct MemoryStorage {
    shared: Arc<Mutex<HubState>>,
    context: ContextId,
    scope: NotifyScope,
}

impl SharedStorage for MemoryStorage {
    fn context_id(&self) -> ContextId {
        self.context
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = lock(&self.shared);
        if state.unavailable {
            return Err(StorageError::Unavailable("memory storage disabled".into()));
        }
        Ok(state.values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let (change, targets) = {
            let mut state = lock(&self.shared);
            if state.unavailable {
                return Err(StorageError::Unavailable("memory storage disabled".into()));
            }
            check_quota(key, value, state.quota_bytes)?;

            let old_value = state.values.insert(key.to_string(), value.to_string());
            if old_value.as_deref() == Some(value) {
                return Ok(());
            }

            let targets = state
                .listeners
                .iter()
                .filter(|entry| {
                    entry.context != self.context || entry.scope == NotifyScope::AllContexts
                })
                .map(|entry| (entry.context, entry.listener.clone()))
                .collect::<Vec<_>>();
            let change = StorageChange {
                key: key.to_string(),
                old_value,
                new_value: Some(value.to_string()),
                origin: ChangeOrigin::OtherContext,
            };
            (change, targets)
        };

        for (context, listener) in targets {
            let origin = if context == self.context {
                ChangeOrigin::SameContext
            } else {
                ChangeOrigin::OtherContext
            };
            listener(&StorageChange {
                origin,
                ..change.clone()
            });
        }
        Ok(())
    }

    fn subscribe(&self, listener: ChangeListener) -> Result<Subscription, StorageError> {
        let id = {
            let mut state = lock(&self.shared);
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.listeners.push(ListenerEntry {
                id,
                context: self.context,
                scope: self.scope,
                listener,
            });
            id
        };

        let shared = Arc::downgrade(&self.shared);
        Ok(Subscription::new(id, move || {
            if let Some(shared) = shared.upgrade() {
                lock(&shared).listeners.retain(|entry| entry.id != id);
            }
        }))
    }
}

fn lock(shared: &Mutex<HubState>) -> MutexGuard<'_, HubState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory.rs"]
mod tests;
