//! Shared key/value storage contract.
//!
//! A storage instance belongs to exactly one context. Change notifications are delivered
//! for writes from *other* contexts, and only when the stored value actually changed.
//! Same-context delivery is opt-in through [`NotifyScope::AllContexts`].

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage quota exceeded for `{key}`: {size} bytes > {quota} bytes")]
    QuotaExceeded { key: String, size: u64, quota: u64 },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn unavailable(err: impl fmt::Display) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(Uuid);

impl ContextId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyScope {
    /// Browser-style: a context never hears about its own writes.
    #[default]
    OtherContexts,
    AllContexts,
}

impl NotifyScope {
    pub fn from_flag(notify_same_context: bool) -> Self {
        if notify_same_context {
            NotifyScope::AllContexts
        } else {
            NotifyScope::OtherContexts
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    SameContext,
    OtherContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub origin: ChangeOrigin,
}

pub type ChangeListener = Arc<dyn Fn(&StorageChange) + Send + Sync>;

pub trait SharedStorage: Send + Sync {
    fn context_id(&self) -> ContextId;

    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn subscribe(&self, listener: ChangeListener) -> Result<Subscription, StorageError>;
}

/// Live registration of a change listener. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(id: u64, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.release.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Size check shared by the adapters.
pub fn check_quota(key: &str, value: &str, quota: u64) -> Result<(), StorageError> {
    let size = (key.len() + value.len()) as u64;
    if size > quota {
        return Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            size,
            quota,
        });
    }
    Ok(())
}
