//! Directory-backed shared storage.
//!
//! Every key is one `<key>.json` file holding the raw value. Writes go through a temp file
//! and a rename, so readers see either the old or the new value. A `notify` watcher on the
//! directory turns writes by other processes into change notifications; the table of last
//! known values filters out this process's own writes and duplicate watcher events.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use rustc_hash::FxHashMap;

use crate::kernel::services::ports::storage::check_quota;
use crate::kernel::services::ports::{
    ChangeListener, ChangeOrigin, ContextId, NotifyScope, SharedStorage, StorageChange,
    StorageError, Subscription,
};

const WATCHER_POLL_INTERVAL: Duration = Duration::from_millis(250);
const VALUE_EXT: &str = "json";

pub struct FileStorage {
    inner: Arc<Inner>,
}

struct Inner {
    dir: PathBuf,
    context: ContextId,
    scope: NotifyScope,
    quota_bytes: u64,
    /// Last value this context wrote or was notified about, per key.
    known: Mutex<FxHashMap<String, Option<String>>>,
    listeners: Mutex<Vec<(u64, ChangeListener)>>,
    next_listener_id: AtomicU64,
    watcher: Mutex<Option<RecommendedWatcher>>,
}

impl FileStorage {
    pub fn open(dir: &Path, quota_bytes: u64, scope: NotifyScope) -> Result<Self, StorageError> {
        fs::create_dir_all(dir).map_err(StorageError::unavailable)?;
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let context = ContextId::generate();
        tracing::info!(dir = %dir.display(), %context, ?scope, "file storage opened");

        Ok(Self {
            inner: Arc::new(Inner {
                dir,
                context,
                scope,
                quota_bytes,
                known: Mutex::new(FxHashMap::default()),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(1),
                watcher: Mutex::new(None),
            }),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.inner.dir
    }

    pub fn is_watching(&self) -> bool {
        lock(&self.inner.watcher).is_some()
    }

    fn ensure_watcher(&self) -> Result<(), StorageError> {
        let mut slot = lock(&self.inner.watcher);
        if slot.is_some() {
            return Ok(());
        }

        self.inner.prime_known();

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                let Ok(event) = res else { return };
                if let Some(inner) = weak.upgrade() {
                    inner.handle_event(event);
                }
            },
            Config::default().with_poll_interval(WATCHER_POLL_INTERVAL),
        )
        .map_err(StorageError::unavailable)?;
        watcher
            .watch(&self.inner.dir, RecursiveMode::NonRecursive)
            .map_err(StorageError::unavailable)?;

        tracing::debug!(dir = %self.inner.dir.display(), "storage watcher started");
        *slot = Some(watcher);
        Ok(())
    }
}

impl SharedStorage for FileStorage {
    fn context_id(&self) -> ContextId {
        self.inner.context
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        read_value(&self.inner.key_path(key)).map_err(StorageError::unavailable)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let inner = &self.inner;
        check_quota(key, value, inner.quota_bytes)?;

        let path = inner.key_path(key);
        let tmp = inner.temp_path(key);
        let size = (key.len() + value.len()) as u64;

        let change = {
            // Held across the write so the watcher thread compares against the new value.
            let mut known = lock(&inner.known);
            let old_value = read_value(&path).ok().flatten();

            if let Err(err) = fs::write(&tmp, value).and_then(|()| fs::rename(&tmp, &path)) {
                let _ = fs::remove_file(&tmp);
                let err = classify_io_error(key, size, inner.quota_bytes, err);
                tracing::warn!(key, error = %err, "storage write failed");
                return Err(err);
            }

            known.insert(key.to_string(), Some(value.to_string()));
            (old_value.as_deref() != Some(value)).then(|| StorageChange {
                key: key.to_string(),
                old_value,
                new_value: Some(value.to_string()),
                origin: ChangeOrigin::SameContext,
            })
        };

        tracing::debug!(key, bytes = value.len(), "value stored");
        if inner.scope == NotifyScope::AllContexts {
            if let Some(change) = change {
                inner.notify(&change);
            }
        }
        Ok(())
    }

    fn subscribe(&self, listener: ChangeListener) -> Result<Subscription, StorageError> {
        self.ensure_watcher()?;

        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push((id, listener));

        let weak = Arc::downgrade(&self.inner);
        Ok(Subscription::new(id, move || {
            let Some(inner) = weak.upgrade() else { return };
            let now_empty = {
                let mut listeners = lock(&inner.listeners);
                listeners.retain(|(lid, _)| *lid != id);
                listeners.is_empty()
            };
            if now_empty {
                // Dropped outside every other lock: the watcher joins its event thread.
                let watcher = lock(&inner.watcher).take();
                drop(watcher);
                tracing::debug!("storage watcher stopped");
            }
        }))
    }
}

impl Inner {
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{VALUE_EXT}", encode_key(key)))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.tmp", encode_key(key), self.context))
    }

    fn prime_known(&self) {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return;
        };
        let mut known = lock(&self.known);
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(key) = key_for_path(&path) else {
                continue;
            };
            if known.contains_key(&key) {
                continue;
            }
            if let Ok(value) = read_value(&path) {
                known.insert(key, value);
            }
        }
    }

    fn handle_event(&self, event: notify::Event) {
        let mut keys = event
            .paths
            .iter()
            .filter(|p| p.parent() == Some(self.dir.as_path()))
            .filter_map(|p| key_for_path(p))
            .collect::<Vec<_>>();
        keys.dedup();

        for key in keys {
            self.refresh_key(&key);
        }
    }

    fn refresh_key(&self, key: &str) {
        let new_value = match read_value(&self.key_path(key)) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read changed value");
                return;
            }
        };

        let change = {
            let mut known = lock(&self.known);
            let old_value = known.get(key).cloned().flatten();
            if known.get(key) == Some(&new_value) {
                return;
            }
            known.insert(key.to_string(), new_value.clone());
            StorageChange {
                key: key.to_string(),
                old_value,
                new_value,
                origin: ChangeOrigin::OtherContext,
            }
        };

        tracing::debug!(key, "external storage change");
        self.notify(&change);
    }

    fn notify(&self, change: &StorageChange) {
        let listeners = lock(&self.listeners)
            .iter()
            .map(|(_, l)| l.clone())
            .collect::<Vec<_>>();
        for listener in listeners {
            listener(change);
        }
    }
}

fn read_value(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn classify_io_error(key: &str, size: u64, quota: u64, err: io::Error) -> StorageError {
    #[cfg(unix)]
    {
        if matches!(err.raw_os_error(), Some(libc::ENOSPC) | Some(libc::EDQUOT)) {
            return StorageError::QuotaExceeded {
                key: key.to_string(),
                size,
                quota,
            };
        }
    }
    #[cfg(not(unix))]
    let _ = (key, size, quota);
    StorageError::unavailable(err)
}

/// Keeps `[A-Za-z0-9_-]` and percent-encodes every other UTF-8 byte.
pub fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

pub fn decode_key(encoded: &str) -> Option<String> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = encoded.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn key_for_path(path: &Path) -> Option<String> {
    if path.extension()? != VALUE_EXT {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.starts_with('.') {
        return None;
    }
    decode_key(stem)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/storage.rs"]
mod tests;
