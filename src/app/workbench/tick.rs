use super::Workbench;
use crate::kernel::services::ports::ChangeOrigin;
use crate::kernel::Action as KernelAction;
use std::sync::mpsc::TryRecvError;
use std::time::Instant;

impl Workbench {
    /// One main-loop step: drain storage notifications, then advance animations and toasts.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.poll_storage_changes();
        changed |= self.dispatch_kernel(KernelAction::Tick { now });
        changed
    }

    pub(super) fn poll_storage_changes(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..super::MAX_STORAGE_DRAIN_PER_TICK {
            match self.storage_rx.try_recv() {
                Ok(change) => {
                    tracing::debug!(
                        key = %change.key,
                        external = change.origin == ChangeOrigin::OtherContext,
                        "storage changed"
                    );
                    changed |= self.dispatch_kernel(KernelAction::StorageChanged { key: change.key });
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("storage notification channel closed");
                    self.subscription = None;
                    break;
                }
            }
        }
        changed
    }
}
