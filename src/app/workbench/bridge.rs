use super::Workbench;
use crate::kernel::{Action as KernelAction, Effect as KernelEffect, LoadTarget, UserData};
use crate::kernel::USER_DATA_KEY;
use std::time::Instant;

impl Workbench {
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) -> bool {
        match effect {
            KernelEffect::LoadUserData(target) => {
                let raw = self.load_user_data();
                let action = match target {
                    LoadTarget::Form => KernelAction::FormLoaded { raw },
                    LoadTarget::Viewer => KernelAction::ViewerLoaded { raw },
                };
                self.dispatch_kernel(action)
            }
            KernelEffect::PersistUserData(record) => {
                let result = self.persist_user_data(&record);
                self.dispatch_kernel(KernelAction::SaveFinished {
                    id: record.id,
                    result,
                    now: Instant::now(),
                })
            }
            KernelEffect::Quit => {
                self.quit_requested = true;
                true
            }
        }
    }

    /// Unreadable storage reads as "no data".
    fn load_user_data(&self) -> Option<String> {
        match self.storage.load(USER_DATA_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, key = USER_DATA_KEY, "load failed");
                None
            }
        }
    }

    fn persist_user_data(&self, record: &UserData) -> Result<(), String> {
        let json = record.to_json().map_err(|e| e.to_string())?;
        match self.storage.save(USER_DATA_KEY, &json) {
            Ok(()) => {
                tracing::info!(id = %record.id, "user data saved");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %record.id, error = %err, "save failed");
                Err(err.to_string())
            }
        }
    }
}
