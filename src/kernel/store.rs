use crate::core::Command;

use super::effect::LoadTarget;
use super::form::ExitDecision;
use super::state::{DialogChoice, FocusTarget, ToastLevel};
use super::user_data::USER_DATA_KEY;
use super::viewer::Mark;
use super::{Action, AppState, Effect};

pub const SAVE_SUCCESS_TITLE: &str = "Success";
pub const SAVE_SUCCESS_DESCRIPTION: &str = "User data saved successfully";
pub const SAVE_FAILED_TITLE: &str = "Save failed";

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether the frontend should keep ticking at animation rate.
    pub fn needs_tick(&self) -> bool {
        self.state.counter.is_animating() || self.state.ui.toast.is_some()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Init => DispatchResult::effects(vec![
                Effect::LoadUserData(LoadTarget::Form),
                Effect::LoadUserData(LoadTarget::Viewer),
            ]),
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Paste(text) => match self.state.ui.focus {
                FocusTarget::Form if !self.state.ui.confirm_dialog.visible => {
                    DispatchResult::changed(self.state.form.insert_str(&text))
                }
                _ => DispatchResult::changed(false),
            },
            Action::SetFocus(target) => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = target;
                DispatchResult::changed(prev != target)
            }
            Action::Tick { now } => {
                let elapsed = self
                    .state
                    .ui
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or_default();
                self.state.ui.last_tick = Some(now);

                let mut changed = self.state.counter.tick(elapsed);
                changed |= self.state.ui.expire_toast(now);
                DispatchResult::changed(changed)
            }
            Action::FormLoaded { raw } => {
                self.state.form.load(raw.as_deref());
                tracing::debug!(id = %self.state.form.draft().id, "form initialized");
                DispatchResult::changed(true)
            }
            Action::ViewerLoaded { raw } => {
                self.state.viewer.load(raw.as_deref());
                DispatchResult::changed(true)
            }
            Action::SaveFinished { id, result, now } => {
                match result {
                    Ok(()) => {
                        self.state.form.finish_save(&id);
                        self.state.ui.show_toast(
                            ToastLevel::Success,
                            SAVE_SUCCESS_TITLE,
                            SAVE_SUCCESS_DESCRIPTION,
                            now,
                        );
                    }
                    Err(message) => {
                        self.state
                            .ui
                            .show_toast(ToastLevel::Error, SAVE_FAILED_TITLE, message, now);
                    }
                }
                DispatchResult::changed(true)
            }
            Action::StorageChanged { key } => {
                if key != USER_DATA_KEY {
                    return DispatchResult::changed(false);
                }
                DispatchResult::effects(vec![Effect::LoadUserData(LoadTarget::Viewer)])
            }
            Action::RequestExit => self.request_exit(),
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        if self.state.ui.confirm_dialog.visible {
            return self.dispatch_dialog_command(cmd);
        }

        let focus = self.state.ui.focus;
        let state = &mut self.state;
        match cmd {
            Command::Quit => self.request_exit(),
            Command::FocusNextPanel => {
                state.ui.focus = focus.next();
                DispatchResult::changed(true)
            }
            Command::FocusPrevPanel => {
                state.ui.focus = focus.prev();
                DispatchResult::changed(true)
            }

            Command::CounterIncrement => DispatchResult::changed(state.counter.increment()),
            Command::CounterDecrement => DispatchResult::changed(state.counter.decrement()),
            Command::CounterReset => DispatchResult::changed(state.counter.reset()),

            Command::Save => match state.form.begin_save() {
                Some(record) => DispatchResult::effects(vec![Effect::PersistUserData(record)]),
                None => {
                    tracing::debug!("save ignored: no unsaved changes");
                    DispatchResult::changed(false)
                }
            },
            Command::ResetForm => {
                state.form.reset();
                DispatchResult::changed(true)
            }
            Command::FieldNext => DispatchResult::changed(state.form.focus_next_field()),
            Command::FieldPrev => DispatchResult::changed(state.form.focus_prev_field()),

            Command::InsertChar(ch) => DispatchResult::changed(match focus {
                FocusTarget::Form => state.form.insert_char(ch),
                FocusTarget::Viewer => state.viewer.insert_char(ch),
                FocusTarget::Counter => false,
            }),
            Command::DeleteBackward => DispatchResult::changed(match focus {
                FocusTarget::Form => state.form.delete_backward(),
                FocusTarget::Viewer => state.viewer.delete_backward(),
                FocusTarget::Counter => false,
            }),
            Command::DeleteForward => DispatchResult::changed(state.form.delete_forward()),
            Command::CursorLeft => DispatchResult::changed(state.form.cursor_left()),
            Command::CursorRight => DispatchResult::changed(state.form.cursor_right()),
            Command::CursorHome => DispatchResult::changed(state.form.cursor_home()),
            Command::CursorEnd => DispatchResult::changed(state.form.cursor_end()),

            Command::RefreshViewer => {
                DispatchResult::effects(vec![Effect::LoadUserData(LoadTarget::Viewer)])
            }
            Command::BlockUp => DispatchResult::changed(state.viewer.select_prev()),
            Command::BlockDown => DispatchResult::changed(state.viewer.select_next()),
            Command::ToggleBold => DispatchResult::changed(state.viewer.toggle_mark(Mark::Bold)),
            Command::ToggleItalic => {
                DispatchResult::changed(state.viewer.toggle_mark(Mark::Italic))
            }
            Command::ToggleStrike => {
                DispatchResult::changed(state.viewer.toggle_mark(Mark::Strike))
            }
            Command::ToggleBulletList => {
                DispatchResult::changed(state.viewer.toggle_bullet_list())
            }

            Command::DialogToggleChoice | Command::DialogConfirm | Command::DialogStay => {
                DispatchResult::changed(false)
            }
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled custom command");
                DispatchResult::changed(false)
            }
        }
    }

    fn dispatch_dialog_command(&mut self, cmd: Command) -> DispatchResult {
        let dialog = &mut self.state.ui.confirm_dialog;
        match cmd {
            Command::DialogToggleChoice => {
                dialog.selected = dialog.selected.toggled();
                DispatchResult::changed(true)
            }
            Command::DialogStay => {
                dialog.close();
                DispatchResult::changed(true)
            }
            Command::DialogConfirm => {
                let choice = dialog.selected;
                dialog.close();
                match choice {
                    DialogChoice::Stay => DispatchResult::changed(true),
                    DialogChoice::Leave => {
                        tracing::info!("leaving with unsaved changes");
                        DispatchResult {
                            effects: vec![Effect::Quit],
                            state_changed: true,
                        }
                    }
                }
            }
            _ => DispatchResult::changed(false),
        }
    }

    fn request_exit(&mut self) -> DispatchResult {
        match self.state.form.request_exit() {
            ExitDecision::Proceed => DispatchResult::effects(vec![Effect::Quit]),
            ExitDecision::Confirm => {
                if self.state.ui.confirm_dialog.visible {
                    return DispatchResult::changed(false);
                }
                self.state.ui.confirm_dialog.open_unsaved_changes();
                DispatchResult::changed(true)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
