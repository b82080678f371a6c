use std::time::{Duration, Instant};

use super::counter::CounterState;
use super::form::FormState;
use super::services::ports::settings::DEFAULT_TOAST_MS;
use super::viewer::ViewerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    Counter,
    Viewer,
    #[default]
    Form,
}

impl FocusTarget {
    const ORDER: [FocusTarget; 3] = [FocusTarget::Counter, FocusTarget::Viewer, FocusTarget::Form];

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    fn offset(self, delta: isize) -> Self {
        let len = Self::ORDER.len() as isize;
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ORDER[(idx + delta).rem_euclid(len) as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusTarget::Counter => "Counter",
            FocusTarget::Viewer => "Rich Text Editor",
            FocusTarget::Form => "User Form",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogChoice {
    #[default]
    Stay,
    Leave,
}

impl DialogChoice {
    pub fn toggled(self) -> Self {
        match self {
            DialogChoice::Stay => DialogChoice::Leave,
            DialogChoice::Leave => DialogChoice::Stay,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub title: String,
    pub message: String,
    pub selected: DialogChoice,
}

impl ConfirmDialogState {
    pub fn open_unsaved_changes(&mut self) {
        self.visible = true;
        self.title = "Unsaved Changes".to_string();
        self.message =
            "You have unsaved changes. Are you sure you want to leave? Your changes will be lost."
                .to_string();
        self.selected = DialogChoice::Stay;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub confirm_dialog: ConfirmDialogState,
    pub toast: Option<Toast>,
    pub toast_duration: Duration,
    pub last_tick: Option<Instant>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::default(),
            confirm_dialog: ConfirmDialogState::default(),
            toast: None,
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
            last_tick: None,
        }
    }
}

impl UiState {
    pub fn show_toast(
        &mut self,
        level: ToastLevel,
        title: impl Into<String>,
        description: impl Into<String>,
        now: Instant,
    ) {
        self.toast = Some(Toast {
            level,
            title: title.into(),
            description: description.into(),
            expires_at: now + self.toast_duration,
        });
    }

    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.toast = None;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub counter: CounterState,
    pub form: FormState,
    pub viewer: ViewerState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            ui: UiState {
                toast_duration,
                ..UiState::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
