//! Workbench: owns the store, runs its effects against storage, routes input and renders.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::{
    ChangeListener, ContextId, SharedStorage, StorageChange, Subscription, UiSettings,
};
use crate::kernel::{Action as KernelAction, AppState, FocusTarget, Store};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod bridge;
mod input;
mod render;
mod tick;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const FORM_HEIGHT: u16 = 11;
const COUNTER_WIDTH_PERCENT: u16 = 35;
const MAX_STORAGE_DRAIN_PER_TICK: usize = 256;
const IDLE_TICK: Duration = Duration::from_millis(250);

pub struct Workbench {
    store: Store,
    storage: Arc<dyn SharedStorage>,
    subscription: Option<Subscription>,
    storage_rx: Receiver<StorageChange>,
    keybindings: KeybindingService,
    theme: UiTheme,
    tick_interval: Duration,
    quit_requested: bool,
    last_cursor: Option<(u16, u16)>,
}

impl Workbench {
    pub fn new(
        storage: Arc<dyn SharedStorage>,
        keybindings: KeybindingService,
        ui: &UiSettings,
    ) -> Self {
        let (tx, storage_rx) = mpsc::channel::<StorageChange>();
        let listener: ChangeListener = Arc::new(move |change: &StorageChange| {
            let _ = tx.send(change.clone());
        });
        // Without a subscription the viewer still updates on manual refresh.
        let subscription = match storage.subscribe(listener) {
            Ok(sub) => Some(sub),
            Err(err) => {
                tracing::warn!(error = %err, "storage change notifications unavailable");
                None
            }
        };

        let mut theme = UiTheme::default();
        if !cfg!(test) {
            theme.adapt_to_terminal_capabilities();
        }

        let mut workbench = Self {
            store: Store::new(AppState::new(Duration::from_millis(ui.toast_ms))),
            storage,
            subscription,
            storage_rx,
            keybindings,
            theme,
            tick_interval: Duration::from_millis(ui.tick_ms.max(1)),
            quit_requested: false,
            last_cursor: None,
        };
        tracing::info!(context = %workbench.context_id(), "workbench mounted");
        workbench.dispatch_kernel(KernelAction::Init);
        workbench
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn context_id(&self) -> ContextId {
        self.storage.context_id()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Exit request coming from outside the key handler (SIGINT).
    pub fn request_exit(&mut self) -> bool {
        self.dispatch_kernel(KernelAction::RequestExit)
    }

    /// How long the main loop may block waiting for input.
    pub fn poll_timeout(&self) -> Duration {
        if self.store.needs_tick() {
            self.tick_interval
        } else {
            IDLE_TICK
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.last_cursor
    }
}

impl Drop for Workbench {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(id = subscription.id(), "storage subscription released");
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
