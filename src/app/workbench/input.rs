use super::Workbench;
use crate::core::event::{InputEvent, Key, KeyEvent, KeyEventKind};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::tui::view::EventResult;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let result = match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Paste(text) => {
            if workbench.dispatch_kernel(KernelAction::Paste(text.clone())) {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        }
        InputEvent::Resize(_, _) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    };

    if workbench.should_quit() {
        EventResult::Quit
    } else {
        result
    }
}

impl Workbench {
    fn keybinding_context(&self) -> KeybindingContext {
        let ui = &self.store.state().ui;
        if ui.confirm_dialog.visible {
            return KeybindingContext::Dialog;
        }
        match ui.focus {
            FocusTarget::Counter => KeybindingContext::Counter,
            FocusTarget::Form => KeybindingContext::Form,
            FocusTarget::Viewer => KeybindingContext::Viewer,
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let context = self.keybinding_context();
        let key = Key::from(*event);
        let command = match self.keybindings.resolve(context, &key) {
            Some(command) => command.clone(),
            None => match (context, event.typed_char()) {
                (KeybindingContext::Form | KeybindingContext::Viewer, Some(ch)) => {
                    Command::InsertChar(ch)
                }
                _ => return EventResult::Ignored,
            },
        };

        tracing::trace!(?context, command = command.name(), "key command");
        self.dispatch_kernel(KernelAction::RunCommand(command));
        EventResult::Consumed
    }
}
