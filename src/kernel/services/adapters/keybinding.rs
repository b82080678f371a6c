//! Keybindings: key → command, resolved per focus context.

use crate::core::event::Key;
use crate::core::event::{KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Counter,
    Form,
    Viewer,
    Dialog,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "counter" => Some(Self::Counter),
            "form" | "userform" | "user_form" => Some(Self::Form),
            "viewer" | "editor" | "richtext" | "rich_text" => Some(Self::Viewer),
            "dialog" | "confirm" => Some(Self::Dialog),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    counter: FxHashMap<Key, Command>,
    form: FxHashMap<Key, Command>,
    viewer: FxHashMap<Key, Command>,
    dialog: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            counter: default_counter_keybindings(),
            form: default_form_keybindings(),
            viewer: default_viewer_keybindings(),
            dialog: default_dialog_keybindings(),
        }
    }

    /// The dialog is modal: global bindings don't reach past it.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Counter => self.counter.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Form => self.form.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Viewer => self.viewer.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Dialog => self.dialog.get(key),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Counter => &self.counter,
            KeybindingContext::Form => &self.form,
            KeybindingContext::Viewer => &self.viewer,
            KeybindingContext::Dialog => &self.dialog,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies user rules on top of the defaults. Returns how many were accepted.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unparseable key");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(name) => match KeybindingContext::parse(name) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = name, "ignoring keybinding with unknown context");
                        continue;
                    }
                },
            };
            let command = parse_command(&rule.command);
            if let Command::Custom(name) = &command {
                if name.is_empty() || name == "-" || name.eq_ignore_ascii_case("none") {
                    self.unbind(context, &key);
                    applied += 1;
                    continue;
                }
                tracing::warn!(command = %name, "binding unknown command");
            }
            self.bind(context, key, command);
            applied += 1;
        }
        applied
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Counter => &mut self.counter,
            KeybindingContext::Form => &mut self.form,
            KeybindingContext::Viewer => &mut self.viewer,
            KeybindingContext::Dialog => &mut self.dialog,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusNextPanel);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::FocusPrevPanel);
    bindings.insert(Key::shift(KeyCode::BackTab), Command::FocusPrevPanel);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl(KeyCode::Char('r')), Command::ResetForm);
    bindings.insert(Key::simple(KeyCode::F(5)), Command::RefreshViewer);

    bindings
}

fn default_counter_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Char('+')), Command::CounterIncrement);
    bindings.insert(Key::shift(KeyCode::Char('+')), Command::CounterIncrement);
    bindings.insert(Key::simple(KeyCode::Char('=')), Command::CounterIncrement);
    bindings.insert(Key::simple(KeyCode::Up), Command::CounterIncrement);
    bindings.insert(Key::simple(KeyCode::Char('-')), Command::CounterDecrement);
    bindings.insert(Key::simple(KeyCode::Down), Command::CounterDecrement);
    bindings.insert(Key::simple(KeyCode::Char('0')), Command::CounterReset);
    bindings.insert(Key::simple(KeyCode::Char('r')), Command::CounterReset);

    bindings
}

fn default_form_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    bindings.insert(Key::simple(KeyCode::Up), Command::FieldPrev);
    bindings.insert(Key::simple(KeyCode::Down), Command::FieldNext);
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorHome);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorEnd);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Save);

    bindings
}

fn default_viewer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Up), Command::BlockUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::BlockDown);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::alt(KeyCode::Char('b')), Command::ToggleBold);
    bindings.insert(Key::alt(KeyCode::Char('i')), Command::ToggleItalic);
    bindings.insert(Key::alt(KeyCode::Char('s')), Command::ToggleStrike);
    bindings.insert(Key::alt(KeyCode::Char('l')), Command::ToggleBulletList);

    bindings
}

fn default_dialog_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Left), Command::DialogToggleChoice);
    bindings.insert(Key::simple(KeyCode::Right), Command::DialogToggleChoice);
    bindings.insert(Key::simple(KeyCode::Tab), Command::DialogToggleChoice);
    bindings.insert(Key::simple(KeyCode::Enter), Command::DialogConfirm);
    bindings.insert(Key::simple(KeyCode::Esc), Command::DialogStay);
    bindings.insert(
        Key::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Command::DialogStay,
    );

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
