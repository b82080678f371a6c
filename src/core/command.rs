//! Semantic commands, independent of the keys bound to them.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Session ====================
    Quit,
    FocusNextPanel,
    FocusPrevPanel,

    // ==================== Counter ====================
    CounterIncrement,
    CounterDecrement,
    CounterReset,

    // ==================== Form ====================
    Save,
    ResetForm,
    FieldNext,
    FieldPrev,

    // ==================== Text editing ====================
    InsertChar(char),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // ==================== Viewer ====================
    RefreshViewer,
    BlockUp,
    BlockDown,
    ToggleBold,
    ToggleItalic,
    ToggleStrike,
    ToggleBulletList,

    // ==================== Dialog ====================
    DialogToggleChoice,
    DialogConfirm,
    DialogStay,

    Custom(String),
}

const NAMED_COMMANDS: &[(&str, Command)] = &[
    ("quit", Command::Quit),
    ("focusNextPanel", Command::FocusNextPanel),
    ("focusPrevPanel", Command::FocusPrevPanel),
    ("counterIncrement", Command::CounterIncrement),
    ("counterDecrement", Command::CounterDecrement),
    ("counterReset", Command::CounterReset),
    ("save", Command::Save),
    ("resetForm", Command::ResetForm),
    ("fieldNext", Command::FieldNext),
    ("fieldPrev", Command::FieldPrev),
    ("deleteBackward", Command::DeleteBackward),
    ("deleteForward", Command::DeleteForward),
    ("cursorLeft", Command::CursorLeft),
    ("cursorRight", Command::CursorRight),
    ("cursorHome", Command::CursorHome),
    ("cursorEnd", Command::CursorEnd),
    ("refreshViewer", Command::RefreshViewer),
    ("blockUp", Command::BlockUp),
    ("blockDown", Command::BlockDown),
    ("toggleBold", Command::ToggleBold),
    ("toggleItalic", Command::ToggleItalic),
    ("toggleStrike", Command::ToggleStrike),
    ("toggleBulletList", Command::ToggleBulletList),
    ("dialogToggleChoice", Command::DialogToggleChoice),
    ("dialogConfirm", Command::DialogConfirm),
    ("dialogStay", Command::DialogStay),
];

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::InsertChar(_) => "insertChar",
            Command::Custom(name) => name.as_str(),
            other => NAMED_COMMANDS
                .iter()
                .find(|(_, cmd)| cmd == other)
                .map(|(name, _)| *name)
                .unwrap_or("unknown"),
        }
    }

    /// Unknown names become `Custom` so settings never fail to parse on a typo.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        NAMED_COMMANDS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, cmd)| cmd.clone())
            .unwrap_or_else(|| Command::Custom(name.to_string()))
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_) | Command::DeleteBackward | Command::DeleteForward
        )
    }
}
