use std::time::Instant;

use crate::core::Command;
use crate::kernel::state::FocusTarget;

#[derive(Debug, Clone)]
pub enum Action {
    /// Mount: load the stored record into both components.
    Init,
    RunCommand(Command),
    Paste(String),
    SetFocus(FocusTarget),
    Tick {
        now: Instant,
    },
    FormLoaded {
        raw: Option<String>,
    },
    ViewerLoaded {
        raw: Option<String>,
    },
    SaveFinished {
        id: String,
        result: Result<(), String>,
        now: Instant,
    },
    StorageChanged {
        key: String,
    },
    /// Termination request from outside the key handler (e.g. SIGINT).
    RequestExit,
}
