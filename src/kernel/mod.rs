//! Headless application core (state/action/effect).

pub mod action;
pub mod counter;
pub mod effect;
pub mod form;
pub mod services;
pub mod state;
pub mod store;
pub mod user_data;
pub mod viewer;

pub use action::Action;
pub use counter::CounterState;
pub use effect::{Effect, LoadTarget};
pub use form::{DraftStatus, ExitDecision, FormState};
pub use state::{
    AppState, ConfirmDialogState, DialogChoice, FocusTarget, Toast, ToastLevel, UiState,
};
pub use store::{DispatchResult, Store};
pub use user_data::{UserData, UserField, USER_DATA_KEY};
pub use viewer::{Document, Mark, ViewerState};
