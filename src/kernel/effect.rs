use super::user_data::UserData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    Form,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadUserData(LoadTarget),
    PersistUserData(UserData),
    Quit,
}
