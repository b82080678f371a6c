//! The persisted user record and its field metadata.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage key the record lives under.
pub const USER_DATA_KEY: &str = "userData";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl UserData {
    /// A blank record with a freshly generated id.
    pub fn blank() -> Self {
        Self {
            id: generate_id(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Id => &self.id,
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Id => self.id = value,
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Phone => self.phone = value,
            UserField::Address => self.address = value,
        }
    }

    pub fn regenerate_id(&mut self) {
        self.id = generate_id();
    }
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Decodes a stored value, treating malformed content as absent.
pub fn decode_stored(raw: Option<&str>) -> Option<UserData> {
    let raw = raw?;
    match UserData::parse(raw) {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::warn!(key = USER_DATA_KEY, error = %err, "ignoring malformed stored record");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Name,
    Email,
    Phone,
    Address,
}

impl UserField {
    pub const ALL: [UserField; 5] = [
        UserField::Id,
        UserField::Name,
        UserField::Email,
        UserField::Phone,
        UserField::Address,
    ];

    pub const EDITABLE: [UserField; 4] = [
        UserField::Name,
        UserField::Email,
        UserField::Phone,
        UserField::Address,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserField::Id => "ID",
            UserField::Name => "Name",
            UserField::Email => "Email",
            UserField::Phone => "Phone",
            UserField::Address => "Address",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            UserField::Id => "",
            UserField::Name => "Enter your name",
            UserField::Email => "Enter your email",
            UserField::Phone => "Enter your phone number",
            UserField::Address => "Enter your address",
        }
    }

    pub fn is_editable(self) -> bool {
        self != UserField::Id
    }

    pub fn is_required(self) -> bool {
        self.is_editable()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/user_data.rs"]
mod tests;
