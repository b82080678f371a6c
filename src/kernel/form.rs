//! The user form: an editable draft of the stored record.
//!
//! The draft is `Unmodified` right after loading or saving and becomes `Modified` on any
//! field edit or reset. Saving is only possible while `Modified`; a successful save keeps
//! the field values but gives the draft a fresh id for the next entry.

use super::user_data::{decode_stored, UserData, UserField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftStatus {
    #[default]
    Unmodified,
    Modified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Proceed,
    Confirm,
}

#[derive(Debug, Clone)]
pub struct FormState {
    draft: UserData,
    status: DraftStatus,
    focused: UserField,
    /// Cursor inside the focused field, in chars.
    cursor: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: UserData::blank(),
            status: DraftStatus::Unmodified,
            focused: UserField::Name,
            cursor: 0,
        }
    }

    /// Adopts the stored record verbatim, or starts blank when nothing usable is stored.
    pub fn load(&mut self, raw: Option<&str>) {
        self.draft = decode_stored(raw).unwrap_or_else(UserData::blank);
        self.status = DraftStatus::Unmodified;
        self.clamp_cursor_to_end();
    }

    pub fn draft(&self) -> &UserData {
        &self.draft
    }

    pub fn status(&self) -> DraftStatus {
        self.status
    }

    pub fn is_modified(&self) -> bool {
        self.status == DraftStatus::Modified
    }

    pub fn can_save(&self) -> bool {
        self.is_modified()
    }

    pub fn focused(&self) -> UserField {
        self.focused
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Required fields that are still empty. Presentation only: saving is not blocked.
    pub fn missing_required(&self) -> Vec<UserField> {
        UserField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.draft.get(*f).trim().is_empty())
            .collect()
    }

    pub fn edit_field(&mut self, field: UserField, value: String) -> bool {
        if !field.is_editable() {
            return false;
        }
        self.draft.set(field, value);
        self.status = DraftStatus::Modified;
        true
    }

    /// The record to persist, if saving is currently allowed.
    pub fn begin_save(&self) -> Option<UserData> {
        self.can_save().then(|| self.draft.clone())
    }

    pub fn finish_save(&mut self, saved_id: &str) -> bool {
        if self.draft.id != saved_id {
            tracing::debug!(saved_id, draft_id = %self.draft.id, "stale save completion");
            return false;
        }
        self.status = DraftStatus::Unmodified;
        self.draft.regenerate_id();
        true
    }

    pub fn reset(&mut self) {
        self.draft = UserData::blank();
        self.status = DraftStatus::Modified;
        self.cursor = 0;
    }

    pub fn request_exit(&self) -> ExitDecision {
        if self.is_modified() {
            ExitDecision::Confirm
        } else {
            ExitDecision::Proceed
        }
    }

    pub fn focus_field(&mut self, field: UserField) -> bool {
        if !field.is_editable() || self.focused == field {
            return false;
        }
        self.focused = field;
        self.clamp_cursor_to_end();
        true
    }

    pub fn focus_next_field(&mut self) -> bool {
        self.focus_offset(1)
    }

    pub fn focus_prev_field(&mut self) -> bool {
        self.focus_offset(-1)
    }

    fn focus_offset(&mut self, delta: isize) -> bool {
        let fields = UserField::EDITABLE;
        let len = fields.len() as isize;
        let current = fields
            .iter()
            .position(|f| *f == self.focused)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus_field(fields[next])
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let mut value = self.focused_value().to_string();
        let at = byte_index(&value, self.cursor);
        value.insert(at, ch);
        self.cursor += 1;
        self.edit_field(self.focused, value)
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        let mut changed = false;
        for ch in text.chars().filter(|c| !c.is_control()) {
            changed |= self.insert_char(ch);
        }
        changed
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut value = self.focused_value().to_string();
        let at = byte_index(&value, self.cursor - 1);
        value.remove(at);
        self.cursor -= 1;
        self.edit_field(self.focused, value)
    }

    pub fn delete_forward(&mut self) -> bool {
        let mut value = self.focused_value().to_string();
        if self.cursor >= value.chars().count() {
            return false;
        }
        let at = byte_index(&value, self.cursor);
        value.remove(at);
        self.edit_field(self.focused, value)
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.cursor >= self.focused_len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        let changed = self.cursor != 0;
        self.cursor = 0;
        changed
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.focused_len();
        let changed = self.cursor != end;
        self.cursor = end;
        changed
    }

    fn focused_value(&self) -> &str {
        self.draft.get(self.focused)
    }

    fn focused_len(&self) -> usize {
        self.focused_value().chars().count()
    }

    fn clamp_cursor_to_end(&mut self) {
        self.cursor = self.focused_len();
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/form.rs"]
mod tests;
