//! Read-only mirror of the stored record, rendered as a small rich-text document.
//!
//! Formatting and typing only touch the rendered document. Nothing here writes back to
//! storage, and every reload from storage discards local edits.

use super::user_data::{decode_stored, UserData, UserField};

pub const DOCUMENT_TITLE: &str = "User Information";
pub const PLACEHOLDER_TEXT: &str =
    "No user data available. Please save user data in the form first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Strike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
}

impl Marks {
    pub const BOLD: Marks = Marks {
        bold: true,
        italic: false,
        strike: false,
    };

    pub fn has(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Strike => self.strike,
        }
    }

    fn set(&mut self, mark: Mark, on: bool) {
        match mark {
            Mark::Bold => self.bold = on,
            Mark::Italic => self.italic = on,
            Mark::Strike => self.strike = on,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub marks: Marks,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::default(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::BOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    BulletItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

impl Block {
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn placeholder() -> Self {
        Self {
            blocks: vec![Block {
                kind: BlockKind::Paragraph,
                spans: vec![Span::plain(PLACEHOLDER_TEXT)],
            }],
        }
    }

    pub fn from_user_data(data: &UserData) -> Self {
        let mut blocks = Vec::with_capacity(UserField::ALL.len() + 1);
        blocks.push(Block {
            kind: BlockKind::Heading,
            spans: vec![Span::plain(DOCUMENT_TITLE)],
        });
        for field in UserField::ALL {
            blocks.push(Block {
                kind: BlockKind::Paragraph,
                spans: vec![
                    Span::bold(format!("{}:", field.label())),
                    Span::plain(format!(" {}", data.get(field))),
                ],
            });
        }
        Self { blocks }
    }

    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    record: Option<UserData>,
    document: Document,
    selected: usize,
    /// Number of times the document was rebuilt from storage.
    reloads: u64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            record: None,
            document: Document::placeholder(),
            selected: 0,
            reloads: 0,
        }
    }

    /// Rebuilds the document from a stored value. Malformed or absent data shows the placeholder.
    pub fn load(&mut self, raw: Option<&str>) {
        self.record = decode_stored(raw);
        self.document = match &self.record {
            Some(data) => Document::from_user_data(data),
            None => Document::placeholder(),
        };
        self.selected = self.selected.min(self.document.blocks.len().saturating_sub(1));
        self.reloads += 1;
    }

    pub fn record(&self) -> Option<&UserData> {
        self.record.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.record.is_some()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn reloads(&self) -> u64 {
        self.reloads
    }

    pub fn select_prev(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }

    pub fn select_next(&mut self) -> bool {
        if self.selected + 1 >= self.document.blocks.len() {
            return false;
        }
        self.selected += 1;
        true
    }

    /// Whether every span of the selected block carries `mark`.
    pub fn is_active(&self, mark: Mark) -> bool {
        self.selected_block()
            .is_some_and(|b| !b.spans.is_empty() && b.spans.iter().all(|s| s.marks.has(mark)))
    }

    pub fn is_bullet_list_active(&self) -> bool {
        self.selected_block()
            .is_some_and(|b| b.kind == BlockKind::BulletItem)
    }

    pub fn toggle_mark(&mut self, mark: Mark) -> bool {
        let on = !self.is_active(mark);
        let Some(block) = self.document.blocks.get_mut(self.selected) else {
            return false;
        };
        if block.spans.is_empty() {
            return false;
        }
        for span in &mut block.spans {
            span.marks.set(mark, on);
        }
        true
    }

    pub fn toggle_bullet_list(&mut self) -> bool {
        let Some(block) = self.document.blocks.get_mut(self.selected) else {
            return false;
        };
        block.kind = match block.kind {
            BlockKind::BulletItem => BlockKind::Paragraph,
            BlockKind::Heading | BlockKind::Paragraph => BlockKind::BulletItem,
        };
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let Some(block) = self.document.blocks.get_mut(self.selected) else {
            return false;
        };
        match block.spans.last_mut() {
            Some(span) => span.text.push(ch),
            None => block.spans.push(Span::plain(ch.to_string())),
        }
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        let Some(block) = self.document.blocks.get_mut(self.selected) else {
            return false;
        };
        while let Some(span) = block.spans.last_mut() {
            if span.text.pop().is_some() {
                if span.text.is_empty() {
                    block.spans.pop();
                }
                return true;
            }
            block.spans.pop();
        }
        false
    }

    fn selected_block(&self) -> Option<&Block> {
        self.document.blocks.get(self.selected)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/viewer.rs"]
mod tests;
