use super::super::Workbench;
use crate::kernel::{FocusTarget, UserField};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 10;
pub(crate) const UNSAVED_CHANGES_TEXT: &str = "You have unsaved changes";

impl Workbench {
    pub(super) fn render_form(&mut self, frame: &mut Frame, area: Rect) {
        let inner = self.render_panel(frame, area, FocusTarget::Form);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let state = self.store.state();
        let form = &state.form;
        let draft = form.draft();
        let has_focus = state.ui.focus == FocusTarget::Form && !state.ui.confirm_dialog.visible;

        let mut lines = Vec::with_capacity(UserField::ALL.len() + 3);
        let mut cursor = None;
        for (row, field) in UserField::ALL.into_iter().enumerate() {
            let focused = has_focus && form.focused() == field;
            let marker = if field.is_required() { "*" } else { " " };
            let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH - 2);
            let label_style = if focused {
                Style::default()
                    .fg(self.theme.focus_border)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let value = draft.get(field);
            let value_span = if !field.is_editable() {
                Span::styled(value.to_string(), Style::default().fg(self.theme.muted_fg))
            } else if value.is_empty() {
                Span::styled(
                    field.placeholder(),
                    Style::default()
                        .fg(self.theme.muted_fg)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::raw(value.to_string())
            };

            lines.push(Line::from(vec![
                Span::styled(label, label_style),
                Span::styled(marker, Style::default().fg(self.theme.required_fg)),
                Span::raw(" "),
                value_span,
            ]));

            if focused {
                let before: String = value.chars().take(form.cursor()).collect();
                let x = inner.x as usize + LABEL_WIDTH + before.width();
                let y = inner.y as usize + row;
                if x < (inner.x + inner.width) as usize && y < (inner.y + inner.height) as usize {
                    cursor = Some((x as u16, y as u16));
                }
            }
        }

        lines.push(Line::raw(""));
        if form.is_modified() {
            lines.push(Line::from(Span::styled(
                UNSAVED_CHANGES_TEXT,
                Style::default().fg(self.theme.warning_fg),
            )));
        } else {
            lines.push(Line::raw(""));
        }

        let save_style = if form.can_save() {
            Style::default()
                .fg(self.theme.accent_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.theme.muted_fg)
                .add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(vec![
            Span::styled("[ Save (Ctrl+S) ]", save_style),
            Span::raw("  "),
            Span::styled("[ Reset (Ctrl+R) ]", Style::default()),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
        self.last_cursor = cursor;
    }
}
