use super::super::Workbench;
use crate::kernel::{DialogChoice, ToastLevel};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;
const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 8;

impl Workbench {
    pub(super) fn render_toast(&self, frame: &mut Frame, area: Rect) {
        let Some(toast) = self.store.state().ui.toast.as_ref() else {
            return;
        };

        let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
        let height = TOAST_HEIGHT.min(area.height.saturating_sub(2));
        if width < 12 || height < 3 {
            return;
        }

        // Bottom-right, above the status line.
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width, height);

        let color = match toast.level {
            ToastLevel::Success => self.theme.success_fg,
            ToastLevel::Error => self.theme.error_fg,
        };

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let lines = vec![
            Line::from(Span::styled(
                toast.title.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(toast.description.as_str()),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    pub(super) fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.confirm_dialog;
        if !dialog.visible {
            return;
        }

        let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
        let height = DIALOG_HEIGHT.min(area.height.saturating_sub(2));
        if width < 20 || height < 5 {
            return;
        }

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, dialog_area);

        let base_style = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_fg);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.warning_fg))
            .title(Span::styled(
                format!(" {} ", dialog.title),
                Style::default()
                    .fg(self.theme.warning_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(base_style);
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let button = |label: &'static str, choice: DialogChoice| {
            let style = if dialog.selected == choice {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted_fg)
            };
            Span::styled(label, style)
        };

        let lines = vec![
            Line::from(dialog.message.as_str()),
            Line::raw(""),
            Line::from(vec![
                button("[ Stay ]", DialogChoice::Stay),
                Span::raw("   "),
                button("[ Leave ]", DialogChoice::Leave),
            ])
            .alignment(Alignment::Center),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .style(base_style)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }
}
