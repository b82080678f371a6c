use super::super::Workbench;
use crate::kernel::FocusTarget;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

impl Workbench {
    pub(super) fn render_counter(&self, frame: &mut Frame, area: Rect) {
        let inner = self.render_panel(frame, area, FocusTarget::Counter);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let counter = &self.store.state().counter;
        let intensity = counter.intensity();
        for row in 0..inner.height {
            let Some(bg) = self.theme.counter_gradient(intensity, row, inner.height) else {
                break;
            };
            let row_area = Rect::new(inner.x, inner.y + row, inner.width, 1);
            frame.render_widget(Block::default().style(Style::default().bg(bg)), row_area);
        }

        let enabled = Style::default().fg(self.theme.counter_fg);
        let disabled = Style::default()
            .fg(self.theme.muted_fg)
            .add_modifier(Modifier::DIM);
        let decrement_style = if counter.can_decrement() {
            enabled
        } else {
            disabled
        };

        let mut lines = Vec::with_capacity(5);
        let pad = inner.height.saturating_sub(3) / 2;
        for _ in 0..pad {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            format!("Count: {}", counter.count()),
            Style::default()
                .fg(self.theme.counter_fg)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("[+] Increment", enabled),
            Span::raw("  "),
            Span::styled("[-] Decrement", decrement_style),
            Span::raw("  "),
            Span::styled("[0] Reset", enabled),
        ]));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
