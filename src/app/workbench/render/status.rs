use super::super::Workbench;
use crate::kernel::{DraftStatus, FocusTarget};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const PANELS: [FocusTarget; 3] = [FocusTarget::Counter, FocusTarget::Viewer, FocusTarget::Form];

impl Workbench {
    pub(super) fn render_header(&self, frame: &mut Frame, area: Rect) {
        let focus = self.store.state().ui.focus;
        let mut spans = vec![Span::styled(
            " userdesk ",
            Style::default()
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )];
        for panel in PANELS {
            let style = if panel == focus {
                Style::default()
                    .fg(self.theme.focus_border)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.theme.muted_fg)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(panel.label(), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let draft = match state.form.status() {
            DraftStatus::Modified => "modified",
            DraftStatus::Unmodified => "saved",
        };
        let live = if self.is_subscribed() { "live" } else { "manual" };
        let context = self.context_id().to_string();
        let context = context.get(..8).unwrap_or(&context);

        let text = format!(
            "{} | draft: {} | ctx {} ({}) | Tab switch  Ctrl+S save  Ctrl+Q quit",
            state.ui.focus.label(),
            draft,
            context,
            live,
        );
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(self.theme.muted_fg)),
            area,
        );
    }
}
