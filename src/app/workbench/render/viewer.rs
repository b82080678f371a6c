use super::super::Workbench;
use crate::kernel::viewer::{BlockKind, Marks};
use crate::kernel::{FocusTarget, Mark};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const TOOLBAR: [(&str, Option<Mark>); 4] = [
    (" B ", Some(Mark::Bold)),
    (" I ", Some(Mark::Italic)),
    (" S ", Some(Mark::Strike)),
    (" • List ", None),
];

fn mark_modifiers(marks: Marks) -> Modifier {
    let mut modifier = Modifier::empty();
    if marks.bold {
        modifier |= Modifier::BOLD;
    }
    if marks.italic {
        modifier |= Modifier::ITALIC;
    }
    if marks.strike {
        modifier |= Modifier::CROSSED_OUT;
    }
    modifier
}

impl Workbench {
    pub(super) fn render_viewer(&self, frame: &mut Frame, area: Rect) {
        let inner = self.render_panel(frame, area, FocusTarget::Viewer);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let state = self.store.state();
        let viewer = &state.viewer;
        let focused = state.ui.focus == FocusTarget::Viewer;

        let mut toolbar = Vec::with_capacity(TOOLBAR.len() * 2 + 1);
        for (label, mark) in TOOLBAR {
            let active = match mark {
                Some(mark) => viewer.is_active(mark),
                None => viewer.is_bullet_list_active(),
            };
            let style = if active {
                Style::default()
                    .fg(self.theme.dialog_fg)
                    .bg(self.theme.accent_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted_fg)
            };
            toolbar.push(Span::styled(label, style));
            toolbar.push(Span::raw(" "));
        }
        toolbar.push(Span::styled(
            "Alt+B/I/S/L  F5 refresh",
            Style::default().fg(self.theme.muted_fg),
        ));

        let mut lines = Vec::with_capacity(viewer.document().blocks.len() + 2);
        lines.push(Line::from(toolbar));
        lines.push(Line::raw(""));

        let base = if viewer.has_data() {
            Style::default()
        } else {
            Style::default()
                .fg(self.theme.muted_fg)
                .add_modifier(Modifier::ITALIC)
        };
        for (idx, block) in viewer.document().blocks.iter().enumerate() {
            let mut spans = Vec::with_capacity(block.spans.len() + 1);
            let mut block_style = base;
            match block.kind {
                BlockKind::Heading => {
                    block_style = block_style
                        .fg(self.theme.header_fg)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                BlockKind::BulletItem => spans.push(Span::styled("• ", block_style)),
                BlockKind::Paragraph => {}
            }
            for span in &block.spans {
                spans.push(Span::styled(
                    span.text.as_str(),
                    block_style.add_modifier(mark_modifiers(span.marks)),
                ));
            }

            let mut line = Line::from(spans);
            if focused && idx == viewer.selected() {
                line = line.style(Style::default().bg(self.theme.selected_bg));
            }
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
