use super::Workbench;
use crate::kernel::FocusTarget;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

mod counter;
mod form;
mod overlays;
mod status;
mod viewer;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_cursor = None;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(super::FORM_HEIGHT),
            Constraint::Length(super::STATUS_HEIGHT),
        ])
        .split(area);

    let header_area = chunks[0];
    let top_area = chunks[1];
    let form_area = chunks[2];
    let status_area = chunks[3];

    workbench.render_header(frame, header_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(super::COUNTER_WIDTH_PERCENT),
            Constraint::Percentage(100 - super::COUNTER_WIDTH_PERCENT),
        ])
        .split(top_area);

    workbench.render_counter(frame, columns[0]);
    workbench.render_viewer(frame, columns[1]);
    workbench.render_form(frame, form_area);
    workbench.render_status(frame, status_area);

    workbench.render_toast(frame, area);
    workbench.render_confirm_dialog(frame, area);

    if let Some((x, y)) = workbench.last_cursor {
        frame.set_cursor_position((x, y));
    }
}

impl Workbench {
    /// Bordered panel whose border colour follows focus. Returns the inner area.
    fn render_panel(&self, frame: &mut Frame, area: Rect, target: FocusTarget) -> Rect {
        let focused = self.store.state().ui.focus == target;
        let border = if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", target.label()));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}
