pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::App;

/// Key help shown on the first row
pub const HEADER: &str = "tweak-urgency  \u{2191}\u{2193} move  \u{2190}\u{2192} change  q quit";

/// Header, coefficient list and status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Layout: header + blank (2 rows) | coefficient list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        HEADER,
        Style::default()
            .fg(app.theme.header)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
