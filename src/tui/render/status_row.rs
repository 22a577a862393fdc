use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "{} coefficients  {} modified",
        app.order.len(),
        app.modified_count()
    );
    let line = Line::from(Span::styled(text, Style::default().fg(app.theme.dim)));
    frame.render_widget(Paragraph::new(line), area);
}
