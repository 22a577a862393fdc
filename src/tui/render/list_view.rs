use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

/// Render the value-sorted coefficient list, scrolled to keep the cursor visible
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = area.height as usize;
    app.ensure_cursor_visible(rows);

    let lines: Vec<Line> = app
        .order
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(rows)
        .map(|(i, key)| render_entry(app, key, i == app.cursor))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// One `key value` row: key padded/truncated to the key column, value
/// right-aligned in the value column
fn render_entry<'a>(app: &App, key: &str, is_cursor: bool) -> Line<'a> {
    let value = app.coefficients.get(key).unwrap_or(0);
    let text = format!(
        "{} {:>width$}",
        fit_to_width(key, app.key_width),
        value,
        width = app.value_width
    );

    let fg = if app.is_modified(key) {
        app.theme.modified
    } else {
        app.theme.text
    };
    let mut style = Style::default().fg(fg);
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(Span::styled(text, style))
}
