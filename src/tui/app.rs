use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::model::{CoefficientSet, UiConfig};

use super::input;
use super::render;
use super::terminal::TerminalSession;
use super::theme::Theme;

/// How the session was ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    /// Normal exit; the values are kept
    Quit,
    /// Interrupted; the values are discarded
    Abort,
}

/// What a finished session hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished(CoefficientSet),
    Aborted,
}

/// Editor state for one session
pub struct App {
    /// Current values, mutated by Left/Right
    pub coefficients: CoefficientSet,
    /// Values at session start, for the modified markers
    pub initial: CoefficientSet,
    /// Keys in display order (descending value)
    pub order: Vec<String>,
    /// Index into `order` of the selected entry
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub exit: Option<ExitKind>,
    pub theme: Theme,
    pub key_width: usize,
    pub value_width: usize,
}

impl App {
    pub fn new(coefficients: CoefficientSet, ui: &UiConfig) -> Self {
        let order = coefficients.ordered_keys();
        App {
            initial: coefficients.clone(),
            coefficients,
            order,
            cursor: 0,
            scroll_offset: 0,
            exit: None,
            theme: Theme::from_config(ui),
            key_width: ui.key_width,
            value_width: ui.value_width,
        }
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.order.get(self.cursor).map(String::as_str)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
        }
    }

    /// Change the selected value by `delta`
    pub fn adjust_selected(&mut self, delta: i64) {
        if let Some(key) = self.order.get(self.cursor) {
            self.coefficients.adjust(key, delta);
        }
    }

    /// Recompute the display order and move the cursor to wherever the
    /// selected key ended up.
    pub fn resort(&mut self) {
        let selected = self.selected_key().map(str::to_string);
        self.order = self.coefficients.ordered_keys();
        self.cursor = selected
            .and_then(|key| self.order.iter().position(|k| *k == key))
            .unwrap_or(0);
    }

    /// Adjust the scroll offset so the cursor is inside a window of `rows`
    pub fn ensure_cursor_visible(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + rows {
            self.scroll_offset = self.cursor + 1 - rows;
        }
        // Don't leave empty rows at the bottom after the list shrank
        let max_offset = self.order.len().saturating_sub(rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    pub fn is_modified(&self, key: &str) -> bool {
        self.coefficients.get(key) != self.initial.get(key)
    }

    pub fn modified_count(&self) -> usize {
        self.coefficients.diff_count(&self.initial)
    }

    pub fn should_quit(&self) -> bool {
        self.exit.is_some()
    }

    pub fn into_outcome(self) -> SessionOutcome {
        match self.exit {
            Some(ExitKind::Abort) => SessionOutcome::Aborted,
            _ => SessionOutcome::Finished(self.coefficients),
        }
    }
}

/// Run the interactive editor on the real terminal until the user quits
pub fn run_session(coefficients: CoefficientSet, ui: &UiConfig) -> io::Result<SessionOutcome> {
    let mut app = App::new(coefficients, ui);

    let mut session = TerminalSession::enter()?;
    let result = run_event_loop(session.terminal(), &mut app, event::read);
    drop(session);
    result?;

    tracing::debug!(
        modified = app.modified_count(),
        aborted = app.exit == Some(ExitKind::Abort),
        "editing session ended"
    );
    Ok(app.into_outcome())
}

/// Draw, block for the next event, handle it; repeat until the app asks to quit
pub fn run_event_loop<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut next_event: F,
) -> io::Result<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if let Event::Key(key) = next_event()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
