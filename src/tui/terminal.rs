use std::io::{self, Stdout};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

type PanicHook = Arc<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Exclusive hold on the terminal for one editing session.
///
/// Entering switches to raw mode on the alternate screen with the cursor
/// hidden. Dropping the session restores the previous mode, whether the
/// session ended normally, returned an error, or unwound from a panic.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after `Drop::drop` has restored the terminal
    _panic_hook: PanicHookGuard,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore_terminal();
            return Err(e);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                restore_terminal();
                return Err(e);
            }
        };

        // Restore before the panic message is printed, or it lands on the
        // alternate screen and disappears
        let _panic_hook = PanicHookGuard::install(restore_terminal);

        // From here on Drop handles restoring
        let mut session = TerminalSession {
            terminal,
            _panic_hook,
        };
        session.terminal.clear()?;
        Ok(session)
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Runs `on_panic` ahead of the previously installed panic hook while held,
/// and reinstalls the previous hook alone when dropped.
struct PanicHookGuard {
    previous: PanicHook,
}

impl PanicHookGuard {
    fn install(on_panic: impl Fn() + Send + Sync + 'static) -> Self {
        let previous: PanicHook = Arc::from(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |info| {
            on_panic();
            chained(info);
        }));
        PanicHookGuard { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // The hook can't be swapped from a panicking thread
        if std::thread::panicking() {
            return;
        }
        let _ = panic::take_hook();
        let previous = Arc::clone(&self.previous);
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}
