//! The terminal event loop

use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Instant;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::traits::{Clock, KeyValueStorage};
use crate::tracker::Tracker;
use crate::view::{self, Outcome, ViewState};


/// Owns the terminal while the UI is running, and gives it back in its original state when dropped
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn acquire() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            log::warn!("Unable to leave raw mode: {}", err);
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen) {
            log::warn!("Unable to leave the alternate screen: {}", err);
        }
        let _ = self.terminal.show_cursor();
    }
}


/// Run the UI until the user quits
pub fn run<S, C>(mut tracker: Tracker<S, C>) -> Result<(), Box<dyn Error>>
where
    S: KeyValueStorage,
    C: Clock,
{
    let mut guard = TerminalGuard::acquire()?;
    let mut view_state = ViewState::new();

    loop {
        guard.terminal.draw(|f| view::draw(f, &tracker, &mut view_state))?;

        // Wake up for the next input event, or for the next clock refresh, whichever comes first
        let timeout = tracker.clock_state().time_until_refresh(Instant::now());
        if event::poll(timeout)? {
            let outcome = match event::read()? {
                Event::Key(key) => view_state.handle_key(&mut tracker, key),
                Event::Mouse(mouse) => view_state.handle_mouse(&mut tracker, mouse),
                _ => Outcome::Continue,
            };
            if outcome == Outcome::Quit {
                break;
            }
        }
        tracker.tick(Instant::now());
    }

    log::info!("Exiting with {} tasks", tracker.tasks().len());
    Ok(())
}
