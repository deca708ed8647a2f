//! Terminal lifecycle and event loops for the two screens.
//!
//! While a generation call is in flight the loop draws one frame with the
//! in-flight status, then awaits the reply before polling again, so a
//! session can never have two overlapping requests.

use crate::chat::ChatApp;
use crate::planner::PlanApp;
use crate::ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use nightingale_interface::TextGenerator;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::info;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep polling for input.
    Continue,
    /// Run the generation pipeline before the next poll.
    Submit,
    /// Tear the terminal down and exit.
    Quit,
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

/// Runs the chat screen until the operator quits.
pub async fn run_chat<D: TextGenerator>(mut app: ChatApp<D>) -> io::Result<()> {
    info!("Starting chat screen");
    let mut terminal = setup_terminal()?;

    let mut continue_running = true;
    while continue_running {
        terminal.draw(|f| ui::draw_chat(f, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key) {
                    Signal::Quit => continue_running = false,
                    Signal::Submit => {
                        app.begin_generating();
                        terminal.draw(|f| ui::draw_chat(f, &app))?;
                        app.submit().await;
                    }
                    Signal::Continue => {}
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    info!("Chat screen finished");
    Ok(())
}

/// Runs the planner screen until the operator quits.
pub async fn run_plan<D: TextGenerator>(mut app: PlanApp<D>) -> io::Result<()> {
    info!("Starting planner screen");
    let mut terminal = setup_terminal()?;

    let mut continue_running = true;
    while continue_running {
        terminal.draw(|f| ui::draw_planner(f, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key) {
                    Signal::Quit => continue_running = false,
                    Signal::Submit => {
                        app.begin_generating();
                        terminal.draw(|f| ui::draw_planner(f, &app))?;
                        app.generate().await;
                    }
                    Signal::Continue => {}
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    info!("Planner screen finished");
    Ok(())
}
