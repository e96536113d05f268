//! Terminal calculator binary.
//!
//! Run with: cargo run

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use chaincalc::tui::{self, App, InputAction, InputHandler};

/// How long a pressed button stays highlighted without further input
const HIGHLIGHT_INTERVAL: Duration = Duration::from_millis(150);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut app = App::new();
    let handler = InputHandler::new();

    loop {
        terminal.draw(|frame| tui::render(&app, frame))?;

        if !event::poll(HIGHLIGHT_INTERVAL)? {
            app.release_keys();
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handler.handle_key(key) {
                    InputAction::Press(logical) => app.press(logical),
                    InputAction::Quit => app.quit(),
                    InputAction::None => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let areas = tui::areas(terminal.get_frame().area());
                if let Some(logical) =
                    app.keypad()
                        .hit_test(areas.keypad, mouse.column, mouse.row)
                {
                    app.press(logical);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
