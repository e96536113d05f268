//! TUI application state.

use crate::core::history::History;
use crate::core::{format_number, Engine, Key};
use crate::tui::keypad::Keypad;

/// Calculator application: engine, on-screen keypad, history, quit flag.
///
/// Routes logical key presses to the engine, keeps the keypad highlight
/// in sync with input, and records each completed `=` evaluation.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    keypad: Keypad,
    history: History,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new app in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            keypad: Keypad::new(),
            history: History::new(),
            should_quit: false,
        }
    }

    /// Forwards a logical key press to the engine.
    ///
    /// Highlights the matching keypad button and, when an equals press
    /// completes an evaluation, records "a op b = result" in the history.
    pub fn press(&mut self, key: Key) {
        self.keypad.highlight_key(key);

        let expression = if key == Key::Equals {
            self.engine.pending().map(|(a, op)| {
                format!(
                    "{} {} {}",
                    format_number(a),
                    op.symbol(),
                    self.operand_display()
                )
            })
        } else {
            None
        };

        self.engine.press(key);

        if let Some(expression) = expression {
            if !self.engine.is_error() {
                let result = self.engine.display().to_string();
                self.history.record(&expression, &result);
            }
        }
    }

    /// The current display value, formatted as a number where possible.
    /// Mid-entry displays like "3." are normalized for history lines.
    fn operand_display(&self) -> String {
        self.engine
            .display()
            .parse()
            .map_or_else(|_| self.engine.display().to_string(), format_number)
    }

    /// The string to show on the display panel
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// True while the division-by-zero latch is set
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.engine.is_error()
    }

    /// The calculator engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The on-screen keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Releases the keypad highlight (called after the highlight interval)
    pub fn release_keys(&mut self) {
        self.keypad.release_all();
    }

    /// The calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Clears the calculator and the history
    pub fn clear_all(&mut self) {
        self.engine.clear();
        self.history.clear();
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
