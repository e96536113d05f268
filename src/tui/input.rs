//! Hardware keyboard mapping.
//!
//! Translates raw crossterm key events into the engine's logical key set.
//! The mapping reproduces the reference keypad bindings: digits, `.`,
//! `+ - * /`, `=` and Enter for equals, Backspace/Delete/Esc for AC,
//! `%` for percent, and `_` for sign toggle (no dedicated key exists).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Key, Operation};

/// The result of mapping one keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward a logical key press to the calculator
    Press(Key),
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to input actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => InputAction::Quit,
                _ => InputAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => InputAction::Press(Key::Equals),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Esc => InputAction::Press(Key::Clear),
            _ => InputAction::None,
        }
    }

    /// Maps a printable character to an action
    #[must_use]
    pub fn map_char(c: char) -> InputAction {
        match c {
            '0'..='9' => InputAction::Press(Key::Digit(c as u8 - b'0')),
            '.' => InputAction::Press(Key::Decimal),
            '+' => InputAction::Press(Key::Operator(Operation::Add)),
            '-' => InputAction::Press(Key::Operator(Operation::Subtract)),
            '*' => InputAction::Press(Key::Operator(Operation::Multiply)),
            '/' => InputAction::Press(Key::Operator(Operation::Divide)),
            '=' => InputAction::Press(Key::Equals),
            '%' => InputAction::Press(Key::Percent),
            '_' => InputAction::Press(Key::ToggleSign),
            'q' => InputAction::Quit,
            _ => InputAction::None,
        }
    }
}
