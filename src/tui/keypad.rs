//! On-screen keypad for the calculator.
//!
//! A 4x5 button grid mirroring the classic keypad layout, with mouse hit
//! testing and press highlighting when the matching hardware key fires.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Key, Operation};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text shown on the button
    pub label: String,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// The logical key this button sends to the engine
    pub key: Key,
}

impl KeypadButton {
    /// Creates a button for a logical key with its display label
    #[must_use]
    pub fn new(label: &str, key: Key) -> Self {
        Self {
            label: label.to_string(),
            pressed: false,
            key,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::new(&d.to_string(), Key::Digit(d))
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad - a 4x5 grid with one blank slot:
/// ```text
/// [AC] [±] [%] [÷]
/// [ 7] [8] [9] [×]
/// [ 4] [5] [6] [−]
/// [ 1] [2] [3] [+]
/// [ 0] [.] [=] [ ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    /// Slots in row-major order; the bottom-right slot is empty
    slots: Vec<Option<KeypadButton>>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let slots = vec![
            // Row 1: AC ± % ÷
            Some(KeypadButton::new("AC", Key::Clear)),
            Some(KeypadButton::new("±", Key::ToggleSign)),
            Some(KeypadButton::new("%", Key::Percent)),
            Some(KeypadButton::new("÷", Key::Operator(Operation::Divide))),
            // Row 2: 7 8 9 ×
            Some(KeypadButton::digit(7)),
            Some(KeypadButton::digit(8)),
            Some(KeypadButton::digit(9)),
            Some(KeypadButton::new("×", Key::Operator(Operation::Multiply))),
            // Row 3: 4 5 6 −
            Some(KeypadButton::digit(4)),
            Some(KeypadButton::digit(5)),
            Some(KeypadButton::digit(6)),
            Some(KeypadButton::new("−", Key::Operator(Operation::Subtract))),
            // Row 4: 1 2 3 +
            Some(KeypadButton::digit(1)),
            Some(KeypadButton::digit(2)),
            Some(KeypadButton::digit(3)),
            Some(KeypadButton::new("+", Key::Operator(Operation::Add))),
            // Row 5: 0 . =
            Some(KeypadButton::digit(0)),
            Some(KeypadButton::new(".", Key::Decimal)),
            Some(KeypadButton::new("=", Key::Equals)),
            None,
        ];

        Self {
            slots,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons (blank slots excluded)
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets the button in a slot, if the slot is occupied
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.get_button(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the slot index of the button sending a given key
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|b| b.key == key))
    }

    /// Sets the button in a slot as pressed
    pub fn press_button(&mut self, index: usize) {
        if let Some(Some(btn)) = self.slots.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in self.slots.iter_mut().flatten() {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for a logical key, releasing all others
    pub fn highlight_key(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_button(key) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over the occupied slots
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.slots.iter().flatten()
    }

    /// Returns an iterator over occupied slots with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.slots.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref().map(|btn| ((i / self.cols, i % self.cols), btn))
        })
    }

    /// Converts a click position inside the rendered area to a logical key
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The border occupies one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            self.get_button(row * self.cols + col).map(|b| b.key)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.key {
            Key::Digit(_) | Key::Decimal => Style::default().fg(Color::White),
            Key::Operator(_) => Style::default().fg(Color::Yellow),
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Red),
            Key::Percent | Key::ToggleSign => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);
            let style = Self::button_style(btn);

            if btn_width >= 4 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(label.chars().count() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
