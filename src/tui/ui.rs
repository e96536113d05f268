//! TUI rendering: display panel, keypad, history, help.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::App;
use super::keypad::KeypadWidget;

/// Keyboard shortcuts shown in the help panel
const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "enter number"),
    ("+-*/", "operator"),
    ("= Enter", "evaluate"),
    ("%", "percent"),
    ("_", "toggle sign"),
    ("Esc Bksp", "clear (AC)"),
    ("q", "quit"),
];

/// The screen regions of the calculator UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    /// The display panel
    pub display: Rect,
    /// The keypad grid (hit-test mouse clicks against this)
    pub keypad: Rect,
    /// The history sidebar
    pub history: Rect,
    /// The help panel
    pub help: Rect,
}

/// Splits the frame into the calculator's screen regions.
///
/// Shared between rendering and mouse hit testing so clicks always land
/// on the same grid the user sees.
#[must_use]
pub fn areas(area: Rect) -> UiAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(26), Constraint::Length(30)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(12)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(9)])
        .split(columns[1]);

    UiAreas {
        display: left[0],
        keypad: left[1],
        history: right[0],
        help: right[1],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a App,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        paragraph.render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .history()
            .iter_rev()
            .take(usize::from(area.height.saturating_sub(2)))
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.clone(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.result.clone(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" History (newest first) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        list.render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>8}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        list.render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" chaincalc ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let areas = areas(area);
        self.render_display(areas.display, buf);
        KeypadWidget::new(self.app.keypad()).render(areas.keypad, buf);
        self.render_history(areas.history, buf);
        self.render_help(areas.help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Key, Operation};

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        CalculatorUi::new(app).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_areas_cover_regions() {
        let ui = areas(Rect::new(0, 0, 80, 24));
        assert!(ui.display.height >= 3);
        assert!(ui.keypad.width >= 22);
        assert!(ui.history.width > 0);
        assert!(ui.help.height > 0);
    }

    #[test]
    fn test_render_initial_state() {
        let app = App::new();
        let content = render_to_string(&app, 80, 24);
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("History"));
        assert!(content.contains("[AC]"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_shows_result() {
        let mut app = App::new();
        for key in [
            Key::Digit(6),
            Key::Operator(Operation::Multiply),
            Key::Digit(7),
            Key::Equals,
        ] {
            app.press(key);
        }
        let content = render_to_string(&app, 80, 24);
        assert!(content.contains("42"));
    }

    #[test]
    fn test_render_shows_error_message() {
        let mut app = App::new();
        for key in [
            Key::Digit(1),
            Key::Operator(Operation::Divide),
            Key::Digit(0),
            Key::Equals,
        ] {
            app.press(key);
        }
        let content = render_to_string(&app, 80, 24);
        assert!(content.contains("Error: Division by Zero"));
    }

    #[test]
    fn test_render_history_line() {
        let mut app = App::new();
        for key in [
            Key::Digit(2),
            Key::Operator(Operation::Add),
            Key::Digit(2),
            Key::Equals,
        ] {
            app.press(key);
        }
        let content = render_to_string(&app, 80, 24);
        assert!(content.contains("2 + 2"));
    }

    #[test]
    fn test_render_tiny_frame_does_not_panic() {
        let app = App::new();
        let _ = render_to_string(&app, 10, 5);
    }
}
