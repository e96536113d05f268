//! Terminal front-end for the calculator.
//!
//! Presentation layer only: translates keyboard and mouse events into
//! logical [`Key`](crate::core::Key) presses and renders the engine's
//! display string. All arithmetic lives in [`crate::core`].

mod app;
mod input;
mod keypad;
mod ui;

pub use app::App;
pub use input::{InputAction, InputHandler};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{areas, render, CalculatorUi, UiAreas};
