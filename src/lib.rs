//! chaincalc - a keypad calculator with chained-evaluation semantics.
//!
//! The core is a small state machine ([`core::Engine`]) that turns a
//! sequence of logical key presses - digits, operators, equals, clear,
//! sign flip, percent - into a running display string, mirroring how a
//! physical calculator chains operations left to right instead of
//! honoring operator precedence. Division by zero latches an error state
//! that only AC escapes.
//!
//! The engine is presentation-agnostic; the `tui` feature (on by default)
//! adds a ratatui front-end with an on-screen keypad, mouse support, and
//! a hardware-keyboard mapping.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.input_digit(5);
//! engine.input_operator(Operation::Add);
//! engine.input_digit(3);
//! engine.input_operator(Operation::Multiply);
//! engine.input_digit(2);
//! engine.input_equals();
//!
//! // (5 + 3) * 2, not 5 + (3 * 2)
//! assert_eq!(engine.display(), "16");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        format_number, CalcError, CalcResult, Engine, Key, Operation, State,
        DIVISION_BY_ZERO_MESSAGE,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::{App, InputAction, InputHandler, Keypad};
}
