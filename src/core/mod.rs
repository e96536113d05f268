//! Core calculator engine: operations, state machine, formatting, history.
//!
//! Everything in this module is pure, synchronous computation with no
//! presentation concerns. Front-ends feed logical [`Key`] presses in and
//! read the display string back out.

pub mod engine;
pub mod format;
pub mod history;
mod ops;

pub use engine::{Engine, Key, State};
pub use format::format_number;
pub use ops::Operation;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// The fixed display message shown while the error latch is set.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: Division by Zero";

/// Calculator error types
///
/// A failed evaluation is absorbed into engine state (the display shows
/// [`DIVISION_BY_ZERO_MESSAGE`] and the error latch is set); it never
/// escapes to the presentation layer as a control-flow error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
}
