//! The calculator state machine.
//!
//! Chained-calculator semantics: every operator press immediately
//! evaluates any pending operation against the freshly entered operand,
//! left to right, with no precedence. `5 + 3 × 2` is `(5 + 3) × 2 = 16`.
//!
//! The machine is a pure transition function ([`State::apply`]) plus a
//! thin stateful wrapper ([`Engine`]). Division by zero latches the
//! [`State::Error`] variant, in which every key except [`Key::Clear`] is
//! a silent no-op.

use crate::core::{format_number, Operation, DIVISION_BY_ZERO_MESSAGE};

/// A logical key press - the engine's entire input alphabet.
///
/// Front-ends translate raw events (on-screen buttons, keyboard scan
/// codes) into these before calling the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Divide the display by 100
    Percent,
    /// Negate the display
    ToggleSign,
    /// Reset to the initial state (AC)
    Clear,
}

/// Calculator state as a tagged variant.
///
/// `Entry` carries the live editing state; `Error` is the division-by-zero
/// latch. Modeling the latch as a variant means no per-operation error
/// flag checks - the match in [`State::apply`] handles it once.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    /// Building or showing a number
    Entry {
        /// The display string; parseable as a finite f64 by construction
        display: String,
        /// Left operand and operator awaiting a right operand
        pending: Option<(f64, Operation)>,
        /// When set, the next digit starts a fresh display
        reset_on_next_digit: bool,
    },
    /// Division by zero occurred; only [`Key::Clear`] leaves this state
    Error {
        /// The fixed message shown in place of a number
        message: String,
    },
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}

impl State {
    /// The state at construction and after AC.
    #[must_use]
    pub fn initial() -> Self {
        Self::Entry {
            display: "0".to_string(),
            pending: None,
            reset_on_next_digit: false,
        }
    }

    /// The division-by-zero latch state.
    #[must_use]
    fn error() -> Self {
        Self::Error {
            message: DIVISION_BY_ZERO_MESSAGE.to_string(),
        }
    }

    /// Applies a key press, returning the next state.
    ///
    /// Pure transition function: consumes the current state, produces the
    /// next. All calculator semantics live here.
    #[must_use]
    pub fn apply(self, key: Key) -> Self {
        let Self::Entry {
            mut display,
            pending,
            reset_on_next_digit,
        } = self
        else {
            // Error latch: everything but Clear is ignored
            return if key == Key::Clear {
                Self::initial()
            } else {
                self
            };
        };

        match key {
            Key::Clear => Self::initial(),
            Key::Digit(d) if d <= 9 => {
                let digit = char::from(b'0' + d);
                if reset_on_next_digit {
                    display.clear();
                    display.push(digit);
                } else if display == "0" {
                    display = digit.to_string();
                } else {
                    display.push(digit);
                }
                Self::Entry {
                    display,
                    pending,
                    reset_on_next_digit: false,
                }
            }
            Key::Digit(_) => Self::Entry {
                display,
                pending,
                reset_on_next_digit,
            },
            Key::Decimal => {
                // Does not consult reset_on_next_digit: pressing '.' right
                // after an operator appends to the previous result's digits.
                // Reference behavior, preserved as-is. Exponent-form
                // displays take no decimal point; appending one would make
                // the display unparseable.
                if !display.contains('.') && !display.contains('e') {
                    display.push('.');
                }
                Self::Entry {
                    display,
                    pending,
                    reset_on_next_digit,
                }
            }
            Key::Operator(op) => {
                let Some(value) = parse_display(&display) else {
                    return Self::Entry {
                        display,
                        pending,
                        reset_on_next_digit,
                    };
                };
                let left = match pending {
                    Some((a, pending_op)) => match pending_op.apply(a, value) {
                        Ok(result) => {
                            display = format_number(result);
                            result
                        }
                        Err(_) => return Self::error(),
                    },
                    None => value,
                };
                Self::Entry {
                    display,
                    pending: Some((left, op)),
                    reset_on_next_digit: true,
                }
            }
            Key::Equals => {
                let Some((a, op)) = pending else {
                    // "=" with nothing pending leaves the display unchanged
                    return Self::Entry {
                        display,
                        pending,
                        reset_on_next_digit,
                    };
                };
                let Some(value) = parse_display(&display) else {
                    return Self::Entry {
                        display,
                        pending: Some((a, op)),
                        reset_on_next_digit,
                    };
                };
                match op.apply(a, value) {
                    Ok(result) => Self::Entry {
                        display: format_number(result),
                        pending: None,
                        reset_on_next_digit,
                    },
                    Err(_) => Self::error(),
                }
            }
            Key::Percent => {
                let display = match parse_display(&display) {
                    Some(value) => format_number(value / 100.0),
                    None => display,
                };
                Self::Entry {
                    display,
                    pending,
                    reset_on_next_digit,
                }
            }
            Key::ToggleSign => {
                let display = match parse_display(&display) {
                    Some(value) => format_number(-value),
                    None => display,
                };
                Self::Entry {
                    display,
                    pending,
                    reset_on_next_digit,
                }
            }
        }
    }

    /// Returns the display string for this state.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Entry { display, .. } => display,
            Self::Error { message } => message,
        }
    }

    /// Returns true if the error latch is set.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Parses the display string as a number.
///
/// Outside the error state the display is a valid float by construction
/// (all mutations go through validated transitions), including partial
/// entries like `"3."`. Value-consuming keys treat a failed parse as a
/// no-op rather than computing with a substitute value.
fn parse_display(display: &str) -> Option<f64> {
    display.parse().ok()
}

/// Stateful wrapper over the pure [`State`] transition function.
///
/// Owns the current state and exposes one method per logical operation.
/// Single-threaded by design; callers with concurrent input sources must
/// serialize presses themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    state: State,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in the initial state (display "0").
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::initial(),
        }
    }

    /// Applies any logical key press.
    pub fn press(&mut self, key: Key) {
        self.state = std::mem::take(&mut self.state).apply(key);
    }

    /// Enters a digit 0-9. Values above 9 are ignored.
    pub fn input_digit(&mut self, d: u8) {
        self.press(Key::Digit(d));
    }

    /// Enters the decimal point.
    pub fn input_decimal_point(&mut self) {
        self.press(Key::Decimal);
    }

    /// Presses an operator, chaining any pending operation first.
    pub fn input_operator(&mut self, op: Operation) {
        self.press(Key::Operator(op));
    }

    /// Evaluates the pending operation, if any.
    pub fn input_equals(&mut self) {
        self.press(Key::Equals);
    }

    /// Divides the displayed value by 100.
    pub fn input_percent(&mut self) {
        self.press(Key::Percent);
    }

    /// Negates the displayed value.
    pub fn toggle_sign(&mut self) {
        self.press(Key::ToggleSign);
    }

    /// Resets all state. Works even while the error latch is set.
    pub fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// The string to show on the display.
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// True while the division-by-zero latch is set.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// The stored left operand and operator awaiting a right operand.
    #[must_use]
    pub fn pending(&self) -> Option<(f64, Operation)> {
        match &self.state {
            State::Entry { pending, .. } => *pending,
            State::Error { .. } => None,
        }
    }

    /// The current state, for inspection.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation::{Add, Divide, Multiply, Subtract};

    fn press_digits(engine: &mut Engine, digits: &[u8]) {
        for &d in digits {
            engine.input_digit(d);
        }
    }

    // ===== Initial state =====

    #[test]
    fn test_new_engine_shows_zero() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert!(!engine.is_error());
        assert!(engine.pending().is_none());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Engine::default(), Engine::new());
    }

    // ===== Digit entry =====

    #[test]
    fn test_digit_replaces_leading_zero() {
        let mut engine = Engine::new();
        engine.input_digit(0);
        engine.input_digit(7);
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_digits_append() {
        let mut engine = Engine::new();
        press_digits(&mut engine, &[1, 2, 3]);
        assert_eq!(engine.display(), "123");
    }

    #[test]
    fn test_zero_appends_after_nonzero() {
        let mut engine = Engine::new();
        press_digits(&mut engine, &[5, 0]);
        assert_eq!(engine.display(), "50");
    }

    #[test]
    fn test_digit_out_of_range_ignored() {
        let mut engine = Engine::new();
        engine.input_digit(10);
        engine.input_digit(255);
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_digit_after_operator_starts_fresh() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Add);
        assert_eq!(engine.display(), "5");
        engine.input_digit(3);
        assert_eq!(engine.display(), "3");
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_point_appends() {
        let mut engine = Engine::new();
        engine.input_digit(1);
        engine.input_decimal_point();
        engine.input_digit(5);
        assert_eq!(engine.display(), "1.5");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        let mut engine = Engine::new();
        engine.input_digit(1);
        engine.input_decimal_point();
        engine.input_decimal_point();
        engine.input_digit(5);
        assert_eq!(engine.display(), "1.5");
    }

    #[test]
    fn test_decimal_point_on_fresh_display() {
        let mut engine = Engine::new();
        engine.input_decimal_point();
        engine.input_digit(5);
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn test_decimal_point_ignores_reset_flag() {
        // Reference quirk: '.' after an operator appends to the previous
        // result's digits instead of starting fresh.
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Add);
        engine.input_decimal_point();
        assert_eq!(engine.display(), "5.");
    }

    #[test]
    fn test_decimal_point_ignored_on_exponent_display() {
        // Repeated percent drives the display into exponent form; a
        // decimal point must not corrupt it
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_percent();
        engine.input_percent();
        engine.input_percent();
        assert_eq!(engine.display(), "5e-6");
        engine.input_decimal_point();
        assert_eq!(engine.display(), "5e-6");
    }

    #[test]
    fn test_exponent_display_survives_as_operand() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_percent();
        engine.input_percent();
        engine.input_percent();
        engine.input_decimal_point();
        engine.input_operator(Add);
        engine.input_digit(1);
        engine.input_equals();
        assert_eq!(engine.display(), "1.000005");
    }

    #[test]
    fn test_trailing_decimal_parses() {
        let mut engine = Engine::new();
        engine.input_digit(3);
        engine.input_decimal_point();
        engine.input_operator(Add);
        engine.input_digit(2);
        engine.input_equals();
        assert_eq!(engine.display(), "5");
    }

    // ===== Operators and chaining =====

    #[test]
    fn test_simple_addition() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Add);
        engine.input_digit(3);
        engine.input_equals();
        assert_eq!(engine.display(), "8");
        assert!(engine.pending().is_none());
    }

    #[test]
    fn test_chained_evaluation_left_to_right() {
        // (5 + 3) * 2 = 16, not 5 + (3 * 2) = 11
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Add);
        engine.input_digit(3);
        engine.input_operator(Multiply);
        assert_eq!(engine.display(), "8");
        engine.input_digit(2);
        engine.input_equals();
        assert_eq!(engine.display(), "16");
    }

    #[test]
    fn test_operator_stores_pending() {
        let mut engine = Engine::new();
        engine.input_digit(4);
        engine.input_operator(Subtract);
        assert_eq!(engine.pending(), Some((4.0, Subtract)));
    }

    #[test]
    fn test_operator_replacement_chains() {
        // Pressing a second operator without an intervening digit
        // evaluates against the current display (the stored operand).
        let mut engine = Engine::new();
        engine.input_digit(6);
        engine.input_operator(Add);
        engine.input_operator(Multiply);
        assert_eq!(engine.display(), "12"); // 6 + 6
        assert_eq!(engine.pending(), Some((12.0, Multiply)));
    }

    #[test]
    fn test_result_feeds_next_chain() {
        let mut engine = Engine::new();
        engine.input_digit(2);
        engine.input_operator(Multiply);
        engine.input_digit(3);
        engine.input_equals();
        assert_eq!(engine.display(), "6");
        // Result stays on display; a new operator uses it as left operand
        engine.input_operator(Add);
        engine.input_digit(4);
        engine.input_equals();
        assert_eq!(engine.display(), "10");
    }

    // ===== Equals =====

    #[test]
    fn test_equals_with_no_pending_is_noop() {
        let mut engine = Engine::new();
        engine.input_digit(9);
        engine.input_equals();
        assert_eq!(engine.display(), "9");
        assert!(!engine.is_error());
    }

    #[test]
    fn test_equals_on_fresh_engine_is_noop() {
        let mut engine = Engine::new();
        engine.input_equals();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_repeated_equals_does_not_reapply() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Add);
        engine.input_digit(3);
        engine.input_equals();
        engine.input_equals();
        assert_eq!(engine.display(), "8");
    }

    // ===== Percent and sign toggle =====

    #[test]
    fn test_percent_divides_by_hundred() {
        let mut engine = Engine::new();
        press_digits(&mut engine, &[5, 0]);
        engine.input_percent();
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn test_percent_preserves_pending() {
        let mut engine = Engine::new();
        engine.input_digit(4);
        engine.input_operator(Add);
        engine.input_digit(5);
        engine.input_percent();
        assert_eq!(engine.pending(), Some((4.0, Add)));
        engine.input_equals();
        assert_eq!(engine.display(), "4.05");
    }

    #[test]
    fn test_toggle_sign_negates() {
        let mut engine = Engine::new();
        engine.input_digit(7);
        engine.toggle_sign();
        assert_eq!(engine.display(), "-7");
        engine.toggle_sign();
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_toggle_sign_on_zero() {
        let mut engine = Engine::new();
        engine.toggle_sign();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_toggle_sign_preserves_pending_chain() {
        // 4 + (-6) = -2
        let mut engine = Engine::new();
        engine.input_digit(4);
        engine.input_operator(Add);
        engine.input_digit(6);
        engine.toggle_sign();
        engine.input_equals();
        assert_eq!(engine.display(), "-2");
    }

    // ===== Division by zero =====

    #[test]
    fn test_division_by_zero_latches_error() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Divide);
        engine.input_digit(0);
        engine.input_equals();
        assert!(engine.is_error());
        assert_eq!(engine.display(), "Error: Division by Zero");
    }

    #[test]
    fn test_division_by_zero_during_chaining() {
        let mut engine = Engine::new();
        engine.input_digit(8);
        engine.input_operator(Divide);
        engine.input_digit(0);
        engine.input_operator(Add);
        assert!(engine.is_error());
    }

    #[test]
    fn test_error_state_ignores_input() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Divide);
        engine.input_digit(0);
        engine.input_equals();
        let latched = engine.clone();

        engine.input_digit(1);
        engine.input_decimal_point();
        engine.input_operator(Add);
        engine.input_equals();
        engine.input_percent();
        engine.toggle_sign();
        assert_eq!(engine, latched);
    }

    #[test]
    fn test_clear_recovers_from_error() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Divide);
        engine.input_digit(0);
        engine.input_equals();
        engine.clear();
        assert_eq!(engine.display(), "0");
        assert!(!engine.is_error());
    }

    #[test]
    fn test_divide_zero_numerator_is_fine() {
        let mut engine = Engine::new();
        engine.input_digit(0);
        engine.input_operator(Divide);
        engine.input_digit(5);
        engine.input_equals();
        assert_eq!(engine.display(), "0");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = Engine::new();
        engine.input_digit(7);
        engine.input_operator(Multiply);
        engine.input_digit(3);
        engine.clear();
        assert_eq!(engine, Engine::new());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut engine = Engine::new();
        engine.input_digit(9);
        engine.clear();
        engine.clear();
        assert_eq!(engine, Engine::new());
    }

    // ===== Formatting through the engine =====

    #[test]
    fn test_float_artifacts_preserved() {
        // 0.1 + 0.2 shows the native double result, by contract
        let mut engine = Engine::new();
        engine.input_decimal_point();
        engine.input_digit(1);
        engine.input_operator(Add);
        engine.input_digit(0);
        engine.input_decimal_point();
        engine.input_digit(2);
        engine.input_equals();
        assert_eq!(engine.display(), "0.30000000000000004");
    }

    #[test]
    fn test_division_produces_decimal() {
        let mut engine = Engine::new();
        engine.input_digit(7);
        engine.input_operator(Divide);
        engine.input_digit(2);
        engine.input_equals();
        assert_eq!(engine.display(), "3.5");
    }

    // ===== Unparseable display guard =====

    #[test]
    fn test_value_keys_noop_on_unparseable_display() {
        // Key transitions keep the display parseable; if a state is ever
        // constructed around an unparseable display, the value-consuming
        // keys leave it untouched instead of computing with a substitute
        let garbled = State::Entry {
            display: "5e-6.".to_string(),
            pending: Some((2.0, Add)),
            reset_on_next_digit: false,
        };
        for key in [
            Key::Operator(Multiply),
            Key::Equals,
            Key::Percent,
            Key::ToggleSign,
        ] {
            let next = garbled.clone().apply(key);
            assert_eq!(next.display(), "5e-6.", "after {key:?}");
            assert!(!next.is_error());
        }
    }

    #[test]
    fn test_equals_on_unparseable_display_keeps_pending() {
        let garbled = State::Entry {
            display: "5e-6.".to_string(),
            pending: Some((2.0, Add)),
            reset_on_next_digit: false,
        };
        let next = garbled.apply(Key::Equals);
        let State::Entry { pending, .. } = next else {
            panic!("expected entry state");
        };
        assert_eq!(pending, Some((2.0, Add)));
    }

    // ===== Pure transition function =====

    #[test]
    fn test_state_apply_is_pure() {
        let state = State::initial();
        let next = state.clone().apply(Key::Digit(5));
        assert_eq!(state, State::initial());
        assert_eq!(next.display(), "5");
    }

    #[test]
    fn test_state_default_is_initial() {
        assert_eq!(State::default(), State::initial());
    }
}
