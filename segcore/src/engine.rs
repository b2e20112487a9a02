//! Calculator engine
//!
//! Turns button presses into two operands, one pending operator and one
//! result. Digits always land on the bottom row; once an operator is
//! chosen the first operand moves up to the middle row, and `Enter` lays
//! out the whole sum as operand / operand / result from top to bottom.
//!
//! Nothing here fails. Presses that make no sense in the current state
//! are ignored, and arithmetic trouble (overflow, division by zero)
//! becomes the `E` readout.

use tracing::{debug, trace};

use crate::display::{DisplayRow, DisplayRows, RenderUpdate, Row};
use crate::key::{Key, KeyError, Operator};
use crate::operand::{Operand, Readout};
use crate::segment::Digit;

/// Operand, operator and result state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    pub operand1: Operand,
    pub operand2: Operand,
    pub result: Readout,
    pub operator: Option<Operator>,
    /// The last press produced a final result; the next digit starts over.
    pub result_ready: bool,
}

/// Single-session calculator. Owns its state; callers read the display
/// after each press.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    display: DisplayRows,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &DisplayRows {
        &self.display
    }

    /// Handle a keypad label such as `"7"`, `"÷"` or `"+/-"`.
    pub fn press(&mut self, label: &str) -> Result<RenderUpdate, KeyError> {
        let key = label.parse::<Key>()?;
        Ok(self.handle_key(key))
    }

    pub fn handle_key(&mut self, key: Key) -> RenderUpdate {
        let update = match key {
            Key::Digit(d) => self.digit(d),
            Key::Operator(op) => self.operator(op),
            Key::ToggleSign => self.toggle_sign(),
            Key::Enter => self.enter(),
            Key::Clear => self.clear(),
        };
        self.display.apply(&update);
        trace!(
            %key,
            operand1 = %self.state.operand1,
            operand2 = %self.state.operand2,
            result = %self.state.result,
            operator = ?self.state.operator,
            result_ready = self.state.result_ready,
            "key handled"
        );
        update
    }

    fn clear(&mut self) -> RenderUpdate {
        self.state = CalculatorState::default();
        let mut update = RenderUpdate::none();
        for row in Row::ALL {
            update.set(row, DisplayRow::empty());
        }
        update
    }

    fn digit(&mut self, digit: Digit) -> RenderUpdate {
        let mut update = if self.state.result_ready {
            self.clear()
        } else {
            RenderUpdate::none()
        };

        let state = &mut self.state;
        let target = if state.operator.is_none() {
            &mut state.operand1
        } else {
            &mut state.operand2
        };
        if !target.push_digit(digit) {
            debug!(digit = digit.value(), "digit ignored: operand is full");
            return update;
        }
        update.set(Row::Bottom, DisplayRow::new(target.glyphs()));
        update
    }

    fn operator(&mut self, op: Operator) -> RenderUpdate {
        let state = &mut self.state;
        if state.result.is_error() {
            debug!(%op, "operator ignored: result is E");
            return RenderUpdate::none();
        }
        if let Some(pending) = state.operator {
            debug!(%op, %pending, "operator ignored: one is already pending");
            return RenderUpdate::none();
        }

        if !state.operand1.is_empty() && !state.operand2.is_empty() {
            // Chain: the previous result becomes the new first operand.
            let Some(promoted) = state.result.operand().cloned() else {
                debug!(%op, "operator ignored: no result to carry forward");
                return RenderUpdate::none();
            };
            state.operand1 = promoted;
            state.operand2 = Operand::new();
            state.result = Readout::Empty;
            state.operator = Some(op);
            state.result_ready = false;
            RenderUpdate::none()
                .with(Row::Top, DisplayRow::empty())
                .with(Row::Mid, DisplayRow::new(state.operand1.glyphs()))
                .with(Row::Bottom, DisplayRow::empty())
        } else if !state.operand1.is_empty() {
            state.operator = Some(op);
            RenderUpdate::none()
                .with(Row::Mid, DisplayRow::new(state.operand1.glyphs()))
                .with(Row::Bottom, DisplayRow::empty())
        } else {
            debug!(%op, "operator ignored: nothing entered");
            RenderUpdate::none()
        }
    }

    fn enter(&mut self) -> RenderUpdate {
        let state = &mut self.state;
        if state.result.is_error() {
            debug!("enter ignored: result is E");
            return RenderUpdate::none();
        }
        let Some(op) = state.operator else {
            debug!("enter ignored: no pending operator");
            return RenderUpdate::none();
        };
        if state.operand1.is_empty() || state.operand2.is_empty() {
            debug!("enter ignored: missing operand");
            return RenderUpdate::none();
        }

        state.result = calculate(&state.operand1, &state.operand2, op);
        if state.result.is_error() {
            debug!(
                operand1 = %state.operand1,
                operand2 = %state.operand2,
                %op,
                "calculation gave E"
            );
        }
        state.operator = None;
        state.result_ready = true;
        RenderUpdate::none()
            .with(Row::Top, DisplayRow::new(state.operand1.glyphs()))
            .with(Row::Mid, DisplayRow::new(state.operand2.glyphs()))
            .with(Row::Bottom, DisplayRow::new(state.result.glyphs()))
    }

    fn toggle_sign(&mut self) -> RenderUpdate {
        let state = &mut self.state;
        if state.operand1.is_empty() {
            debug!("sign toggle ignored: nothing entered");
            return RenderUpdate::none();
        }
        if state.operator.is_some() && state.operand2.is_empty() {
            debug!("sign toggle ignored: second operand not started");
            return RenderUpdate::none();
        }
        if state.result.is_error() {
            debug!("sign toggle ignored: result is E");
            return RenderUpdate::none();
        }

        // Whatever is toggled is the number on the bottom row.
        let bottom = if state.operator.is_none() && !state.result_ready {
            state.operand1.toggle_sign();
            DisplayRow::new(state.operand1.glyphs())
        } else if !state.operand2.is_empty() && !state.result_ready {
            state.operand2.toggle_sign();
            DisplayRow::new(state.operand2.glyphs())
        } else {
            state.result.toggle_sign();
            DisplayRow::new(state.result.glyphs())
        };
        RenderUpdate::none().with(Row::Bottom, bottom)
    }
}

/// Apply `op` to two operands with integer arithmetic.
///
/// Division truncates toward zero and the remainder takes the sign of the
/// dividend. A zero divisor, an overflow, or a result wider than the
/// display gives [`Readout::Error`].
pub fn calculate(lhs: &Operand, rhs: &Operand, op: Operator) -> Readout {
    let (a, b) = (lhs.value(), rhs.value());
    let value = match op {
        Operator::Add => a.checked_add(b),
        Operator::Subtract => a.checked_sub(b),
        Operator::Multiply => a.checked_mul(b),
        Operator::Divide => a.checked_div(b),
        Operator::Modulo => a.checked_rem(b),
    };
    value.map_or(Readout::Error, Readout::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operand(value: i64) -> Operand {
        Operand::from_value(value)
    }

    fn run(calc: &mut Calculator, labels: &str) {
        for label in labels.split_whitespace() {
            calc.press(label).unwrap();
        }
    }

    #[test]
    fn test_calculate_basic() {
        assert_eq!(calculate(&operand(7), &operand(3), Operator::Add).to_string(), "10");
        assert_eq!(calculate(&operand(3), &operand(7), Operator::Subtract).to_string(), "-4");
        assert_eq!(calculate(&operand(-6), &operand(7), Operator::Multiply).to_string(), "-42");
    }

    #[test]
    fn test_calculate_truncates_toward_zero() {
        assert_eq!(calculate(&operand(7), &operand(2), Operator::Divide).to_string(), "3");
        assert_eq!(calculate(&operand(-7), &operand(2), Operator::Divide).to_string(), "-3");
        assert_eq!(calculate(&operand(-7), &operand(2), Operator::Modulo).to_string(), "-1");
        assert_eq!(calculate(&operand(7), &operand(-2), Operator::Modulo).to_string(), "1");
    }

    #[test]
    fn test_calculate_zero_divisor() {
        assert!(calculate(&operand(5), &operand(0), Operator::Divide).is_error());
        assert!(calculate(&operand(5), &operand(0), Operator::Modulo).is_error());
        // Only the value matters, not the last digit.
        assert_eq!(calculate(&operand(50), &operand(10), Operator::Divide).to_string(), "5");
    }

    #[test]
    fn test_calculate_width_limit() {
        let big = calculate(&operand(99_999), &operand(99_999), Operator::Multiply);
        assert_eq!(big.to_string(), "9999800001");
        let bigger = calculate(big.operand().unwrap(), &operand(10), Operator::Multiply);
        assert!(bigger.is_error());
    }

    #[test]
    fn test_calculate_overflow_is_error() {
        let nines = operand(999_999_999);
        for wide in [operand(9_999_800_001), operand(-9_999_800_001)] {
            assert_eq!(wide.value().checked_mul(nines.value()), None);
            assert!(calculate(&wide, &nines, Operator::Multiply).is_error());
        }
        let fits = calculate(&operand(8_999_800_002), &nines, Operator::Multiply);
        assert!(fits.is_error(), "19 digits are wider than the readout");
    }

    #[test]
    fn test_digits_fill_bottom_row() {
        let mut calc = Calculator::new();
        let update = calc.handle_key(Key::Digit(Digit::ALL[4]));
        assert_eq!(update.get(Row::Bottom).map(DisplayRow::text), Some("4".into()));
        assert!(update.get(Row::Top).is_none());
        run(&mut calc, "2");
        assert_eq!(calc.display().bottom.text(), "42");
    }

    #[test]
    fn test_full_operand_ignores_digit_without_redraw() {
        let mut calc = Calculator::new();
        run(&mut calc, "1 2 3 4 5 6 7 8 9");
        let update = calc.handle_key(Key::Digit(Digit::ALL[0]));
        assert!(update.is_empty());
        assert_eq!(calc.state().operand1.to_string(), "123456789");
    }

    #[test]
    fn test_first_operator_moves_operand_up() {
        let mut calc = Calculator::new();
        run(&mut calc, "1 2 *");
        assert_eq!(calc.state().operator, Some(Operator::Multiply));
        assert_eq!(calc.display().mid.text(), "12");
        assert!(calc.display().bottom.is_empty());
        run(&mut calc, "3");
        assert_eq!(calc.state().operand2.to_string(), "3");
        assert_eq!(calc.display().bottom.text(), "3");
    }

    #[test]
    fn test_second_operator_is_ignored() {
        let mut calc = Calculator::new();
        run(&mut calc, "1 +");
        let update = calc.handle_key(Key::Operator(Operator::Subtract));
        assert!(update.is_empty());
        assert_eq!(calc.state().operator, Some(Operator::Add));
    }

    #[test]
    fn test_operator_without_operand_is_ignored() {
        let mut calc = Calculator::new();
        assert!(calc.handle_key(Key::Operator(Operator::Add)).is_empty());
        assert_eq!(calc.state(), &CalculatorState::default());
    }

    #[test]
    fn test_enter_needs_both_operands() {
        let mut calc = Calculator::new();
        assert!(calc.handle_key(Key::Enter).is_empty());
        run(&mut calc, "5");
        assert!(calc.handle_key(Key::Enter).is_empty());
        run(&mut calc, "+");
        assert!(calc.handle_key(Key::Enter).is_empty());
        assert!(!calc.state().result_ready);
    }

    #[test]
    fn test_enter_lays_out_sum() {
        let mut calc = Calculator::new();
        run(&mut calc, "7 + 3");
        let update = calc.handle_key(Key::Enter);
        assert_eq!(update.changes().count(), 3);
        assert_eq!(calc.display().top.text(), "7");
        assert_eq!(calc.display().mid.text(), "3");
        assert_eq!(calc.display().bottom.text(), "10");
        assert!(calc.state().result_ready);
        assert_eq!(calc.state().operator, None);
    }

    #[test]
    fn test_error_blocks_operator_and_enter() {
        let mut calc = Calculator::new();
        run(&mut calc, "5 ÷ 0 Enter");
        assert!(calc.state().result.is_error());
        assert_eq!(calc.display().bottom.text(), "E");
        assert!(calc.handle_key(Key::Operator(Operator::Add)).is_empty());
        assert!(calc.handle_key(Key::Enter).is_empty());
        assert!(calc.handle_key(Key::ToggleSign).is_empty());
    }

    #[test]
    fn test_digit_after_error_starts_fresh() {
        let mut calc = Calculator::new();
        run(&mut calc, "5 % 0 Enter 8");
        assert_eq!(calc.state().operand1.to_string(), "8");
        assert!(calc.state().result.is_empty());
        assert!(calc.display().top.is_empty());
        assert_eq!(calc.display().bottom.text(), "8");
    }

    #[test]
    fn test_toggle_sign_targets() {
        let mut calc = Calculator::new();
        assert!(calc.handle_key(Key::ToggleSign).is_empty());

        run(&mut calc, "1 2 +/-");
        assert_eq!(calc.state().operand1.to_string(), "-12");
        assert_eq!(calc.display().bottom.text(), "-12");

        run(&mut calc, "-");
        assert!(calc.handle_key(Key::ToggleSign).is_empty());

        run(&mut calc, "5 +/-");
        assert_eq!(calc.state().operand2.to_string(), "-5");
        assert_eq!(calc.state().operand1.to_string(), "-12");

        run(&mut calc, "Enter +/-");
        assert_eq!(calc.state().result.to_string(), "7");
        assert_eq!(calc.display().bottom.text(), "7");
        assert_eq!(calc.display().mid.text(), "-5");
    }

    #[test]
    fn test_clear_matches_fresh_instance() {
        let mut calc = Calculator::new();
        run(&mut calc, "9 * 9 Enter + 4");
        let update = calc.handle_key(Key::Clear);
        assert_eq!(update.changes().count(), 3);
        assert!(update.changes().all(|(_, row)| row.is_empty()));
        assert_eq!(calc.state(), Calculator::new().state());
        assert_eq!(calc.display(), Calculator::new().display());
    }

    #[test]
    fn test_unknown_label() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press("="), Err(KeyError::Unknown("=".into())));
    }
}
