//! Operands and the result readout

use std::fmt;

use crate::segment::{Digit, Glyph};

/// Longest number that can be typed in, not counting the sign.
pub const MAX_DIGITS: usize = 9;

/// Longest result the display accepts, sign included.
pub const MAX_READOUT_LEN: usize = 10;

/// A signed integer being typed left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operand {
    negative: bool,
    /// Most significant first; new digits are pushed at the end.
    digits: Vec<Digit>,
}

impl Operand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: i64) -> Self {
        let digits = value
            .unsigned_abs()
            .to_string()
            .bytes()
            .filter_map(Digit::from_ascii)
            .collect();
        Self { negative: value < 0, digits }
    }

    pub fn is_empty(&self) -> bool {
        !self.negative && self.digits.is_empty()
    }

    /// Number of glyphs, sign included.
    pub fn len(&self) -> usize {
        self.digits.len() + usize::from(self.negative)
    }

    /// Append a digit unless the operand is full. Returns whether it was kept.
    pub fn push_digit(&mut self, digit: Digit) -> bool {
        let limit = if self.negative { MAX_DIGITS + 1 } else { MAX_DIGITS };
        if self.len() >= limit {
            return false;
        }
        self.digits.push(digit);
        true
    }

    /// Add or remove the leading minus. An empty operand stays empty.
    pub fn toggle_sign(&mut self) {
        if self.is_empty() {
            return;
        }
        self.negative = !self.negative;
    }

    pub fn value(&self) -> i64 {
        let magnitude = self
            .digits
            .iter()
            .fold(0i64, |acc, d| acc * 10 + i64::from(d.value()));
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.negative
            .then_some(Glyph::Minus)
            .into_iter()
            .chain(self.digits.iter().map(|d| Glyph::Digit(*d)))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs().try_for_each(|g| write!(f, "{g}"))
    }
}

/// What the result slot holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Readout {
    #[default]
    Empty,
    Value(Operand),
    /// Overflow or division by zero, shown as `E`.
    Error,
}

impl Readout {
    /// Wrap a computed value, turning anything too wide to show into `Error`.
    pub fn from_value(value: i64) -> Self {
        let operand = Operand::from_value(value);
        if operand.len() > MAX_READOUT_LEN {
            Readout::Error
        } else {
            Readout::Value(operand)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Readout::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Readout::Error)
    }

    pub fn operand(&self) -> Option<&Operand> {
        match self {
            Readout::Value(operand) => Some(operand),
            Readout::Empty | Readout::Error => None,
        }
    }

    pub fn toggle_sign(&mut self) {
        if let Readout::Value(operand) = self {
            operand.toggle_sign();
        }
    }

    pub fn glyphs(&self) -> Vec<Glyph> {
        match self {
            Readout::Empty => Vec::new(),
            Readout::Value(operand) => operand.glyphs().collect(),
            Readout::Error => vec![Glyph::E],
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readout::Empty => Ok(()),
            Readout::Value(operand) => write!(f, "{operand}"),
            Readout::Error => f.write_str("E"),
        }
    }
}
