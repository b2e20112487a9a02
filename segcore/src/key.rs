//! Keypad buttons and their labels

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::segment::Digit;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key label: {0:?}")]
    Unknown(String),
}

/// Binary operators, one of which may be pending at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "÷",
            Operator::Modulo => "%",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Operator(Operator),
    ToggleSign,
    Enter,
    Clear,
}

impl Key {
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => DIGITS[usize::from(d.value())],
            Key::Operator(op) => op.symbol(),
            Key::ToggleSign => "+/-",
            Key::Enter => "Enter",
            Key::Clear => "C",
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "+" => Key::Operator(Operator::Add),
            "-" => Key::Operator(Operator::Subtract),
            "*" => Key::Operator(Operator::Multiply),
            "÷" | "/" => Key::Operator(Operator::Divide),
            "%" => Key::Operator(Operator::Modulo),
            "+/-" => Key::ToggleSign,
            "Enter" => Key::Enter,
            "C" => Key::Clear,
            _ => match label.as_bytes() {
                [b] => match Digit::from_ascii(*b) {
                    Some(d) => Key::Digit(d),
                    None => return Err(KeyError::Unknown(label.to_string())),
                },
                _ => return Err(KeyError::Unknown(label.to_string())),
            },
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One button of the keypad grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub key: Key,
    /// Number of grid columns the button covers.
    pub span: usize,
}

pub const KEYPAD_COLUMNS: usize = 4;

const fn button(key: Key) -> KeypadButton {
    KeypadButton { key, span: 1 }
}

const fn wide(key: Key) -> KeypadButton {
    KeypadButton { key, span: 2 }
}

const fn digit(value: usize) -> KeypadButton {
    button(Key::Digit(Digit::ALL[value]))
}

/// The 18 buttons, row by row.
pub const KEYPAD: [&[KeypadButton]; 5] = [
    &[
        button(Key::Clear),
        button(Key::ToggleSign),
        button(Key::Operator(Operator::Modulo)),
        button(Key::Operator(Operator::Divide)),
    ],
    &[
        digit(7),
        digit(8),
        digit(9),
        button(Key::Operator(Operator::Multiply)),
    ],
    &[
        digit(4),
        digit(5),
        digit(6),
        button(Key::Operator(Operator::Subtract)),
    ],
    &[
        digit(1),
        digit(2),
        digit(3),
        button(Key::Operator(Operator::Add)),
    ],
    &[wide(Key::Digit(Digit::ALL[0])), wide(Key::Enter)],
];
