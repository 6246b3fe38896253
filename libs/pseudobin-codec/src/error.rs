//! Error types for pseudobin-codec

use thiserror::Error;

/// Character table construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Invalid base {0}: expected 2..=65536")]
    InvalidBase(u32),

    #[error("Digit value {value} for '{character}' is out of range for base {base}")]
    DigitOutOfRange {
        character: char,
        value: u32,
        base: u32,
    },

    #[error("Character '{0}' is mapped more than once")]
    DuplicateCharacter(char),

    #[error("Table maps no characters")]
    EmptyTable,

    #[error("Invalid character range '{first}'..='{last}'")]
    InvalidRange { first: char, last: char },
}

/// Decoding, encoding and window extraction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Value of width {width} does not fit in a 64-bit integer")]
    Overflow { width: usize },

    #[error("Value {value} cannot be encoded in {width} characters")]
    ValueOutOfRange { value: i64, width: usize },

    #[error("Digit {0} has no character in the table")]
    UnmappedDigit(u32),

    #[error("Window (start {start}, width {width}) is out of bounds for a message of length {len}")]
    WindowOutOfBounds { start: i64, width: usize, len: usize },
}

/// Scale transform errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Divider cannot be zero")]
    DivisionByZero,

    #[error("Invalid digits {0}: expected 0..=100")]
    InvalidDigits(i32),

    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),
}

/// Umbrella error for the full read pipeline (extract, decode, transform)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl TransformError {
    pub fn invalid_numeric(msg: impl Into<String>) -> Self {
        Self::InvalidNumericInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
