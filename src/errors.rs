//! Crate-wide error type. Kept in the teacher's own shape: a plain enum
//! with a hand-rolled `Display` and `std::error::Error` impl rather than a
//! derive-macro error crate, plus a small set of `unreachable!()`-backed
//! internal assertions for states the `Expr` type already rules out
//! everywhere it matters.

use std::fmt;

pub type LambdaResult<T> = Result<T, LambdaError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LambdaError {
    /// The lexer found a character it doesn't recognize.
    UnexpectedChar(char, usize),
    /// The parser wanted a particular token and didn't get one.
    UnexpectedToken { expected: &'static str, found: String, pos: usize },
    /// Input ended before a construct (an abstraction body, a closing
    /// paren, ...) was finished.
    UnexpectedEof { expected: &'static str },
    /// A `let`/abbreviation reference named something never bound.
    UnknownAbbreviation(String),
    /// `deparameterize`'s `count` argument was not a valid unsigned
    /// integer literal.
    BadParameterCount(String),
}

impl fmt::Display for LambdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LambdaError::UnexpectedChar(c, pos) => {
                write!(f, "unexpected character '{}' at position {}", c, pos)
            }
            LambdaError::UnexpectedToken { expected, found, pos } => {
                write!(f, "expected {} but found '{}' at position {}", expected, found, pos)
            }
            LambdaError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            LambdaError::UnknownAbbreviation(name) => {
                write!(f, "no abbreviation bound to '{}'", name)
            }
            LambdaError::BadParameterCount(text) => {
                write!(f, "'{}' is not a valid parameter count", text)
            }
        }
    }
}

impl std::error::Error for LambdaError {}
