use core::fmt::{Display, Formatter};

///
/// Violation of the domain of an arithmetic operation.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DomainError {
    /// Natural-number subtraction whose result would be negative.
    NegativeDifference,
    /// Division or remainder with a zero divisor, or a zero modulus.
    DivisionByZero,
}

impl DomainError {
    pub const fn message(&self) -> &'static str {
        match self {
            DomainError::NegativeDifference => "natural subtraction would yield a negative result",
            DomainError::DivisionByZero => "division by zero",
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for DomainError {}

///
/// A big value does not fit into the requested (smaller) target type.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct NarrowingError {
    pub target: &'static str,
}

impl Display for NarrowingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "value does not fit into {}", self.target)
    }
}

impl core::error::Error for NarrowingError {}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ParseError {
    /// No digits at all (after stripping sign, prefix and separators).
    Empty,
    /// `character` at byte offset `position` is not a digit of the base.
    InvalidDigit { position: usize, character: char },
}

impl ParseError {
    /// Moves a reported digit position right by `offset` bytes, for text that
    /// was parsed after stripping a prefix of that length.
    pub const fn shifted(self, offset: usize) -> Self {
        match self {
            ParseError::InvalidDigit {
                position,
                character,
            } => ParseError::InvalidDigit {
                position: position + offset,
                character,
            },
            ParseError::Empty => ParseError::Empty,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Empty => f.write_str("cannot parse a number from empty text"),
            ParseError::InvalidDigit {
                position,
                character,
            } => write!(f, "invalid digit {character:?} at position {position}"),
        }
    }
}

impl core::error::Error for ParseError {}

///
/// Any error raised by this crate.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ArithmeticError {
    Domain(DomainError),
    Narrowing(NarrowingError),
    Parse(ParseError),
}

impl From<DomainError> for ArithmeticError {
    fn from(e: DomainError) -> Self {
        ArithmeticError::Domain(e)
    }
}

impl From<NarrowingError> for ArithmeticError {
    fn from(e: NarrowingError) -> Self {
        ArithmeticError::Narrowing(e)
    }
}

impl From<ParseError> for ArithmeticError {
    fn from(e: ParseError) -> Self {
        ArithmeticError::Parse(e)
    }
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ArithmeticError::Domain(e) => Display::fmt(e, f),
            ArithmeticError::Narrowing(e) => Display::fmt(e, f),
            ArithmeticError::Parse(e) => Display::fmt(e, f),
        }
    }
}

impl core::error::Error for ArithmeticError {}
