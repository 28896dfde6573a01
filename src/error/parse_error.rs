#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all diagnostics the parser can record.
pub enum ParseError {
    /// The token after the current one was not what the grammar requires.
    UnexpectedToken {
        /// The kind of token the parser expected next.
        expected: &'static str,
        /// The kind of token it found instead.
        got: &'static str,
    },
    /// No expression can start with the current token.
    NoPrefixParseFn {
        /// The kind of the offending token.
        token: &'static str,
    },
    /// An integer literal did not fit or had digits invalid for its base.
    InvalidIntegerLiteral {
        /// The literal text as written in source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be {expected}, got {got} instead")
            },
            Self::NoPrefixParseFn { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
