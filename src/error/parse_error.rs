use crate::interpreter::lexer::Token;

#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing source text.
///
/// The parser accumulates these instead of aborting, so one run can report
/// every malformed statement it encountered.
pub enum ParseError {
    /// The grammar required a specific token and found something else.
    UnexpectedToken {
        /// The token kind the parser required.
        want: Token,
        /// The token actually found.
        got: Token,
    },
    /// No expression can start with the given token.
    NoPrefixParse {
        /// The token with no prefix handler.
        token: Token,
    },
    /// An integer literal did not fit a 64-bit signed integer.
    BadIntegerLiteral {
        /// The literal's source spelling.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { want, got } => {
                write!(f, "expected token {want} got {got} instead")
            },
            Self::NoPrefixParse { token } => {
                write!(f, "no prefix parse function for {token}")
            },
            Self::BadIntegerLiteral { literal } => {
                write!(f, "couldn't parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
