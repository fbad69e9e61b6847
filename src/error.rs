/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code: unexpected tokens, tokens no expression can start with, and
/// out-of-range integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved identifiers, operator misuse, bad calls and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The crate-level error handed to drivers.
///
/// Parsing never aborts on the first problem, so the parse side carries
/// every message accumulated in one run. Consumers must not evaluate a
/// program that produced any parse errors.
#[derive(Debug)]
pub enum Error {
    /// One or more parse errors, in source order.
    Parse(Vec<ParseError>),
    /// A single runtime error that aborted evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "{}", messages.join("\n"))
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
