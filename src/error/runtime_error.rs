use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// These travel through the evaluator as ordinary `Err` values: any step
/// that receives one from a sub-evaluation returns it unchanged, which gives
/// a uniform short-circuit across statements, operands, call arguments and
/// blocks. The rendered messages are stable and asserted by tests.
pub enum RuntimeError {
    /// A name resolved against neither the environment chain nor the
    /// built-in table.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A prefix operator was applied to an operand kind it does not support.
    UnknownPrefixOperator {
        /// The operator.
        operator: UnaryOperator,
        /// Kind tag of the operand.
        operand: &'static str,
    },
    /// A binary operator was applied to operands of two different kinds.
    TypeMismatch {
        /// The operator.
        operator: BinaryOperator,
        /// Kind tag of the left operand.
        left: &'static str,
        /// Kind tag of the right operand.
        right: &'static str,
    },
    /// A binary operator was applied to same-kind operands that do not
    /// support it.
    UnknownInfixOperator {
        /// The operator.
        operator: BinaryOperator,
        /// Kind tag of the left operand.
        left: &'static str,
        /// Kind tag of the right operand.
        right: &'static str,
    },
    /// A call's callee evaluated to something that cannot be invoked.
    NotAFunction {
        /// Kind tag of the callee.
        kind: &'static str,
    },
    /// The index operator was applied to an unsupported combination.
    IndexNotSupported {
        /// Kind tag of the indexed value.
        kind: &'static str,
    },
    /// A function or built-in was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments arrived.
        got: usize,
        /// How many the callee accepts.
        want: usize,
    },
    /// A built-in rejected an argument of the given kind.
    UnsupportedArgument {
        /// The built-in's name.
        builtin: &'static str,
        /// Kind tag of the offending argument.
        kind: &'static str,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {name}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::TypeMismatch { operator, left, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { operator, left, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedArgument { builtin, kind } => {
                write!(f, "argument to `{builtin}` not supported, got {kind}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
