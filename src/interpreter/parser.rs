/// Parser state, the precedence ladder and the operator-precedence core.
///
/// Contains the `Parser` type itself, its two-token lookahead window, the
/// error list and the expression loop everything else hangs off.
pub mod core;

/// Statement parsing.
///
/// Implements `let` and `return` statements, expression statements and
/// braced blocks.
pub mod statement;

/// Expression parsing.
///
/// Implements the prefix handlers (literals, prefix operators, grouping,
/// arrays, `if`, `fn`) and the infix handlers (binary operators, calls,
/// indexing).
pub mod expression;
