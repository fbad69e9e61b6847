//! # sorrel
//!
//! sorrel is a small, expression-oriented programming language with
//! first-class functions, implemented as a tree-walking interpreter.
//! Source text is scanned into tokens, parsed into an abstract syntax tree
//! with a Pratt parser, and evaluated against a chain of lexical
//! environments. Functions capture the environment they were defined in,
//! so closures keep observing their bindings after the defining scope has
//! returned.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// Declares the `Program`, `Statement` and `Expr` types the parser builds
/// and the evaluator walks, together with their canonical stringification.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse errors accumulate so one run can report every malformed statement;
/// runtime errors short-circuit evaluation and carry the exact messages the
/// language guarantees.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together the lexer, parser, evaluator, environments and runtime
/// values, and exposes the pieces drivers need to embed the language.
pub mod interpreter;

pub use crate::interpreter::value::core::Value;

/// Parses and evaluates `source` against an existing environment.
///
/// Parsing runs to completion first; if it produced any errors the program
/// is not evaluated and every message is handed back at once. Passing the
/// same environment across calls is what gives an interactive session its
/// memory.
///
/// # Examples
/// ```
/// use sorrel::{interpret, interpreter::environment::Environment};
///
/// let env = Environment::global();
/// let value = interpret("let addTwo = fn(x) { x + 2 }; addTwo(3)", &env).unwrap();
/// assert_eq!(value.to_string(), "5");
///
/// // The binding above is still visible in the same environment.
/// let again = interpret("addTwo(40)", &env).unwrap();
/// assert_eq!(again.to_string(), "42");
/// ```
pub fn interpret(source: &str, env: &Rc<Environment>) -> Result<Value, Error> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    eval_program(&program, env).map_err(Error::Runtime)
}

/// Runs a whole script in a fresh global environment.
///
/// With `auto_print` set, the program's final value is printed to stdout
/// unless it is `null`, which keeps scripts that end in a `let` or a `puts`
/// call from echoing noise.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn run(source: &str, auto_print: bool) -> Result<(), Error> {
    let env = Environment::global();
    let value = interpret(source, &env)?;

    if auto_print && !value.is_null() {
        println!("{value}");
    }

    Ok(())
}
