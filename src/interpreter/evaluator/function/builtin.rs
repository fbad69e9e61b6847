use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Builtin, Value},
    },
};

/// The process-wide built-in table.
///
/// The evaluator consults this only after identifier lookup misses the
/// whole environment chain, so sorrel code can shadow any entry with a `let`.
static BUILTIN_TABLE: &[Builtin] = &[
    Builtin { name: "len", func: len },
    Builtin { name: "first", func: first },
    Builtin { name: "last", func: last },
    Builtin { name: "rest", func: rest },
    Builtin { name: "push", func: push },
    Builtin { name: "puts", func: puts },
];

/// Looks up a built-in by name.
pub(crate) fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied().map(Value::Builtin)
}

fn check_arity(arguments: &[Value], want: usize) -> EvalResult<()> {
    if arguments.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: arguments.len(), want })
    }
}

/// `len(x)`: the length of a string in bytes, or of an array in elements.
fn len(arguments: &[Value]) -> EvalResult<Value> {
    check_arity(arguments, 1)?;
    match &arguments[0] {
        Value::Str(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "len", kind: other.kind() }),
    }
}

/// `first(array)`: the first element, or `null` when empty.
fn first(arguments: &[Value]) -> EvalResult<Value> {
    check_arity(arguments, 1)?;
    match &arguments[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "first", kind: other.kind() }),
    }
}

/// `last(array)`: the last element, or `null` when empty.
fn last(arguments: &[Value]) -> EvalResult<Value> {
    check_arity(arguments, 1)?;
    match &arguments[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "last", kind: other.kind() }),
    }
}

/// `rest(array)`: a new array of everything after the first element, or
/// `null` when the array is empty.
fn rest(arguments: &[Value]) -> EvalResult<Value> {
    check_arity(arguments, 1)?;
    match &arguments[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin: "rest", kind: other.kind() }),
    }
}

/// `push(array, value)`: a new array with `value` appended. The original
/// array is untouched.
fn push(arguments: &[Value]) -> EvalResult<Value> {
    check_arity(arguments, 2)?;
    match &arguments[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(arguments[1].clone());
            Ok(Value::Array(Rc::new(extended)))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin: "push", kind: other.kind() }),
    }
}

/// `puts(...)`: prints each argument on its own line and yields `null`.
/// The one place the core touches host I/O.
fn puts(arguments: &[Value]) -> EvalResult<Value> {
    for argument in arguments {
        println!("{argument}");
    }
    Ok(Value::Null)
}
