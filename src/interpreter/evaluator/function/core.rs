use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_block},
        value::core::Value,
    },
};

/// Invokes a callee with already-evaluated arguments.
///
/// User functions get a fresh environment enclosing the one they captured,
/// with one binding per parameter; their body's `return` wrapper is
/// unwrapped here, completing its journey out of nested blocks. Built-ins
/// are handed the argument slice directly.
pub(crate) fn apply(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount {
                    got: arguments.len(),
                    want: function.parameters.len(),
                });
            }

            let call_env = Environment::enclosed(function.env.clone());
            for (parameter, value) in function.parameters.iter().zip(arguments) {
                call_env.define(parameter.clone(), value);
            }

            let result = eval_block(&function.body, &call_env)?;
            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => (builtin.func)(&arguments),
        other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
    }
}

fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
