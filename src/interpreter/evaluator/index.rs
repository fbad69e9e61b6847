use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies the index operator to already-evaluated operands.
///
/// Arrays indexed by integers are the only supported combination. An index
/// outside `0..len` (negative included) yields `null` rather than an error.
pub(crate) fn eval_index(target: &Value, index: &Value) -> EvalResult<Value> {
    match (target, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            let element = usize::try_from(*position)
                .ok()
                .and_then(|position| elements.get(position).cloned());
            Ok(element.unwrap_or(Value::Null))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: target.kind() }),
    }
}
