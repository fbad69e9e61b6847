use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to its already-evaluated operand.
pub(crate) fn eval_prefix(op: UnaryOperator, right: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        UnaryOperator::Negate => eval_negate(right),
    }
}

/// `-x` is defined on integers only.
fn eval_negate(right: &Value) -> EvalResult<Value> {
    match right {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        other => Err(RuntimeError::UnknownPrefixOperator {
            operator: UnaryOperator::Negate,
            operand: other.kind(),
        }),
    }
}
