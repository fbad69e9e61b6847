use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to its already-evaluated operands.
///
/// The rules, in order: two integers get the arithmetic and comparison
/// table; two strings concatenate under `+`; `==` and `!=` on operands of
/// the same kind compare identity; operands of different kinds are a type
/// mismatch; anything else is an unsupported operator for that kind.
pub(crate) fn eval_infix(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::Str(l), Value::Str(r)) if op == BinaryOperator::Add => {
            Ok(Value::Str(Rc::from(format!("{l}{r}"))))
        },
        _ if matches!(op, BinaryOperator::Eq | BinaryOperator::NotEq)
            && left.kind() == right.kind() =>
        {
            let same = left.same_object(right);
            Ok(Value::Bool(if op == BinaryOperator::Eq { same } else { !same }))
        },
        _ if left.kind() != right.kind() => Err(RuntimeError::TypeMismatch {
            operator: op,
            left: left.kind(),
            right: right.kind(),
        }),
        _ => Err(RuntimeError::UnknownInfixOperator {
            operator: op,
            left: left.kind(),
            right: right.kind(),
        }),
    }
}

/// Integer arithmetic wraps on overflow and traps a zero divisor; division
/// truncates toward zero.
fn eval_integer_infix(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match op {
        BinaryOperator::Add => Value::Integer(left.wrapping_add(right)),
        BinaryOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        BinaryOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        BinaryOperator::Lt => Value::Bool(left < right),
        BinaryOperator::Gt => Value::Bool(left > right),
        BinaryOperator::Eq => Value::Bool(left == right),
        BinaryOperator::NotEq => Value::Bool(left != right),
    };
    Ok(value)
}
