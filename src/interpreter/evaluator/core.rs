use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, function, index, unary},
        value::core::{Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// Every evaluation step returns either a value or a [`RuntimeError`]; the
/// `?` operator hands an error from a sub-evaluation to the caller
/// unchanged, which is the short-circuit the language's error values need.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against an environment.
///
/// Statements run in order and the last one's value is the program's value.
/// A [`Value::Return`] produced anywhere stops the run and is unwrapped
/// here, at the outermost boundary, so neither it nor an error ever escapes
/// to callers as-is.
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
    let mut result = Value::Null;
    for statement in &program.statements {
        result = eval_statement(statement, env)?;
        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }
    Ok(result)
}

/// Evaluates the statements of a block.
///
/// Identical to [`eval_program`] except that a [`Value::Return`] stays
/// wrapped: it has to travel through every enclosing block until the
/// function call (or program) boundary unwraps it, which is what lets a
/// nested `return` leave nested blocks in one move.
pub(crate) fn eval_block(block: &Block, env: &Rc<Environment>) -> EvalResult<Value> {
    let mut result = Value::Null;
    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }
    Ok(result)
}

fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.define(name.clone(), value);
            Ok(Value::Null)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates one expression against an environment.
pub fn eval_expression(expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
    match expr {
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::Integer { value } => Ok(Value::Integer(*value)),
        Expr::Boolean { value } => Ok(Value::Bool(*value)),
        Expr::Str { value } => Ok(Value::Str(Rc::from(value.as_str()))),
        Expr::Array { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::Array(Rc::new(elements)))
        },
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix(*op, &right)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix(*op, &left, &right)
        },
        Expr::If { condition, consequence, alternative } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expr::Function { parameters, body } => Ok(Value::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        }))),
        Expr::Call { function, arguments } => {
            let callee = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            function::core::apply(&callee, arguments)
        },
        Expr::Index { target, index } => {
            let target = eval_expression(target, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&target, &index)
        },
    }
}

/// Evaluates a list of expressions left to right, stopping at the first
/// error. Shared by array literals and call arguments.
fn eval_expressions(expressions: &[Expr], env: &Rc<Environment>) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(expressions.len());
    for expression in expressions {
        values.push(eval_expression(expression, env)?);
    }
    Ok(values)
}

/// Resolves a name: the environment chain first, then the built-in table.
fn eval_identifier(name: &str, env: &Rc<Environment>) -> EvalResult<Value> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    function::builtin::lookup(name)
        .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
}

fn eval_if(
    condition: &Expr,
    consequence: &Block,
    alternative: Option<&Block>,
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;
    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::Lexer, parser::core::Parser};

    fn eval(input: &str) -> EvalResult<Value> {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        assert_eq!(parser.errors(), &[], "unexpected parse errors for {input:?}");
        eval_program(&program, &Environment::global())
    }

    fn assert_value(input: &str, want: Value) {
        assert_eq!(eval(input), Ok(want), "for input {input:?}");
    }

    fn assert_error(input: &str, want: RuntimeError) {
        assert_eq!(eval(input), Err(want), "for input {input:?}");
    }

    #[test]
    fn integer_arithmetic() {
        assert_value("5", Value::Integer(5));
        assert_value("-10", Value::Integer(-10));
        assert_value("5 + 5 + 10 - 5", Value::Integer(15));
        assert_value("2 * 2 * 2 * 2", Value::Integer(16));
        assert_value("50 / 2 * 2 + 10", Value::Integer(60));
        assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10", Value::Integer(50));
        assert_value("-7 / 2", Value::Integer(-3));
    }

    #[test]
    fn boolean_operators() {
        assert_value("true", Value::Bool(true));
        assert_value("1 < 2", Value::Bool(true));
        assert_value("1 > 2", Value::Bool(false));
        assert_value("1 == 1", Value::Bool(true));
        assert_value("1 != 2", Value::Bool(true));
        assert_value("true == true", Value::Bool(true));
        assert_value("true != false", Value::Bool(true));
        assert_value("(1 < 2) == true", Value::Bool(true));
        assert_value("(1 > 2) == true", Value::Bool(false));
    }

    #[test]
    fn bang_follows_truthiness() {
        assert_value("!true", Value::Bool(false));
        assert_value("!false", Value::Bool(true));
        assert_value("!5", Value::Bool(false));
        assert_value("!0", Value::Bool(false));
        assert_value("!!true", Value::Bool(true));
        assert_value("!if (false) { 1 }", Value::Bool(true));
    }

    #[test]
    fn if_expressions() {
        assert_value("if (true) { 10 }", Value::Integer(10));
        assert_value("if (false) { 10 }", Value::Null);
        assert_value("if (1) { 10 }", Value::Integer(10));
        assert_value("if (1 > 2) { 10 } else { 20 }", Value::Integer(20));
        assert_value("if (1 < 2) { 10 } else { 20 }", Value::Integer(10));
    }

    #[test]
    fn return_statements() {
        assert_value("return 10;", Value::Integer(10));
        assert_value("return 10; 9;", Value::Integer(10));
        assert_value("return 2 * 5; 9;", Value::Integer(10));
        assert_value("9; return 2 * 5; 9;", Value::Integer(10));
    }

    #[test]
    fn return_leaves_nested_blocks_in_one_move() {
        assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", Value::Integer(10));
    }

    #[test]
    fn let_bindings() {
        assert_value("let a = 5; a;", Value::Integer(5));
        assert_value("let a = 5 * 5; a;", Value::Integer(25));
        assert_value("let a = 5; let b = a; b;", Value::Integer(5));
        assert_value("let a = 5; let b = a; let c = a + b + 5; c;", Value::Integer(15));
    }

    #[test]
    fn let_itself_yields_nothing_displayable() {
        assert_value("let a = 5", Value::Null);
    }

    #[test]
    fn functions_and_calls() {
        assert_value("let identity = fn(x) { x }; identity(5);", Value::Integer(5));
        assert_value("let identity = fn(x) { return x; }; identity(5);", Value::Integer(5));
        assert_value("let double = fn(x) { x * 2 }; double(5);", Value::Integer(10));
        assert_value("let add = fn(x, y) { x + y }; add(5, 5);", Value::Integer(10));
        assert_value("let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5));", Value::Integer(20));
        assert_value("fn(x) { x }(5)", Value::Integer(5));
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        assert_value(
            "let newAdder = fn(x) { fn(y) { x + y } };\n\
             let addTwo = newAdder(2);\n\
             addTwo(2);",
            Value::Integer(4),
        );
    }

    #[test]
    fn closures_outlive_their_defining_scope() {
        assert_value(
            "let make = fn() { let hidden = 41; fn() { hidden + 1 } };\n\
             let get = make();\n\
             get();",
            Value::Integer(42),
        );
    }

    #[test]
    fn recursion_through_the_environment() {
        assert_value(
            "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };\n\
             fib(10);",
            Value::Integer(55),
        );
    }

    #[test]
    fn strings() {
        assert_value(r#""hello world""#, Value::from("hello world"));
        assert_value(r#""hello" + " " + "world""#, Value::from("hello world"));
    }

    #[test]
    fn arrays_and_indexing() {
        assert_value("[1, 2 * 2, 3 + 3]", Value::from(vec![
            Value::Integer(1),
            Value::Integer(4),
            Value::Integer(6),
        ]));
        assert_value("[1, 2, 3][0]", Value::Integer(1));
        assert_value("[1, 2, 3][1 + 1]", Value::Integer(3));
        assert_value("let i = 0; [1][i];", Value::Integer(1));
        assert_value("let a = [1, 2, 3]; a[2];", Value::Integer(3));
        assert_value("[1, 2, 3][3]", Value::Null);
        assert_value("[1, 2, 3][-1]", Value::Null);
    }

    #[test]
    fn identity_equality_on_heap_values() {
        assert_value(r#""a" == "a""#, Value::Bool(false));
        assert_value(r#"let a = "x"; a == a"#, Value::Bool(true));
        assert_value("[1] == [1]", Value::Bool(false));
        assert_value("let a = [1]; a == a", Value::Bool(true));
        assert_value("let f = fn() { 1 }; f == f", Value::Bool(true));
    }

    #[test]
    fn error_messages() {
        assert_error("foobar", RuntimeError::IdentifierNotFound { name: "foobar".to_string() });
        assert_error("5 + true;", RuntimeError::TypeMismatch {
            operator: crate::ast::BinaryOperator::Add,
            left: "INTEGER",
            right: "BOOLEAN",
        });
        assert_error("-true", RuntimeError::UnknownPrefixOperator {
            operator: crate::ast::UnaryOperator::Negate,
            operand: "BOOLEAN",
        });
        assert_error("true + false;", RuntimeError::UnknownInfixOperator {
            operator: crate::ast::BinaryOperator::Add,
            left: "BOOLEAN",
            right: "BOOLEAN",
        });
        assert_error(r#""a" - "b""#, RuntimeError::UnknownInfixOperator {
            operator: crate::ast::BinaryOperator::Sub,
            left: "STRING",
            right: "STRING",
        });
        assert_error("5(1)", RuntimeError::NotAFunction { kind: "INTEGER" });
        assert_error(r#""word"[0]"#, RuntimeError::IndexNotSupported { kind: "STRING" });
        assert_error("5 / 0", RuntimeError::DivisionByZero);
    }

    #[test]
    fn errors_abort_the_surrounding_statements() {
        assert_error("5 + true; 5;", RuntimeError::TypeMismatch {
            operator: crate::ast::BinaryOperator::Add,
            left: "INTEGER",
            right: "BOOLEAN",
        });
        assert_error("let x = foobar; x;", RuntimeError::IdentifierNotFound {
            name: "foobar".to_string(),
        });
        assert_error(
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            RuntimeError::UnknownInfixOperator {
                operator: crate::ast::BinaryOperator::Add,
                left: "BOOLEAN",
                right: "BOOLEAN",
            },
        );
    }

    #[test]
    fn the_first_failing_argument_wins() {
        assert_error("len(foobar, 1 / 0)", RuntimeError::IdentifierNotFound {
            name: "foobar".to_string(),
        });
    }

    #[test]
    fn user_function_arity_is_checked() {
        assert_error("let add = fn(x, y) { x + y }; add(1);", RuntimeError::WrongArgumentCount {
            got: 1,
            want: 2,
        });
    }

    #[test]
    fn builtins_resolve_after_the_environment() {
        assert_value(r#"len("four")"#, Value::Integer(4));
        assert_value("let len = fn(x) { 99 }; len([]);", Value::Integer(99));
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_value("7 / 2", Value::Integer(3));
        assert_value("-7 / 2", Value::Integer(-3));
        assert_value("7 / -2", Value::Integer(-3));
    }
}
