use std::{fmt, rc::Rc};

use crate::{ast::Block, error::RuntimeError, interpreter::environment::Environment};

/// The signature every built-in honors: evaluated arguments in, one value
/// out, with failures reported through the ordinary runtime error channel.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, RuntimeError>;

/// Represents a runtime value in the interpreter.
///
/// This enum models every type an expression can produce. Aggregate values
/// sit behind `Rc`, which keeps clones cheap and gives the language's
/// equality operator its reference-identity semantics.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, `true` or `false`.
    Bool(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value, produced for instance by an `if` with no
    /// taken arm.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A host-provided callable from the built-in table.
    Builtin(Builtin),
    /// Wraps the value of a `return` statement on its way out of nested
    /// blocks. Unwrapped at the program boundary and at function calls;
    /// never observable from sorrel code.
    Return(Box<Value>),
}

/// A user-defined function value.
///
/// The captured environment is shared, not owned: it stays alive for as
/// long as any function referencing it does, which is exactly the closure
/// guarantee.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The body to evaluate on each call.
    pub body: Block,
    /// The environment the function literal was evaluated in.
    pub env: Rc<Environment>,
}

// The captured environment can reach this function again, so a derived
// Debug would recurse without end.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("parameters", &self.parameters).finish()
    }
}

/// A named entry of the built-in table.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the entry is looked up under.
    pub name: &'static str,
    /// The host function invoked on call.
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

impl Value {
    /// Returns the stable kind tag used in runtime error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// The language's notion of truth: `false` and `null` are falsy, every
    /// other value (including `0` and `""`) is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Reference-identity comparison, the semantics behind `==` on operands
    /// of the same non-integer kind. Booleans and null behave as singletons
    /// (identity and value coincide for them); strings, arrays and
    /// functions compare by pointer, so separately constructed but
    /// equal-looking values are not `==`.
    #[must_use]
    pub fn same_object(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Str(l), Self::Str(r)) => Rc::ptr_eq(l, r),
            (Self::Array(l), Self::Array(r)) => Rc::ptr_eq(l, r),
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name == r.name,
            _ => false,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Structural equality, used by tests and assertions. The language's `==`
/// goes through [`Value::same_object`] instead.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name == r.name,
            (Self::Return(l), Self::Return(r)) => l == r,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value for humans: integers in decimal, booleans as
    /// `true`/`false`, `null`, bare string contents, arrays element by
    /// element, and functions with their parameter list and body text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {{ {} }}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_forms() {
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("hello").to_string(), "hello");
        let array = Value::from(vec![Value::Integer(1), Value::from("two"), Value::Null]);
        assert_eq!(array.to_string(), "[1, two, null]");
    }

    #[test]
    fn truthiness() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn identity_on_heap_values_is_by_pointer() {
        let a = Value::from("abc");
        let b = Value::from("abc");
        assert!(!a.same_object(&b));
        assert!(a.same_object(&a.clone()));

        let xs = Value::from(vec![Value::Integer(1)]);
        let ys = Value::from(vec![Value::Integer(1)]);
        assert!(!xs.same_object(&ys));
        assert!(xs.same_object(&xs.clone()));
    }

    #[test]
    fn identity_on_singletons_is_by_value() {
        assert!(Value::Bool(true).same_object(&Value::Bool(true)));
        assert!(!Value::Bool(true).same_object(&Value::Bool(false)));
        assert!(Value::Null.same_object(&Value::Null));
    }
}
