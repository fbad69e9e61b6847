use std::fmt;

/// A complete parsed program: an ordered sequence of statements.
///
/// The tree is immutable once built. Its `Display` form reconstructs a
/// canonical, fully parenthesized rendition of the source, which the parser
/// tests lean on to pin down precedence and associativity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>;`.
    Let {
        /// The bound identifier.
        name: String,
        /// The initializer expression.
        value: Expr,
    },
    /// A `return` statement: `return <value>;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

/// A braced sequence of statements, as used by `if` arms and function
/// bodies. Blocks are not expressions on their own; they only occur inside
/// the constructs that own them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An expression node.
///
/// Every construct in sorrel that produces a value is an `Expr` variant; the
/// evaluator dispatches on this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a name, resolved against the environment chain.
    Identifier {
        /// The referenced name.
        name: String,
    },
    /// A 64-bit signed integer literal.
    Integer {
        /// The literal's value.
        value: i64,
    },
    /// A boolean literal, `true` or `false`.
    Boolean {
        /// The literal's value.
        value: bool,
    },
    /// A string literal.
    Str {
        /// The literal's content, quotes excluded.
        value: String,
    },
    /// An array literal: `[a, b, c]`.
    Array {
        /// Element expressions in source order.
        elements: Vec<Expr>,
    },
    /// A prefix operation such as `!ok` or `-x`.
    Prefix {
        /// The operator.
        op: UnaryOperator,
        /// The operand.
        right: Box<Expr>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left: Box<Expr>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional expression with an optional `else` arm.
    If {
        /// The tested condition.
        condition: Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, when present.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(x, y) { ... }`.
    Function {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body: Block,
    },
    /// A call: `<function>(<arguments>)`.
    Call {
        /// The callee expression.
        function: Box<Expr>,
        /// Argument expressions in source order.
        arguments: Vec<Expr>,
    },
    /// An index operation: `<target>[<index>]`.
    Index {
        /// The indexed expression.
        target: Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::Integer { value } => write!(f, "{value}"),
            Self::Boolean { value } => write!(f, "{value}"),
            Self::Str { value } => write!(f, "{value}"),
            Self::Array { elements } => write!(f, "[{}]", join(elements)),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition, consequence, alternative } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => write!(f, "{function}({})", join(arguments)),
            Self::Index { target, index } => write!(f, "({target}[{index}])"),
        }
    }
}

fn join(expressions: &[Expr]) -> String {
    expressions.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// An operator that takes a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation, `-x`.
    Negate,
    /// Logical not, `!x`.
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

/// An operator that takes two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}
