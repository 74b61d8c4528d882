use bigdecimal::BigDecimal;

/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: decimal numbers and booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An arbitrary-precision decimal literal such as `3500` or `1.5e+25`.
    Number(BigDecimal),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<BigDecimal> for LiteralValue {
    fn from(value: BigDecimal) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node records the byte offset of the token that introduced it so
/// evaluation and parse errors can point back into the expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value:  LiteralValue,
        /// Byte offset in the source expression.
        offset: usize,
    },
    /// Reference to a variable or constant by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Byte offset in the source expression.
        offset: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Byte offset in the source expression.
        offset: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// Function call expression (e.g. `sqrt(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset in the source expression.
        offset:    usize,
    },
}

impl Expr {
    /// Gets the byte offset from `self`.
    /// ## Example
    /// ```
    /// use calcpad::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             offset: 5, };
    ///
    /// assert_eq!(expr.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. }
            | Self::Variable { offset, .. }
            | Self::UnaryOp { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::FunctionCall { offset, .. } => *offset,
        }
    }
}

/// Represents a top-level statement.
///
/// One statement is parsed from each line handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:   Expr,
        /// Byte offset in the source expression.
        offset: usize,
    },
    /// A variable assignment binding a name to an expression.
    ///
    /// Assignments define the variable if it does not exist yet and evaluate
    /// to the assigned value.
    Assignment {
        /// The name of the variable.
        name:   String,
        /// The value which is being assigned.
        value:  Expr,
        /// Byte offset of the variable name.
        offset: usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Whether the operator compares its operands and yields a boolean.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Unary plus (e.g. `+x`), which only checks that `x` is numeric.
    Plus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
