use crate::interpreter::lexer::Token;

/// A literal value as it appears in source code.
///
/// Literals are carried unevaluated inside [`Expr::Literal`] nodes and are
/// converted into runtime values by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `7` or `3.25` (double precision).
    Number(f64),
    /// A string literal, stored without its surrounding quotes.
    Str(String),
    /// A boolean literal, `true` or `false`.
    Bool(bool),
    /// The `nil` literal.
    Nil,
}

/// An expression node.
///
/// Expressions form an immutable tree owned top-down through `Box`es; the
/// root of each tree is owned by the statement that holds it. Nodes carry
/// the tokens the parser consumed for them so that runtime errors can name
/// the offending operator or variable and its source line.
///
/// All semantics live in the evaluator (and, for diagnostics, the printer);
/// the node types themselves are purely structural. Every consumer matches
/// exhaustively, so adding a variant is a compile-checked obligation in each
/// of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The literal carried by this node.
        value: LiteralValue,
    },
    /// A parenthesized expression, kept as its own node so the printer can
    /// reproduce the grouping.
    Grouping {
        /// The expression between the parentheses.
        inner: Box<Expr>,
    },
    /// A prefix operator applied to a single operand (`-x`, `!ready`).
    Unary {
        /// The operator token, `-` or `!`.
        operator: Token,
        /// The operand expression.
        operand: Box<Expr>,
    },
    /// An infix operator applied to two operands.
    Binary {
        /// Left-hand operand.
        left: Box<Expr>,
        /// The operator token (`+ - * / == != < <= > >=`).
        operator: Token,
        /// Right-hand operand.
        right: Box<Expr>,
    },
    /// A conditional expression `condition ? when_true : when_false`.
    Ternary {
        /// The condition; must evaluate to a boolean.
        condition: Box<Expr>,
        /// Result when the condition is true.
        when_true: Box<Expr>,
        /// Result when the condition is false.
        when_false: Box<Expr>,
        /// The `?` token, kept for error reporting.
        operator: Token,
    },
    /// A reference to a variable.
    Variable {
        /// The identifier token naming the variable.
        name: Token,
    },
    /// An assignment to an existing variable. Assignment is an expression
    /// and yields the assigned value.
    Assign {
        /// The identifier token naming the variable.
        name: Token,
        /// The value being assigned.
        value: Box<Expr>,
    },
}

/// A statement node.
///
/// A program is an ordered sequence of statements; statements are executed
/// for their effects and produce no value.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects, `expr ;`.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A `print expr ;` statement writing one line of output.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
    },
    /// A variable declaration, `var name (= initializer)? ;`.
    Var {
        /// The identifier token naming the variable.
        name: Token,
        /// The initializer, or `None` to declare the variable as `nil`.
        initializer: Option<Expr>,
    },
    /// A brace-delimited block introducing a new lexical scope.
    Block {
        /// The statements executed inside the block's scope.
        statements: Vec<Stmt>,
    },
}
