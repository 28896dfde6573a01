use std::fmt::Write as _;

use crate::interpreter::lexer::Token;

/// A parsed program: the ordered sequence of its top-level statements.
///
/// The `Display` impl renders the program back into source-like text. Every
/// statement renders with a trailing `;`, which keeps the printer idempotent:
/// parsing the rendered text yields a tree that renders to the same string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Renders the program as an indented debug tree, one node per line.
    #[must_use]
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        out.push_str("Program {\n");
        for statement in &self.statements {
            statement.write_debug(&mut out, 1);
        }
        out.push_str("}\n");
        out
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A name reference.
///
/// Identifiers appear both as expressions and as binding targets (`let`
/// names, assignment targets, function parameters, dot fields).
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The name itself.
    pub value: String,
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An ordered sequence of statements delimited by braces in source.
///
/// Blocks introduce no scope of their own: a `let` inside an `if` arm binds
/// in the enclosing function (or program) scope.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token: Token,
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        write!(f, " }}")
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding: `let <name> = <value>;`. Binds in the current scope,
    /// shadowing any outer binding of the same name.
    Let {
        /// The `let` token.
        token: Token,
        /// The bound name.
        name: Identifier,
        /// The initializer expression.
        value: Expression,
    },
    /// A re-binding: `<name> = <value>;`. Writes into the nearest enclosing
    /// scope that already contains the name.
    Assignment {
        /// The target identifier's token.
        token: Token,
        /// The assignment target.
        name: Identifier,
        /// The new value.
        value: Expression,
    },
    /// `return;` or `return <value>;`.
    Return {
        /// The `return` token.
        token: Token,
        /// The returned expression, if any.
        value: Option<Expression>,
    },
    /// An expression used for its value or effect.
    Expression {
        /// The first token of the expression.
        token: Token,
        /// The wrapped expression.
        expression: Expression,
    },
}

impl Statement {
    /// The token this statement originates from.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Let { token, .. }
            | Self::Assignment { token, .. }
            | Self::Return { token, .. }
            | Self::Expression { token, .. } => token,
        }
    }

    /// The literal text of the originating token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token().literal()
    }

    pub(crate) fn write_debug(&self, out: &mut String, depth: usize) {
        match self {
            Self::Let { name, value, .. } => {
                debug_line(out, "LetStatement {", depth);
                debug_line(out, &format!("Identifier ({name})"), depth + 1);
                value.write_debug(out, depth + 1);
                debug_line(out, "}", depth);
            },
            Self::Assignment { name, value, .. } => {
                debug_line(out, "AssignmentStatement {", depth);
                debug_line(out, &format!("Identifier ({name})"), depth + 1);
                value.write_debug(out, depth + 1);
                debug_line(out, "}", depth);
            },
            Self::Return { value, .. } => {
                debug_line(out, "ReturnStatement {", depth);
                match value {
                    Some(value) => value.write_debug(out, depth + 1),
                    None => debug_line(out, "Value (none)", depth + 1),
                }
                debug_line(out, "}", depth);
            },
            Self::Expression { expression, .. } => {
                debug_line(out, "ExpressionStatement {", depth);
                expression.write_debug(out, depth + 1);
                debug_line(out, "}", depth);
            },
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Assignment { name, value, .. } => write!(f, "{name} = {value};"),
            Self::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expression, .. } => write!(f, "{expression};"),
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A name reference.
    Identifier(Identifier),
    /// An integer literal. The token keeps the source spelling (including a
    /// base prefix); `value` is the parsed number.
    IntegerLiteral {
        /// The literal token.
        token: Token,
        /// The parsed value.
        value: i64,
    },
    /// `true` or `false`.
    BooleanLiteral {
        /// The literal token.
        token: Token,
        /// The literal value.
        value: bool,
    },
    /// A string literal with escapes already applied.
    StringLiteral {
        /// The literal token.
        token: Token,
        /// The string contents.
        value: String,
    },
    /// An ordered sequence of element expressions: `[a, b, c]`.
    ArrayLiteral {
        /// The `[` token.
        token: Token,
        /// The element expressions in source order.
        elements: Vec<Expression>,
    },
    /// A hash literal: `{key: value, ...}`. Keys are arbitrary expressions;
    /// key hashability and uniqueness are enforced at evaluation time.
    HashLiteral {
        /// The `{` token.
        token: Token,
        /// The key/value expression pairs in source order.
        pairs: Vec<(Expression, Expression)>,
    },
    /// A prefix operation: `!x` or `-x`.
    Prefix {
        /// The operator token.
        token: Token,
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right: Box<Expression>,
    },
    /// An infix operation: `a + b`, `a == b`, ...
    Infix {
        /// The operator token.
        token: Token,
        /// Left operand.
        left: Box<Expression>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right: Box<Expression>,
    },
    /// An index operation: `left[index]`.
    Index {
        /// The `[` token.
        token: Token,
        /// The indexed container.
        left: Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },
    /// A field access: `left.name`, sugar for indexing with the field name
    /// as a string key.
    Dot {
        /// The `.` token.
        token: Token,
        /// The accessed container.
        left: Box<Expression>,
        /// The field name.
        name: Identifier,
    },
    /// A conditional: `if (<condition>) { ... } else { ... }`. Evaluates to
    /// the value of the taken branch.
    If {
        /// The `if` token.
        token: Token,
        /// The condition.
        condition: Box<Expression>,
        /// The branch taken when the condition is truthy.
        consequence: BlockStatement,
        /// The branch taken otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal: `fn(a, b) { ... }`. Captures the defining
    /// environment when evaluated.
    FunctionLiteral {
        /// The `fn` token.
        token: Token,
        /// The parameter names.
        parameters: Vec<Identifier>,
        /// The function body.
        body: BlockStatement,
    },
    /// A call: `callee(arg, ...)`.
    Call {
        /// The `(` token.
        token: Token,
        /// The called expression.
        function: Box<Expression>,
        /// The argument expressions in source order.
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// The token this expression originates from.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Identifier(identifier) => &identifier.token,
            Self::IntegerLiteral { token, .. }
            | Self::BooleanLiteral { token, .. }
            | Self::StringLiteral { token, .. }
            | Self::ArrayLiteral { token, .. }
            | Self::HashLiteral { token, .. }
            | Self::Prefix { token, .. }
            | Self::Infix { token, .. }
            | Self::Index { token, .. }
            | Self::Dot { token, .. }
            | Self::If { token, .. }
            | Self::FunctionLiteral { token, .. }
            | Self::Call { token, .. } => token,
        }
    }

    /// The literal text of the originating token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token().literal()
    }

    pub(crate) fn write_debug(&self, out: &mut String, depth: usize) {
        match self {
            Self::Identifier(identifier) => {
                debug_line(out, &format!("Identifier ({identifier})"), depth);
            },
            Self::IntegerLiteral { value, .. } => {
                debug_line(out, &format!("IntegerLiteral ({value})"), depth);
            },
            Self::BooleanLiteral { value, .. } => {
                debug_line(out, &format!("BooleanLiteral ({value})"), depth);
            },
            Self::StringLiteral { value, .. } => {
                debug_line(out, &format!("StringLiteral ({value})"), depth);
            },
            Self::ArrayLiteral { elements, .. } => {
                debug_line(out, "ArrayLiteral {", depth);
                for element in elements {
                    element.write_debug(out, depth + 1);
                }
                debug_line(out, "}", depth);
            },
            Self::HashLiteral { pairs, .. } => {
                debug_line(out, "HashLiteral {", depth);
                for (key, value) in pairs {
                    key.write_debug(out, depth + 1);
                    value.write_debug(out, depth + 1);
                }
                debug_line(out, "}", depth);
            },
            Self::Prefix { operator, right, .. } => {
                debug_line(out, &format!("PrefixExpression ({operator}) {{"), depth);
                right.write_debug(out, depth + 1);
                debug_line(out, "}", depth);
            },
            Self::Infix { left, operator, right, .. } => {
                debug_line(out, &format!("InfixExpression ({operator}) {{"), depth);
                left.write_debug(out, depth + 1);
                right.write_debug(out, depth + 1);
                debug_line(out, "}", depth);
            },
            Self::Index { left, index, .. } => {
                debug_line(out, "IndexExpression {", depth);
                left.write_debug(out, depth + 1);
                index.write_debug(out, depth + 1);
                debug_line(out, "}", depth);
            },
            Self::Dot { left, name, .. } => {
                debug_line(out, "DotExpression {", depth);
                left.write_debug(out, depth + 1);
                debug_line(out, &format!("Identifier ({name})"), depth + 1);
                debug_line(out, "}", depth);
            },
            Self::If { condition, consequence, alternative, .. } => {
                debug_line(out, "IfExpression {", depth);
                condition.write_debug(out, depth + 1);
                for statement in &consequence.statements {
                    statement.write_debug(out, depth + 1);
                }
                if let Some(alternative) = alternative {
                    debug_line(out, "Else {", depth + 1);
                    for statement in &alternative.statements {
                        statement.write_debug(out, depth + 2);
                    }
                    debug_line(out, "}", depth + 1);
                }
                debug_line(out, "}", depth);
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                debug_line(out, "FunctionLiteral {", depth);
                for parameter in parameters {
                    debug_line(out, &format!("Identifier ({parameter})"), depth + 1);
                }
                for statement in &body.statements {
                    statement.write_debug(out, depth + 1);
                }
                debug_line(out, "}", depth);
            },
            Self::Call { function, arguments, .. } => {
                debug_line(out, "CallExpression {", depth);
                function.write_debug(out, depth + 1);
                for argument in arguments {
                    argument.write_debug(out, depth + 1);
                }
                debug_line(out, "}", depth);
            },
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral { token, .. } | Self::BooleanLiteral { token, .. } => {
                write!(f, "{}", token.literal())
            },
            Self::StringLiteral { value, .. } => write!(f, "\"{}\"", escape_string(value)),
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[{}]", join_expressions(elements))
            },
            Self::HashLiteral { pairs, .. } => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(key, value)| format!("{key}:{value}")).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            },
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right, .. } => {
                write!(f, "({left} {operator} {right})")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::Dot { left, name, .. } => write!(f, "({left}.{name})"),
            Self::If { condition, consequence, alternative, .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                let rendered: Vec<String> =
                    parameters.iter().map(ToString::to_string).collect();
                write!(f, "fn({}) {body}", rendered.join(", "))
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}({})", join_expressions(arguments))
            },
        }
    }
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

/// An infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Re-applies the scanner's escape sequences so rendered string literals
/// survive a re-parse unchanged.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '"' => escaped.push_str("\\\""),
            other => escaped.push(other),
        }
    }
    escaped
}

fn join_expressions(expressions: &[Expression]) -> String {
    let rendered: Vec<String> = expressions.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}

fn debug_line(out: &mut String, text: &str, depth: usize) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), text);
}
