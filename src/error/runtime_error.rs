use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::object::core::ObjectType,
};

#[derive(Debug, Clone, PartialEq)]
/// Represents all error conditions that can arise during evaluation.
///
/// A `RuntimeError` is carried inside `Object::Error` and flows through the
/// evaluator like any other value; the `Display` impl is the user-visible
/// message.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type of the left operand.
        left: ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right: ObjectType,
    },
    /// An infix operator is not defined for its (same-typed) operands.
    UnknownInfixOperator {
        /// Type of the left operand.
        left: ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right: ObjectType,
    },
    /// A prefix operator is not defined for its operand.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        right: ObjectType,
    },
    /// A name was referenced that no scope (and no builtin) defines.
    UndefinedIdentifier {
        /// The name.
        name: String,
    },
    /// Assignment to a name no enclosing scope has bound with `let`.
    UndefinedAssignment {
        /// The name.
        name: String,
    },
    /// A hash literal key of a type that cannot be hashed.
    UnusableHashKey {
        /// The key's type.
        key: ObjectType,
    },
    /// A hash was indexed with a value of a type that cannot be hashed.
    InvalidHashIndex {
        /// The index's type.
        key: ObjectType,
    },
    /// The index operator was applied to a container that does not support
    /// it.
    IndexNotSupported {
        /// The container's type.
        container: ObjectType,
    },
    /// The dot operator was applied to something other than a hash.
    DotNotSupported {
        /// The accessed value's type.
        left: ObjectType,
    },
    /// Something other than a function or builtin was called.
    NotAFunction {
        /// The called value's type.
        callee: ObjectType,
    },
    /// A function was called with fewer arguments than parameters.
    MissingParameters {
        /// The parameters left unbound, in declaration order.
        names: Vec<String>,
    },
    /// A builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were passed.
        got: usize,
        /// How many the builtin takes.
        want: usize,
    },
    /// A builtin received an argument of a type it does not operate on.
    UnsupportedArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// The argument's type.
        got: ObjectType,
    },
    /// The `int` coercion got a string that is not a valid integer.
    IntParse {
        /// The offending string contents.
        value: String,
    },
    /// The `int` coercion got a value of an inconvertible type.
    UnsupportedCast {
        /// The source type.
        from: ObjectType,
        /// The target type.
        to: ObjectType,
    },
    /// Integer division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UndefinedIdentifier { name } => {
                write!(f, "identifier {name} is undefined")
            },
            Self::UndefinedAssignment { name } => {
                write!(f, "assign to an undefined identifier {name}")
            },
            Self::UnusableHashKey { key } => write!(f, "unusable as hash key: {key}"),
            Self::InvalidHashIndex { key } => write!(f, "unable to use hash key: {key}"),
            Self::IndexNotSupported { container } => {
                write!(f, "index operator not supported: {container}")
            },
            Self::DotNotSupported { left } => {
                write!(f, "dot operator not supported: {left}")
            },
            Self::NotAFunction { callee } => write!(f, "not a function: {callee}"),
            Self::MissingParameters { names } => {
                write!(f, "function call is missing parameters: {}", names.join(", "))
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments, got={got}, want={want}")
            },
            Self::UnsupportedArgument { builtin, got } => {
                write!(f, "argument to `{builtin}` not supported, got {got}")
            },
            Self::IntParse { value } => {
                write!(f, "cannot parse \"{value}\" to int: invalid syntax")
            },
            Self::UnsupportedCast { from, to } => {
                write!(f, "cannot cast {from} to {to}: incompatible types")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
