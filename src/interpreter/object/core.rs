use std::{collections::HashMap, hash::Hasher, rc::Rc};

use fnv::FnvHasher;

use crate::{ast::BlockStatement, error::RuntimeError, interpreter::object::environment::Env};

/// The type tag of a runtime value.
///
/// Tags are cheap to copy and compare; their `Display` forms appear verbatim
/// in runtime error messages (`type mismatch: INTEGER + BOOLEAN`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// A 64-bit signed integer.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// A string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A hash map.
    Hash,
    /// A user-defined function.
    Function,
    /// A host-implemented function.
    Builtin,
    /// The internal `return` carrier.
    Return,
    /// A runtime error value.
    Error,
    /// The absence of a value.
    Null,
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Return => "RETURN",
            Self::Error => "ERROR",
            Self::Null => "NULL",
        };
        write!(f, "{tag}")
    }
}

/// The storage key of a hash entry: the value's type tag plus a 64-bit
/// digest.
///
/// Carrying the tag guarantees that equal digests of different types never
/// collide (`1` and `true` are distinct keys). Two values that compare equal
/// produce identical keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The tag of the key's value.
    pub object_type: ObjectType,
    /// The 64-bit digest of the key's payload.
    pub value: u64,
}

/// A hash entry: the original key value alongside the stored value.
///
/// The original key is kept so `inspect` can render the hash with its real
/// keys rather than digests.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written.
    pub key: Object,
    /// The stored value.
    pub value: Object,
}

/// A user-defined function: parameter names, body, and the environment
/// captured at the point of definition.
#[derive(Clone)]
pub struct FunctionObject {
    /// The parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body: BlockStatement,
    /// The captured defining environment.
    pub env: Env,
}

// The captured environment can reach back to this function through its own
// bindings, so the derived Debug impl would recurse forever.
impl std::fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionObject")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}

/// The signature of a host-implemented builtin function.
pub type BuiltinFunction = fn(Vec<Object>) -> Object;

/// A runtime value.
///
/// Aggregate values (`Str`, `Array`, `Hash`, `Function`) share their payload
/// through `Rc`, so copying an `Object` is cheap and two bindings of the same
/// array observe the same allocation.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// A string value.
    Str(Rc<String>),
    /// The absence of a value.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Object>>),
    /// A hash map from [`HashKey`] to its entry.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// The internal carrier a `return` statement wraps its value in. It
    /// unwinds through blocks and is consumed at the function-call boundary;
    /// it never escapes into user-visible storage.
    Return(Rc<Object>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionObject>),
    /// A host-implemented function.
    Builtin(BuiltinFunction),
    /// A runtime error travelling through the evaluation as a value.
    Error(RuntimeError),
}

impl Object {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn type_tag(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Str(_) => ObjectType::String,
            Self::Null => ObjectType::Null,
            Self::Array(_) => ObjectType::Array,
            Self::Hash(_) => ObjectType::Hash,
            Self::Return(_) => ObjectType::Return,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
            Self::Error(_) => ObjectType::Error,
        }
    }

    /// Returns `true` if this value is a runtime error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Renders the human-printable form of this value.
    ///
    /// Strings print their raw contents (no quotes), arrays `[a, b, c]`,
    /// hashes `{k:v, ...}` in storage order, functions their source-like
    /// form, errors `ERROR: <message>`.
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::Str(value) => (**value).clone(),
            Self::Null => "null".to_owned(),
            Self::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(Self::inspect).collect();
                format!("[{}]", rendered.join(", "))
            },
            Self::Hash(pairs) => {
                let rendered: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}:{}", pair.key.inspect(), pair.value.inspect()))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            },
            Self::Return(value) => value.inspect(),
            Self::Function(function) => {
                let body: Vec<String> =
                    function.body.statements.iter().map(ToString::to_string).collect();
                format!("fn({}) {{\n{}\n}}", function.parameters.join(", "), body.join(" "))
            },
            Self::Builtin(_) => "builtin function".to_owned(),
            Self::Error(error) => format!("ERROR: {error}"),
        }
    }

    /// Returns the storage key of this value, or `None` if the value's type
    /// is not hashable. Only integers, booleans and strings hash.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey {
                object_type: ObjectType::Integer,
                #[allow(clippy::cast_sign_loss)]
                value: *value as u64,
            }),
            Self::Boolean(value) => Some(HashKey {
                object_type: ObjectType::Boolean,
                value: u64::from(*value),
            }),
            Self::Str(value) => {
                let mut hasher = FnvHasher::default();
                hasher.write(value.as_bytes());
                Some(HashKey { object_type: ObjectType::String, value: hasher.finish() })
            },
            _ => None,
        }
    }
}

/// Equality follows what a program can observe: integers, booleans, strings,
/// null and errors compare by value; arrays, hashes and functions compare by
/// identity of their shared allocation. Values of different types are never
/// equal.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left == right,
            (Self::Return(left), Self::Return(right)) => left == right,
            (Self::Error(left), Self::Error(right)) => left == right,
            _ => false,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::Str(Rc::new(value))
    }
}

impl From<Vec<Self>> for Object {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

impl From<RuntimeError> for Object {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}
