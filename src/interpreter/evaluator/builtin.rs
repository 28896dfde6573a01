use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::cast,
        object::core::{BuiltinFunction, Object},
    },
};

/// Looks a name up in the builtin table.
///
/// Identifier resolution falls back to this table after the scope chain
/// misses, so a bare reference to `len` evaluates to the builtin — and a
/// `let len = ...` binding shadows it.
pub fn lookup(name: &str) -> Option<Object> {
    let function: BuiltinFunction = match name {
        "len" => len,
        "first" => first,
        "last" => last,
        "tail" => tail,
        "push" => push,
        "puts" => puts,
        "string" => cast_string,
        "int" => cast_int,
        "bool" => cast_bool,
        _ => return None,
    };

    Some(Object::Builtin(function))
}

/// `len(x)`: the length of a string (in bytes) or an array.
#[allow(clippy::cast_possible_wrap)]
fn len(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Str(value) => Object::Integer(value.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => unsupported("len", other),
    }
}

/// `first(x)`: the first element of an array (Null when empty) or the first
/// character of a string (empty string when empty).
fn first(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Str(value) => match value.chars().next() {
            Some(c) => Object::from(c.to_string()),
            None => Object::from(String::new()),
        },
        Object::Array(elements) => elements.first().cloned().unwrap_or(Object::Null),
        other => unsupported("first", other),
    }
}

/// `last(x)`: the counterpart of `first` at the other end.
fn last(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Str(value) => match value.chars().last() {
            Some(c) => Object::from(c.to_string()),
            None => Object::from(String::new()),
        },
        Object::Array(elements) => elements.last().cloned().unwrap_or(Object::Null),
        other => unsupported("last", other),
    }
}

/// `tail(x)`: a fresh string or array without its first element. An empty
/// array yields Null, an empty string an empty string.
fn tail(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Str(value) => {
            let mut chars = value.chars();
            chars.next();
            Object::from(chars.as_str().to_owned())
        },
        Object::Array(elements) => {
            if elements.is_empty() {
                return Object::Null;
            }
            Object::from(elements[1..].to_vec())
        },
        other => unsupported("tail", other),
    }
}

/// `push(a, v)`: a new array with `v` appended. The original array is left
/// untouched.
fn push(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 2) {
        return error;
    }

    match &arguments[0] {
        Object::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(arguments[1].clone());
            Object::from(extended)
        },
        other => unsupported("push", other),
    }
}

/// `puts(...)`: writes each argument's printable form on its own line.
/// Accepts any number of arguments and yields Null.
fn puts(arguments: Vec<Object>) -> Object {
    for argument in &arguments {
        println!("{}", argument.inspect());
    }

    Object::Null
}

/// `string(x)`: the printable form of any value, as a string.
fn cast_string(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 1) {
        return error;
    }

    cast::to_string_object(&arguments[0])
}

/// `int(x)`: integer coercion for integers, booleans and strings.
fn cast_int(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 1) {
        return error;
    }

    cast::to_integer_object(&arguments[0])
}

/// `bool(x)`: the truthiness of any value.
fn cast_bool(arguments: Vec<Object>) -> Object {
    if let Some(error) = expect_arity(&arguments, 1) {
        return error;
    }

    cast::to_boolean_object(&arguments[0])
}

fn expect_arity(arguments: &[Object], want: usize) -> Option<Object> {
    if arguments.len() == want {
        None
    } else {
        Some(Object::Error(RuntimeError::WrongArgumentCount { got: arguments.len(), want }))
    }
}

fn unsupported(builtin: &'static str, argument: &Object) -> Object {
    Object::Error(RuntimeError::UnsupportedArgument { builtin, got: argument.type_tag() })
}
