use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::object::core::{HashKey, HashPair, Object},
};

/// Evaluates `container[index]` on already-evaluated operands.
///
/// Arrays and strings take integer indices; out-of-range and negative
/// indices yield Null rather than an error. Hashes take any hashable index;
/// a missing key yields Null. Everything else is an error naming the
/// container's type.
pub fn eval_index_expression(left: &Object, index: &Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(position)) => {
            eval_array_index(elements, *position)
        },
        (Object::Str(contents), Object::Integer(position)) => {
            eval_string_index(contents, *position)
        },
        (Object::Hash(pairs), key) => eval_hash_index(pairs, key),
        _ => Object::Error(RuntimeError::IndexNotSupported { container: left.type_tag() }),
    }
}

/// Evaluates `value.field`: hash lookup with the field name as a string key.
pub fn eval_dot_expression(left: &Object, field: &str) -> Object {
    match left {
        Object::Hash(pairs) => eval_hash_index(pairs, &Object::from(field.to_owned())),
        other => Object::Error(RuntimeError::DotNotSupported { left: other.type_tag() }),
    }
}

fn eval_array_index(elements: &[Object], position: i64) -> Object {
    let Ok(position) = usize::try_from(position) else {
        return Object::Null;
    };

    elements.get(position).cloned().unwrap_or(Object::Null)
}

/// Indexing a string yields the single character at that position as a new
/// string, with the same bounds policy as arrays.
fn eval_string_index(contents: &str, position: i64) -> Object {
    let Ok(position) = usize::try_from(position) else {
        return Object::Null;
    };

    match contents.chars().nth(position) {
        Some(c) => Object::from(c.to_string()),
        None => Object::Null,
    }
}

fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>, key: &Object) -> Object {
    let Some(hash_key) = key.hash_key() else {
        return Object::Error(RuntimeError::InvalidHashIndex { key: key.type_tag() });
    };

    match pairs.get(&hash_key) {
        Some(pair) => pair.value.clone(),
        None => Object::Null,
    }
}
