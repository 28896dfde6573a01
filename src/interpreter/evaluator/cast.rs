use crate::{
    error::RuntimeError,
    interpreter::object::core::{Object, ObjectType},
    util::num::parse_integer,
};

/// The truthiness rule: `false`, `null` and `0` are false, every other
/// value is true.
///
/// This single function backs `if` conditions, the `!` operator and the
/// `bool` builtin, so the three always agree.
#[must_use]
pub fn is_truthy(object: &Object) -> bool {
    match object {
        Object::Boolean(value) => *value,
        Object::Integer(value) => *value != 0,
        Object::Null => false,
        _ => true,
    }
}

/// Coerces any value to a string via its printable form.
///
/// Note that this means `string(null)` is `"null"` and `string("x")` is
/// `"x"` — no quoting is applied.
#[must_use]
pub fn to_string_object(object: &Object) -> Object {
    Object::from(object.inspect())
}

/// Coerces a value to an integer.
///
/// Integers pass through; `true`/`false` become 1/0; strings parse with
/// automatic base detection (`0b`/`0o`/`0x`, else decimal, optional sign).
/// Anything else cannot be cast.
#[must_use]
pub fn to_integer_object(object: &Object) -> Object {
    match object {
        Object::Integer(_) => object.clone(),
        Object::Boolean(value) => Object::Integer(i64::from(*value)),
        Object::Str(value) => match parse_integer(value) {
            Some(parsed) => Object::Integer(parsed),
            None => Object::Error(RuntimeError::IntParse { value: (**value).clone() }),
        },
        other => Object::Error(RuntimeError::UnsupportedCast {
            from: other.type_tag(),
            to: ObjectType::Integer,
        }),
    }
}

/// Coerces any value to a boolean via [`is_truthy`].
#[must_use]
pub fn to_boolean_object(object: &Object) -> Object {
    Object::Boolean(is_truthy(object))
}
