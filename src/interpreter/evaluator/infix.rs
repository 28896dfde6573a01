use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::object::core::{Object, ObjectType},
};

/// Evaluates an infix operation on already-evaluated operands.
///
/// Dispatch order: two integers take the arithmetic path, two strings the
/// string path, then `==`/`!=` compare any remaining pair (mismatched types
/// are simply unequal), then mismatched types are a type error, and anything
/// left is an unknown operator for its (same-typed) operands.
pub fn eval_infix_expression(operator: InfixOperator, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r)
        },
        (Object::Str(l), Object::Str(r)) => eval_string_infix_expression(operator, l, r),
        _ => match operator {
            InfixOperator::Equal => Object::Boolean(left == right),
            InfixOperator::NotEqual => Object::Boolean(left != right),
            _ if left.type_tag() != right.type_tag() => {
                Object::Error(RuntimeError::TypeMismatch {
                    left: left.type_tag(),
                    operator,
                    right: right.type_tag(),
                })
            },
            _ => Object::Error(RuntimeError::UnknownInfixOperator {
                left: left.type_tag(),
                operator,
                right: right.type_tag(),
            }),
        },
    }
}

/// 64-bit signed arithmetic and comparison. Addition, subtraction and
/// multiplication wrap on overflow; division truncates toward zero and
/// rejects a zero divisor.
fn eval_integer_infix_expression(operator: InfixOperator, left: i64, right: i64) -> Object {
    match operator {
        InfixOperator::Add => Object::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Object::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Object::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Object::Error(RuntimeError::DivisionByZero);
            }
            Object::Integer(left.wrapping_div(right))
        },
        InfixOperator::Less => Object::Boolean(left < right),
        InfixOperator::Greater => Object::Boolean(left > right),
        InfixOperator::Equal => Object::Boolean(left == right),
        InfixOperator::NotEqual => Object::Boolean(left != right),
    }
}

/// String operations: `+` concatenates, `==`/`!=` compare contents.
fn eval_string_infix_expression(operator: InfixOperator, left: &str, right: &str) -> Object {
    match operator {
        InfixOperator::Add => Object::from(format!("{left}{right}")),
        InfixOperator::Equal => Object::Boolean(left == right),
        InfixOperator::NotEqual => Object::Boolean(left != right),
        _ => Object::Error(RuntimeError::UnknownInfixOperator {
            left: ObjectType::String,
            operator,
            right: ObjectType::String,
        }),
    }
}
