use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::cast, object::core::Object},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// `!` negates the operand's truthiness, so it is defined on every value;
/// `-` is defined on integers only and wraps on overflow.
pub fn eval_prefix_expression(operator: PrefixOperator, right: &Object) -> Object {
    match operator {
        PrefixOperator::Not => Object::Boolean(!cast::is_truthy(right)),
        PrefixOperator::Negate => match right {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            other => Object::Error(RuntimeError::UnknownPrefixOperator {
                operator,
                right: other.type_tag(),
            }),
        },
    }
}
