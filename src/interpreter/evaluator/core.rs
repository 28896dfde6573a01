use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStatement, Expression, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, cast, index, infix, prefix},
        object::{
            core::{FunctionObject, HashPair, Object},
            environment::{Env, Environment},
        },
    },
};

/// Evaluates a program and returns its result.
///
/// Statements run in order; the program's result is the last statement's
/// value. A `return` at program level unwraps to its inner value; an error
/// value ends evaluation and becomes the result unchanged. An empty program
/// evaluates to Null.
pub fn eval_program(program: &Program, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Object::Return(value) => return (*value).clone(),
            error @ Object::Error(_) => return error,
            other => result = other,
        }
    }

    result
}

/// Evaluates a block and returns its result.
///
/// Unlike [`eval_program`], a `Return` carrier bubbles up unconsumed so the
/// enclosing function call can see it; errors bubble the same way. Blocks
/// introduce no scope: evaluation happens directly in `env`.
pub fn eval_block(block: &BlockStatement, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &block.statements {
        match eval_statement(statement, env) {
            outcome @ (Object::Return(_) | Object::Error(_)) => return outcome,
            other => result = other,
        }
    }

    result
}

/// Evaluates a single statement.
///
/// `let` binds into the current scope and yields Null; assignment re-binds
/// through the scope chain and yields the assigned value (or the Error from
/// an unbound name); `return` wraps its value in the internal carrier.
pub fn eval_statement(statement: &Statement, env: &Env) -> Object {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(&name.value, value);
            Object::Null
        },
        Statement::Assignment { name, value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().assign(&name.value, value)
        },
        Statement::Return { value, .. } => {
            let value = match value {
                Some(expression) => eval_expression(expression, env),
                None => Object::Null,
            };
            if value.is_error() {
                return value;
            }
            Object::Return(Rc::new(value))
        },
        Statement::Expression { expression, .. } => eval_expression(expression, env),
    }
}

/// Evaluates a single expression.
///
/// Sub-expressions evaluate strictly left to right; the first error
/// short-circuits everything after it.
pub fn eval_expression(expression: &Expression, env: &Env) -> Object {
    match expression {
        Expression::Identifier(identifier) => eval_identifier(identifier, env),
        Expression::IntegerLiteral { value, .. } => Object::Integer(*value),
        Expression::BooleanLiteral { value, .. } => Object::Boolean(*value),
        Expression::StringLiteral { value, .. } => Object::from(value.clone()),
        Expression::ArrayLiteral { elements, .. } => match eval_expressions(elements, env) {
            Ok(elements) => Object::from(elements),
            Err(error) => error,
        },
        Expression::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
        Expression::Prefix { operator, right, .. } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            prefix::eval_prefix_expression(*operator, &right)
        },
        Expression::Infix { left, operator, right, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            infix::eval_infix_expression(*operator, left, right)
        },
        Expression::Index { left, index: subscript, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let subscript = eval_expression(subscript, env);
            if subscript.is_error() {
                return subscript;
            }
            index::eval_index_expression(&left, &subscript)
        },
        Expression::Dot { left, name, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            index::eval_dot_expression(&left, &name.value)
        },
        Expression::If { condition, consequence, alternative, .. } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if cast::is_truthy(&condition) {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Object::Null
            }
        },
        Expression::FunctionLiteral { parameters, body, .. } => {
            Object::Function(Rc::new(FunctionObject {
                parameters: parameters.iter().map(|parameter| parameter.value.clone()).collect(),
                body: body.clone(),
                env: Rc::clone(env),
            }))
        },
        Expression::Call { function, arguments, .. } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            match eval_expressions(arguments, env) {
                Ok(arguments) => apply_function(function, arguments),
                Err(error) => error,
            }
        },
    }
}

/// Applies a function or builtin to already-evaluated arguments.
///
/// User functions run their body in a fresh scope enclosed by the captured
/// environment, with one binding per parameter. Missing arguments are an
/// error naming the unbound parameters; extra arguments are ignored. A
/// `Return` carrier is consumed here, at the call boundary.
pub fn apply_function(function: Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Function(function) => {
            if arguments.len() < function.parameters.len() {
                let names = function.parameters[arguments.len()..].to_vec();
                return Object::Error(RuntimeError::MissingParameters { names });
            }

            let env = Environment::enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.borrow_mut().set(parameter, argument);
            }

            unwrap_return_value(eval_block(&function.body, &env))
        },
        Object::Builtin(builtin) => builtin(arguments),
        other => Object::Error(RuntimeError::NotAFunction { callee: other.type_tag() }),
    }
}

/// Resolves a name: the scope chain first, then the builtin table.
fn eval_identifier(identifier: &Identifier, env: &Env) -> Object {
    if let Some(value) = env.borrow().get(&identifier.value) {
        return value;
    }

    match builtin::lookup(&identifier.value) {
        Some(builtin) => builtin,
        None => {
            Object::Error(RuntimeError::UndefinedIdentifier { name: identifier.value.clone() })
        },
    }
}

/// Evaluates an expression list left to right, stopping at the first error.
fn eval_expressions(expressions: &[Expression], env: &Env) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let evaluated = eval_expression(expression, env);
        if evaluated.is_error() {
            return Err(evaluated);
        }
        results.push(evaluated);
    }

    Ok(results)
}

/// Builds a hash from its key/value expression pairs.
///
/// Keys must be hashable; a key that hashes equal to an earlier one silently
/// overwrites its entry.
fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> Object {
    let mut entries = HashMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return Object::Error(RuntimeError::UnusableHashKey { key: key.type_tag() });
        };

        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }

        entries.insert(hash_key, HashPair { key, value });
    }

    Object::Hash(Rc::new(entries))
}

/// Unwraps a `Return` carrier into its inner value; other values pass
/// through untouched.
fn unwrap_return_value(evaluated: Object) -> Object {
    match evaluated {
        Object::Return(value) => (*value).clone(),
        other => other,
    }
}
