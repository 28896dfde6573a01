//! # quill
//!
//! quill is a small, dynamically typed scripting language written in Rust.
//! It is lexically scoped with first-class functions and closures, and its
//! values are 64-bit integers, booleans, strings, arrays, hash maps, `null`
//! and first-class error values.
//!
//! Source text flows through a scanner into a Pratt parser, and the
//! resulting syntax tree is executed by a recursive evaluator that threads a
//! chain of shared environments through every function call.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        object::{core::Object, environment::Env},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// source code as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches the originating token to every node.
/// - Renders nodes back into source-like text and into debug trees.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Parse errors accumulate in the parser; runtime errors
/// double as first-class language values.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failures.
/// - Produces the exact user-visible message strings via `Display`.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the value model, and
/// evaluation to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, object model, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, evaluates it against a persistent global
/// environment, and prints the result's printable form.
pub mod repl;
/// General utilities shared across phases.
///
/// Currently holds the numeric literal parsing used by both the parser and
/// the `int` builtin.
///
/// # Responsibilities
/// - Integer parsing with automatic base detection.
pub mod util;

/// Parses and evaluates a complete source text against the given
/// environment.
///
/// Parse diagnostics abort evaluation: if any accumulate, they are returned
/// and nothing runs. Otherwise the program's result is returned — which may
/// itself be an `Object::Error`, since runtime errors are ordinary values.
///
/// # Errors
/// Returns the parser's diagnostics when the source does not parse cleanly.
///
/// # Examples
/// ```
/// use quill::{interpret, interpreter::object::environment::Environment};
///
/// let env = Environment::global();
/// let result = interpret("let x = 2 + 3; x", &env).unwrap();
/// assert_eq!(result.inspect(), "5");
///
/// // Runtime errors come back as values, not as `Err`.
/// let result = interpret("5 + true", &env).unwrap();
/// assert!(result.is_error());
/// ```
pub fn interpret(source: &str, env: &Env) -> Result<Object, Vec<ParseError>> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(parser.into_errors());
    }

    Ok(eval_program(&program, env))
}
