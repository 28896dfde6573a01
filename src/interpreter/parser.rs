/// Parser state and the expression-precedence ladder.
///
/// Contains the `Parser` struct with its two-token lookahead, the diagnostic
/// accumulator, the program loop, and the resynchronization logic that lets
/// parsing continue after an error.
pub mod core;

/// Expression parsing.
///
/// The Pratt dispatch: prefix handlers for literals, identifiers, grouping,
/// conditionals and function literals, and infix handlers for binary
/// operators, calls, indexing and field access.
pub mod expression;

/// Statement parsing.
///
/// Handles `let`, `return`, assignments, expression statements, and
/// brace-delimited blocks.
pub mod statement;
