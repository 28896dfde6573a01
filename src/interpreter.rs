/// The evaluator executes AST nodes and computes results.
///
/// The evaluator traverses the AST depth-first, evaluates statements and
/// expressions, threads the environment chain through function calls, and
/// produces runtime values. Runtime errors are themselves values and
/// propagate through every operation until they become the program's result.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements closure semantics over shared environments.
/// - Provides the builtin function table and type coercions.
pub mod evaluator;
/// The lexer tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens: keywords,
/// identifiers, integer and string literals, operators and delimiters. It
/// never fails; unrecognized bytes surface as illegal tokens for the parser
/// to report.
///
/// # Responsibilities
/// - Converts the input into tokens, preserving the literal text.
/// - Handles base-prefixed integers, string escapes, and two-byte operators.
/// - Yields an end-of-input token forever once the source is exhausted.
pub mod lexer;
/// The value model: runtime objects and lexical scopes.
///
/// Declares every value kind the evaluator produces, the printable and
/// hashable behavior of values, and the environment chain functions capture
/// to form closures.
///
/// # Responsibilities
/// - Defines the `Object` enum and its type tags, `inspect` and hash keys.
/// - Implements observable equality (by value or by shared allocation).
/// - Provides scope lookup, local binding, and outward assignment.
pub mod object;
/// The parser builds the abstract syntax tree from tokens.
///
/// A Pratt parser with two tokens of lookahead. It accumulates human-readable
/// diagnostics instead of aborting, resynchronizes at statement boundaries,
/// and always returns the (possibly partial) program.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Drives operator precedence through per-token binding strengths.
/// - Records diagnostics for every failed expectation.
pub mod parser;
