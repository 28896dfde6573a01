/// Parsing errors.
///
/// Defines all diagnostics the parser can record while turning tokens into an
/// AST. The parser never aborts on these; it accumulates them and returns the
/// (possibly partial) program alongside.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error conditions that can arise during evaluation: type
/// mismatches, unknown operators, undefined identifiers, bad hash keys, wrong
/// argument counts, and failed coercions. Runtime errors travel through the
/// evaluator as first-class values.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
