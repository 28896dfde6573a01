/// Numeric parsing helpers.
///
/// Shared routines for turning integer literal text into `i64` values. Both
/// the parser (for source literals) and the `int` builtin (for string
/// coercion) go through this module so base detection behaves identically in
/// both places.
pub mod num;
