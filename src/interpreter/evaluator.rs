/// Core evaluation logic.
///
/// Contains the recursive node dispatch, program and block evaluation,
/// statement handling, identifier resolution, literal construction, and
/// function application with closure environments.
pub mod core;

/// Builtin functions.
///
/// The host-implemented function table: `len`, `first`, `last`, `tail`,
/// `push`, `puts` and the `string`/`int`/`bool` coercions, all with argument
/// arity checks.
pub mod builtin;

/// Type coercions and truthiness.
///
/// The shared coercion routines behind the `string`, `int` and `bool`
/// builtins and the truthiness rule used by `if` conditions and `!`.
pub mod cast;

/// Index and field-access evaluation.
///
/// Implements `container[index]` for arrays, strings and hashes, and the
/// `value.field` sugar over hash lookup.
pub mod index;

/// Infix operator evaluation.
///
/// The dispatch ladder for binary operators: integer arithmetic and
/// comparison, string concatenation and equality, cross-type equality, and
/// the type-mismatch and unknown-operator error cases.
pub mod infix;

/// Prefix operator evaluation.
///
/// Logical negation via truthiness and arithmetic negation of integers.
pub mod prefix;
