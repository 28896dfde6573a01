/// Runtime value types.
///
/// Declares the `Object` enum with every value kind the evaluator produces,
/// the `ObjectType` tags used in diagnostics, hash keys for hash-map storage,
/// and the printable `inspect` forms.
pub mod core;
/// Lexical scopes.
///
/// Defines the environment chain: a mapping from names to values with an
/// optional outer scope. Function values capture their defining environment
/// from here, which is what makes closures work.
pub mod environment;
