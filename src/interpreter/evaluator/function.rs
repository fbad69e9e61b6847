/// Call machinery.
///
/// Evaluates callees and arguments, extends captured environments with
/// parameter bindings and unwraps returned values.
pub mod core;

/// Built-in functions.
///
/// The process-wide table of host-provided callables consulted when
/// identifier lookup misses the environment chain.
pub mod builtin;
