//! Waits on a named set of already-spawned resolver tasks and settles them
//! as one unit.
//!
//! [`resolve_object()`] never fails fast: it waits for every task, then
//! either returns every value under its original key or returns a single
//! [`ResolveFailure`] holding every failure, flattened one level.

mod resolve_failure;
mod resolve_object;

pub use resolve_failure::ResolveFailure;
pub use resolve_object::resolve_object;

#[cfg(test)]
mod tests;
