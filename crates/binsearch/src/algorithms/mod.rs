//! Layer 2: Algorithms
//!
//! This layer implements the bisection and the signed result encoding. It
//! knows nothing about hosts; the engine layer validates and dispatches to it.

// Binary search and its typed outcome.
pub mod bisection;
