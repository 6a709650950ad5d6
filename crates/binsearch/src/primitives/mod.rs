//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the host value model used by the
//! rest of the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Host-supplied arrays and element classes.
pub mod host;
