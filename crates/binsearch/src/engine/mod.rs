//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer is the host call boundary. It validates host-supplied arrays
//! and dispatches them to the typed search in the algorithms layer.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Validated dispatch of host calls.
pub mod dispatch;
