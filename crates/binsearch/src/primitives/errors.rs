//! Error types for host calls into binsearch.
//!
//! ## Purpose
//!
//! This module defines the conditions under which a host call is aborted
//! before the search runs: wrong argument counts, malformed arrays, and
//! element-class disagreements.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (counts, shapes, class names).
//! * **Allocation-free**: Every payload is `Copy`, so the type works without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! Every variant belongs to one [`ErrorKind`]:
//!
//! 1. **Arity**: Wrong number of inputs or outputs.
//! 2. **Shape**: Empty, multi-dimensional, complex, or non-scalar inputs.
//! 3. **TypeMismatch**: Sequence and target classes differ.
//! 4. **Unsupported**: Element class not enabled, or NaN target under `Reject`.
//! 5. **Configuration**: Builder misuse.
//!
//! ## Invariants
//!
//! * The search itself never produces a `SearchError`.
//! * Messages name the input position the way the host sees it (1-based).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; every error is fatal to its call.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of inputs or outputs.
    Arity,

    /// Input is empty, not a vector, complex-valued, or not a scalar.
    Shape,

    /// Sequence and target use different element classes.
    TypeMismatch,

    /// The call is well-formed but asks for something the searcher does not accept.
    Unsupported,

    /// The searcher itself was misconfigured.
    Configuration,
}

impl ErrorKind {
    /// Stable lowercase name, suitable for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arity => "arity",
            Self::Shape => "shape",
            Self::TypeMismatch => "type_mismatch",
            Self::Unsupported => "unsupported",
            Self::Configuration => "configuration",
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for host calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The call must supply exactly two inputs (sequence, target).
    InputArity {
        /// Number of inputs supplied.
        got: usize,
    },

    /// The call may request at most one output.
    OutputArity {
        /// Number of outputs requested.
        got: usize,
    },

    /// The sequence has no elements.
    EmptyInput,

    /// An input carries an imaginary part.
    ComplexInput {
        /// 1-based input position.
        position: usize,
    },

    /// The sequence is a matrix rather than a row or column vector.
    NotVector {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The target must hold exactly one element.
    NonScalarTarget {
        /// Number of elements supplied.
        len: usize,
    },

    /// Declared dimensions disagree with the number of elements supplied.
    InvalidShape {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
        /// Actual number of elements.
        len: usize,
    },

    /// Target class differs from the sequence class.
    TypeMismatch {
        /// Class of the sequence.
        expected: &'static str,
        /// Class of the target.
        got: &'static str,
    },

    /// The sequence class is not enabled for this searcher.
    UnsupportedClass {
        /// Host name of the class.
        class: &'static str,
    },

    /// Target is NaN and the searcher was configured to reject it.
    NanTarget,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl SearchError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputArity { .. } | Self::OutputArity { .. } => ErrorKind::Arity,
            Self::EmptyInput
            | Self::ComplexInput { .. }
            | Self::NotVector { .. }
            | Self::NonScalarTarget { .. }
            | Self::InvalidShape { .. } => ErrorKind::Shape,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::UnsupportedClass { .. } | Self::NanTarget => ErrorKind::Unsupported,
            Self::DuplicateParameter { .. } => ErrorKind::Configuration,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

const SEQUENCE_SHAPE: &str = "Input 1 (data) must be a noncomplex, non-empty vector.";

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InputArity { got } => {
                write!(
                    f,
                    "binsearch requires exactly two input arguments (got {got})."
                )
            }
            Self::OutputArity { got } => {
                write!(
                    f,
                    "binsearch requires exactly one output argument (got {got})."
                )
            }
            Self::EmptyInput => write!(f, "{SEQUENCE_SHAPE} Got an empty array."),
            Self::NotVector { rows, cols } => {
                write!(f, "{SEQUENCE_SHAPE} Got a {rows}x{cols} matrix.")
            }
            Self::ComplexInput { position: 1 } => {
                write!(f, "{SEQUENCE_SHAPE} Got a complex array.")
            }
            Self::ComplexInput { position } => write!(f, "Input {position} must be noncomplex."),
            Self::NonScalarTarget { len } => {
                write!(f, "Input 2 (target) must be a scalar (got {len} elements).")
            }
            Self::InvalidShape { rows, cols, len } => {
                write!(
                    f,
                    "Invalid shape: {rows}x{cols} does not match {len} elements."
                )
            }
            Self::TypeMismatch { expected, got } => {
                write!(
                    f,
                    "Input 2 must be {expected} when input 1 is {expected} (got {got})."
                )
            }
            Self::UnsupportedClass { class } => {
                write!(f, "Input 1 (data) has unsupported class '{class}'.")
            }
            Self::NanTarget => write!(f, "Input 2 (target) must not be NaN."),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SearchError {}
