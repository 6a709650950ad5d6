//! Input validation for host calls.
//!
//! ## Purpose
//!
//! This module checks a host call before the search runs: argument counts,
//! sequence and target shapes, element classes, and the target value.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Stateless**: Every check is an associated function on a unit struct.
//! * **Ordering**: The dispatcher runs arity, sequence shape, sequence class,
//!   class match, target shape, then target value.
//!
//! ## Key concepts
//!
//! * **Arity**: Exactly two inputs, at most one output (zero still yields the implicit result).
//! * **Vector Shape**: Non-empty, noncomplex, and `rows <= 1 || cols <= 1`.
//! * **Class Agreement**: Target must use the sequence's element class.
//!
//! ## Invariants
//!
//! * A call that passes every check satisfies the search's type and shape preconditions.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check that the sequence is sorted.
//! * This module does not coerce one element class into another.

// External dependencies
use num_traits::float::FloatCore;

// Internal dependencies
use crate::primitives::errors::SearchError;
use crate::primitives::host::{HostArray, HostClass};

// ============================================================================
// NaN Policy
// ============================================================================

/// What the boundary does with a NaN target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanTarget {
    /// Pass the NaN to the search, which reports it as not found.
    #[default]
    PassThrough,

    /// Abort the call with [`SearchError::NanTarget`].
    Reject,
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for host calls.
///
/// All methods return `Result<(), SearchError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Call Shape
    // ========================================================================

    /// Validate the number of inputs (`nrhs`) and requested outputs (`nlhs`).
    pub fn validate_arity(nrhs: usize, nlhs: usize) -> Result<(), SearchError> {
        if nrhs != 2 {
            return Err(SearchError::InputArity { got: nrhs });
        }
        if nlhs > 1 {
            return Err(SearchError::OutputArity { got: nlhs });
        }
        Ok(())
    }

    // ========================================================================
    // Array Validation
    // ========================================================================

    /// Validate the sequence: non-empty, noncomplex, one-dimensional.
    pub fn validate_sequence(sequence: &HostArray<'_>) -> Result<(), SearchError> {
        if sequence.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        if sequence.is_complex() {
            return Err(SearchError::ComplexInput { position: 1 });
        }
        if !sequence.is_vector() {
            return Err(SearchError::NotVector {
                rows: sequence.rows(),
                cols: sequence.cols(),
            });
        }
        Ok(())
    }

    /// Validate the target: noncomplex with exactly one element.
    pub fn validate_target(target: &HostArray<'_>) -> Result<(), SearchError> {
        if target.len() != 1 {
            return Err(SearchError::NonScalarTarget { len: target.len() });
        }
        if target.is_complex() {
            return Err(SearchError::ComplexInput { position: 2 });
        }
        Ok(())
    }

    // ========================================================================
    // Class Validation
    // ========================================================================

    /// Validate that the sequence's element class is enabled.
    ///
    /// Floating-point classes are always enabled; integer classes only when
    /// `integer_classes` is set.
    pub fn validate_class(class: HostClass, integer_classes: bool) -> Result<(), SearchError> {
        if class.is_float() || integer_classes {
            return Ok(());
        }
        Err(SearchError::UnsupportedClass {
            class: class.name(),
        })
    }

    /// Validate that the target uses the sequence's element class.
    pub fn validate_matching_classes(
        sequence: HostClass,
        target: HostClass,
    ) -> Result<(), SearchError> {
        if sequence != target {
            return Err(SearchError::TypeMismatch {
                expected: sequence.name(),
                got: target.name(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Value Validation
    // ========================================================================

    /// Apply the NaN policy to a floating-point target value.
    pub fn validate_scalar<T: FloatCore>(value: T, policy: NanTarget) -> Result<(), SearchError> {
        if policy == NanTarget::Reject && value.is_nan() {
            return Err(SearchError::NanTarget);
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SearchError> {
        if let Some(param) = duplicate_param {
            return Err(SearchError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
