//! Validated dispatch from host arrays to the typed search.
//!
//! ## Purpose
//!
//! This module is the call boundary: it takes the positional inputs a host
//! supplied, validates them, picks the search instantiation matching their
//! element class, and returns the result in the host's numeric form.
//!
//! ## Design notes
//!
//! * **One entry point**: [`Dispatcher::call`] mirrors a host function call
//!   (`nlhs` outputs requested, inputs passed positionally).
//! * **Host encoding**: The signed result is returned as `f64` regardless of
//!   element class, as hosts that only return doubles expect.
//! * **All-or-nothing**: A failed check aborts the call; no partial result exists.
//!
//! ## Invariants
//!
//! * The search only runs on inputs that passed every validator check.
//! * Results are exactly representable as `f64` for any sequence under 2^53 elements.

// Internal dependencies
use crate::algorithms::bisection::search;
use crate::engine::validator::{NanTarget, Validator};
use crate::primitives::errors::SearchError;
use crate::primitives::host::{HostArray, HostData};

/// Validated host-call dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatcher {
    /// Accept `int32`/`int64` sequences in addition to `double`/`single`.
    pub integer_classes: bool,

    /// NaN target policy.
    pub nan_target: NanTarget,
}

impl Dispatcher {
    /// Run a host call: validate `inputs` and `nlhs`, search, encode as `f64`.
    pub fn call(&self, inputs: &[HostArray<'_>], nlhs: usize) -> Result<f64, SearchError> {
        Validator::validate_arity(inputs.len(), nlhs)?;

        let [sequence, target] = inputs else {
            return Err(SearchError::InputArity { got: inputs.len() });
        };

        self.validate(sequence, target)?;
        let encoded = Self::dispatch(sequence.data(), target.data())?;

        Ok(encoded as f64)
    }

    /// Run every check that follows the arity check, in order.
    pub fn validate(
        &self,
        sequence: &HostArray<'_>,
        target: &HostArray<'_>,
    ) -> Result<(), SearchError> {
        Validator::validate_sequence(sequence)?;
        Validator::validate_class(sequence.class(), self.integer_classes)?;
        Validator::validate_matching_classes(sequence.class(), target.class())?;
        Validator::validate_target(target)?;

        match target.data() {
            HostData::Double(&[t]) => Validator::validate_scalar(t, self.nan_target),
            HostData::Single(&[t]) => Validator::validate_scalar(t, self.nan_target),
            _ => Ok(()),
        }
    }

    // Pick the search instantiation for the (already validated) element class.
    fn dispatch(sequence: HostData<'_>, target: HostData<'_>) -> Result<isize, SearchError> {
        match (sequence, target) {
            (HostData::Double(x), HostData::Double(&[t])) => Ok(search(x, t)),
            (HostData::Single(x), HostData::Single(&[t])) => Ok(search(x, t)),
            (HostData::Int32(x), HostData::Int32(&[t])) => Ok(search(x, t)),
            (HostData::Int64(x), HostData::Int64(&[t])) => Ok(search(x, t)),
            (HostData::Double(_), HostData::Double(_))
            | (HostData::Single(_), HostData::Single(_))
            | (HostData::Int32(_), HostData::Int32(_))
            | (HostData::Int64(_), HostData::Int64(_)) => {
                Err(SearchError::NonScalarTarget { len: target.len() })
            }
            _ => Err(SearchError::TypeMismatch {
                expected: sequence.class().name(),
                got: target.class().name(),
            }),
        }
    }
}
