//! High-level API for binsearch.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the free functions
//! [`search`] and [`locate`] for direct use, and a fluent builder producing a
//! configured [`Binsearch`] for host calls.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for every option.
//! * **Validated**: Duplicate settings are reported when `.build()` is called.
//! * **Cheap**: The built searcher is `Copy` and holds no buffers.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BinsearchBuilder`] via `Binsearch::new()` (prelude name).
//! 2. Chain configuration methods (`.integer_classes()`, `.nan_target()`).
//! 3. Call `.build()` to get a [`Binsearch`].

// Internal dependencies
use crate::engine::dispatch::Dispatcher;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::bisection::{SearchOutcome, locate, search};
pub use crate::engine::validator::NanTarget;
pub use crate::primitives::errors::{ErrorKind, SearchError};
pub use crate::primitives::host::{HostArray, HostClass, HostData};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a host-call searcher.
#[derive(Debug, Clone, Default)]
pub struct BinsearchBuilder {
    /// Accept `int32`/`int64` sequences (default: false).
    pub integer_classes: Option<bool>,

    /// NaN target policy (default: PassThrough).
    pub nan_target: Option<NanTarget>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl BinsearchBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable integer element classes.
    pub fn integer_classes(mut self, enabled: bool) -> Self {
        if self.integer_classes.is_some() {
            self.duplicate_param = Some("integer_classes");
        }
        self.integer_classes = Some(enabled);
        self
    }

    /// Set the NaN target policy.
    pub fn nan_target(mut self, policy: NanTarget) -> Self {
        if self.nan_target.is_some() {
            self.duplicate_param = Some("nan_target");
        }
        self.nan_target = Some(policy);
        self
    }

    /// Validate the configuration and build the searcher.
    pub fn build(self) -> Result<Binsearch, SearchError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Binsearch {
            dispatcher: Dispatcher {
                integer_classes: self.integer_classes.unwrap_or(false),
                nan_target: self.nan_target.unwrap_or_default(),
            },
        })
    }
}

// ============================================================================
// Configured Searcher
// ============================================================================

/// A configured searcher for host calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Binsearch {
    dispatcher: Dispatcher,
}

impl Binsearch {
    /// Run a validated host call and return the result as the host sees it.
    ///
    /// `inputs` are the positional arguments (sequence, target); `nlhs` is the
    /// number of outputs the host requested.
    pub fn call(&self, inputs: &[HostArray<'_>], nlhs: usize) -> Result<f64, SearchError> {
        self.dispatcher.call(inputs, nlhs)
    }

    /// Check argument counts alone, for hosts that marshal inputs lazily.
    ///
    /// [`Binsearch::call`] runs the same check first.
    pub fn validate_arity(&self, nrhs: usize, nlhs: usize) -> Result<(), SearchError> {
        Validator::validate_arity(nrhs, nlhs)
    }

    /// Whether integer element classes are accepted.
    pub fn integer_classes(&self) -> bool {
        self.dispatcher.integer_classes
    }

    /// Configured NaN target policy.
    pub fn nan_target(&self) -> NanTarget {
        self.dispatcher.nan_target
    }
}
