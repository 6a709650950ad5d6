//! Host value model for the call boundary.
//!
//! ## Purpose
//!
//! This module describes the arrays a host runtime hands to binsearch: a
//! borrowed, typed buffer plus the dimensions and complex flag the host
//! attached to it. The engine layer validates these before the search runs.
//!
//! ## Design notes
//!
//! * **Zero-copy**: `HostArray` only borrows the host's buffer.
//! * **Closed set**: `HostData` enumerates the element classes the boundary can dispatch on.
//! * **Host naming**: Classes report the names hosts use (`double`, `single`, ...).
//!
//! ## Invariants
//!
//! * `rows * cols == data.len()` for every constructed `HostArray`.
//! * A complex array stores only its real part; the flag exists so it can be rejected.
//!
//! ## Non-goals
//!
//! * This module does not validate shapes or classes against a call's requirements.
//! * This module does not copy or convert element data.

// Internal dependencies
use crate::primitives::errors::SearchError;

// ============================================================================
// Element Class
// ============================================================================

/// Element class of a host array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostClass {
    /// 64-bit IEEE float.
    Double,

    /// 32-bit IEEE float.
    Single,

    /// 32-bit signed integer.
    Int32,

    /// 64-bit signed integer.
    Int64,
}

impl HostClass {
    /// Name of the class as the host spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Single => "single",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
        }
    }

    /// Whether the class is a floating-point representation.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Double | Self::Single)
    }
}

// ============================================================================
// Typed Data
// ============================================================================

/// Borrowed element buffer, tagged by class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostData<'a> {
    Double(&'a [f64]),
    Single(&'a [f32]),
    Int32(&'a [i32]),
    Int64(&'a [i64]),
}

impl HostData<'_> {
    /// Element class of the buffer.
    pub fn class(&self) -> HostClass {
        match self {
            Self::Double(_) => HostClass::Double,
            Self::Single(_) => HostClass::Single,
            Self::Int32(_) => HostClass::Int32,
            Self::Int64(_) => HostClass::Int64,
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Self::Double(d) => d.len(),
            Self::Single(d) => d.len(),
            Self::Int32(d) => d.len(),
            Self::Int64(d) => d.len(),
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_slice {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a [$ty]> for HostData<'a> {
                fn from(data: &'a [$ty]) -> Self {
                    Self::$variant(data)
                }
            }
        )*
    };
}

impl_from_slice!(f64 => Double, f32 => Single, i32 => Int32, i64 => Int64);

// ============================================================================
// Host Array
// ============================================================================

/// A host-supplied array: typed data with its declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostArray<'a> {
    data: HostData<'a>,
    rows: usize,
    cols: usize,
    complex: bool,
}

impl<'a> HostArray<'a> {
    /// A `1 x n` row vector over `data`.
    pub fn vector<D: Into<HostData<'a>>>(data: D) -> Self {
        let data = data.into();
        Self {
            rows: 1,
            cols: data.len(),
            data,
            complex: false,
        }
    }

    /// Alias of [`HostArray::vector`]; reads better for a one-element target.
    pub fn scalar<D: Into<HostData<'a>>>(data: D) -> Self {
        Self::vector(data)
    }

    /// An array with explicit dimensions.
    ///
    /// Fails with [`SearchError::InvalidShape`] if `rows * cols` does not
    /// equal the number of elements in `data`.
    pub fn with_shape<D: Into<HostData<'a>>>(
        data: D,
        rows: usize,
        cols: usize,
    ) -> Result<Self, SearchError> {
        let data = data.into();
        let len = data.len();
        if rows.checked_mul(cols) != Some(len) {
            return Err(SearchError::InvalidShape { rows, cols, len });
        }
        Ok(Self {
            data,
            rows,
            cols,
            complex: false,
        })
    }

    /// Mark the array as carrying an imaginary part.
    pub fn complex(mut self) -> Self {
        self.complex = true;
        self
    }

    /// Borrowed element data.
    pub fn data(&self) -> HostData<'a> {
        self.data
    }

    /// Element class.
    pub fn class(&self) -> HostClass {
        self.data.class()
    }

    /// Declared row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Declared column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the array was marked complex.
    pub fn is_complex(&self) -> bool {
        self.complex
    }

    /// Whether the array is a row or column vector (or a scalar).
    pub fn is_vector(&self) -> bool {
        self.rows <= 1 || self.cols <= 1
    }
}
