//! C bindings for binsearch.
//!
//! Provides C access to the binsearch Rust library via C FFI:
//!
//! - `binsearch_f64`, `binsearch_f32`, `binsearch_i32`, `binsearch_i64`:
//!   unchecked per-type searches over a pointer and length.
//! - `binsearch_call`: a validated host-style call taking positional array
//!   descriptors, returning the index as a double or an error message.
//!
//! Rejected calls are reported through `tracing` at `debug` level; the
//! library never installs a subscriber.

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_double, c_float, c_int, c_ulong, c_void};
use std::ptr;
use std::slice;

use binsearch::prelude::{
    Binsearch as BinsearchBuilder, HostArray, HostClass, PassThrough, Reject, SearchError,
    Searcher, search,
};

/// Descriptor of one host array passed to `binsearch_call`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CBinsearchArray {
    /// Element buffer of `rows * cols` values of `class_name` (may be NULL when empty)
    pub data: *const c_void,
    /// Row count
    pub rows: c_ulong,
    /// Column count
    pub cols: c_ulong,
    /// Element class: "double", "single", "int32" or "int64" (NULL means "double")
    pub class_name: *const c_char,
    /// Non-zero if the host array carries an imaginary part
    pub is_complex: c_int,
}

/// Options for `binsearch_call`. A NULL pointer selects the defaults (all zero).
#[repr(C)]
#[derive(Default)]
pub struct CBinsearchOptions {
    /// Non-zero to accept int32/int64 sequences
    pub integer_classes: c_int,
    /// Non-zero to reject NaN targets instead of reporting them as not found
    pub reject_nan: c_int,
}

/// Result of `binsearch_call`.
/// The error string is allocated by Rust and must be freed with `binsearch_free_result`.
#[repr(C)]
pub struct CBinsearchResult {
    /// Match index, or -1 - insertion point (NaN on error)
    pub index: c_double,
    /// Error message (NULL if no error)
    pub error: *mut c_char,
}

/// Create an error result with the given message.
fn error_result(msg: &str) -> CBinsearchResult {
    let c_string = CString::new(msg).unwrap_or_default();
    CBinsearchResult {
        index: f64::NAN,
        error: c_string.into_raw(),
    }
}

/// Parse a C string safely. Only NULL selects `default`.
unsafe fn parse_c_str<'a>(s: *const c_char, default: &'a str) -> Result<&'a str, String> {
    if s.is_null() {
        Ok(default)
    } else {
        CStr::from_ptr(s)
            .to_str()
            .map_err(|_| "Class name is not valid UTF-8".to_string())
    }
}

/// Parse an element class from its host name.
fn parse_class(name: &str) -> Result<HostClass, String> {
    match name.to_lowercase().as_str() {
        "double" | "float64" | "f64" => Ok(HostClass::Double),
        "single" | "float32" | "f32" => Ok(HostClass::Single),
        "int32" | "i32" => Ok(HostClass::Int32),
        "int64" | "i64" => Ok(HostClass::Int64),
        _ => Err(format!(
            "Unknown class: {}. Valid: double, single, int32, int64",
            name
        )),
    }
}

/// View `len` elements at `data`; NULL or zero length yields an empty slice.
unsafe fn typed_slice<'a, T>(data: *const c_void, len: usize) -> &'a [T] {
    if data.is_null() || len == 0 {
        &[]
    } else {
        slice::from_raw_parts(data as *const T, len)
    }
}

/// Convert a C descriptor into a borrowed host array.
unsafe fn host_array<'a>(array: &'a CBinsearchArray) -> Result<HostArray<'a>, String> {
    let rows = array.rows as usize;
    let cols = array.cols as usize;
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| format!("Array dimensions overflow: {}x{}", rows, cols))?;
    if len > 0 && array.data.is_null() {
        return Err(format!("Array data is NULL for a {}x{} array", rows, cols));
    }

    let class = parse_class(parse_c_str(array.class_name, "double")?)?;
    let host = match class {
        HostClass::Double => HostArray::with_shape(typed_slice::<f64>(array.data, len), rows, cols),
        HostClass::Single => HostArray::with_shape(typed_slice::<f32>(array.data, len), rows, cols),
        HostClass::Int32 => HostArray::with_shape(typed_slice::<i32>(array.data, len), rows, cols),
        HostClass::Int64 => HostArray::with_shape(typed_slice::<i64>(array.data, len), rows, cols),
    }
    .map_err(|e| e.to_string())?;

    Ok(if array.is_complex != 0 {
        host.complex()
    } else {
        host
    })
}

/// Build the searcher described by `options`.
unsafe fn build_searcher(options: *const CBinsearchOptions) -> Result<Searcher, SearchError> {
    let defaults = CBinsearchOptions::default();
    let options = if options.is_null() {
        &defaults
    } else {
        &*options
    };

    BinsearchBuilder::new()
        .integer_classes(options.integer_classes != 0)
        .nan_target(if options.reject_nan != 0 {
            Reject
        } else {
            PassThrough
        })
        .build()
}

/// Report a rejected call and convert it to a result.
fn rejected(e: SearchError) -> CBinsearchResult {
    tracing::debug!(kind = e.kind().as_str(), "binsearch call rejected: {}", e);
    error_result(&e.to_string())
}

// ============================================================================
// Validated Call
// ============================================================================

/// Validated search: `nrhs` positional inputs (sequence, target), `nlhs` outputs.
///
/// # Safety
/// `prhs` must point to `nrhs` valid descriptors whose data buffers hold
/// `rows * cols` elements of the named class. `options` must be valid or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn binsearch_call(
    nlhs: c_int,
    nrhs: c_int,
    prhs: *const CBinsearchArray,
    options: *const CBinsearchOptions,
) -> CBinsearchResult {
    if nlhs < 0 || nrhs < 0 {
        return error_result("Argument counts must be non-negative");
    }
    let (nlhs, nrhs) = (nlhs as usize, nrhs as usize);

    let searcher = match build_searcher(options) {
        Ok(s) => s,
        Err(e) => return rejected(e),
    };
    if let Err(e) = searcher.validate_arity(nrhs, nlhs) {
        return rejected(e);
    }
    if prhs.is_null() {
        return error_result("Input array pointer is NULL");
    }

    let mut inputs = Vec::with_capacity(nrhs);
    for descriptor in slice::from_raw_parts(prhs, nrhs) {
        match host_array(descriptor) {
            Ok(array) => inputs.push(array),
            Err(msg) => {
                tracing::debug!(kind = "marshal", "binsearch call rejected: {}", msg);
                return error_result(&msg);
            }
        }
    }

    match searcher.call(&inputs, nlhs) {
        Ok(index) => {
            tracing::trace!(class = inputs[0].class().name(), index, "binsearch call");
            CBinsearchResult {
                index,
                error: ptr::null_mut(),
            }
        }
        Err(e) => rejected(e),
    }
}

/// Free the error string of a result returned by `binsearch_call`.
///
/// # Safety
/// `result` must be NULL or point to a result returned by `binsearch_call`
/// that has not been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn binsearch_free_result(result: *mut CBinsearchResult) {
    if result.is_null() {
        return;
    }
    let res = &mut *result;
    if !res.error.is_null() {
        let _ = CString::from_raw(res.error);
        res.error = ptr::null_mut();
    }
}

// ============================================================================
// Per-Type Searches
// ============================================================================

/// Search `n` sorted doubles. Returns the match index or -1 - insertion point.
///
/// # Safety
/// `x` must point to `n` readable values, or be NULL (treated as empty).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn binsearch_f64(x: *const c_double, n: c_ulong, target: c_double) -> i64 {
    search(typed_slice::<f64>(x as *const c_void, n as usize), target) as i64
}

/// Search `n` sorted floats. Returns the match index or -1 - insertion point.
///
/// # Safety
/// `x` must point to `n` readable values, or be NULL (treated as empty).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn binsearch_f32(x: *const c_float, n: c_ulong, target: c_float) -> i64 {
    search(typed_slice::<f32>(x as *const c_void, n as usize), target) as i64
}

/// Search `n` sorted 32-bit integers. Returns the match index or -1 - insertion point.
///
/// # Safety
/// `x` must point to `n` readable values, or be NULL (treated as empty).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn binsearch_i32(x: *const i32, n: c_ulong, target: i32) -> i64 {
    search(typed_slice::<i32>(x as *const c_void, n as usize), target) as i64
}

/// Search `n` sorted 64-bit integers. Returns the match index or -1 - insertion point.
///
/// # Safety
/// `x` must point to `n` readable values, or be NULL (treated as empty).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn binsearch_i64(x: *const i64, n: c_ulong, target: i64) -> i64 {
    search(typed_slice::<i64>(x as *const c_void, n as usize), target) as i64
}
