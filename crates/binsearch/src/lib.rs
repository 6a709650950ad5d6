//! # binsearch: bisection over sorted numeric sequences
//!
//! A deterministic binary search over a sorted, homogeneously-typed numeric
//! sequence, together with the validated call boundary a host runtime uses to
//! reach it.
//!
//! ## What it returns
//!
//! A single signed integer:
//!
//! - **`i >= 0`**: `sequence[i] == target`.
//! - **`r < 0`**: the target is absent; `-1 - r` is its insertion point, the
//!   number of elements strictly less than the target.
//!
//! ## Quick Start
//!
//! ### Core search
//!
//! ```rust
//! use binsearch::prelude::*;
//!
//! let x = [1.0, 3.0, 5.0, 7.0, 9.0];
//!
//! assert_eq!(search(&x, 7.0), 3);
//! assert_eq!(search(&x, 4.0), -3); // would insert at 2
//!
//! match locate(&x, 4.0) {
//!     Found(i) => println!("found at {i}"),
//!     NotFound { insertion_point } => println!("insert at {insertion_point}"),
//! }
//! ```
//!
//! ### Host call
//!
//! ```rust
//! use binsearch::prelude::*;
//!
//! let data = [1.0_f32, 2.0, 4.0, 8.0];
//! let target = [4.0_f32];
//!
//! let searcher = Binsearch::new().nan_target(Reject).build()?;
//!
//! let inputs = [HostArray::vector(&data[..]), HostArray::scalar(&target[..])];
//! let index = searcher.call(&inputs, 1)?;
//!
//! assert_eq!(index, 2.0);
//! # Result::<(), SearchError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The core [`prelude::search`] never fails. The host call returns
//! `Result<f64, SearchError>`; every variant aborts the call before the core
//! runs:
//!
//! ```rust
//! use binsearch::prelude::*;
//!
//! let data = [1.0_f64, 2.0];
//! let target = [2.0_f32];
//! let inputs = [HostArray::vector(&data[..]), HostArray::scalar(&target[..])];
//!
//! match Binsearch::new().build()?.call(&inputs, 1) {
//!     Ok(index) => println!("index: {index}"),
//!     Err(e) => eprintln!("call aborted: {e}"),
//! }
//! # Result::<(), SearchError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate has no allocations and supports `no_std`:
//!
//! ```toml
//! [dependencies]
//! binsearch = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - error types and the host value model.
mod primitives;

// Layer 2: Algorithms - the bisection itself.
mod algorithms;

// Layer 3: Engine - boundary validation and typed dispatch.
mod engine;

// High-level fluent API.
mod api;

// Standard binsearch prelude.
pub mod prelude {
    pub use crate::api::{
        Binsearch as Searcher, BinsearchBuilder as Binsearch, ErrorKind, HostArray, HostClass,
        HostData,
        NanTarget::{self, PassThrough, Reject},
        SearchError,
        SearchOutcome::{self, Found, NotFound},
        locate, search,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
