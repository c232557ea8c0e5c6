#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # Expandium
//!
//! Three attribute-driven source rewriters and the runtime support their
//! generated code calls into:
//!
//! - [`stringify!`] pairs an expression's value with its own source text
//! - [`macro@logged`] bridges a callback-style function into an async one
//! - [`macro@take_time`] brackets a function body with wall-clock timing
//!
//! The rewriting itself happens at build time inside the
//! `expandium-macros` crate; this crate re-exports the macros and holds
//! the two run-time primitives the rewritten code depends on, the
//! single-shot [`Continuation`] and the [`timing`] timebase.
//!
//! ## Example
//!
//! ```rust
//! use expandium::stringify;
//!
//! let a = 17;
//! let b = 25;
//! let (value, code) = stringify!(a + b);
//! assert_eq!(value, 42);
//! assert_eq!(code, "a + b");
//! ```

/// Single-shot continuation bridging for callback-style APIs
pub mod continuation;
/// Monotonic ticks and the process-wide timebase
pub mod timing;

pub use continuation::{Continuation, suspend};
pub use expandium_macros::{logged, stringify, take_time};
