//! # vecmath Quickstart
//!
//! ```rust
//! use vecmath::prelude::*;
//!
//! # fn main() -> vecmath::Result<()> {
//! let v = Vector::new([1.5, 9.547, 3.691])?;
//! let w = Vector::new([-6.007, 0.124, 5.772])?;
//!
//! // Area of the parallelogram and the triangle spanned by v and w
//! let parallelogram = v.cp_area(&w, Area::Parallelogram)?;
//! let triangle = v.cp_area(&w, Area::Triangle)?;
//! assert!((parallelogram - 2.0 * triangle).abs() < 1e-12);
//!
//! // Split v into parts along and across w
//! let along = v.parallel_component(&w)?;
//! let across = v.orthogonal_component(&w)?;
//! assert!(across.is_orthogonal_with(&w, &Tolerance::LOOSE));
//! let back = along.addition(&across);
//! for (x, y) in back.iter().zip(v.coordinates()) {
//!     assert!((x - y).abs() < 1e-12);
//! }
//! # Ok(())
//! # }
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod error;
pub mod prelude;
pub mod tolerance;
pub mod vector;

// --- Public API exports ---
pub use error::{ErrorKind, Result, VectorError};
pub use tolerance::Tolerance;
pub use vector::{radians_to_degrees, AngleUnit, Area, Rounded, Vector};
