//! Glob import for the common vecmath types:
//! ```rust
//! use vecmath::prelude::*;
//! ```

// core data types
pub use crate::tolerance::Tolerance;
pub use crate::vector::{AngleUnit, Area, Rounded, Vector};

// errors
pub use crate::error::{ErrorKind, VectorError};

// helpers
pub use crate::vector::radians_to_degrees;
