//! Finite-dimensional real vector type and its operations.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Index, Mul, Neg};

use tracing::{debug, warn};

use crate::error::{Result, VectorError};
use crate::tolerance::Tolerance;

/// Unit for [`Vector::angle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians, in `[0, π]`.
    #[default]
    Radians,
    /// Degrees, in `[0, 180]`.
    Degrees,
}

/// Which area [`Vector::cp_area`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Area {
    /// The parallelogram spanned by the two vectors.
    #[default]
    Parallelogram,
    /// The triangle spanned by the two vectors (half the parallelogram).
    Triangle,
}

/// Convert an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(r: f64) -> f64 {
    (r * 180.0) / PI
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}

fn warn_on_truncation(operation: &'static str, left: usize, right: usize) {
    if left != right {
        warn!(
            operation,
            left,
            right,
            "dimension mismatch, truncating to the shorter operand"
        );
    }
}

/// A real vector of fixed dimension `>= 1`.
///
/// Coordinates are finite and never change after construction; every
/// operation returns a fresh `Vec<f64>` or `Vector`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    coordinates: Box<[f64]>,
}

impl Vector {
    /// Build a vector from its coordinates.
    ///
    /// Fails with [`VectorError::EmptyCoordinates`] for empty input and
    /// [`VectorError::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let coordinates: Vec<f64> = coordinates.into_iter().collect();
        if coordinates.is_empty() {
            debug!("rejecting empty coordinate sequence");
            return Err(VectorError::EmptyCoordinates);
        }
        if let Some((index, &value)) = coordinates.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            debug!(index, value, "rejecting non-finite coordinate");
            return Err(VectorError::NonFiniteCoordinate { index, value });
        }
        Ok(Self::from_raw(coordinates))
    }

    // Callers guarantee a nonempty sequence.
    #[inline]
    fn from_raw(coordinates: Vec<f64>) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self {
            coordinates: coordinates.into_boxed_slice(),
        }
    }

    /// The coordinates, in order.
    #[inline(always)]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Number of coordinates.
    #[inline(always)]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Iterate over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.coordinates.iter()
    }

    // Pairwise combination over the common prefix of both operands.
    fn zip_with(&self, other: &[f64], operation: &'static str, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
        warn_on_truncation(operation, self.dimension(), other.len());
        self.coordinates
            .iter()
            .zip(other)
            .map(|(&x, &y)| f(x, y))
            .collect()
    }

    /// Element-wise sum. Operands of different dimension are paired up to
    /// the shorter length and the rest is dropped.
    pub fn addition(&self, v: impl AsRef<[f64]>) -> Vec<f64> {
        self.zip_with(v.as_ref(), "addition", |x, y| x + y)
    }

    /// Element-wise difference `self - v`, truncating like [`Vector::addition`].
    pub fn subtraction(&self, v: impl AsRef<[f64]>) -> Vec<f64> {
        self.zip_with(v.as_ref(), "subtraction", |x, y| x - y)
    }

    /// Every coordinate multiplied by `s`.
    pub fn scalar_mult(&self, s: f64) -> Vec<f64> {
        self.coordinates.iter().map(|x| x * s).collect()
    }

    /// Scale the vector by a scalar.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::from_raw(self.scalar_mult(s))
    }

    // Largest absolute coordinate.
    fn max_abs(&self) -> f64 {
        self.coordinates.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
    }

    // Coordinates divided by the largest absolute coordinate, so the largest
    // is ±1 and squaring can neither overflow nor underflow to zero.
    // `None` for the exact zero vector.
    fn rescaled(&self) -> Option<Vec<f64>> {
        let m = self.max_abs();
        (m > 0.0).then(|| self.coordinates.iter().map(|x| x / m).collect())
    }

    /// Euclidean norm, computed on rescaled coordinates so that large or
    /// tiny finite inputs do not overflow or flush to zero.
    pub fn magnitude(&self) -> f64 {
        match self.rescaled() {
            Some(r) => self.max_abs() * norm(&r),
            None => 0.0,
        }
    }

    /// `true` if the magnitude is below the default zero threshold (1e-10).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_with(&Tolerance::DEFAULT)
    }

    /// `true` if the magnitude is strictly below `tolerance.zero()`.
    #[inline]
    pub fn is_zero_with(&self, tolerance: &Tolerance) -> bool {
        self.magnitude() < tolerance.zero()
    }

    /// The vector scaled to magnitude 1.
    pub fn unit_vector(&self) -> Result<Self> {
        if self.is_zero() {
            debug!(dimension = self.dimension(), "cannot normalize zero vector");
            return Err(VectorError::CannotNormalizeZeroVector);
        }
        // rescale first: 1 / magnitude flushes to zero for huge vectors
        let r = self.rescaled().ok_or(VectorError::CannotNormalizeZeroVector)?;
        let n = norm(&r);
        Ok(Self::from_raw(r.iter().map(|x| x / n).collect()))
    }

    /// Sum of the pairwise products, over the common prefix of both operands.
    pub fn dot_product(&self, v: impl AsRef<[f64]>) -> f64 {
        let v = v.as_ref();
        warn_on_truncation("dot product", self.dimension(), v.len());
        dot(&self.coordinates, v)
    }

    // Cosine of the angle, clamped into acos' domain. Both operands are
    // rescaled so the ratio stays finite at any scale; `None` if either is
    // exactly zero.
    fn cos_angle(&self, v: &Vector) -> Option<f64> {
        warn_on_truncation("angle", self.dimension(), v.dimension());
        let a = self.rescaled()?;
        let b = v.rescaled()?;
        let ratio = dot(&a, &b) / (norm(&a) * norm(&b));
        ratio.is_finite().then(|| ratio.clamp(-1.0, 1.0))
    }

    /// Angle between `self` and `v`.
    ///
    /// Fails with [`VectorError::ZeroMagnitudeAngle`] if either vector is zero.
    pub fn angle(&self, v: &Vector, unit: AngleUnit) -> Result<f64> {
        if self.is_zero() || v.is_zero() {
            debug!("angle requested against a zero vector");
            return Err(VectorError::ZeroMagnitudeAngle);
        }
        let radians = self
            .cos_angle(v)
            .ok_or(VectorError::ZeroMagnitudeAngle)?
            .acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians_to_degrees(radians),
        })
    }

    /// `|self · v| < 1e-10`.
    #[inline]
    pub fn is_orthogonal(&self, v: &Vector) -> bool {
        self.is_orthogonal_with(v, &Tolerance::DEFAULT)
    }

    /// `|self · v| < tolerance.orthogonal()`.
    pub fn is_orthogonal_with(&self, v: &Vector, tolerance: &Tolerance) -> bool {
        self.dot_product(v).abs() < tolerance.orthogonal()
    }

    /// Parallel (or anti-parallel) under [`Tolerance::DEFAULT`].
    #[inline]
    pub fn is_parallel(&self, v: &Vector) -> bool {
        self.is_parallel_with(v, &Tolerance::DEFAULT)
    }

    /// `true` if either vector is zero, or the angle between them is within
    /// `tolerance.parallel()` radians of 0 or π.
    pub fn is_parallel_with(&self, v: &Vector, tolerance: &Tolerance) -> bool {
        if self.is_zero_with(tolerance) || v.is_zero_with(tolerance) {
            return true;
        }
        match self.cos_angle(v) {
            Some(cos) => {
                let theta = cos.acos();
                theta < tolerance.parallel() || PI - theta < tolerance.parallel()
            }
            None => true,
        }
    }

    /// `b` scaled component-wise by `self · b`.
    ///
    /// Note: `b` is not normalized, so this is only the textbook projection
    /// when `b` is a unit vector. See [`Vector::parallel_component`].
    pub fn projection(&self, b: impl AsRef<[f64]>) -> Vec<f64> {
        let b = b.as_ref();
        let d = self.dot_product(b);
        b.iter().map(|x| x * d).collect()
    }

    /// Component of `self` along the direction of `b`.
    ///
    /// Fails with [`VectorError::NoUniqueParallelComponent`] if `b` is zero.
    pub fn parallel_component(&self, b: &Vector) -> Result<Self> {
        let unit = b.unit_vector().map_err(|e| match e {
            VectorError::CannotNormalizeZeroVector => {
                debug!("parallel component onto a zero basis vector");
                VectorError::NoUniqueParallelComponent
            }
            other => other,
        })?;
        Ok(unit.scale(self.dot_product(&unit)))
    }

    /// Component of `self` perpendicular to `b`: `self - parallel_component(b)`.
    pub fn orthogonal_component(&self, b: &Vector) -> Result<Self> {
        let parallel = self.parallel_component(b)?;
        Ok(Self::from_raw(self.subtraction(&parallel)))
    }

    fn components3(&self, operation: &'static str) -> Result<[f64; 3]> {
        <[f64; 3]>::try_from(self.coordinates()).map_err(|_| {
            debug!(operation, dimension = self.dimension(), "operation needs a 3-D vector");
            VectorError::DimensionMismatch {
                operation,
                expected: 3,
                got: self.dimension(),
            }
        })
    }

    /// Cross product of two 3-D vectors.
    ///
    /// Fails with [`VectorError::DimensionMismatch`] unless both operands
    /// have dimension 3.
    pub fn cross_product(&self, v: &Vector) -> Result<Self> {
        let [x1, y1, z1] = self.components3("cross product")?;
        let [x2, y2, z2] = v.components3("cross product")?;
        Ok(Self::from_raw(vec![
            y1 * z2 - y2 * z1,
            -(x1 * z2 - x2 * z1),
            x1 * y2 - x2 * y1,
        ]))
    }

    /// Area spanned by `self` and `v`, from the magnitude of their cross product.
    pub fn cp_area(&self, v: &Vector, area: Area) -> Result<f64> {
        let parallelogram = self.cross_product(v)?.magnitude();
        Ok(match area {
            Area::Parallelogram => parallelogram,
            Area::Triangle => parallelogram / 2.0,
        })
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.coordinates
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    #[inline(always)]
    fn index(&self, i: usize) -> &f64 {
        &self.coordinates[i]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;
    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Vector::new(coordinates)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;
    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Vector::new(coordinates.iter().copied())
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Vector {
    type Error = VectorError;
    fn try_from(coordinates: [f64; N]) -> Result<Self> {
        Vector::new(coordinates)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Vec<f64> {
        v.coordinates.into_vec()
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::from_raw(self.coordinates.iter().map(|x| -x).collect())
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        -&self
    }
}

fn write_coordinates(f: &mut fmt::Formatter<'_>, v: &Vector, decimals: Option<usize>) -> fmt::Result {
    write!(f, "Vector: (")?;
    for (i, x) in v.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match decimals {
            Some(dec) => write!(f, "{x:.dec$}")?,
            None => write!(f, "{x}")?,
        }
    }
    write!(f, ")")
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, self, None)
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write_coordinates(f, v, Some(dec))
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
