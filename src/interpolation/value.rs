//! Numeric kinds a field may hold, and the missing-value marker.

use num_complex::Complex;
use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

/// A value stored in a source field.
///
/// Interpolation only ever scales values by real weights and sums them, so
/// real and complex fields share one implementation.
pub trait FieldValue: Copy + PartialEq + Debug + Send + Sync + Zero + Add<Output = Self> {
    /// Multiply by a real interpolation weight
    fn scale(self, weight: f64) -> Self;

    /// True if any component is NaN
    fn is_nan(self) -> bool;

    /// A NaN of this kind
    fn nan() -> Self;
}

impl FieldValue for f32 {
    fn scale(self, weight: f64) -> Self {
        (self as f64 * weight) as f32
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn nan() -> Self {
        f32::NAN
    }
}

impl FieldValue for f64 {
    fn scale(self, weight: f64) -> Self {
        self * weight
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn nan() -> Self {
        f64::NAN
    }
}

impl FieldValue for Complex<f32> {
    fn scale(self, weight: f64) -> Self {
        Complex::new(self.re.scale(weight), self.im.scale(weight))
    }

    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    fn nan() -> Self {
        Complex::new(f32::NAN, f32::NAN)
    }
}

impl FieldValue for Complex<f64> {
    fn scale(self, weight: f64) -> Self {
        self * weight
    }

    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    fn nan() -> Self {
        Complex::new(f64::NAN, f64::NAN)
    }
}

/// The marker for absent data, both in the source field and in results.
///
/// NaN is always treated as missing. A sentinel additionally marks every
/// value exactly equal to it, and is what gets written for missing results.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Missing<T> {
    /// Holes are NaN and missing results are NaN
    #[default]
    Nan,
    /// Holes equal this value and missing results are this value
    Sentinel(T),
}

impl<T: FieldValue> Missing<T> {
    /// Whether `value` is a hole under this marker
    pub fn is_missing(&self, value: T) -> bool {
        match self {
            Missing::Nan => value.is_nan(),
            Missing::Sentinel(sentinel) => value.is_nan() || value == *sentinel,
        }
    }

    /// The value written for a missing result
    pub fn value(&self) -> T {
        match self {
            Missing::Nan => T::nan(),
            Missing::Sentinel(sentinel) => *sentinel,
        }
    }
}
