//! Generic [Float] type which acts as a stand-in for `f32` or `f64`.
use rustfft::num_traits::{Float as NumFloat, NumCast};
use rustfft::FftNum;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Signals are processed as arrays of [Float]s. A [Float] is normally `f32` or `f64`.
pub trait Float: Display + Debug + NumFloat + FftNum + Sum {}

impl Float for f64 {}
impl Float for f32 {}

/// Convert an `f64` constant into `T`. Conversions into `f32`/`f64` never fail;
/// anything else that can't represent `value` becomes NaN.
pub fn constant<T: Float>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}

/// Convert a lag or length into `T`.
pub fn from_usize<T: Float>(value: usize) -> T {
    T::from_usize(value).unwrap_or_else(T::nan)
}

/// Absolute value. `Float` and `Signed` both provide `abs`, so method syntax is ambiguous.
pub fn abs<T: Float>(value: T) -> T {
    NumFloat::abs(value)
}

/// Widen `value` to `f64`, used for error reporting and logging.
pub fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
