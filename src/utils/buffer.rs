use crate::float::{abs, from_usize, Float};

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

/// Compute the sum of the square of each element of `arr`.
pub fn square_sum<T>(arr: &[T]) -> T
where
    T: Float,
{
    arr.iter().map(|&s| s * s).sum::<T>()
}

/// Root-mean-square level of `arr`. An empty slice has level zero.
pub fn rms<T>(arr: &[T]) -> T
where
    T: Float,
{
    if arr.is_empty() {
        return T::zero();
    }
    (square_sum(arr) / from_usize(arr.len())).sqrt()
}

/// Mean absolute difference between `signal[..window]` and `signal[lag..lag + window]`.
///
/// > d(t) = (1/w) * sum_{i=0}^{w-1} |x_i - x_{i+t}|
///
/// `lag + window` must not exceed `signal.len()`.
pub fn mean_absolute_difference<T>(signal: &[T], window: usize, lag: usize) -> T
where
    T: Float,
{
    assert!(
        lag + window <= signal.len(),
        "Lag {} with window {} reads past a signal of length {}",
        lag,
        window,
        signal.len()
    );

    let sum = signal[..window]
        .iter()
        .zip(&signal[lag..lag + window])
        .map(|(&a, &b)| abs(a - b))
        .sum::<T>();
    sum / from_usize(window)
}
