use crate::float::{constant, from_usize, Float};

/// How the integer lag of a correlation peak is refined to a fractional one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeakCorrection {
    /// `lag + scale * (y[lag+1] - y[lag-1]) / y[lag]`. A curve-fit free nudge towards
    /// the higher neighbour; `scale = 8` was tuned by ear rather than derived.
    Shift { scale: f64 },
    /// Vertex of the parabola through the peak and its two neighbours.
    Quadratic,
    None,
}

impl Default for PeakCorrection {
    fn default() -> Self {
        PeakCorrection::Shift { scale: 8.0 }
    }
}

struct Point<T: Float> {
    x: T,
    y: T,
}

/// Refine the peak at index `peak` of `data` to a fractional lag.
///
/// Both neighbours of `peak` must lie inside `data`.
pub fn correct_peak<T: Float>(peak: usize, data: &[T], correction: PeakCorrection) -> T {
    match correction {
        PeakCorrection::Shift { scale } => {
            let shift = (data[peak + 1] - data[peak - 1]) / data[peak];
            from_usize::<T>(peak) + constant::<T>(scale) * shift
        }
        PeakCorrection::Quadratic => {
            let point = quadratic_interpolation(
                Point {
                    x: from_usize(peak - 1),
                    y: data[peak - 1],
                },
                Point {
                    x: from_usize(peak),
                    y: data[peak],
                },
                Point {
                    x: from_usize(peak + 1),
                    y: data[peak + 1],
                },
            );
            point.x
        }
        PeakCorrection::None => from_usize(peak),
    }
}

fn quadratic_interpolation<T: Float>(
    left: Point<T>,
    center: Point<T>,
    right: Point<T>,
) -> Point<T> {
    let denominator = constant::<T>(2.0) * center.y - left.y - right.y;
    if denominator == T::zero() {
        return center;
    }
    let shift = constant::<T>(0.5) * (right.y - left.y) / denominator;
    let x = center.x + shift;
    let y = center.y + constant::<T>(0.25) * (right.y - left.y) * shift;
    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_correction() {
        let point = quadratic_interpolation(
            Point {
                x: -1.5,
                y: -(1.5 * 1.5) + 4.0,
            },
            Point {
                x: -0.5,
                y: -(0.5 * 0.5) + 4.0,
            },
            Point {
                x: 0.5,
                y: -(0.5 * 0.5) + 4.0,
            },
        );
        assert_eq!(point.x, 0.0);
        assert_eq!(point.y, 4.0);
    }

    #[test]
    fn flat_peak_stays_put() {
        let point = quadratic_interpolation(
            Point { x: 1.0, y: 0.5 },
            Point { x: 2.0, y: 0.5 },
            Point { x: 3.0, y: 0.5 },
        );
        assert_eq!(point.x, 2.0);
    }

    #[test]
    fn shift_correction() {
        let data = [0.0, 0.5, 1.0, 0.75];
        let lag = correct_peak(2, &data, PeakCorrection::Shift { scale: 8.0 });
        // shift = (0.75 - 0.5) / 1.0
        assert_eq!(lag, 4.0);
        let lag = correct_peak(2, &data, PeakCorrection::Shift { scale: 1.0 });
        assert_eq!(lag, 2.25);
    }

    #[test]
    fn symmetric_peak_is_not_moved() {
        let data = [0.2_f32, 0.9, 0.2];
        for correction in [
            PeakCorrection::default(),
            PeakCorrection::Quadratic,
            PeakCorrection::None,
        ] {
            assert_eq!(correct_peak(1, &data, correction), 1.0);
        }
    }

    #[test]
    fn quadratic_moves_towards_higher_neighbour() {
        let data = [0.8_f64, 1.0, 0.9];
        let lag = correct_peak(1, &data, PeakCorrection::Quadratic);
        assert!(lag > 1.0 && lag < 1.5);
    }
}
