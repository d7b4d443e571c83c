//! Energy gate run before any correlation work, so silence and the noise
//! floor never pay for the `O(N^2)` scan.

use log::trace;

use crate::float::Float;
use crate::utils::buffer::rms;

#[derive(Debug, Clone, Copy)]
pub struct SignalGate<T>
where
    T: Float,
{
    threshold: T,
}

impl<T> SignalGate<T>
where
    T: Float,
{
    pub fn new(threshold: T) -> Self {
        SignalGate { threshold }
    }

    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// `true` when `frame` carries enough energy to be worth analysing.
    /// Empty frames and frames containing NaN are rejected.
    pub fn is_open(&self, frame: &[T]) -> bool {
        if frame.is_empty() {
            return false;
        }
        let level = rms(frame);
        let open = level >= self.threshold;
        if !open {
            trace!("gate closed: rms {} below {}", level, self.threshold);
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(amplitude: f64, size: usize) -> Vec<f64> {
        (0..size)
            .map(|i| amplitude * (2.0 * std::f64::consts::PI * 440.0 * i as f64 / 44100.0).sin())
            .collect()
    }

    #[test]
    fn rejects_quiet_frames() {
        let gate = SignalGate::new(0.01);
        assert!(!gate.is_open(&vec![0.0; 2048]));
        assert!(!gate.is_open(&vec![0.0099; 2048]));
        assert!(!gate.is_open(&vec![-0.0099; 2048]));
        assert!(!gate.is_open(&sine(0.01, 2048)));
        assert!(!gate.is_open(&[]));
    }

    #[test]
    fn accepts_loud_sines() {
        let gate = SignalGate::new(0.01);
        for amplitude in [0.5, 0.75, 1.0] {
            assert!(gate.is_open(&sine(amplitude, 2048)));
        }
        assert!(gate.is_open(&vec![0.0101; 16]));
    }

    #[test]
    fn rejects_nan() {
        let gate = SignalGate::new(0.01_f32);
        let mut frame = vec![0.5_f32; 64];
        frame[3] = f32::NAN;
        assert!(!gate.is_open(&frame));
    }
}
