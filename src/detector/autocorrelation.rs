//! Time-domain pitch detection based on a *difference* autocorrelation.
//!
//! Let $S=(s_0,s_1,\ldots,s_{N-1})$ be a frame and $M = \lfloor N/2 \rfloor$. For every lag
//! $t \in [t_{min}, M)$ the correlation is
//! $$ c(t) = 1 - \frac{1}{M}\sum_{i=0}^{M-1} |s_i - s_{i+t}|. $$
//! A signal that repeats every $t$ samples gives $c(t) = 1$. The curve is not normalized
//! by amplitude, so it only means something on signals that passed the energy gate and
//! are roughly in $[-1, 1]$.
//!
//! ## Peak search
//! The scan starts *searching*. A lag whose correlation is above the rise threshold and
//! above the previous lag's switches it to *climbing* and becomes the best candidate if it
//! beats the previous best. The first lag that does not keep climbing means the peak has
//! been passed: later peaks are multiples of the same period, so the scan stops there and
//! refines the best lag with [PeakCorrection]. If the scan runs to the end while still
//! climbing (or never climbs), the integer best lag is reported as long as its correlation
//! beats the fallback threshold.
//!
//! The scan is `O(M^2)` in the worst case, which dominates the cost of a detection.

use log::{debug, trace};

use crate::config::DetectorConfig;
use crate::detector::gate::SignalGate;
use crate::detector::internals::{check_frame_len, check_sample_rate, DetectorInternals, Pitch};
use crate::detector::PitchDetector;
use crate::error::{PitchError, Result};
use crate::float::{constant, from_usize, Float};
use crate::note::Tuning;
use crate::utils::buffer::mean_absolute_difference;
use crate::utils::peak::{correct_peak, PeakCorrection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Searching,
    Climbing,
}

/// Finds the dominant period of a frame. Owns the correlation curve it writes
/// to, so concurrent detections each need their own `Autocorrelator`.
pub struct Autocorrelator<T>
where
    T: Float,
{
    internals: DetectorInternals<T>,
    min_lag: usize,
    rise_threshold: T,
    fallback_threshold: T,
    correction: PeakCorrection,
}

impl<T> Autocorrelator<T>
where
    T: Float,
{
    pub fn new(config: &DetectorConfig) -> Self {
        Autocorrelator {
            internals: DetectorInternals::new(config.frame_size),
            min_lag: config.min_lag,
            rise_threshold: constant(config.rise_threshold),
            fallback_threshold: constant(config.fallback_threshold),
            correction: config.correction,
        }
    }

    /// Correlation curve of the last frame, indexed by lag. Lags the scan
    /// never reached are zero.
    pub fn correlations(&self) -> &[T] {
        &self.internals.correlations
    }

    pub fn correlate(&mut self, frame: &[T], sample_rate: T) -> Result<Option<Pitch<T>>> {
        check_frame_len(frame.len())?;
        check_sample_rate(sample_rate)?;

        let max_lag = frame.len() / 2;
        self.internals.reset(frame.len());

        let mut scan = Scan::Searching;
        let mut last_correlation = T::one();
        let mut best_correlation = T::zero();
        let mut best_offset: Option<usize> = None;

        for offset in self.min_lag..max_lag {
            let correlation = T::one() - mean_absolute_difference(frame, max_lag, offset);
            self.internals.correlations[offset] = correlation;

            if correlation > self.rise_threshold && correlation > last_correlation {
                scan = Scan::Climbing;
                if correlation > best_correlation {
                    best_correlation = correlation;
                    best_offset = Some(offset);
                }
            } else if scan == Scan::Climbing {
                // The peak is behind us; best_offset + 1 <= offset was written above.
                trace!(
                    "peak passed at lag {}, best lag {:?} (correlation {})",
                    offset,
                    best_offset,
                    best_correlation
                );
                return Ok(best_offset.map(|best| Pitch {
                    frequency: self.refine(best, sample_rate),
                    confidence: best_correlation,
                }));
            }
            last_correlation = correlation;
        }

        match best_offset {
            Some(best) if best_correlation > self.fallback_threshold => {
                trace!(
                    "scan ended without passing a peak, best lag {} (correlation {})",
                    best,
                    best_correlation
                );
                Ok(Some(Pitch {
                    frequency: sample_rate / from_usize(best),
                    confidence: best_correlation,
                }))
            }
            _ => Ok(None),
        }
    }

    fn refine(&self, best: usize, sample_rate: T) -> T {
        let lag = correct_peak(best, &self.internals.correlations, self.correction);
        if lag.is_finite() && lag > T::zero() {
            sample_rate / lag
        } else {
            debug!(
                "{:?} moved lag {} to {}, using the integer lag",
                self.correction, best, lag
            );
            sample_rate / from_usize(best)
        }
    }
}

/// Gate plus [Autocorrelator], bound to one [DetectorConfig].
pub struct AutocorrelationDetector<T>
where
    T: Float,
{
    config: DetectorConfig,
    gate: SignalGate<T>,
    autocorrelator: Autocorrelator<T>,
}

impl<T> AutocorrelationDetector<T>
where
    T: Float,
{
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "autocorrelation detector: frame {}, lags {}..{}, {:?}",
            config.frame_size,
            config.min_lag,
            config.max_lag(),
            config.correction
        );
        Ok(AutocorrelationDetector {
            gate: SignalGate::new(constant(config.rms_threshold)),
            autocorrelator: Autocorrelator::new(&config),
            config,
        })
    }

    /// Default tunables for frames of `size` samples.
    pub fn with_frame_size(size: usize) -> Result<Self> {
        Self::new(DetectorConfig::with_frame_size(size))
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Correlation curve of the last frame that made it past the gate.
    pub fn correlations(&self) -> &[T] {
        self.autocorrelator.correlations()
    }
}

impl<T> PitchDetector<T> for AutocorrelationDetector<T>
where
    T: Float,
{
    fn get_pitch(&mut self, signal: &[T], sample_rate: T) -> Result<Option<Pitch<T>>> {
        if signal.len() != self.config.frame_size {
            return Err(PitchError::FrameSizeMismatch {
                expected: self.config.frame_size,
                got: signal.len(),
            });
        }
        check_sample_rate(sample_rate)?;

        if !self.gate.is_open(signal) {
            return Ok(None);
        }

        self.autocorrelator.correlate(signal, sample_rate)
    }

    fn tuning(&self) -> Tuning {
        self.config.tuning
    }
}
