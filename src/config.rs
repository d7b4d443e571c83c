//! Detector tunables.
//!
//! The defaults reproduce the reference tuner behaviour. Thresholds were tuned
//! empirically; `rise_threshold` has historically been 0.9 as well as 0.5.

use crate::error::{PitchError, Result};
use crate::note::Tuning;
use crate::utils::peak::PeakCorrection;

pub const DEFAULT_FRAME_SIZE: usize = 2048;
pub const DEFAULT_MIN_LAG: usize = 0;
pub const DEFAULT_RMS_THRESHOLD: f64 = 0.01;
pub const DEFAULT_RISE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorConfig {
    /// Number of samples in every frame handed to the detector
    pub frame_size: usize,
    /// First lag the correlation scan looks at
    pub min_lag: usize,
    /// Frames with an RMS level below this are treated as silence
    pub rms_threshold: f64,
    /// A lag only counts as a candidate peak while its correlation is above this and rising
    pub rise_threshold: f64,
    /// Best correlation needed to report a pitch when the scan never passes a peak
    pub fallback_threshold: f64,
    pub correction: PeakCorrection,
    pub tuning: Tuning,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            frame_size: DEFAULT_FRAME_SIZE,
            min_lag: DEFAULT_MIN_LAG,
            rms_threshold: DEFAULT_RMS_THRESHOLD,
            rise_threshold: DEFAULT_RISE_THRESHOLD,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            correction: PeakCorrection::default(),
            tuning: Tuning::default(),
        }
    }
}

impl DetectorConfig {
    /// Default tunables for frames of `frame_size` samples.
    pub fn with_frame_size(frame_size: usize) -> Self {
        DetectorConfig {
            frame_size,
            ..Default::default()
        }
    }

    /// Largest lag plus one, i.e. half the frame.
    pub fn max_lag(&self) -> usize {
        self.frame_size / 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_lag() < 1 {
            return Err(PitchError::FrameTooShort {
                len: self.frame_size,
            });
        }
        if self.min_lag >= self.max_lag() {
            return Err(invalid(format!(
                "min_lag {} must be below half the frame size ({})",
                self.min_lag,
                self.max_lag()
            )));
        }
        for (name, value) in [
            ("rms_threshold", self.rms_threshold),
            ("rise_threshold", self.rise_threshold),
            ("fallback_threshold", self.fallback_threshold),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if let PeakCorrection::Shift { scale } = self.correction {
            if !scale.is_finite() {
                return Err(invalid(format!(
                    "shift correction scale must be finite, got {scale}"
                )));
            }
        }
        Tuning::new(self.tuning.reference_frequency, self.tuning.reference_note)?;
        Ok(())
    }
}

fn invalid(message: String) -> PitchError {
    PitchError::InvalidConfig(message)
}
