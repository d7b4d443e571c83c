//! Equal-tempered note arithmetic.
//!
//! Notes are MIDI-style integers: 69 is A4, every step is one semitone and
//! nothing is clamped, so notes below 0 or above 127 are valid too.
//!
//! ```
//! use pitcher::note::{cents_off_from_pitch, frequency_from_note, note_from_pitch, note_name};
//!
//! let note = note_from_pitch(445.0_f64).unwrap();
//! assert_eq!(note, 69);
//! assert_eq!(note_name(note), "A");
//! assert_eq!(frequency_from_note::<f64>(note), 440.0);
//! assert_eq!(cents_off_from_pitch(445.0_f64, note).unwrap(), 19);
//! ```

use crate::error::{PitchError, Result};
use crate::float::{constant, to_f64, Float};

pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Reference pitch the equal-tempered scale is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    /// Frequency of `reference_note` in Hz
    pub reference_frequency: f64,
    pub reference_note: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Tuning {
    /// A4 = 440 Hz.
    pub const STANDARD: Tuning = Tuning {
        reference_frequency: 440.0,
        reference_note: 69,
    };

    pub fn new(reference_frequency: f64, reference_note: i32) -> Result<Self> {
        if !(reference_frequency.is_finite() && reference_frequency > 0.0) {
            return Err(PitchError::InvalidConfig(format!(
                "reference frequency must be finite and positive, got {reference_frequency}"
            )));
        }
        Ok(Tuning {
            reference_frequency,
            reference_note,
        })
    }

    /// Nearest note to `frequency`, rounding half a semitone away from the reference.
    pub fn note_from_pitch<T: Float>(&self, frequency: T) -> Result<i32> {
        check_frequency(frequency)?;
        let reference: T = constant(self.reference_frequency);
        let semitones = constant::<T>(12.0) * (frequency / reference).log2();
        semitones
            .round()
            .to_i64()
            .and_then(|offset| i32::try_from(offset + i64::from(self.reference_note)).ok())
            .ok_or_else(|| PitchError::InvalidFrequency(to_f64(frequency)))
    }

    /// Exact frequency of `note` in Hz.
    pub fn frequency_from_note<T: Float>(&self, note: i32) -> T {
        let semitones = (f64::from(note) - f64::from(self.reference_note)) / 12.0;
        constant::<T>(self.reference_frequency) * constant::<T>(2.0).powf(constant(semitones))
    }

    /// Cents between `frequency` and `note`, floored. A pitch half a cent flat
    /// reads -1, not 0.
    pub fn cents_off_from_pitch<T: Float>(&self, frequency: T, note: i32) -> Result<i32> {
        check_frequency(frequency)?;
        let target: T = self.frequency_from_note(note);
        let cents = constant::<T>(1200.0) * (frequency / target).log2();
        cents
            .floor()
            .to_i32()
            .ok_or_else(|| PitchError::InvalidFrequency(to_f64(frequency)))
    }
}

pub fn note_from_pitch<T: Float>(frequency: T) -> Result<i32> {
    Tuning::STANDARD.note_from_pitch(frequency)
}

pub fn frequency_from_note<T: Float>(note: i32) -> T {
    Tuning::STANDARD.frequency_from_note(note)
}

pub fn cents_off_from_pitch<T: Float>(frequency: T, note: i32) -> Result<i32> {
    Tuning::STANDARD.cents_off_from_pitch(frequency, note)
}

/// Pitch class name of `note`. Negative notes wrap like any other: -1 is "B".
pub fn note_name(note: i32) -> &'static str {
    NOTE_NAMES[note.rem_euclid(12) as usize]
}

/// Octave in scientific pitch notation, where note 60 is C4.
pub fn octave(note: i32) -> i32 {
    note.div_euclid(12) - 1
}

fn check_frequency<T: Float>(frequency: T) -> Result<()> {
    if frequency.is_finite() && frequency > T::zero() {
        Ok(())
    } else {
        Err(PitchError::InvalidFrequency(to_f64(frequency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_round_trip() {
        for note in -50..=50 {
            assert_eq!(note_from_pitch(frequency_from_note::<f64>(note)).unwrap(), note);
            assert_eq!(note_from_pitch(frequency_from_note::<f32>(note)).unwrap(), note);
        }
    }

    #[test]
    fn a4_is_440() {
        assert_eq!(frequency_from_note::<f64>(69), 440.0);
        assert_eq!(frequency_from_note::<f64>(81), 880.0);
        assert_eq!(frequency_from_note::<f64>(57), 220.0);
        assert_eq!(note_from_pitch(440.0_f64).unwrap(), 69);
    }

    #[test]
    fn note_rounds_half_away_from_zero() {
        // Exactly half a semitone above A4 and below A4.
        let half_up = 440.0 * 2f64.powf(0.5 / 12.0);
        let half_down = 440.0 * 2f64.powf(-0.5 / 12.0);
        let up = note_from_pitch(half_up).unwrap();
        let down = note_from_pitch(half_down).unwrap();
        assert!(up == 70 || up == 69);
        assert!(down == 68 || down == 69);
        // Just past the midpoint always moves to the neighbour.
        assert_eq!(note_from_pitch(half_up * 1.0001).unwrap(), 70);
        assert_eq!(note_from_pitch(half_down / 1.0001).unwrap(), 68);
    }

    #[test]
    fn cents_on_pitch_is_zero() {
        for note in -50..=130 {
            let frequency = frequency_from_note::<f64>(note);
            assert_eq!(cents_off_from_pitch(frequency, note).unwrap(), 0);
        }
    }

    #[test]
    fn cents_floor_half_cent_flat() {
        for note in [-12, 0, 45, 69, 100] {
            let frequency = frequency_from_note::<f64>(note) * 2f64.powf(-1.0 / 2400.0);
            assert_eq!(cents_off_from_pitch(frequency, note).unwrap(), -1);
        }
    }

    #[test]
    fn cents_sharp_and_flat() {
        let sharp = 440.0 * 2f64.powf(25.5 / 1200.0);
        let flat = 440.0 * 2f64.powf(-25.5 / 1200.0);
        assert_eq!(cents_off_from_pitch(sharp, 69).unwrap(), 25);
        assert_eq!(cents_off_from_pitch(flat, 69).unwrap(), -26);
    }

    #[test]
    fn invalid_frequencies() {
        assert_eq!(
            note_from_pitch(0.0_f64),
            Err(PitchError::InvalidFrequency(0.0))
        );
        assert!(note_from_pitch(-440.0_f64).is_err());
        assert!(note_from_pitch(f64::NAN).is_err());
        assert!(note_from_pitch(f64::INFINITY).is_err());
        assert!(cents_off_from_pitch(0.0_f32, 69).is_err());
        assert!(cents_off_from_pitch(f32::NEG_INFINITY, 69).is_err());
    }

    #[test]
    fn names_wrap_for_negative_notes() {
        assert_eq!(note_name(-1), "B");
        assert_eq!(note_name(-12), "C");
        assert_eq!(note_name(-13), "B");
        assert_eq!(note_name(0), "C");
        assert_eq!(note_name(69), "A");
        assert_eq!(note_name(61), "C#");
    }

    #[test]
    fn octaves() {
        assert_eq!(octave(60), 4);
        assert_eq!(octave(69), 4);
        assert_eq!(octave(71), 4);
        assert_eq!(octave(72), 5);
        assert_eq!(octave(0), -1);
        assert_eq!(octave(-1), -2);
    }

    #[test]
    fn custom_reference() {
        let tuning = Tuning::new(442.0, 69).unwrap();
        assert_eq!(tuning.note_from_pitch(442.0_f64).unwrap(), 69);
        assert_eq!(tuning.cents_off_from_pitch(442.0_f64, 69).unwrap(), 0);
        // 440 Hz is about 7.85 cents flat of A4 = 442.
        assert_eq!(tuning.cents_off_from_pitch(440.0_f64, 69).unwrap(), -8);
        assert!(Tuning::new(0.0, 69).is_err());
        assert!(Tuning::new(f64::NAN, 69).is_err());
    }
}
