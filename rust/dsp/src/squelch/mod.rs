//! A signal-power squelch gate.
//!
//! The gate has two halves that run at their own rates. [`PowerSquelch::update`]
//! is fed every sample and keeps a smoothed estimate of the signal power, the
//! envelope. [`PowerSquelch::evaluate`] compares that envelope against an
//! opening and a closing threshold, Schmitt-trigger style, and may be polled
//! as rarely as the caller likes. Different callers can evaluate the same
//! envelope against different thresholds.
//!
//! The envelope is normalized to `0..=65535`, with a full-scale sample at the
//! top of the range.

use crate::AudioSample;

pub mod settings;

pub use settings::{SquelchSettings, Thresholds};


/// Longest supported envelope time constant, as a shift.
///
/// This is a time constant of 65536 samples, over a second at common audio
/// sampling rates.
pub const MAX_ALPHA: u16 = 16;

/// Fractional bits kept below the envelope in the accumulator.
const FRACTION_BITS: u32 = 16;

/// The accumulator at full scale.
const MAX_ACCUMULATOR: u32 = (u16::MAX as u32) << FRACTION_BITS;

/// Scales a squared sample into the envelope range.
const POWER_SHIFT: u32 = 14;

/// The instantaneous power of `sample`, on the envelope's scale.
///
/// This is `sample^2 >> 14`, clamped to the range; only `i16::MIN` needs the
/// clamp.
#[must_use]
pub fn instant_power(sample: AudioSample) -> u16 {
    let square = i32::from(sample) * i32::from(sample);
    clamp_to_envelope(square >> POWER_SHIFT)
}

#[allow(clippy::cast_possible_truncation)]
fn clamp_to_envelope(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

/// Caller-owned state of a power squelch gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerSquelch {
    /// Envelope in 16.16 fixed point.
    accumulator: u32,
    open: bool,
}

impl PowerSquelch {
    /// A closed gate with an empty envelope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the gate and empties the envelope.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The current smoothed signal power.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn envelope(&self) -> u16 {
        (self.accumulator >> FRACTION_BITS) as u16
    }

    /// The gate decision from the last evaluation.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Feeds one sample to the envelope follower and returns the new envelope.
    ///
    /// This is a one-pole lowpass on the instantaneous power:
    /// `envelope += (power - envelope) >> alpha`. Larger `alpha` means a
    /// slower, smoother envelope; `alpha = 0` disables smoothing and the
    /// envelope is exactly the power of the latest sample. Since `alpha` is
    /// taken per call, attack and release can use different time constants.
    /// Values above [`MAX_ALPHA`] behave as [`MAX_ALPHA`].
    ///
    /// The envelope is accumulated with 16 fractional bits, so even at
    /// [`MAX_ALPHA`] a steady input pulls it to within one step of its power.
    /// The shift rounds toward negative infinity, so a silent input always
    /// decays the envelope all the way to zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, sample: AudioSample, alpha: u16) -> u16 {
        let alpha = alpha.min(MAX_ALPHA);
        let target = i64::from(instant_power(sample)) << FRACTION_BITS;
        let current = i64::from(self.accumulator);
        let next = current + ((target - current) >> alpha);
        self.accumulator = next.clamp(0, i64::from(MAX_ACCUMULATOR)) as u32;
        self.envelope()
    }

    /// Re-evaluates the gate and returns whether it is open.
    ///
    /// A closed gate opens once the envelope is strictly above
    /// `open_threshold`; an open gate closes once it is strictly below
    /// `close_threshold`. Otherwise the gate keeps its state, including when
    /// the envelope sits exactly on a threshold.
    ///
    /// `close_threshold` should not exceed `open_threshold`. If it does, an
    /// envelope between the two flips the gate on every call. That is defined
    /// but rarely useful; [`Thresholds::new`] rejects such a pair up front.
    pub fn evaluate(&mut self, open_threshold: u16, close_threshold: u16) -> bool {
        let envelope = self.envelope();
        let open = if self.open {
            envelope >= close_threshold
        } else {
            envelope > open_threshold
        };
        if open != self.open {
            tracing::debug!(
                open,
                envelope,
                open_threshold,
                close_threshold,
                "squelch gate changed"
            );
        }
        self.open = open;
        open
    }

    /// [`PowerSquelch::evaluate`] with a validated threshold pair.
    pub fn evaluate_thresholds(&mut self, thresholds: Thresholds) -> bool {
        self.evaluate(thresholds.open(), thresholds.close())
    }
}
