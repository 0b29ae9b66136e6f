//! Persistable squelch configuration and validated thresholds.
//!
//! # Examples
//!
//! ```
//! # use rtx_dsp::squelch::settings::{SquelchSettings, Thresholds};
//! let settings = SquelchSettings::default();
//! assert_eq!(settings.validate(), Thresholds::new(1000, 500));
//! ```

use serde::{Deserialize, Serialize};

use super::MAX_ALPHA;
use crate::Error;

/// An opening and closing threshold with a non-empty hysteresis band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    open: u16,
    close: u16,
}

#[derive(Deserialize)]
struct RawThresholds {
    open: u16,
    close: u16,
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = Error;

    fn try_from(RawThresholds { open, close }: RawThresholds) -> Result<Self, Error> {
        Self::new(open, close)
    }
}

impl Thresholds {
    /// A threshold pair, rejecting `close > open`.
    ///
    /// # Errors
    ///
    /// [`Error::InvertedThresholds`] if `close` is above `open`.
    pub fn new(open: u16, close: u16) -> Result<Self, Error> {
        if close > open {
            return Err(Error::InvertedThresholds { open, close });
        }
        Ok(Self { open, close })
    }

    /// A threshold pair without the ordering check.
    ///
    /// With `close > open` the gate toggles on every evaluation while the
    /// envelope sits between the two.
    #[must_use]
    pub fn new_unchecked(open: u16, close: u16) -> Self {
        Self { open, close }
    }

    /// The gate opens when the envelope rises above this.
    #[must_use]
    pub fn open(&self) -> u16 {
        self.open
    }

    /// The gate closes when the envelope falls below this.
    #[must_use]
    pub fn close(&self) -> u16 {
        self.close
    }
}

/// Squelch configuration as the host application persists it.
///
/// Missing fields deserialize to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquelchSettings {
    /// Envelope time constant, as a shift. See [`super::PowerSquelch::update`].
    pub alpha: u16,
    /// See [`Thresholds::open`].
    pub open_threshold: u16,
    /// See [`Thresholds::close`].
    pub close_threshold: u16,
}

impl Default for SquelchSettings {
    fn default() -> Self {
        Self {
            alpha: 6,
            open_threshold: 1000,
            close_threshold: 500,
        }
    }
}

impl SquelchSettings {
    /// The threshold pair these settings describe.
    ///
    /// # Errors
    ///
    /// [`Error::InvertedThresholds`] if the close threshold is above the open one.
    pub fn thresholds(&self) -> Result<Thresholds, Error> {
        Thresholds::new(self.open_threshold, self.close_threshold)
    }

    /// Checks both the time constant and the thresholds, returning the
    /// thresholds.
    ///
    /// # Errors
    ///
    /// [`Error::AlphaOutOfRange`] if `alpha` exceeds [`MAX_ALPHA`], otherwise
    /// any error from [`SquelchSettings::thresholds`].
    pub fn validate(&self) -> Result<Thresholds, Error> {
        if self.alpha > MAX_ALPHA {
            return Err(Error::AlphaOutOfRange { alpha: self.alpha });
        }
        self.thresholds()
    }
}
