//! The receive conditioning chain.
//!
//! Raw samples pass through DC removal and phase inversion, each optional,
//! before going on to the consumer. The conditioned samples also feed a power
//! squelch that tells the consumer whether the channel is active. The
//! squelch sees the stream after DC removal, so a biased but otherwise
//! silent front end doesn't hold the gate open.

use serde::{Deserialize, Serialize};

use crate::dc_removal::dc_removal;
use crate::filter_state::FilterState;
use crate::phase::invert_phase;
use crate::squelch::{PowerSquelch, SquelchSettings, Thresholds};
use crate::{AudioSample, Error};

#[cfg(test)]
mod tests;

/// How the chain is set up. Missing fields deserialize to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Whether to remove the DC bias.
    pub remove_dc: bool,
    /// Whether to flip the sign of the stream.
    pub invert_phase: bool,
    /// Envelope time constant and gate thresholds of the squelch.
    pub squelch: SquelchSettings,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            remove_dc: true,
            invert_phase: false,
            squelch: SquelchSettings::default(),
        }
    }
}

/// Filter and squelch state for one receive stream.
#[derive(Debug, Clone)]
pub struct Conditioner {
    options: Options,
    thresholds: Thresholds,
    filter: FilterState,
    squelch: PowerSquelch,
}

impl Conditioner {
    /// A chain with fresh state.
    ///
    /// # Errors
    ///
    /// Any error from [`SquelchSettings::validate`].
    pub fn new(options: Options) -> Result<Self, Error> {
        Ok(Self {
            options,
            thresholds: options.squelch.validate()?,
            filter: FilterState::new(),
            squelch: PowerSquelch::new(),
        })
    }

    /// The current setup.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Changes the setup without interrupting the stream.
    ///
    /// The squelch envelope and gate carry over. Turning DC removal back on
    /// starts the filter from scratch, since its history stopped when it was
    /// turned off.
    ///
    /// # Errors
    ///
    /// Any error from [`SquelchSettings::validate`]; the setup is left as it
    /// was.
    pub fn set_options(&mut self, options: Options) -> Result<(), Error> {
        self.thresholds = options.squelch.validate()?;
        if options.remove_dc && !self.options.remove_dc {
            self.filter.reset();
        }
        tracing::debug!(?options, "conditioner options changed");
        self.options = options;
        Ok(())
    }

    /// Conditions `buffer` in place and feeds it to the squelch envelope.
    pub fn process(&mut self, buffer: &mut [AudioSample]) {
        if self.options.remove_dc {
            dc_removal(&mut self.filter, buffer);
        }
        if self.options.invert_phase {
            invert_phase(buffer);
        }
        let alpha = self.options.squelch.alpha;
        for sample in buffer.iter() {
            self.squelch.update(*sample, alpha);
        }
    }

    /// Re-evaluates the squelch gate against the configured thresholds.
    pub fn squelch_open(&mut self) -> bool {
        self.squelch.evaluate_thresholds(self.thresholds)
    }

    /// The current smoothed signal power.
    #[must_use]
    pub fn envelope(&self) -> u16 {
        self.squelch.envelope()
    }

    /// The squelch state, for evaluating other thresholds against a copy.
    #[must_use]
    pub fn squelch(&self) -> &PowerSquelch {
        &self.squelch
    }

    /// The DC removal filter state.
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Forgets all history, for example on a channel change.
    pub fn reset(&mut self) {
        tracing::trace!("conditioner reset");
        self.filter.reset();
        self.squelch.reset();
    }
}
