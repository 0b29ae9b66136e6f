use crate::squelch::MAX_ALPHA;

/// Errors from the checked constructors of configuration values.
///
/// The per-sample operations themselves never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The closing threshold is above the opening threshold, so there is no
    /// hysteresis band and the gate would toggle on every evaluation.
    #[error("squelch close threshold {close} is above open threshold {open}")]
    InvertedThresholds {
        /// Requested opening threshold.
        open: u16,
        /// Requested closing threshold.
        close: u16,
    },

    /// The envelope time constant is longer than the envelope can represent.
    #[error("squelch time constant {alpha} exceeds the maximum of {max}", max = MAX_ALPHA)]
    AlphaOutOfRange {
        /// Requested time constant.
        alpha: u16,
    },
}
