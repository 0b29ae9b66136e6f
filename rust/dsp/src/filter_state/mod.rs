//! History for the recursive DC removal filter.
//!
//! The state is a small two-state machine. A freshly reset state is
//! [`FilterState::Unseeded`]: it carries no history, and the next sample
//! processed seeds it rather than running through the recurrence. From then
//! on it is [`FilterState::Steady`] and carries the last three inputs and
//! outputs across calls, so a stream may be split over any number of buffers.


/// Input and output history of a steady filter.
///
/// Both arrays are newest first: `inputs[0]` is u(k), `inputs[1]` is u(k-1)
/// and `inputs[2]` is u(k-2), and likewise for `outputs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct History {
    /// Raw inputs u(k), u(k-1), u(k-2).
    pub inputs: [f64; 3],
    /// Filtered outputs y(k), y(k-1), y(k-2).
    pub outputs: [f64; 3],
}

impl History {
    /// History seeded from the first sample of a stream.
    ///
    /// The input history is taken to have been constant at `first` forever,
    /// which means the filter has already removed all of it: the outputs are
    /// zero. This keeps the first sample from looking like a large step.
    #[must_use]
    pub fn seeded(first: f64) -> Self {
        Self {
            inputs: [first; 3],
            outputs: [0.0; 3],
        }
    }

    /// Shifts in a new input and output, dropping the oldest.
    pub fn push(&mut self, input: f64, output: f64) {
        self.inputs = [input, self.inputs[0], self.inputs[1]];
        self.outputs = [output, self.outputs[0], self.outputs[1]];
    }
}

/// Caller-owned state of the DC removal filter.
///
/// Create with [`Default::default`] (or [`FilterState::new`]), and call
/// [`FilterState::reset`] whenever the filter should forget its history, for
/// example on a channel change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FilterState {
    /// No history yet; the next sample seeds the filter.
    #[default]
    Unseeded,

    /// History from previously processed samples.
    Steady(History),
}

impl FilterState {
    /// An unseeded state, ready for the first buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all history. Calling this more than once has no further effect.
    pub fn reset(&mut self) {
        tracing::trace!(was_initialised = self.is_initialised(), "filter state reset");
        *self = Self::Unseeded;
    }

    /// Whether the filter has seen at least one sample since the last reset.
    #[must_use]
    pub fn is_initialised(&self) -> bool {
        matches!(self, Self::Steady(_))
    }

    /// The history carried into the next sample, if any.
    #[must_use]
    pub fn history(&self) -> Option<&History> {
        match self {
            Self::Unseeded => None,
            Self::Steady(history) => Some(history),
        }
    }
}
