#![doc = include_str!("../README.md")]

pub mod conditioner;
pub mod dc_removal;
mod error;
pub mod filter_state;
pub mod phase;
pub mod squelch;

pub use conditioner::Conditioner;
pub use dc_removal::dc_removal;
pub use error::Error;
pub use filter_state::FilterState;
pub use phase::invert_phase;
pub use rtx_dsp_util::sample::AudioSample;
pub use squelch::{PowerSquelch, Thresholds};
