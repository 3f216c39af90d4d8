//! Test signal generation.
//!
//! This module provides the signal generator:
//! - `Waveform` trait for everything that can be sampled on a grid
//! - `ClosedForm` trait for shapes that can be evaluated analytically
//! - One type per shape (`Sine`, `Square`, `Sawtooth`, `Step`, `Impulse`, `Ramp`)
//! - `Signal` recipe and the `generate` entry points

mod generator;
mod impulse;
mod kind;
mod params;
mod ramp;
mod sawtooth;
mod sine;
mod square;
mod step;
mod waveform;

pub use generator::{Signal, generate, generate_named};
pub use impulse::Impulse;
pub use kind::SignalKind;
pub(crate) use kind::normalize_name;
pub use params::{REFERENCE_FREQUENCY, SignalParams};
pub use ramp::Ramp;
pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use square::Square;
pub use step::{STEP_ONSET, Step};
pub use waveform::{ClosedForm, Waveform};
