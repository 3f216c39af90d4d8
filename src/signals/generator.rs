//! Name-driven signal generation.

use log::debug;

use super::waveform::{ClosedForm, Waveform};
use super::{Impulse, Ramp, Sawtooth, Sine, SignalKind, SignalParams, Square, Step};
use crate::error::Result;
use crate::{SampledSequence, TimeGrid};

/// A signal recipe: one of the six shapes, ready to be sampled on any grid.
///
/// A `Signal` holds no samples. It is materialized by [`Waveform::sample`].
///
/// # Examples
///
/// ```
/// use sigsys::{Signal, SignalKind, SignalParams, TimeGrid, Waveform};
///
/// let grid = TimeGrid::default();
/// let square = Signal::new(SignalKind::Square, SignalParams::default());
/// assert_eq!(square.kind(), SignalKind::Square);
/// assert_eq!(square.sample(&grid).len(), grid.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    Sine(Sine),
    Square(Square),
    Sawtooth(Sawtooth),
    Step(Step),
    Impulse(Impulse),
    Ramp(Ramp),
}

impl Signal {
    /// Builds the recipe for `kind`. `params` only affect [`SignalKind::Sine`].
    pub fn new(kind: SignalKind, params: SignalParams) -> Self {
        match kind {
            SignalKind::Sine => Signal::Sine(Sine::new(params)),
            SignalKind::Square => Signal::Square(Square),
            SignalKind::Sawtooth => Signal::Sawtooth(Sawtooth),
            SignalKind::Step => Signal::Step(Step),
            SignalKind::Impulse => Signal::Impulse(Impulse),
            SignalKind::Ramp => Signal::Ramp(Ramp),
        }
    }

    /// Builds the recipe for `kind` with default parameters.
    pub fn reference(kind: SignalKind) -> Self {
        Self::new(kind, SignalParams::default())
    }

    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Sine(_) => SignalKind::Sine,
            Signal::Square(_) => SignalKind::Square,
            Signal::Sawtooth(_) => SignalKind::Sawtooth,
            Signal::Step(_) => SignalKind::Step,
            Signal::Impulse(_) => SignalKind::Impulse,
            Signal::Ramp(_) => SignalKind::Ramp,
        }
    }

    fn waveform(&self) -> &dyn Waveform {
        match self {
            Signal::Sine(w) => w,
            Signal::Square(w) => w,
            Signal::Sawtooth(w) => w,
            Signal::Step(w) => w,
            Signal::Impulse(w) => w,
            Signal::Ramp(w) => w,
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::Sine(Sine::reference())
    }
}

impl From<SignalKind> for Signal {
    fn from(kind: SignalKind) -> Self {
        Self::reference(kind)
    }
}

impl Waveform for Signal {
    fn sample(&self, grid: &TimeGrid) -> SampledSequence {
        self.waveform().sample(grid)
    }

    fn closed_form(&self) -> Option<&dyn ClosedForm> {
        self.waveform().closed_form()
    }
}

/// Samples a signal of the given kind on `grid`.
///
/// # Returns
///
/// A sequence of `grid.len()` samples, sample `i` taken at `grid.instants()[i]`
///
/// # Examples
///
/// ```
/// use sigsys::{generate, SignalKind, SignalParams, TimeGrid};
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 4).unwrap();
/// let impulse = generate(SignalKind::Impulse, &grid, SignalParams::default());
/// assert_eq!(impulse.as_slice(), &[0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn generate(kind: SignalKind, grid: &TimeGrid, params: SignalParams) -> SampledSequence {
    debug!(
        "generating {} over {} instants in [{}, {}]",
        kind,
        grid.len(),
        grid.first(),
        grid.last()
    );
    Signal::new(kind, params).sample(grid)
}

/// Like [`generate`] but takes the kind by name.
///
/// # Errors
///
/// Returns [`Error::InvalidKind`](crate::Error::InvalidKind) for an unknown name.
pub fn generate_named(name: &str, grid: &TimeGrid, params: SignalParams) -> Result<SampledSequence> {
    let kind: SignalKind = name.parse()?;
    Ok(generate(kind, grid, params))
}
