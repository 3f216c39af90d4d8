//! Generation parameters.

/// Frequency in Hz used by every shape that does not take its own parameters.
pub const REFERENCE_FREQUENCY: f64 = 5.0;

/// Generation parameters for a signal.
///
/// The bundle is accepted for every kind but only [`Sine`](crate::Sine)
/// honors it; the other shapes are fixed to unit amplitude and
/// [`REFERENCE_FREQUENCY`].
///
/// # Examples
///
/// ```
/// use sigsys::SignalParams;
///
/// let params = SignalParams::default().with_amplitude(2.0);
/// assert_eq!(params.amplitude, 2.0);
/// assert_eq!(params.frequency, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    /// Peak amplitude
    pub amplitude: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Phase offset in radians
    pub phase: f64,
}

impl SignalParams {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }
}

impl Default for SignalParams {
    fn default() -> Self {
        Self::new(1.0, REFERENCE_FREQUENCY, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference() {
        let params = SignalParams::default();
        assert_eq!(params, SignalParams::new(1.0, 5.0, 0.0));
    }

    #[test]
    fn test_builders() {
        let params = SignalParams::default()
            .with_amplitude(0.5)
            .with_frequency(12.0)
            .with_phase(-1.0);
        assert_eq!(params, SignalParams::new(0.5, 12.0, -1.0));
    }
}
