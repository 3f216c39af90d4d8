//! Signal kind names and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Categories of generated test signals.
///
/// # Examples
///
/// ```
/// use sigsys::SignalKind;
///
/// let kind: SignalKind = "Sawtooth".parse().unwrap();
/// assert_eq!(kind, SignalKind::Sawtooth);
/// assert_eq!(kind.to_string(), "Sawtooth");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Sine,
    Square,
    Sawtooth,
    Step,
    Impulse,
    Ramp,
}

impl SignalKind {
    /// Every kind, in menu order.
    pub const ALL: [SignalKind; 6] = [
        SignalKind::Sine,
        SignalKind::Square,
        SignalKind::Sawtooth,
        SignalKind::Step,
        SignalKind::Impulse,
        SignalKind::Ramp,
    ];

    /// Display name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::Sine => "Sine",
            SignalKind::Square => "Square",
            SignalKind::Sawtooth => "Sawtooth",
            SignalKind::Step => "Step",
            SignalKind::Impulse => "Impulse",
            SignalKind::Ramp => "Ramp",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalKind {
    type Err = Error;

    /// Parses a kind name, ignoring case, spaces, underscores and hyphens.
    ///
    /// Unknown names are reported as [`Error::InvalidKind`]. Callers that
    /// want an all-zero sequence for unrecognized names build that fallback
    /// themselves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        SignalKind::ALL
            .into_iter()
            .find(|kind| normalize_name(kind.name()) == wanted)
            .ok_or_else(|| Error::InvalidKind(s.trim().to_string()))
    }
}

/// Lowercases and strips separators so `"Time Scaling"`, `"time_scaling"`
/// and `"TimeScaling"` compare equal.
pub(crate) fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_kind() {
        for kind in SignalKind::ALL {
            assert_eq!(kind.name().parse::<SignalKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!("  sine ".parse::<SignalKind>(), Ok(SignalKind::Sine));
        assert_eq!("IMPULSE".parse::<SignalKind>(), Ok(SignalKind::Impulse));
        assert_eq!("saw-tooth".parse::<SignalKind>(), Ok(SignalKind::Sawtooth));
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert_eq!(
            "Triangle".parse::<SignalKind>(),
            Err(Error::InvalidKind("Triangle".to_string()))
        );
        assert!(matches!(
            "".parse::<SignalKind>(),
            Err(Error::InvalidKind(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(SignalKind::Ramp.to_string(), "Ramp");
    }
}
