//! Transition event types

use std::fmt;

/// Tick count of a transition timestamp
///
/// The unit is opaque; only differences and comparisons are meaningful.
pub type Tick = i64;

/// Difference between two ticks
///
/// Wide enough to hold the gap between any two `Tick` values.
pub type Span = i128;

/// Elapsed ticks from `from` to `to`
pub fn span(from: Tick, to: Tick) -> Span {
    Span::from(to) - Span::from(from)
}

/// Logic level of a digital signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(bit: bool) -> Self {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::High => write!(f, "high"),
        }
    }
}

/// A single recorded change of digital level
///
/// `level` is the level the signal settles at after the edge, so a
/// transition to [`Level::High`] is a rising edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub time: Tick,
    pub level: Level,
}

impl Transition {
    pub fn new(time: Tick, level: impl Into<Level>) -> Self {
        Self {
            time,
            level: level.into(),
        }
    }
}

impl From<(Tick, bool)> for Transition {
    fn from((time, bit): (Tick, bool)) -> Self {
        Self::new(time, bit)
    }
}

impl From<(Tick, Level)> for Transition {
    fn from((time, level): (Tick, Level)) -> Self {
        Self { time, level }
    }
}

/// Captures commonly encode levels as 0/1
impl From<(Tick, u8)> for Transition {
    fn from((time, bit): (Tick, u8)) -> Self {
        Self::new(time, bit != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
        assert_eq!(Level::High.to_string(), "high");
    }

    #[test]
    fn test_transition_from_tuples() {
        let t: Transition = (10, true).into();
        assert_eq!(t, Transition::new(10, Level::High));

        let t: Transition = (20, 0u8).into();
        assert_eq!(t.level, Level::Low);

        let t: Transition = (30, Level::Low).into();
        assert_eq!(t.time, 30);
    }

    #[test]
    fn test_span_covers_full_tick_range() {
        assert_eq!(span(10, 30), 20);
        assert_eq!(span(Tick::MIN, Tick::MAX), Span::from(u64::MAX));
        assert_eq!(span(Tick::MAX, Tick::MIN), -Span::from(u64::MAX));
    }
}
