use std::fmt::Display;

use jiff::SignedDuration;

use crate::problem::{kilometers::Kilometers, kmh::Kmh};

/// Estimated elapsed time since departure, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Eta {
    minutes: i64,
}

impl Eta {
    pub const ZERO: Eta = Eta { minutes: 0 };

    pub fn from_minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Minutes needed to cover `distance` at `speed`, rounded to the nearest
    /// minute with halves rounded up.
    pub fn from_distance(distance: Kilometers, speed: Kmh) -> Self {
        let minutes = (distance.value() / speed.value() * 60.0).round() as i64;
        Self { minutes }
    }

    pub fn total_minutes(&self) -> i64 {
        self.minutes
    }

    pub fn hours(&self) -> i64 {
        self.minutes / 60
    }

    pub fn minutes(&self) -> i64 {
        self.minutes % 60
    }

    pub fn as_duration(&self) -> SignedDuration {
        SignedDuration::from_mins(self.minutes)
    }
}

impl Display for Eta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours(), self.minutes())
    }
}
