use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Div},
};

use jiff::SignedDuration;

use crate::problem::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);

    pub fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for Kilometers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} km", precision, self.0),
            None => write!(f, "{} km", self.0),
        }
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl AddAssign for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 += other.0;
    }
}

impl Div<Kmh> for Kilometers {
    type Output = SignedDuration;

    fn div(self, speed: Kmh) -> SignedDuration {
        let seconds = self.0 / speed.value() * 3600.0;
        SignedDuration::from_secs_f64(seconds)
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Kilometers>>(iter: I) -> Kilometers {
        iter.fold(Kilometers::ZERO, |acc, x| acc + x)
    }
}
