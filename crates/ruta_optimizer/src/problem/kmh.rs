#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Kmh(f64);

impl Kmh {
    /// Assumed average speed of a school route in city traffic.
    pub const AVERAGE_CITY_SPEED: Kmh = Kmh(30.0);

    pub fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for Kmh {
    fn default() -> Self {
        Kmh::AVERAGE_CITY_SPEED
    }
}
