use crate::problem::kmh::Kmh;

#[derive(Clone, Debug)]
pub struct RouteParams {
    /// Constant speed used to turn cumulative distance into an ETA
    pub average_speed: Kmh,

    /// Threads used for the nearest candidate scan
    pub scan_threads: Threads,

    /// Minimum number of unvisited candidates before the scan goes parallel
    pub parallel_scan_threshold: usize,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            average_speed: Kmh::AVERAGE_CITY_SPEED,
            scan_threads: Threads::Single,
            parallel_scan_threshold: 512,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => *num,
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = RouteParams::default();

        assert_eq!(params.average_speed, Kmh::new(30.0));
        assert_eq!(params.scan_threads.number_of_threads(), 1);
    }

    #[test]
    fn test_auto_threads() {
        assert!(Threads::Auto.number_of_threads() >= 1);
        assert_eq!(Threads::Multi(4).number_of_threads(), 4);
    }
}
