use std::{
    fmt::Display,
    time::{Duration, Instant},
};

pub const TAG: &str = "perf";

#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub start: Instant,
    pub end: Instant,
}

impl Measurement {
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }
}

/// Wall-clock time of exactly one call to `f`. No warm-up, no repetition.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Measurement) {
    let start = Instant::now();
    let value = f();
    let end = Instant::now();
    (value, Measurement { start, end })
}

#[derive(Debug)]
pub struct Report {
    pub tag: &'static str,
    pub measurement: Measurement,
}

impl Report {
    pub fn new(tag: &'static str, measurement: Measurement) -> Self {
        Self { tag, measurement }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let millis = self.measurement.elapsed().as_secs_f64() * 1e3;
        write!(f, "{}: {millis:.3}ms", self.tag)
    }
}
