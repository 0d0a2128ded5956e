//! Stage timing with an injectable clock.
//!
//! Library code never reads the wall clock directly; callers pass a [`Clock`]
//! so tests can substitute a scripted one.
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `Instant`-backed clock measuring from its creation.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Run `f` and return its result with the elapsed milliseconds.
pub fn time_stage<C: Clock + ?Sized, T>(clock: &C, f: impl FnOnce() -> T) -> (T, f64) {
    let start = clock.now_ms();
    let out = f();
    (out, clock.now_ms() - start)
}

/// Timing entry describing a single measured operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Advances by a fixed step on every read.
    pub(crate) struct StepClock {
        pub now: Cell<f64>,
        pub step: f64,
    }

    impl Clock for StepClock {
        fn now_ms(&self) -> f64 {
            let t = self.now.get();
            self.now.set(t + self.step);
            t
        }
    }

    #[test]
    fn time_stage_uses_injected_clock() {
        let clock = StepClock {
            now: Cell::new(0.0),
            step: 2.5,
        };
        let (v, ms) = time_stage(&clock, || 41 + 1);
        assert_eq!(v, 42);
        assert_eq!(ms, 2.5);
    }

    #[test]
    fn breakdown_serializes_camel_case() {
        let mut t = TimingBreakdown::with_total(3.0);
        t.push("naive", 2.0);
        t.push("histogram", 1.0);
        assert_eq!(t.stage_ms("histogram"), Some(1.0));
        assert_eq!(t.stage_ms("missing"), None);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"totalMs\":3.0"));
        assert!(json.contains("\"elapsedMs\":2.0"));
    }

    #[test]
    fn monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
