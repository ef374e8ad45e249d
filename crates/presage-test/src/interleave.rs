//! Interleaving fuzzer
//!
//! Drives an engine through seeded random interleavings of optimistic
//! dispatches and out-of-order resolutions, checking after every step that
//! the visible state matches a model oracle: the fold of all dispatched
//! payloads in dispatch order with failed ones excised. The reducer
//! appends tags, so any ordering mistake shows up in the comparison.

use presage_core::{ActionEnvelope, Message, PresageResult};
use presage_engine::ReconciliationEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct InterleaveConfig {
    /// Number of operations to run
    pub op_count: usize,
    /// Probability that a step dispatches a new action rather than
    /// resolving one
    pub dispatch_prob: f64,
    /// Probability that a resolution is a failure
    pub failure_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for InterleaveConfig {
    fn default() -> Self {
        InterleaveConfig {
            op_count: 1000,
            dispatch_prob: 0.5,
            failure_prob: 0.3,
            seed: 42,
        }
    }
}

impl InterleaveConfig {
    /// Light schedule for quick tests
    pub fn light() -> Self {
        InterleaveConfig {
            op_count: 100,
            dispatch_prob: 0.5,
            failure_prob: 0.3,
            seed: 42,
        }
    }

    /// Heavy schedule for thorough runs
    pub fn heavy() -> Self {
        InterleaveConfig {
            op_count: 10000,
            dispatch_prob: 0.6,
            failure_prob: 0.4,
            seed: 42,
        }
    }
}

/// Model-side verdict for a dispatched action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    InFlight,
    Confirmed,
    Failed,
}

/// Fuzzing report
#[derive(Debug, Default)]
pub struct InterleaveReport {
    pub dispatched: u64,
    pub confirmed: u64,
    pub failed: u64,
    pub coupling_violations: u32,
    pub divergences: u32,
}

impl InterleaveReport {
    pub fn is_valid(&self) -> bool {
        self.coupling_violations == 0 && self.divergences == 0
    }
}

/// Interleaving fuzzer
pub struct InterleaveFuzzer {
    config: InterleaveConfig,
    rng: StdRng,
}

fn tagged(mut state: Vec<u64>, tag: &u64) -> Vec<u64> {
    state.push(*tag);
    state
}

impl InterleaveFuzzer {
    pub fn new(config: InterleaveConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        InterleaveFuzzer { config, rng }
    }

    /// Run the schedule
    ///
    /// The engine runs under the default (ignoring) orphan policy and the
    /// fuzzer only resolves actions it dispatched, so the result is an
    /// `Err` only if the engine itself breaks its contract.
    pub fn run(&mut self) -> PresageResult<InterleaveReport> {
        let mut engine = ReconciliationEngine::new(tagged as fn(Vec<u64>, &u64) -> Vec<u64>);
        let mut state: Vec<u64> = Vec::new();
        let mut history: Vec<(ActionEnvelope<u64>, Verdict)> = Vec::new();
        let mut report = InterleaveReport::default();
        let mut next_tag = 0u64;

        for _ in 0..self.config.op_count {
            let in_flight: Vec<usize> = history
                .iter()
                .enumerate()
                .filter(|(_, (_, verdict))| *verdict == Verdict::InFlight)
                .map(|(i, _)| i)
                .collect();

            let dispatch = in_flight.is_empty() || self.rng.gen::<f64>() < self.config.dispatch_prob;

            if dispatch {
                next_tag += 1;
                let (message, handle) = Message::optimistic(next_tag);
                state = engine.reduce(state, message)?;
                history.push((handle, Verdict::InFlight));
                report.dispatched += 1;
            } else {
                let index = in_flight[self.rng.gen_range(0..in_flight.len())];
                let fail = self.rng.gen::<f64>() < self.config.failure_prob;
                let (handle, verdict) = &mut history[index];
                if fail {
                    handle.resolve_failure();
                    *verdict = Verdict::Failed;
                    report.failed += 1;
                } else {
                    handle.resolve_success();
                    *verdict = Verdict::Confirmed;
                    report.confirmed += 1;
                }
                let message = Message::from(handle.clone());
                state = engine.reduce(state, message)?;
            }

            if engine.is_idle() != engine.baseline().is_none() {
                report.coupling_violations += 1;
            }

            let expected: Vec<u64> = history
                .iter()
                .filter(|(_, verdict)| *verdict != Verdict::Failed)
                .map(|(handle, _)| *handle.payload())
                .collect();
            if state != expected {
                report.divergences += 1;
            }
        }

        Ok(report)
    }
}
