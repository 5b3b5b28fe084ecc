//! Shared signal generators for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use clock_core::Tick;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const EPSILON: f64 = 1e-10;

/// Square wave starting at `start_high`, with `edges` transitions
pub fn square_wave(half_period: Tick, edges: usize, start_high: bool) -> Vec<(Tick, bool)> {
    (0..edges)
        .map(|i| (i as Tick * half_period, start_high ^ (i % 2 == 1)))
        .collect()
}

/// Clock with fixed high and low times
pub fn duty_cycle_wave(high: Tick, low: Tick, cycles: usize) -> Vec<(Tick, bool)> {
    let mut events = Vec::with_capacity(2 * cycles + 1);
    let mut t = 0;
    for _ in 0..cycles {
        events.push((t, true));
        t += high;
        events.push((t, false));
        t += low;
    }
    events.push((t, true));
    events
}

/// Alternating transitions with uniformly jittered gaps in `[min_gap, max_gap]`
pub fn jittered_wave(seed: u64, edges: usize, min_gap: Tick, max_gap: Tick) -> Vec<(Tick, bool)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut t: Tick = rng.gen_range(0..1_000);
    let mut level = rng.gen_bool(0.5);
    let mut events = Vec::with_capacity(edges);
    for _ in 0..edges {
        events.push((t, level));
        t += rng.gen_range(min_gap..=max_gap);
        level = !level;
    }
    events
}

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
