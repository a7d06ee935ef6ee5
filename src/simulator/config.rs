//! Simulation configuration.

/// Configuration for a batch of simulated playthroughs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs.
    pub num_runs: u32,

    /// Base random seed for reproducibility (None = random). Run `i` is
    /// seeded with `seed + i`.
    pub seed: Option<u64>,

    /// Town-loop iterations per run before the adventurer retires.
    pub max_turns_per_run: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_turns_per_run: 200,
        }
    }
}
