//! Aggregated simulation results.

use std::fmt::Write as _;

use crate::core::money::format_gold;

/// Counters for one simulated playthrough.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub encounters: u32,
    pub victories: u32,
    pub instant_victories: u32,
    pub flees: u32,
    pub revivals: u32,
    pub nights_slept: u32,
    pub items_bought: u32,
    pub items_broken: u32,
    pub gold_earned: f64,
    pub final_hp: i32,
    pub final_gold: f64,
    pub doctor_visits: u32,
}

/// Totals and averages over a batch of runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub seed: u64,
    pub num_runs: u32,
    pub total_encounters: u64,
    pub total_victories: u64,
    pub total_instant_victories: u64,
    pub total_flees: u64,
    pub total_revivals: u64,
    pub total_nights_slept: u64,
    pub total_items_bought: u64,
    pub total_items_broken: u64,
    pub avg_gold_earned: f64,
    pub avg_final_gold: f64,
    pub avg_final_hp: f64,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(seed: u64, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = (num_runs as f64).max(1.0);

        let sum = |f: fn(&RunStats) -> u32| runs.iter().map(|r| f(r) as u64).sum::<u64>();

        Self {
            seed,
            num_runs,
            total_encounters: sum(|r| r.encounters),
            total_victories: sum(|r| r.victories),
            total_instant_victories: sum(|r| r.instant_victories),
            total_flees: sum(|r| r.flees),
            total_revivals: sum(|r| r.revivals),
            total_nights_slept: sum(|r| r.nights_slept),
            total_items_bought: sum(|r| r.items_bought),
            total_items_broken: sum(|r| r.items_broken),
            avg_gold_earned: runs.iter().map(|r| r.gold_earned).sum::<f64>() / denom,
            avg_final_gold: runs.iter().map(|r| r.final_gold).sum::<f64>() / denom,
            avg_final_hp: runs.iter().map(|r| r.final_hp as f64).sum::<f64>() / denom,
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Simulation Report ===");
        let _ = writeln!(out, "Runs:             {}", self.num_runs);
        let _ = writeln!(out, "Seed:             {}", self.seed);
        let _ = writeln!(out, "Encounters:       {}", self.total_encounters);
        let _ = writeln!(out, "  Victories:      {}", self.total_victories);
        let _ = writeln!(out, "  Instant wins:   {}", self.total_instant_victories);
        let _ = writeln!(out, "  Flees:          {}", self.total_flees);
        let _ = writeln!(out, "  Revivals:       {}", self.total_revivals);
        let _ = writeln!(out, "Nights slept:     {}", self.total_nights_slept);
        let _ = writeln!(out, "Items bought:     {}", self.total_items_bought);
        let _ = writeln!(out, "Items broken:     {}", self.total_items_broken);
        let _ = writeln!(
            out,
            "Avg gold earned:  {}",
            format_gold(self.avg_gold_earned)
        );
        let _ = writeln!(out, "Avg final gold:   {}", format_gold(self.avg_final_gold));
        let _ = writeln!(out, "Avg final hp:     {:.1}", self.avg_final_hp);
        out
    }
}
