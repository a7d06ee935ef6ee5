//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 1000 runs, random seed
//!   cargo run --bin simulate -- -n 100           # 100 runs
//!   cargo run --bin simulate -- --seed 42        # reproducible batch
//!   cargo run --bin simulate -- --turns 500      # longer sessions

use std::env;
use std::process;

use wander::simulator::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    println!(
        "Simulating {} runs of up to {} town turns...",
        config.num_runs, config.max_turns_per_run
    );
    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => config.num_runs = next_value(args, &mut i)?,
            "--seed" => config.seed = Some(next_value(args, &mut i)?),
            "--turns" => config.max_turns_per_run = next_value(args, &mut i)?,
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(config)
}

fn next_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = args[*i].clone();
    *i += 1;
    args.get(*i)
        .ok_or_else(|| format!("{} expects a value", flag))?
        .parse()
        .map_err(|_| format!("{} expects a number", flag))
}
