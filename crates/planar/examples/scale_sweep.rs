//! Print where each narrow primitive stops agreeing with its wide twin.
//!
//! Usage:
//!   cargo run -p planar --example scale_sweep
//!   cargo run -p planar --example scale_sweep -- 2000
//!
//! Sweeps scales 1, 10, ..., 1,000,000 and prints one mismatch count per
//! primitive and scale (samples per cell from the first argument).

use planar::stress::{run_agreement, Primitive, StressCfg};

fn main() {
    let samples = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000u32);
    let scales = [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000];
    print!("{:<34}", "primitive");
    for s in scales {
        print!("{s:>10}");
    }
    println!();
    for p in Primitive::ALL {
        print!("{:<34}", format!("{} (<= {})", p.name(), p.ceiling()));
        for scale in scales {
            let cfg = StressCfg {
                scale,
                samples,
                seed: 2025,
            };
            match run_agreement(p, &cfg) {
                Ok(r) => print!("{:>10}", r.mismatches),
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            }
        }
        println!();
    }
}
