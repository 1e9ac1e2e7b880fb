//! canonical — Monte Carlo boarding run for the canonical narrow-body cabin.
//!
//! Boards the default 28-row half-row layout `NUM_REPLICAS` times with
//! random seat assignment and prints the mean boarding time with its sample
//! standard deviation.

use std::time::Instant;

use anyhow::Result;

use board_core::AircraftLayout;
use board_sim::{BoardingObserver, MonteCarlo};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const NUM_REPLICAS:      u32 = 100;
const PROGRESS_INTERVAL: u32 = 25;

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter;

impl BoardingObserver for ProgressPrinter {
    fn on_replica_end(&mut self, replica: u32, elapsed_secs: f64) {
        if (replica + 1) % PROGRESS_INTERVAL == 0 {
            println!(
                "  replica {:>3}/{NUM_REPLICAS}: boarded in {elapsed_secs:.1} s",
                replica + 1
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let layout = AircraftLayout {
        num_replicas: NUM_REPLICAS,
        ..AircraftLayout::default()
    };

    println!("=== canonical — Monte Carlo boarding simulation ===");
    println!(
        "Seats: {}  |  Replicas: {}  |  Seed: {}",
        layout.seat_count(),
        layout.num_replicas,
        SEED
    );
    println!();

    let mc = MonteCarlo::new(layout, SEED)?;

    let t0 = Instant::now();
    let report = mc.run(&mut ProgressPrinter)?;
    let wall = t0.elapsed();

    println!();
    println!("{report}");
    println!();
    println!("Simulation complete in {:.3} s", wall.as_secs_f64());

    Ok(())
}
