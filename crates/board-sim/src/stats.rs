//! Monte Carlo replica runner and summary statistics.

use std::fmt;

use board_core::{AircraftLayout, ConfigError, ConfigResult, ReplicaRng};

use crate::{BoardingObserver, NoopObserver, QueueSim, SimResult, assign_seats};

// ── Statistics ────────────────────────────────────────────────────────────────

/// Sample mean and sample variance (N−1 denominator) of `times`.
///
/// Errors if fewer than two samples are given — a sample variance is
/// undefined for N < 2.
pub fn sample_mean_variance(times: &[f64]) -> ConfigResult<(f64, f64)> {
    if times.len() < 2 {
        return Err(ConfigError::TooFewReplicas(times.len() as u32));
    }
    let n = times.len() as f64;
    let mean = times.iter().sum::<f64>() / n;
    let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Ok((mean, variance))
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Summary of a full Monte Carlo run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardingReport {
    /// Mean boarding time across replicas, in seconds.
    pub mean_seconds: f64,

    /// Sample standard deviation of the boarding time, in seconds.
    pub stddev_seconds: f64,

    /// Number of replicas aggregated.
    pub num_replicas: u32,

    /// Human-readable description of the cabin that was boarded.
    pub layout_description: String,
}

impl fmt::Display for BoardingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.layout_description)?;
        write!(
            f,
            "Over {} simulations, the average time for all passengers to board \
             the plane is {:.1} +- {:.1} seconds.",
            self.num_replicas, self.mean_seconds, self.stddev_seconds
        )
    }
}

// ── MonteCarlo ────────────────────────────────────────────────────────────────

/// Runs `layout.num_replicas` independent boarding replicas and reduces the
/// elapsed times to a [`BoardingReport`].
///
/// Each replica gets a fresh [`ReplicaRng`] (derived from the global seed
/// and the replica index, so streams are independent of execution order), a
/// fresh seat draw, and a fresh [`QueueSim`] — no state is shared between
/// replicas.  With the `parallel` Cargo feature, replicas run on Rayon's
/// thread pool; results are collected in replica order before any
/// aggregation, so the report is identical either way.
///
/// A run either produces a complete report or fails with the first replica
/// error; partial aggregates are never returned.
pub struct MonteCarlo {
    layout: AircraftLayout,
    seed:   u64,
}

impl MonteCarlo {
    /// Validate `layout` (including the ≥ 2 replica requirement for a
    /// sample variance) and build a runner.
    pub fn new(layout: AircraftLayout, seed: u64) -> ConfigResult<Self> {
        layout.validate()?;
        if layout.num_replicas < 2 {
            return Err(ConfigError::TooFewReplicas(layout.num_replicas));
        }
        Ok(Self { layout, seed })
    }

    pub fn layout(&self) -> &AircraftLayout {
        &self.layout
    }

    /// Run all replicas and aggregate.
    ///
    /// `observer.on_replica_end` fires once per replica in ascending replica
    /// order (after the join, under the `parallel` feature).
    pub fn run<O: BoardingObserver>(&self, observer: &mut O) -> SimResult<BoardingReport> {
        let times = self.replica_times()?;
        for (replica, &elapsed) in times.iter().enumerate() {
            observer.on_replica_end(replica as u32, elapsed);
        }

        let (mean, variance) = sample_mean_variance(&times)?;
        Ok(BoardingReport {
            mean_seconds:       mean,
            stddev_seconds:     variance.sqrt(),
            num_replicas:       self.layout.num_replicas,
            layout_description: self.layout.describe(),
        })
    }

    /// Elapsed seconds per replica, in replica order.
    pub fn replica_times(&self) -> SimResult<Vec<f64>> {
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.layout.num_replicas)
                .map(|replica| self.run_replica(replica))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // into_par_iter preserves index order on collect, so the joined
            // Vec is identical to the sequential one.
            (0..self.layout.num_replicas)
                .into_par_iter()
                .map(|replica| self.run_replica(replica))
                .collect()
        }
    }

    fn run_replica(&self, replica: u32) -> SimResult<f64> {
        let mut rng = ReplicaRng::new(self.seed, replica);
        let passengers = assign_seats(&self.layout, &mut rng)?;
        QueueSim::new(&self.layout, passengers).run(&mut NoopObserver)
    }
}
