//! `board-sim` — the boarding simulation core and Monte Carlo runner.
//!
//! # One replica
//!
//! ```text
//! AircraftLayout ──▶ assign_seats ──▶ Vec<Passenger> ──▶ QueueSim::run
//!                    (shuffled seat     (queue order)       │
//!                     permutation)                          ▼
//!                                                   elapsed seconds
//! ```
//!
//! Each tick the queue is walked once in creation order: busy passengers
//! tick their timer down, free passengers sit (if at their row) or advance
//! (if the aisle ahead is clear), and newly arrived passengers are charged
//! the aisle delay plus whatever [`SwapPolicy`] says about already-seated
//! neighbours in their row.
//!
//! # Many replicas
//!
//! [`MonteCarlo`] repeats {fresh seat draw → fresh `QueueSim`} for
//! `layout.num_replicas` independent replicas and reduces the elapsed times
//! to a sample mean and standard deviation in a [`BoardingReport`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs replicas on Rayon's thread pool (same output).     |
//! | `serde`    | Serde derives on `BoardingReport` and core types.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use board_core::AircraftLayout;
//! use board_sim::{MonteCarlo, NoopObserver};
//!
//! let mc = MonteCarlo::new(AircraftLayout::default(), 42)?;
//! let report = mc.run(&mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod assign;
pub mod error;
pub mod observer;
pub mod passenger;
pub mod queue;
pub mod seating;
pub mod stats;
pub mod swap;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use assign::assign_seats;
pub use error::{SimError, SimResult};
pub use observer::{BoardingObserver, NoopObserver};
pub use passenger::Passenger;
pub use queue::QueueSim;
pub use seating::SeatingRecord;
pub use stats::{BoardingReport, MonteCarlo, sample_mean_variance};
pub use swap::SwapPolicy;
