//! `board-core` — foundational types for the boarding simulator.
//!
//! This crate is a dependency of `board-sim` and the demo binaries.  It has
//! no workspace dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`seat`]   | `SeatId` — typed `row*10 + column` seat encoding  |
//! | [`layout`] | `AircraftLayout` — validated cabin configuration  |
//! | [`rng`]    | `ReplicaRng` — per-replica deterministic RNG      |
//! | [`error`]  | `ConfigError`, `ConfigResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod layout;
pub mod rng;
pub mod seat;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use layout::AircraftLayout;
pub use rng::ReplicaRng;
pub use seat::SeatId;
