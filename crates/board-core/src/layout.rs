//! Cabin geometry and run configuration.
//!
//! # Design
//!
//! One value object carries everything a replica needs: geometry (rows,
//! columns, half row), the queue axis (gate offset, seat pitch, passenger
//! spacing), kinematics (speed, time step), the delay model (aisle, swap,
//! double swap), and the replica count.  All fields are validated together
//! by [`AircraftLayout::validate`]; nothing downstream re-checks them.
//!
//! The queue axis is one-dimensional: position increases from the gate
//! (negative) toward the rear of the aircraft, and row `r`'s aisle offset is
//! `(r - 1) * seat_pitch`.

use crate::error::{ConfigError, ConfigResult};
use crate::seat::SeatId;

/// Seat ids excluded from row 1 when `half_row` is set (the canonical
/// 6-column cabin keeps only seats 11, 12, 13 in the first row).
const HALF_ROW_EXCLUDED: [u32; 3] = [14, 15, 16];

/// Full configuration for a boarding run.
///
/// Construct with struct syntax (usually starting from `Default`, the
/// canonical 28-row narrow-body cabin) and call [`validate`][Self::validate]
/// before use — the `MonteCarlo` runner in `board-sim` does this for you.
///
/// Units: seconds for times, metres for distances.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AircraftLayout {
    /// Number of seat rows.  Must be >= 1.
    pub num_rows: u32,

    /// Seats per row.  Must be in `1..=9` (seat-id encoding), and exactly 6
    /// whenever the swap rules or `half_row` are in play.
    pub num_cols: u32,

    /// Row 1 has only seats 11–13; seats 14–16 do not exist.
    pub half_row: bool,

    /// Queue position of the first passenger, behind row 1.  Must be < 0.
    pub gate_offset: f64,

    /// Distance between consecutive rows along the queue axis.
    pub seat_pitch: f64,

    /// Minimum following distance between queued passengers.
    pub passenger_spacing: f64,

    /// Walking speed while the aisle ahead is clear.
    pub passenger_speed: f64,

    /// Fixed simulation time step.
    pub time_step: f64,

    /// Time spent stowing luggage and sitting down, absent any swap.
    pub aisle_delay: f64,

    /// Extra time when one already-seated passenger must stand up.
    pub swap_delay: f64,

    /// Extra time when two already-seated passengers must stand up.
    pub double_swap_delay: f64,

    /// Number of independent boarding replicas per Monte Carlo run.
    pub num_replicas: u32,
}

impl Default for AircraftLayout {
    /// The canonical narrow-body cabin: 28 rows of 6 with a half first row.
    fn default() -> Self {
        Self {
            num_rows:          28,
            num_cols:          6,
            half_row:          true,
            gate_offset:       -25.0,
            seat_pitch:        1.0,
            passenger_spacing: 0.5,
            passenger_speed:   0.5,
            time_step:         0.25,
            aisle_delay:       25.0,
            swap_delay:        11.0,
            double_swap_delay: 22.0,
            num_replicas:      100,
        }
    }
}

impl AircraftLayout {
    /// Check every field, returning the first violation found.
    ///
    /// The swap rules and the half-row geometry are only meaningful on a
    /// 6-column cabin, so `num_cols != 6` is rejected exactly when either is
    /// in effect; degenerate layouts (e.g. a single seat with zero swap
    /// delays) remain valid.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_rows == 0 {
            return Err(ConfigError::ZeroCount { field: "num_rows" });
        }
        if self.num_cols == 0 {
            return Err(ConfigError::ZeroCount { field: "num_cols" });
        }
        if self.num_cols > 9 {
            return Err(ConfigError::TooManyColumns(self.num_cols));
        }
        if self.num_replicas == 0 {
            return Err(ConfigError::ZeroCount { field: "num_replicas" });
        }
        if self.gate_offset >= 0.0 {
            return Err(ConfigError::GateOffset(self.gate_offset));
        }

        for (field, value) in [
            ("seat_pitch",        self.seat_pitch),
            ("passenger_spacing", self.passenger_spacing),
            ("passenger_speed",   self.passenger_speed),
            ("time_step",         self.time_step),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("aisle_delay",       self.aisle_delay),
            ("swap_delay",        self.swap_delay),
            ("double_swap_delay", self.double_swap_delay),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let swap_active = self.swap_delay > 0.0 || self.double_swap_delay > 0.0;
        if swap_active && self.num_cols != 6 {
            return Err(ConfigError::SwapNeedsSixColumns(self.num_cols));
        }
        if self.half_row && self.num_cols != 6 {
            return Err(ConfigError::HalfRowNeedsSixColumns(self.num_cols));
        }

        Ok(())
    }

    /// Number of seats in the valid domain.
    #[inline]
    pub fn seat_count(&self) -> usize {
        let full = (self.num_rows * self.num_cols) as usize;
        if self.half_row { full - HALF_ROW_EXCLUDED.len() } else { full }
    }

    /// All valid seat ids, in row-major order.
    pub fn seat_ids(&self) -> Vec<SeatId> {
        let mut seats = Vec::with_capacity(self.seat_count());
        for row in 1..=self.num_rows {
            for col in 1..=self.num_cols {
                let seat = SeatId::new(row, col);
                if self.half_row && HALF_ROW_EXCLUDED.contains(&seat.0) {
                    continue;
                }
                seats.push(seat);
            }
        }
        seats
    }

    /// Does `seat` exist in this layout?
    pub fn contains(&self, seat: SeatId) -> bool {
        (1..=self.num_rows).contains(&seat.row())
            && (1..=self.num_cols).contains(&seat.column())
            && !(self.half_row && HALF_ROW_EXCLUDED.contains(&seat.0))
    }

    /// Aisle offset of `row` along the queue axis.
    #[inline]
    pub fn row_position(&self, row: u32) -> f64 {
        (row - 1) as f64 * self.seat_pitch
    }

    /// One-sentence description of the cabin, for reports.
    pub fn describe(&self) -> String {
        if self.half_row {
            format!(
                "The plane has {} rows with {} seats each, except the first row, \
                 which has only 3 seats.",
                self.num_rows, self.num_cols
            )
        } else {
            format!(
                "The plane has {} rows with {} seats each.",
                self.num_rows, self.num_cols
            )
        }
    }
}
