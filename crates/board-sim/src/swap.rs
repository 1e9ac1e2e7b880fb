//! Seat-swap delay rule.
//!
//! Under the canonical 6-column convention (columns 1..=6 left to right:
//! 1,6 aisle; 2,5 middle; 3,4 window), a passenger arriving at its row may
//! have to wait for already-seated passengers between it and its seat to
//! stand up:
//!
//! | Arriving column | Occupied inward seats | Extra delay         |
//! |-----------------|-----------------------|---------------------|
//! | 3 or 4 (window) | —                     | 0                   |
//! | 2 (middle)      | 3                     | `swap_delay`        |
//! | 5 (middle)      | 4                     | `swap_delay`        |
//! | 1 (aisle)       | exactly one of {2,3}  | `swap_delay`        |
//! | 1 (aisle)       | both of {2,3}         | `double_swap_delay` |
//! | 6 (aisle)       | symmetric over {4,5}  | as above            |
//!
//! Columns outside 1..=6 (only possible on non-canonical layouts, where
//! both delays are validated to be zero) incur no extra delay.

use board_core::{AircraftLayout, SeatId};

use crate::SeatingRecord;

/// The swap-delay parameters, evaluated as a pure function of the arriving
/// passenger's seat and the current seating record.
#[derive(Debug, Clone, Copy)]
pub struct SwapPolicy {
    pub swap_delay: f64,
    pub double_swap_delay: f64,
}

impl SwapPolicy {
    pub fn from_layout(layout: &AircraftLayout) -> Self {
        Self {
            swap_delay:        layout.swap_delay,
            double_swap_delay: layout.double_swap_delay,
        }
    }

    /// Extra aisle-occupancy time for a passenger with `seat` arriving at
    /// its row right now.  Evaluated once, at the instant of arrival.
    pub fn extra_delay(&self, seat: SeatId, seated: &SeatingRecord) -> f64 {
        match seat.column() {
            // Middle seats: one window passenger may need to stand.
            2 => self.single(seated.is_seated(seat.neighbour(3))),
            5 => self.single(seated.is_seated(seat.neighbour(4))),

            // Aisle seats: up to two inward passengers may need to stand.
            1 => self.pair(
                seated.is_seated(seat.neighbour(2)),
                seated.is_seated(seat.neighbour(3)),
            ),
            6 => self.pair(
                seated.is_seated(seat.neighbour(5)),
                seated.is_seated(seat.neighbour(4)),
            ),

            // Window seats (and non-canonical columns): nothing to pass.
            _ => 0.0,
        }
    }

    #[inline]
    fn single(&self, occupied: bool) -> f64 {
        if occupied { self.swap_delay } else { 0.0 }
    }

    #[inline]
    fn pair(&self, middle: bool, window: bool) -> f64 {
        match (middle, window) {
            (true, true)   => self.double_swap_delay,
            (false, false) => 0.0,
            _              => self.swap_delay,
        }
    }
}
