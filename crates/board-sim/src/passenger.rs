//! Per-passenger agent state.
//!
//! A passenger is either **moving** (free, somewhere short of its row),
//! **busy** (at its row, timer counting down the aisle/swap interval) or
//! **seated** (removed from the active queue by [`QueueSim`][crate::QueueSim]
//! the tick its timer reaches zero at the target).
//!
//! Passengers never reference each other; all cross-passenger logic (queue
//! gaps, seated neighbours) lives in the simulator, keeping ownership
//! strictly acyclic.

use board_core::SeatId;

/// One passenger in the boarding queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    /// The assigned seat; never changes after assignment.
    pub seat: SeatId,

    /// Queue-axis coordinate: negative at the gate, increasing toward the
    /// rear.  Only [`advance`][Self::advance] mutates it.
    pub position: f64,

    /// Remaining seconds of aisle/swap occupancy.  Always >= 0; the
    /// passenger may not move while it is non-zero.
    pub busy_timer: f64,
}

impl Passenger {
    /// A free passenger at `position`.
    #[inline]
    pub fn new(seat: SeatId, position: f64) -> Self {
        Self { seat, position, busy_timer: 0.0 }
    }

    /// Is the passenger occupying the aisle (stowing, sitting, or swapping)?
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy_timer > 0.0
    }

    /// Count the busy timer down by one time step, flooring at zero.
    #[inline]
    pub fn tick(&mut self, dt: f64) {
        self.busy_timer = (self.busy_timer - dt).max(0.0);
    }

    /// Move `dx` along the queue axis.  Only legal while free.
    #[inline]
    pub fn advance(&mut self, dx: f64) {
        debug_assert!(!self.is_busy(), "busy passengers cannot move");
        self.position += dx;
    }

    /// Begin the aisle/seat-swap interval: the passenger stops and occupies
    /// the aisle for `delay` seconds before being considered seated.
    #[inline]
    pub fn begin_seating(&mut self, delay: f64) {
        self.busy_timer = delay;
    }

    /// The aisle offset of this passenger's row.
    #[inline]
    pub fn target_position(&self, seat_pitch: f64) -> f64 {
        (self.seat.row() - 1) as f64 * seat_pitch
    }

    /// Has the passenger reached its row's aisle offset?
    ///
    /// Exact comparison: queue positions only ever take values
    /// `gate_offset + k * speed * time_step`, so a configuration whose step
    /// does not land exactly on the row offset never seats — the
    /// simulator's tick cap turns that into a fatal stall instead of an
    /// infinite loop.
    #[inline]
    pub fn is_at_target(&self, seat_pitch: f64) -> bool {
        self.position == self.target_position(seat_pitch)
    }
}
