//! Seated-seat occupancy record.
//!
//! The seat domain is known and bounded at construction, so occupancy is a
//! dense `Vec<bool>` indexed by `(row - 1) * num_cols + (column - 1)` rather
//! than a hash map.  The record grows monotonically — seats are marked, never
//! cleared — and is owned by exactly one replica.

use board_core::{AircraftLayout, SeatId};

/// Which seats are occupied, for one replica.
#[derive(Debug, Clone)]
pub struct SeatingRecord {
    seated:   Vec<bool>,
    num_cols: u32,
}

impl SeatingRecord {
    /// An empty record sized for `layout`.
    ///
    /// Half-row layouts allocate the excluded first-row slots too; they are
    /// simply never marked.
    pub fn new(layout: &AircraftLayout) -> Self {
        Self {
            seated:   vec![false; (layout.num_rows * layout.num_cols) as usize],
            num_cols: layout.num_cols,
        }
    }

    #[inline]
    fn index(&self, seat: SeatId) -> usize {
        ((seat.row() - 1) * self.num_cols + (seat.column() - 1)) as usize
    }

    /// Is `seat` occupied?  Seats outside the layout count as empty.
    #[inline]
    pub fn is_seated(&self, seat: SeatId) -> bool {
        let column = seat.column();
        if column == 0 || column > self.num_cols {
            return false;
        }
        self.seated.get(self.index(seat)).copied().unwrap_or(false)
    }

    /// Mark `seat` occupied.
    #[inline]
    pub fn mark_seated(&mut self, seat: SeatId) {
        let i = self.index(seat);
        debug_assert!(i < self.seated.len(), "seat {seat} outside layout");
        self.seated[i] = true;
    }

    /// Number of occupied seats.
    pub fn seated_count(&self) -> usize {
        self.seated.iter().filter(|&&s| s).count()
    }
}
