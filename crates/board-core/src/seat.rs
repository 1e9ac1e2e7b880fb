//! Strongly typed seat identifier.
//!
//! A seat is encoded as `row * 10 + column`, the numbering scheme the whole
//! simulator (and its swap rules) is written against.  The encoding is
//! injective only while `column <= 9`, which
//! [`AircraftLayout`][crate::AircraftLayout] validation enforces.

use std::fmt;

/// Identifier of one seat in the cabin, encoded as `row * 10 + column`.
///
/// Rows are 1-based from the front of the aircraft; columns are 1-based
/// left to right across the cabin (1,6 = aisle; 2,5 = middle; 3,4 = window
/// under the canonical 6-column convention).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatId(pub u32);

impl SeatId {
    /// Encode a (row, column) pair.  Both must be >= 1 and `column <= 9`.
    #[inline]
    pub fn new(row: u32, column: u32) -> SeatId {
        debug_assert!(row >= 1 && (1..=9).contains(&column));
        SeatId(row * 10 + column)
    }

    /// 1-based row number.
    #[inline]
    pub fn row(self) -> u32 {
        self.0 / 10
    }

    /// 1-based column number.
    #[inline]
    pub fn column(self) -> u32 {
        self.0 % 10
    }

    /// The seat in the same row at `column`.
    #[inline]
    pub fn neighbour(self, column: u32) -> SeatId {
        SeatId::new(self.row(), column)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}
