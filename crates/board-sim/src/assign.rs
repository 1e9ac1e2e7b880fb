//! Random seat assignment.

use board_core::{AircraftLayout, ConfigResult, ReplicaRng};

use crate::Passenger;

/// Draw one replica's boarding queue: a uniform random permutation of the
/// layout's seat domain, queued at strictly decreasing positions behind the
/// gate.
///
/// Passenger `i` (0 = first to board) starts at
/// `gate_offset - i * passenger_spacing`, so queue order is the creation
/// order and no two passengers share a position.
pub fn assign_seats(
    layout: &AircraftLayout,
    rng:    &mut ReplicaRng,
) -> ConfigResult<Vec<Passenger>> {
    layout.validate()?;

    let mut seats = layout.seat_ids();
    rng.shuffle(&mut seats);

    Ok(seats
        .into_iter()
        .enumerate()
        .map(|(i, seat)| {
            Passenger::new(seat, layout.gate_offset - i as f64 * layout.passenger_spacing)
        })
        .collect())
}
