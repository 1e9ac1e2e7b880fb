//! The queue simulator — one replica's tick loop.

use board_core::AircraftLayout;

use crate::{BoardingObserver, Passenger, SeatingRecord, SimError, SimResult, SwapPolicy};

/// Tick-cap multiplier over the worst-case serialised boarding estimate.
///
/// The estimate assumes every passenger walks the full queue length alone
/// and dwells for the maximum delay; a terminating configuration finishes
/// far below `factor * n * estimate`, so exceeding the cap can only mean a
/// configuration that makes no progress (e.g. a step size that never lands
/// exactly on a row offset).
const STALL_CAP_FACTOR: f64 = 8.0;

/// One boarding replica: the active passenger queue, the seating record, and
/// the fixed-step clock.
///
/// # Tick loop
///
/// ```text
/// while passengers remain:
///   clock += time_step
///   for each active passenger, in creation (queue) order:
///     ① busy?       → tick the timer down
///     ② now free:
///        at row     → mark seated, remove from the queue
///        aisle clear → advance speed * time_step
///        reached row → busy_timer = aisle_delay + swap extra (same tick)
/// ```
///
/// Processing order is the fixed creation order, not position order; this is
/// what makes a contested gap resolve the same way on every run with the
/// same seed.
pub struct QueueSim {
    /// The layout this replica was drawn from.
    pub layout: AircraftLayout,

    /// Passengers not yet seated, in boarding-queue order.  Mutated by
    /// removal only; relative order never changes.
    pub active: Vec<Passenger>,

    /// Seats occupied so far.  Grows monotonically.
    pub seated: SeatingRecord,

    /// Elapsed simulated seconds.
    pub clock: f64,

    /// Ticks processed so far.
    pub ticks: u64,

    policy: SwapPolicy,
    cap:    u64,
}

impl QueueSim {
    /// Build a replica from an already-validated layout and its boarding
    /// queue (see [`assign_seats`][crate::assign_seats]).
    pub fn new(layout: &AircraftLayout, passengers: Vec<Passenger>) -> Self {
        Self {
            policy: SwapPolicy::from_layout(layout),
            seated: SeatingRecord::new(layout),
            active: passengers,
            clock:  0.0,
            ticks:  0,
            cap:    tick_cap(layout),
            layout: layout.clone(),
        }
    }

    /// Run until every passenger is seated; returns the elapsed seconds.
    ///
    /// Fails with [`SimError::Stalled`] if the tick cap is exceeded.
    pub fn run<O: BoardingObserver>(&mut self, observer: &mut O) -> SimResult<f64> {
        while !self.active.is_empty() {
            if self.ticks >= self.cap {
                return Err(SimError::Stalled {
                    ticks:  self.ticks,
                    cap:    self.cap,
                    active: self.active.len(),
                });
            }
            self.step();
            observer.on_tick(self.ticks, self.clock, self.active.len());
        }
        Ok(self.clock)
    }

    /// Process one tick: a single pass over the active queue in creation
    /// order.
    pub fn step(&mut self) {
        let dt    = self.layout.time_step;
        let step  = self.layout.passenger_speed * dt;
        let pitch = self.layout.seat_pitch;

        self.ticks += 1;
        self.clock += dt;

        let mut i = 0;
        while i < self.active.len() {
            if self.active[i].is_busy() {
                self.active[i].tick(dt);
            }
            if !self.active[i].is_busy() {
                // Arrived on an earlier tick (or the timer just expired at
                // the row): sit down and leave the queue.  No movement or
                // delay is charged this tick.
                if self.active[i].is_at_target(pitch) {
                    let seat = self.active[i].seat;
                    self.seated.mark_seated(seat);
                    self.active.remove(i);
                    continue;
                }

                // Non-overtaking rule: move only when first in the queue, or
                // when the gap to the passenger ahead stays at least
                // `passenger_spacing` after allowing for that passenger's
                // own movement this tick.
                let clear = i == 0 || {
                    let gap = self.active[i - 1].position - self.active[i].position;
                    gap - step >= self.layout.passenger_spacing
                };
                if clear {
                    self.active[i].advance(step);

                    // Reached the row this tick: charge the aisle delay plus
                    // any seat-swap extra in the same tick.
                    if self.active[i].is_at_target(pitch) {
                        let extra = self.policy.extra_delay(self.active[i].seat, &self.seated);
                        self.active[i].begin_seating(self.layout.aisle_delay + extra);
                    }
                }
            }
            i += 1;
        }
    }
}

/// Worst-case tick budget for a layout.
///
/// Per-passenger travel assumes the full queue length (gate to last row plus
/// the whole queue's spacing) walked alone; dwell assumes the maximum
/// possible delay.  Multiplied by the passenger count and
/// [`STALL_CAP_FACTOR`].
fn tick_cap(layout: &AircraftLayout) -> u64 {
    let n    = layout.seat_count() as f64;
    let step = layout.passenger_speed * layout.time_step;

    let queue_length = layout.gate_offset.abs()
        + n * layout.passenger_spacing
        + layout.num_rows as f64 * layout.seat_pitch;
    let travel_ticks = (queue_length / step).ceil();
    let dwell_ticks =
        ((layout.aisle_delay + layout.double_swap_delay) / layout.time_step).ceil() + 1.0;

    (STALL_CAP_FACTOR * n * (travel_ticks + dwell_ticks)) as u64
}
