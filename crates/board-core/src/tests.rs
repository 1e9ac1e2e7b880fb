//! Unit tests for board-core primitives.

#[cfg(test)]
mod seat {
    use crate::SeatId;

    #[test]
    fn encoding_roundtrip() {
        let s = SeatId::new(28, 6);
        assert_eq!(s.0, 286);
        assert_eq!(s.row(), 28);
        assert_eq!(s.column(), 6);
    }

    #[test]
    fn neighbour_stays_in_row() {
        let s = SeatId::new(12, 2);
        assert_eq!(s.neighbour(3), SeatId(123));
    }

    #[test]
    fn display() {
        assert_eq!(SeatId::new(1, 1).to_string(), "seat 11");
    }
}

#[cfg(test)]
mod layout {
    use crate::{AircraftLayout, ConfigError, SeatId};

    #[test]
    fn canonical_default_is_valid() {
        AircraftLayout::default().validate().unwrap();
    }

    #[test]
    fn half_row_domain_excludes_first_row_triple() {
        let layout = AircraftLayout::default();
        let seats = layout.seat_ids();
        assert_eq!(seats.len(), 28 * 6 - 3);
        assert_eq!(seats.len(), layout.seat_count());
        for id in [14, 15, 16] {
            assert!(!seats.contains(&SeatId(id)), "seat {id} should not exist");
            assert!(!layout.contains(SeatId(id)));
        }
        assert!(layout.contains(SeatId(11)));
        assert!(layout.contains(SeatId(13)));
    }

    #[test]
    fn full_domain_has_every_seat_once() {
        let layout = AircraftLayout { half_row: false, ..Default::default() };
        let mut seats = layout.seat_ids();
        assert_eq!(seats.len(), 28 * 6);
        seats.sort();
        seats.dedup();
        assert_eq!(seats.len(), 28 * 6, "seat ids must be unique");
    }

    #[test]
    fn zero_rows_rejected() {
        let layout = AircraftLayout { num_rows: 0, ..Default::default() };
        assert!(matches!(
            layout.validate(),
            Err(ConfigError::ZeroCount { field: "num_rows" })
        ));
    }

    #[test]
    fn non_positive_kinematics_rejected() {
        let layout = AircraftLayout { passenger_speed: 0.0, ..Default::default() };
        assert!(matches!(layout.validate(), Err(ConfigError::NonPositive { .. })));

        let layout = AircraftLayout { time_step: -0.25, ..Default::default() };
        assert!(matches!(layout.validate(), Err(ConfigError::NonPositive { .. })));
    }

    #[test]
    fn negative_delay_rejected() {
        let layout = AircraftLayout { swap_delay: -1.0, ..Default::default() };
        assert!(matches!(layout.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn positive_gate_offset_rejected() {
        let layout = AircraftLayout { gate_offset: 1.0, ..Default::default() };
        assert!(matches!(layout.validate(), Err(ConfigError::GateOffset(_))));
    }

    #[test]
    fn swap_rules_require_six_columns() {
        let layout = AircraftLayout {
            num_cols: 4,
            half_row: false,
            ..Default::default()
        };
        assert!(matches!(
            layout.validate(),
            Err(ConfigError::SwapNeedsSixColumns(4))
        ));
    }

    #[test]
    fn narrow_cabin_valid_when_swaps_disabled() {
        // The single-seat boundary layout: no swap rules, no half row.
        let layout = AircraftLayout {
            num_rows:          1,
            num_cols:          1,
            half_row:          false,
            gate_offset:       -1.0,
            swap_delay:        0.0,
            double_swap_delay: 0.0,
            ..Default::default()
        };
        layout.validate().unwrap();
        assert_eq!(layout.seat_count(), 1);
        assert_eq!(layout.seat_ids(), vec![SeatId(11)]);
    }

    #[test]
    fn half_row_requires_six_columns() {
        let layout = AircraftLayout {
            num_cols:          5,
            swap_delay:        0.0,
            double_swap_delay: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            layout.validate(),
            Err(ConfigError::HalfRowNeedsSixColumns(5))
        ));
    }

    #[test]
    fn ten_or_more_columns_rejected() {
        let layout = AircraftLayout {
            num_cols:          10,
            half_row:          false,
            swap_delay:        0.0,
            double_swap_delay: 0.0,
            ..Default::default()
        };
        assert!(matches!(layout.validate(), Err(ConfigError::TooManyColumns(10))));
    }

    #[test]
    fn row_position_uses_seat_pitch() {
        let layout = AircraftLayout { seat_pitch: 0.8, ..Default::default() };
        assert_eq!(layout.row_position(1), 0.0);
        assert_eq!(layout.row_position(5), 3.2);
    }

    #[test]
    fn describe_mentions_half_row() {
        let layout = AircraftLayout::default();
        assert!(layout.describe().contains("only 3 seats"));
        let layout = AircraftLayout { half_row: false, ..layout };
        assert!(!layout.describe().contains("only 3 seats"));
    }
}

#[cfg(test)]
mod rng {
    use crate::ReplicaRng;

    fn draw_shuffle(seed: u64, replica: u32) -> Vec<u32> {
        let mut xs: Vec<u32> = (0..100).collect();
        ReplicaRng::new(seed, replica).shuffle(&mut xs);
        xs
    }

    #[test]
    fn same_seed_same_stream() {
        assert_eq!(draw_shuffle(42, 0), draw_shuffle(42, 0));
        assert_eq!(draw_shuffle(42, 7), draw_shuffle(42, 7));
    }

    #[test]
    fn replicas_get_independent_streams() {
        assert_ne!(draw_shuffle(42, 0), draw_shuffle(42, 1));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(draw_shuffle(42, 0), draw_shuffle(43, 0));
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = ReplicaRng::new(1, 0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(0..10);
            assert!(v < 10);
        }
    }
}
