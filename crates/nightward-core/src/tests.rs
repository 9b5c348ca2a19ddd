//! Unit tests for nightward-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BuildingId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(BuildingId(100) > BuildingId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Point, Rect};

    #[test]
    fn distance_and_normalize() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-5);
        assert!((b.normalized().length() - 1.0).abs() < 1e-5);
        assert_eq!(Point::ZERO.normalized(), Point::ZERO);
    }

    #[test]
    fn rect_contains_edge_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Point::new(10.0, 10.0)));
        assert!(r.contains_point(Point::new(0.0, 0.0)));
        assert!(!r.contains_point(Point::new(10.1, 5.0)));
    }

    #[test]
    fn rect_intersects_shared_edge() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(a.intersects(&b));
        let c = Rect::new(10.1, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn quadrants_partition_bounds() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let qs = r.quadrants();
        assert_eq!(qs[0], Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(qs[3], Rect::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn from_center_roundtrip() {
        let center = Point::new(5.0, 5.0);
        let r = Rect::from_center(center, 10.0, 20.0);
        assert_eq!(r.center(), center);
        assert!((r.width() - 10.0).abs() < 1e-5);
        assert!((r.height() - 20.0).abs() < 1e-5);
    }
}

#[cfg(test)]
mod time {
    use crate::{Tick, WorldClock};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
    }

    #[test]
    fn tick_periods() {
        assert!(Tick(60).is_multiple_of(60));
        assert!(!Tick(61).is_multiple_of(60));
        assert!(!Tick(0).is_multiple_of(0));
    }

    #[test]
    fn clock_single_rollover() {
        let mut clock = WorldClock::new(10.0, 0.5);
        let rollovers = clock.advance(10.0);
        assert_eq!(rollovers.len(), 1);
        assert_eq!(clock.day, 2);
        assert!(clock.time_in_day.abs() < 1e-5);
    }

    #[test]
    fn clock_multiple_rollovers_in_one_advance() {
        let mut clock = WorldClock::new(10.0, 0.5);
        let rollovers = clock.advance(25.0);
        assert_eq!(rollovers.len(), 2);
        assert_eq!(clock.day, 3);
        assert!((clock.time_in_day - 5.0).abs() < 1e-5);
    }

    #[test]
    fn day_night_split() {
        let mut clock = WorldClock::new(10.0, 0.5);
        assert!(clock.is_day());
        clock.advance(6.0);
        assert!(!clock.is_day());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a = r1.gen_range(0.0f32..1.0);
            let b = r2.gen_range(0.0f32..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        let a = r0.gen_range(0u64..u64::MAX);
        let b = r1.gen_range(0u64..u64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn gen_angle_in_range() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let a = rng.gen_angle();
            assert!((0.0..std::f32::consts::TAU).contains(&a));
        }
    }
}

#[cfg(test)]
mod input {
    use crate::PlayerInput;

    #[test]
    fn clips_not_normalizes() {
        let input = PlayerInput::new(2.0, -2.0, false);
        assert_eq!(input.move_x, 1.0);
        assert_eq!(input.move_y, -1.0);
        // Diagonal magnitude after clipping is sqrt(2), not 1 — intentionally unnormalized.
        assert!((input.magnitude() - std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn is_moving_epsilon() {
        let still = PlayerInput::new(0.01, 0.0, false);
        assert!(!still.is_moving(0.1));
        let moving = PlayerInput::new(0.5, 0.0, false);
        assert!(moving.is_moving(0.1));
    }
}

#[cfg(test)]
mod config {
    use crate::WorldConfig;

    #[test]
    fn defaults_are_valid() {
        let cfg = WorldConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.static_quadtree.max_depth, 4);
        assert_eq!(cfg.dynamic_quadtree.max_objects, 8);
    }

    #[test]
    fn rejects_bad_day_phase_fraction() {
        let mut cfg = WorldConfig::default();
        cfg.day_phase_fraction = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "config")]
    #[test]
    fn from_toml_overlays_defaults() {
        let cfg = WorldConfig::from_toml_str("rng_seed = 99\nmax_pursuers = 500\n").unwrap();
        assert_eq!(cfg.rng_seed, 99);
        assert_eq!(cfg.max_pursuers, 500);
        // untouched fields keep their default
        assert_eq!(cfg.player_speed, WorldConfig::default().player_speed);
    }
}
