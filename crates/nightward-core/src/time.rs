//! Simulation time: a monotonic tick counter and the day/night clock.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A monotonically increasing count of completed `World::tick` calls.
///
/// Used for period-based bookkeeping (e.g. "every `separation_period`
/// ticks") where wall-clock `dt` drift would make a float counter unsafe.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` if this tick is a multiple of `period` (period 0 never fires).
    #[inline]
    pub fn is_multiple_of(self, period: u64) -> bool {
        period != 0 && self.0 % period == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── WorldClock ────────────────────────────────────────────────────────────────

/// Reported once per tick in which `time_in_day` overflows `day_duration`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DayRollover {
    /// The new day number after rollover.
    pub day: u32,
}

/// Day counter and day/night phase, per spec §4.G.
///
/// `day` starts at 1. Each `advance(dt)` adds `dt` to `time_in_day`; once it
/// reaches `day_duration` the day increments and the excess carries over
/// (never silently dropped, so a very large `dt` still rolls over exactly
/// once per `day_duration` worth of time — see `advance`'s loop).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldClock {
    pub day: u32,
    pub time_in_day: f32,
    pub day_duration: f32,
    pub day_phase_fraction: f32,
}

impl WorldClock {
    pub fn new(day_duration: f32, day_phase_fraction: f32) -> Self {
        Self {
            day: 1,
            time_in_day: 0.0,
            day_duration,
            day_phase_fraction,
        }
    }

    /// Advance the clock by `dt` seconds, returning a [`DayRollover`] for
    /// each day boundary crossed (ordinarily at most one per tick, since
    /// `dt` is clamped by `tick_dt_cap`, but the loop is exact even if a
    /// caller passes an unusually large `dt`).
    pub fn advance(&mut self, dt: f32) -> Vec<DayRollover> {
        let mut rollovers = Vec::new();
        self.time_in_day += dt;
        while self.time_in_day >= self.day_duration && self.day_duration > 0.0 {
            self.time_in_day -= self.day_duration;
            self.day += 1;
            rollovers.push(DayRollover { day: self.day });
        }
        rollovers
    }

    /// `true` during the "day" portion of the cycle: the first
    /// `day_phase_fraction` of `day_duration`.
    #[inline]
    pub fn is_day(&self) -> bool {
        self.day_duration <= 0.0 || self.time_in_day < self.day_duration * self.day_phase_fraction
    }
}

impl fmt::Display for WorldClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} ({:.1}s, {})", self.day, self.time_in_day, if self.is_day() { "day" } else { "night" })
    }
}
