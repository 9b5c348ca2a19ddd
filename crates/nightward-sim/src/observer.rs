//! `WorldObserver` — optional tick-boundary hooks for telemetry and output.
//!
//! Spec's World Facade doesn't mention progress/telemetry hooks; this trait
//! supplements it so `nightward-output` (and ordinary logging) can observe
//! `World::tick` without the facade depending on any particular output
//! format. All methods default to no-ops.

use nightward_agent::AgentStore;
use nightward_core::{DayRollover, Tick};

pub trait WorldObserver {
    /// Called at the very start of `World::tick`, before any phase runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per day boundary crossed this tick (§4.G).
    fn on_day_rollover(&mut self, _rollover: DayRollover) {}

    /// Called after the spawn-wave phase, with the number of pursuers
    /// actually created (may be less than `zombies_per_day` if spawn was
    /// exhausted — P7).
    fn on_wave_resolved(&mut self, _tick: Tick, _spawned: usize) {}

    /// Called at the end of `World::tick`, after every phase including
    /// quadtree maintenance and dead-agent removal. `day`/`time_in_day`/
    /// `is_day` reflect the clock as of the end of this tick.
    fn on_tick_end(&mut self, _tick: Tick, _day: u32, _time_in_day: f32, _is_day: bool, _agents: &AgentStore) {}
}

/// A [`WorldObserver`] that does nothing. Use when calling `World::tick`
/// directly without wanting callbacks.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
