//! `WorldOutputObserver<W>` — bridges `nightward_sim::WorldObserver` to an
//! `OutputWriter`.

use nightward_agent::AgentStore;
use nightward_core::Tick;
use nightward_sim::WorldObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`WorldObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `WorldObserver`
/// methods have no return value. After `world.tick()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct WorldOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> WorldOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run completes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush and close the underlying writer. Not called automatically —
    /// unlike `SimObserver::on_sim_end` in the tick-count-bounded model this
    /// is descended from, `World::tick` has no notion of "the run is over".
    pub fn finish(&mut self) -> crate::OutputResult<()> {
        self.writer.finish()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WorldObserver for WorldOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, day: u32, time_in_day: f32, is_day: bool, agents: &AgentStore) {
        let mut alive = 0u64;
        let mut pursuers = 0u64;
        let mut followers = 0u64;
        let mut rows = Vec::new();

        for agent in agents.iter() {
            if agent.is_alive() {
                alive += 1;
                if agent.kind.is_pursuer() {
                    pursuers += 1;
                } else if agent.kind.is_follower() {
                    followers += 1;
                }
            }
            rows.push(AgentSnapshotRow {
                tick: tick.0,
                agent_id: agent.id.0,
                kind: format!("{:?}", agent.kind),
                x: agent.pos.x,
                y: agent.pos.y,
                hp: agent.hp,
                max_hp: agent.max_hp,
                state: format!("{:?}", agent.state),
                w: agent.w,
                h: agent.h,
            });
        }

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let summary = TickSummaryRow { tick: tick.0, day, time_in_day, is_day, alive_agents: alive, pursuers, followers };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }
}
