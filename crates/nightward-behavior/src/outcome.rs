//! `UpdateOutcome` — the result of one agent's per-tick state machine update.
//!
//! Transition condition functions are pure with respect to world read state
//! (per spec), so `player::update`/`pursuer::update`/`follower::update`
//! never mutate the `Agent` they're given; they compute the next field
//! values and hand them back here, letting the scheduler commit via
//! [`UpdateOutcome::apply`] once the read phase for this agent is over.

use nightward_agent::{Agent, AgentState};
use nightward_core::{AgentId, Point};

use crate::intent::DamageRequest;

#[derive(Clone, Debug)]
pub struct UpdateOutcome {
    pub pos: Point,
    pub state: AgentState,
    pub state_time: f32,
    pub target_id: Option<AgentId>,
    pub follow_anchor: Option<Point>,
    pub attack_timer: f32,
    pub avoid_offset: Point,
    pub damage: Vec<DamageRequest>,
}

impl UpdateOutcome {
    /// Start from `agent`'s current field values, advancing `state_time` by
    /// `dt`. Update functions mutate the returned value in place for
    /// whatever actually changes this tick.
    pub fn carry_forward(agent: &Agent, dt: f32) -> Self {
        Self {
            pos: agent.pos,
            state: agent.state,
            state_time: agent.state_time + dt,
            target_id: agent.target_id,
            follow_anchor: agent.follow_anchor,
            attack_timer: agent.attack_timer,
            avoid_offset: agent.avoid_offset,
            damage: Vec::new(),
        }
    }

    /// Switch `state`, resetting `state_time` to zero. No-op (besides the
    /// reset) if `next` equals the state already carried forward.
    pub fn transition_to(&mut self, next: AgentState) {
        self.state = next;
        self.state_time = 0.0;
    }

    pub fn apply(self, agent: &mut Agent) -> Vec<DamageRequest> {
        agent.pos = self.pos;
        agent.state = self.state;
        agent.state_time = self.state_time;
        agent.target_id = self.target_id;
        agent.follow_anchor = self.follow_anchor;
        agent.attack_timer = self.attack_timer;
        agent.avoid_offset = self.avoid_offset;
        self.damage
    }
}
