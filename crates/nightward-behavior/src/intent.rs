//! Damage requests — the one thing agent updates cannot apply immediately.
//!
//! Position and state changes are buffered by the scheduler the same way:
//! every agent's update must read the world as it stood at tick start, so
//! nothing commits until the whole pass is over (stable id order determines
//! commit order, not visibility). Damage needs the identical treatment for
//! a second reason on top of that: A hitting B and B hitting A in the same
//! tick must both land, so it's collected into a buffer here and applied by
//! the scheduler only after every agent has been updated (spec's
//! double-buffered damage rule).

use nightward_core::AgentId;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DamageRequest {
    pub from: Option<AgentId>,
    pub to: AgentId,
    pub amount: f32,
}

impl DamageRequest {
    pub fn new(from: Option<AgentId>, to: AgentId, amount: f32) -> Self {
        Self { from, to, amount }
    }
}
