//! `AgentStore` — the world's agent population.
//!
//! A `BTreeMap<AgentId, Agent>` rather than the struct-of-arrays layout the
//! rest of this codebase favors: the three agent kinds are heterogeneous
//! (different per-kind state, not a fixed set of homogeneous fields), so a
//! tagged-union AoS store is the natural fit here. The map's key order also
//! gives the stable ascending-id iteration the scheduler's determinism (I5)
//! requires, with no extra bookkeeping.

use std::collections::BTreeMap;

use nightward_core::AgentId;

use crate::agent::Agent;
use crate::builder::AgentSpec;

#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: BTreeMap<AgentId, Agent>,
    next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self { agents: BTreeMap::new(), next_id: 0 }
    }

    /// Materialize `spec` into a live agent with a freshly allocated id.
    pub fn spawn(&mut self, spec: AgentSpec) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.insert(id, spec.into_agent(id));
        id
    }

    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.agents.remove(&id)
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Iterate all agents in stable ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.values_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn count(&self, mut pred: impl FnMut(&Agent) -> bool) -> usize {
        self.agents.values().filter(|a| pred(a)).count()
    }
}
