//! `WorldView` — the read-only snapshot returned by `World::snapshot`, §6.3.

use nightward_agent::{AgentKind, AgentState};
use nightward_core::AgentId;
use nightward_map::Building;

/// One agent's externally-visible fields.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id: AgentId,
    pub kind: AgentKind,
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub state: AgentState,
    pub w: f32,
    pub h: f32,
}

/// A read-only view of the world at the moment `World::snapshot` was called.
///
/// `buildings` borrows straight from the map — buildings never change after
/// load (I3), so there is nothing to copy.
#[derive(Debug)]
pub struct WorldView<'a> {
    pub day: u32,
    pub time_in_day: f32,
    pub is_day: bool,
    pub agents: Vec<AgentView>,
    pub buildings: &'a [Building],
}
