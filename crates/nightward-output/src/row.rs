//! Plain data row types written by the CSV backend.

/// A snapshot of one agent's externally-visible state at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick: u64,
    pub agent_id: u32,
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub state: String,
    pub w: f32,
    pub h: f32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick: u64,
    pub day: u32,
    pub time_in_day: f32,
    pub is_day: bool,
    pub alive_agents: u64,
    pub pursuers: u64,
    pub followers: u64,
}
