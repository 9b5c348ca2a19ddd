//! `AgentSpec` — a fluent builder for the initial state of a single agent.
//!
//! Mirrors the teacher's builder idiom, scoped down from "assemble a whole
//! store's component tables" to "assemble one agent's starting fields";
//! `AgentId` allocation stays the store's job.

use nightward_core::Point;

use crate::agent::Agent;
use crate::kind::AgentKind;
use crate::state::{AgentState, FollowerState, PlayerState, PursuerState};

#[derive(Clone, Debug)]
pub struct AgentSpec {
    kind: AgentKind,
    pos: Point,
    w: f32,
    h: f32,
    hp: f32,
    speed: f32,
}

impl AgentSpec {
    pub fn new(kind: AgentKind, pos: Point) -> Self {
        let (w, h, hp, speed) = default_stats(&kind);
        Self { kind, pos, w, h, hp, speed }
    }

    pub fn player(pos: Point) -> Self {
        Self::new(AgentKind::Player, pos)
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    pub fn hp(mut self, hp: f32) -> Self {
        self.hp = hp;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn into_agent(self, id: nightward_core::AgentId) -> Agent {
        let state = initial_state(&self.kind);
        Agent {
            id,
            kind: self.kind,
            pos: self.pos,
            w: self.w,
            h: self.h,
            hp: self.hp,
            max_hp: self.hp,
            speed: self.speed,
            state,
            state_time: 0.0,
            target_id: None,
            follow_anchor: None,
            attack_timer: 0.0,
            avoid_offset: Point::new(0.0, 0.0),
        }
    }
}

fn default_stats(kind: &AgentKind) -> (f32, f32, f32, f32) {
    use crate::kind::{FollowerRole, PursuerSubtype};
    match kind {
        AgentKind::Player => (8.0, 8.0, 100.0, 90.0),
        AgentKind::Pursuer(PursuerSubtype::Shambler) => (8.0, 8.0, 120.0, 40.0),
        AgentKind::Pursuer(PursuerSubtype::Runner) => (6.0, 6.0, 50.0, 90.0),
        AgentKind::Pursuer(PursuerSubtype::Brute) => (12.0, 12.0, 200.0, 30.0),
        AgentKind::Follower(FollowerRole::Guard) => (8.0, 8.0, 140.0, 70.0),
        AgentKind::Follower(FollowerRole::Scout) => (8.0, 8.0, 80.0, 110.0),
        AgentKind::Follower(FollowerRole::Medic) => (8.0, 8.0, 90.0, 80.0),
    }
}

fn initial_state(kind: &AgentKind) -> AgentState {
    match kind {
        AgentKind::Player => AgentState::Player(PlayerState::Idle),
        AgentKind::Pursuer(_) => AgentState::Pursuer(PursuerState::Idle),
        AgentKind::Follower(_) => AgentState::Follower(FollowerState::Init),
    }
}
