//! The `Agent` struct: common fields shared across Player/Pursuer/Follower.

use nightward_core::{AgentId, Point};

use crate::kind::AgentKind;
use crate::state::AgentState;

/// A live agent. All three kinds share this one shape; behavior differs only
/// through `kind` and `state`, matching the "tagged variant, no back-pointers"
/// design note.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub kind: AgentKind,

    pub pos: Point,
    pub w: f32,
    pub h: f32,

    pub hp: f32,
    pub max_hp: f32,
    pub speed: f32,

    pub state: AgentState,
    /// Seconds elapsed since the current state was entered.
    pub state_time: f32,

    pub target_id: Option<AgentId>,
    /// Follower's current anchor point, behind the player along its motion.
    pub follow_anchor: Option<Point>,

    /// Countdown to the next attack damage tick, reset to `attack_cooldown`
    /// on entering Attack and after every hit.
    pub attack_timer: f32,
    /// Perpendicular offset cached when a follower enters Avoid.
    pub avoid_offset: Point,
}

impl Agent {
    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    pub fn wh(&self) -> (f32, f32) {
        (self.w, self.h)
    }

    /// Transition into a new state, resetting `state_time` to zero. Does not
    /// reset `attack_timer`/`avoid_offset`; callers that need fresh enter-time
    /// data set those explicitly.
    pub fn enter_state(&mut self, state: AgentState) {
        self.state = state;
        self.state_time = 0.0;
    }

}
