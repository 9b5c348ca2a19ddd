//! Read-only simulation state passed to every behavior update function.

use nightward_agent::{Agent, AgentStore};
use nightward_collision::collision::CollisionService;
use nightward_core::{AgentId, Point, Tick, WorldConfig};

/// Magnitude below which player input counts as "not moving" (Idle/Moving
/// transition threshold).
pub const MOVE_EPSILON: f32 = 0.05;

/// Step distance passed to `slide_translation`'s wall-following fallback for
/// player/follower motion. The pursuer's chase detour uses its own literal
/// (100, per spec) rather than this constant.
pub const WALL_STEP: f32 = 64.0;

/// A read-only snapshot of the simulation state passed to every behavior
/// update function during one tick's agent pass.
///
/// Built once per tick by the scheduler and shared (immutably) across every
/// agent's update call. Since the core is single-threaded (no Rayon split),
/// there is no `Send + Sync` requirement here — unlike the teacher's
/// `BehaviorModel`, update functions are plain free functions called in a
/// sequential loop.
pub struct SimContext<'a> {
    pub tick: Tick,
    pub config: &'a WorldConfig,
    pub collision: &'a CollisionService<'a>,
    pub agents: &'a AgentStore,
    /// The single player agent's id, if one exists this tick.
    pub player_id: Option<AgentId>,
    /// Unit vector of the player's most recent nonzero movement direction,
    /// carried across ticks by the scheduler. Drives follower anchor
    /// placement and the congestion check, since an instantaneous position
    /// alone doesn't tell a follower which way the player is heading.
    pub player_facing: Point,
}

impl<'a> SimContext<'a> {
    pub fn new(
        tick: Tick,
        config: &'a WorldConfig,
        collision: &'a CollisionService<'a>,
        agents: &'a AgentStore,
        player_id: Option<AgentId>,
        player_facing: Point,
    ) -> Self {
        Self { tick, config, collision, agents, player_id, player_facing }
    }

    /// The nearest live agent matching `pred`, with its position.
    fn nearest_matching(&self, from: Point, pred: impl Fn(&Agent) -> bool) -> Option<(AgentId, Point)> {
        self.agents
            .iter()
            .filter(|a| a.is_alive() && pred(a))
            .map(|a| (a.id, a.pos, from.distance_sq(a.pos)))
            .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap())
            .map(|(id, pos, _)| (id, pos))
    }

    /// Nearest live pursuer to `from`, used by the follower's detection check.
    pub fn nearest_pursuer(&self, from: Point) -> Option<(AgentId, Point)> {
        self.nearest_matching(from, |a| a.kind.is_pursuer())
    }

    /// Nearest live player or follower to `from`, used by the pursuer's
    /// acquisition check.
    pub fn nearest_player_or_follower(&self, from: Point) -> Option<(AgentId, Point)> {
        self.nearest_matching(from, |a| a.kind.is_player() || a.kind.is_follower())
    }

    pub fn player_pos(&self) -> Option<Point> {
        self.player_id.and_then(|id| self.agents.get(id)).map(|a| a.pos)
    }
}
