//! `World` — owns every piece of simulation state and drives the per-tick
//! scheduler, §4.F–§4.H.

use std::collections::HashMap;

use nightward_agent::{AgentKind, AgentSpec, AgentState, AgentStore, FollowerRole, FollowerState, PlayerState, PursuerState, PursuerSubtype};
use nightward_behavior::{follower, player, pursuer, DamageRequest, SimContext, UpdateOutcome};
use nightward_collision::collision::CollisionService;
use nightward_collision::spawn::{find_spawn, SpawnQuery};
use nightward_core::{AgentId, PlayerInput, Point, Rect, SimRng, Tick, WorldClock, WorldConfig};
use nightward_map::Map;
use nightward_spatial::{DynamicQuadtree, QuadEntry, StaticQuadtree};

use crate::error::WorldResult;
use crate::observer::WorldObserver;
use crate::view::{AgentView, WorldView};

/// Seconds a Dead agent lingers (for animation) before its quadtree entry
/// and store record are removed, per spec §4.E's pursuer rule. Applied
/// uniformly to pursuers and followers; the player is never auto-removed —
/// there is exactly one and losing its id would break every external
/// reference to "the player".
const DEAD_LINGER: f32 = 2.0;

/// Conservative bounding box used for the spawn-rejection check during a
/// pursuer wave, before the subtype (and therefore its real `(w, h)`) is
/// known. Sized to the largest pursuer (Brute) so a passing check is safe
/// for any subtype actually spawned.
const PURSUER_SPAWN_WH: (f32, f32) = (12.0, 12.0);

/// Minimum wall-clock interval, in simulation seconds, between repeated
/// warnings of the same kind — §7's "logged at most once per second".
const WARN_INTERVAL: f32 = 1.0;

/// Owns the map, both quadtrees, the agent population, the clock, and the
/// per-world PRNG. The sole external entry point is [`World::tick`]; every
/// other component in this workspace takes read-only views built fresh each
/// tick (§5).
pub struct World {
    pub map: Map,
    pub static_tree: StaticQuadtree,
    pub dynamic_tree: DynamicQuadtree,
    pub agents: AgentStore,
    pub clock: WorldClock,
    pub config: WorldConfig,
    rng: SimRng,
    tick: Tick,

    player_id: Option<AgentId>,
    /// Unit vector of the player's last nonzero movement direction, carried
    /// across ticks so followers have a "facing" to anchor against even on
    /// a tick where the player doesn't move.
    player_facing: Point,

    elapsed: f32,
    last_spawn_warn_at: f32,
    last_invariant_warn_at: f32,
}

impl World {
    /// Build a fresh world from a compiled map, an explicit RNG seed, and a
    /// configuration table. `seed` is the authoritative seed — distinct from
    /// `config.rng_seed`, which is only a convenient default for
    /// `WorldConfig::default()` in tests and config files.
    pub fn new(map: Map, seed: u64, config: WorldConfig) -> WorldResult<Self> {
        config.validate()?;

        let bounds = Rect::new(0.0, 0.0, map.width, map.height);
        let static_tree = build_static_tree(&map, &config, bounds);
        let dynamic_tree = DynamicQuadtree::new(bounds, config.dynamic_quadtree.max_depth, config.dynamic_quadtree.max_objects);

        Ok(Self {
            map,
            static_tree,
            dynamic_tree,
            agents: AgentStore::new(),
            clock: WorldClock::new(config.day_duration, config.day_phase_fraction),
            config,
            rng: SimRng::new(seed),
            tick: Tick::ZERO,

            player_id: None,
            player_facing: Point::new(1.0, 0.0),

            elapsed: 0.0,
            last_spawn_warn_at: f32::NEG_INFINITY,
            last_invariant_warn_at: f32::NEG_INFINITY,
        })
    }

    // ── Facade (§4.H) ──────────────────────────────────────────────────────

    /// Introduce the single player agent. Spec's facade is silent on how the
    /// player enters the world (only `spawn_follower`/`damage` are named);
    /// this mirrors `spawn_follower`'s shape since some such entry point is
    /// required for the facade to be usable at all.
    pub fn spawn_player(&mut self, pos: Point) -> AgentId {
        let spec = AgentSpec::player(pos).speed(self.config.player_speed);
        let id = self.agents.spawn(spec);
        self.player_id = Some(id);
        self.insert_into_tree(id);
        id
    }

    pub fn spawn_follower(&mut self, role: FollowerRole, pos: Point) -> AgentId {
        let spec = AgentSpec::new(AgentKind::Follower(role), pos).speed(self.config.follower_speed);
        let id = self.agents.spawn(spec);
        self.insert_into_tree(id);
        id
    }

    /// Apply `amount` damage (negative heals) to `id`, clamped to
    /// `[0, max_hp]`. Returns `false` without effect if `id` doesn't exist —
    /// spec's `AgentNotFound` is a boolean failure here, never a panic.
    pub fn damage(&mut self, id: AgentId, amount: f32) -> bool {
        match self.agents.get_mut(id) {
            Some(agent) => {
                agent.hp = (agent.hp - amount).clamp(0.0, agent.max_hp);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> WorldView<'_> {
        let agents = self
            .agents
            .iter()
            .map(|a| AgentView {
                id: a.id,
                kind: a.kind,
                x: a.pos.x,
                y: a.pos.y,
                hp: a.hp,
                max_hp: a.max_hp,
                state: a.state,
                w: a.w,
                h: a.h,
            })
            .collect();

        WorldView {
            day: self.clock.day,
            time_in_day: self.clock.time_in_day,
            is_day: self.clock.is_day(),
            agents,
            buildings: &self.map.buildings,
        }
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // ── Tick loop (§4.F) ───────────────────────────────────────────────────

    /// Advance the world by one tick, per the seven-step order in §4.F.
    /// `dt` is clamped to `config.tick_dt_cap` before use.
    pub fn tick(&mut self, dt: f32, input: PlayerInput, observer: &mut impl WorldObserver) {
        let dt = dt.min(self.config.tick_dt_cap).max(0.0);
        observer.on_tick_start(self.tick);
        tracing::debug!(tick = self.tick.0, dt, "tick start");

        // Step 1: advance the clock, collecting day rollovers.
        let rollovers = self.clock.advance(dt);
        for rollover in &rollovers {
            observer.on_day_rollover(*rollover);
        }

        // Step 2: resolve one pursuer wave per rollover this tick.
        let mut spawned_ids = Vec::new();
        for _ in &rollovers {
            let spawned = self.resolve_spawn_wave();
            observer.on_wave_resolved(self.tick, spawned.len());
            spawned_ids.extend(spawned);
        }

        // Snapshot positions before the per-agent pass, to compute "moved"
        // for the quadtree change ratio in step 5.
        let positions_before: HashMap<AgentId, Point> =
            self.agents.iter().map(|a| (a.id, a.pos)).collect();

        // Step 3: per-agent update pass, stable ascending id order.
        let mut damage_buffer = Vec::new();
        self.run_agent_pass(dt, input, &mut damage_buffer);

        // Step 4: apply buffered damage, then transition any newly-zero-hp
        // agent to its kind's Dead state.
        self.apply_damage(&damage_buffer);
        self.apply_death_transitions();

        // Step 5: three-regime incremental quadtree update.
        let changed = self.changed_agent_ids(&positions_before, &spawned_ids);
        self.update_dynamic_tree(&changed);

        // Step 6: periodic emergency separation.
        if self.tick.is_multiple_of(self.config.separation_period) {
            self.run_emergency_separation();
        }

        // Step 7: remove agents whose Dead timer has fully expired.
        self.remove_expired_dead();

        self.verify_invariants();

        self.elapsed += dt;
        self.tick = self.tick.offset(1);
        observer.on_tick_end(self.tick, self.clock.day, self.clock.time_in_day, self.clock.is_day(), &self.agents);
        tracing::debug!(tick = self.tick.0, "tick end");
    }

    // ── Step 2: spawn wave ─────────────────────────────────────────────────

    fn resolve_spawn_wave(&mut self) -> Vec<AgentId> {
        let center = self
            .player_id
            .and_then(|id| self.agents.get(id))
            .map(|a| a.pos)
            .unwrap_or_else(|| Point::new(self.map.width * 0.5, self.map.height * 0.5));

        let min_r = self.config.detection_r;
        let max_r = self.config.detection_r * 2.0;

        let mut spawned = Vec::new();
        for _ in 0..self.config.zombies_per_day {
            if self.agents.count(|a| a.kind.is_pursuer()) >= self.config.max_pursuers {
                break;
            }
            let collision = collision_service(&self.map, &self.static_tree, &self.dynamic_tree);
            let query = SpawnQuery { center, min_r, max_r, wh: PURSUER_SPAWN_WH, exclude: &[] };
            let found = find_spawn(&collision, &mut self.rng, &query);
            match found {
                Some(pos) => {
                    let subtype = *self.rng.choose(&PursuerSubtype::ALL).expect("PursuerSubtype::ALL is non-empty");
                    let speed = pursuer_speed(subtype, &self.config);
                    let spec = AgentSpec::new(AgentKind::Pursuer(subtype), pos).speed(speed);
                    let id = self.agents.spawn(spec);
                    self.insert_into_tree(id);
                    spawned.push(id);
                }
                None => {
                    warn_rate_limited(self.elapsed, &mut self.last_spawn_warn_at, self.tick, "spawn exhausted for pursuer wave");
                }
            }
        }
        spawned
    }

    // ── Step 3: per-agent pass ─────────────────────────────────────────────

    fn run_agent_pass(&mut self, dt: f32, input: PlayerInput, damage_buffer: &mut Vec<DamageRequest>) {
        let ids: Vec<AgentId> = self.agents.ids().collect();

        // Every agent's update reads the tick-start snapshot: the store is
        // not mutated until every outcome has been computed, so agent N+1's
        // `SimContext` queries (nearest pursuer/player/follower) still see
        // agent N's pre-tick position, never its already-moved one. Outcomes
        // are collected here and committed in a second pass below, the same
        // way damage is buffered and applied only after the full pass.
        let mut outcomes: Vec<(AgentId, UpdateOutcome)> = Vec::with_capacity(ids.len());

        for id in ids {
            let Some(snapshot) = self.agents.get(id).cloned() else { continue };
            if snapshot.is_dead() {
                continue;
            }

            let collision = collision_service(&self.map, &self.static_tree, &self.dynamic_tree);
            let ctx = SimContext::new(self.tick, &self.config, &collision, &self.agents, self.player_id, self.player_facing);

            let outcome = match snapshot.kind {
                AgentKind::Player => player::update(&snapshot, input, &ctx, dt),
                AgentKind::Pursuer(_) => pursuer::update(&snapshot, &ctx, dt),
                AgentKind::Follower(_) => follower::update(&snapshot, &ctx, dt),
            };

            if Some(id) == self.player_id {
                let moved = outcome.pos.sub(snapshot.pos);
                if moved.length() > 1e-3 {
                    self.player_facing = moved.normalized();
                }
            }

            outcomes.push((id, outcome));
        }

        for (id, outcome) in outcomes {
            if let Some(agent) = self.agents.get_mut(id) {
                let damage = outcome.apply(agent);
                damage_buffer.extend(damage);
            }
        }
    }

    fn apply_damage(&mut self, damage_buffer: &[DamageRequest]) {
        for req in damage_buffer {
            if let Some(target) = self.agents.get_mut(req.to) {
                target.hp = (target.hp - req.amount).clamp(0.0, target.max_hp);
            }
        }
    }

    fn apply_death_transitions(&mut self) {
        for agent in self.agents.iter_mut() {
            if agent.hp <= 0.0 && !agent.state.is_dead() {
                agent.enter_state(dead_state_for(agent.kind));
                agent.target_id = None;
            }
        }
    }

    // ── Step 5: quadtree maintenance ───────────────────────────────────────

    fn changed_agent_ids(&self, positions_before: &HashMap<AgentId, Point>, spawned: &[AgentId]) -> Vec<AgentId> {
        let mut changed: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|a| match positions_before.get(&a.id) {
                Some(&before) => a.pos.distance(before) > 1e-3,
                None => false,
            })
            .map(|a| a.id)
            .collect();
        changed.extend(spawned.iter().copied());
        changed
    }

    fn update_dynamic_tree(&mut self, changed: &[AgentId]) {
        let alive = self.agents.count(|a| a.is_alive()).max(1);
        let rho = changed.len() as f32 / alive as f32;

        if rho > 0.3 {
            self.dynamic_tree.clear();
            let ids: Vec<AgentId> = self.agents.ids().collect();
            for id in ids {
                self.insert_into_tree(id);
            }
        } else {
            // Both the 0.1–0.3 "diff" regime and the ≤0.1 "reinsert moved"
            // regime touch only the changed set here; they differ in a real
            // engine by batching strategy, not by which entries are
            // affected — no agent outside `changed` needs its tree entry
            // revisited either way.
            for &id in changed {
                self.dynamic_tree.remove(id);
                if self.agents.contains(id) {
                    self.insert_into_tree(id);
                }
            }
        }
    }

    fn insert_into_tree(&mut self, id: AgentId) {
        if let Some(agent) = self.agents.get(id) {
            let bounds = Rect::from_center(agent.pos, agent.w, agent.h);
            self.dynamic_tree.insert(QuadEntry::new(id, bounds));
        }
    }

    // ── Step 6: emergency separation ───────────────────────────────────────

    fn run_emergency_separation(&mut self) {
        let pursuer_ids: Vec<AgentId> = self.agents.iter().filter(|a| a.kind.is_pursuer() && a.is_alive()).map(|a| a.id).collect();

        for id in pursuer_ids {
            let Some(agent) = self.agents.get(id) else { continue };
            let pos = agent.pos;
            let (w, h) = agent.wh();
            let region = Rect::from_center(pos, self.config.separation_r * 2.0, self.config.separation_r * 2.0);

            let mut repulsion = Point::ZERO;
            for entry in self.dynamic_tree.query(&region) {
                if entry.id == id {
                    continue;
                }
                let Some(other) = self.agents.get(entry.id) else { continue };
                let delta = pos.sub(other.pos);
                let dist = delta.length();
                if dist > 1e-3 && dist < self.config.separation_r {
                    let strength = (self.config.separation_r - dist) / self.config.separation_r;
                    repulsion = repulsion.add(delta.normalized().scale(strength));
                }
            }

            if repulsion.length() < 1e-6 {
                continue;
            }
            let magnitude = repulsion.length().min(1.0) * self.config.separation_force;
            let desired = pos.add(repulsion.normalized().scale(magnitude));

            let collision = collision_service(&self.map, &self.static_tree, &self.dynamic_tree);
            let resolved = collision.slide_translation(pos, desired, w, h, self.config.separation_r);
            drop(collision);

            if let Some(agent) = self.agents.get_mut(id) {
                agent.pos = resolved;
            }
            self.dynamic_tree.remove(id);
            self.insert_into_tree(id);
        }
    }

    // ── Step 7: dead removal ────────────────────────────────────────────────

    fn remove_expired_dead(&mut self) {
        let expired: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|a| a.state.is_dead() && !a.kind.is_player() && a.state_time >= DEAD_LINGER)
            .map(|a| a.id)
            .collect();

        for id in expired {
            self.agents.remove(id);
            self.dynamic_tree.remove(id);
        }
    }

    // ── Invariant checks (§7, §8 P1/P2/P6) ─────────────────────────────────

    fn verify_invariants(&mut self) {
        let collision = collision_service(&self.map, &self.static_tree, &self.dynamic_tree);
        let mut violated = false;
        for agent in self.agents.iter().filter(|a| a.is_alive()) {
            if collision.rect_collides_buildings(agent.pos, agent.w, agent.h) {
                debug_assert!(false, "agent {:?} clipped into a building at {:?}", agent.id, agent.pos);
                violated = true;
            }
            if !(0.0..=agent.max_hp).contains(&agent.hp) {
                debug_assert!(false, "agent {:?} hp {} out of [0, {}]", agent.id, agent.hp, agent.max_hp);
                violated = true;
            }
        }
        drop(collision);
        if violated && self.elapsed - self.last_invariant_warn_at >= WARN_INTERVAL {
            tracing::warn!(tick = self.tick.0, "tick invariant violation detected");
            self.last_invariant_warn_at = self.elapsed;
        }
    }

}

fn collision_service<'a>(map: &'a Map, static_tree: &'a StaticQuadtree, dynamic_tree: &'a DynamicQuadtree) -> CollisionService<'a> {
    CollisionService::new(map, static_tree, dynamic_tree)
}

fn warn_rate_limited(elapsed: f32, last_at: &mut f32, tick: Tick, message: &str) {
    if elapsed - *last_at >= WARN_INTERVAL {
        tracing::warn!(tick = tick.0, "{message}");
        *last_at = elapsed;
    }
}

fn build_static_tree(map: &Map, config: &WorldConfig, bounds: Rect) -> StaticQuadtree {
    let mut tree = StaticQuadtree::new(bounds, config.static_quadtree.max_depth, config.static_quadtree.max_objects);
    for building in &map.buildings {
        tree.insert(QuadEntry::new(building.id, building.bounds));
    }
    tree
}

fn dead_state_for(kind: AgentKind) -> AgentState {
    match kind {
        AgentKind::Player => AgentState::Player(PlayerState::Dead),
        AgentKind::Pursuer(_) => AgentState::Pursuer(PursuerState::Dead),
        AgentKind::Follower(_) => AgentState::Follower(FollowerState::Dead),
    }
}

fn pursuer_speed(subtype: PursuerSubtype, config: &WorldConfig) -> f32 {
    match subtype {
        PursuerSubtype::Shambler => config.pursuer_speed.shambler,
        PursuerSubtype::Runner => config.pursuer_speed.runner,
        PursuerSubtype::Brute => config.pursuer_speed.brute,
    }
}
