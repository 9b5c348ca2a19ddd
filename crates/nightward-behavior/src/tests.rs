//! Unit tests for the agent state machines.

use std::collections::HashMap;

use nightward_agent::{AgentKind, AgentSpec, AgentState, AgentStore, FollowerRole, FollowerState, PlayerState, PursuerState, PursuerSubtype};
use nightward_core::{Point, PlayerInput, Tick, WorldConfig};
use nightward_map::map::MapRecord;
use nightward_map::Map;
use nightward_spatial::{DynamicQuadtree, StaticQuadtree};

use crate::collision::ServiceBuilder;

/// Open 400x400 map, no buildings — isolates state-machine logic from
/// collision edge cases.
fn open_map() -> Map {
    let record = MapRecord {
        name: "open".into(),
        width: 400,
        height: 400,
        cell_size: 10,
        matrix: vec![vec![0; 40]; 40],
        building_types: HashMap::new(),
    };
    Map::compile(record).unwrap()
}

mod collision {
    use super::*;
    use nightward_collision::collision::CollisionService;

    /// Bundles an open map with empty static/dynamic trees long enough to
    /// hand out a `CollisionService` borrowing all three.
    pub struct ServiceBuilder {
        pub map: Map,
        pub statics: StaticQuadtree,
        pub dynamics: DynamicQuadtree,
    }

    impl ServiceBuilder {
        pub fn new() -> Self {
            let map = open_map();
            let statics = StaticQuadtree::new(nightward_core::Rect::new(0.0, 0.0, map.width, map.height), 4, 5);
            let dynamics = DynamicQuadtree::new(nightward_core::Rect::new(0.0, 0.0, map.width, map.height), 6, 8);
            Self { map, statics, dynamics }
        }

        pub fn service(&self) -> CollisionService<'_> {
            CollisionService::new(&self.map, &self.statics, &self.dynamics)
        }
    }
}

fn config() -> WorldConfig {
    WorldConfig::default()
}

mod player_fsm {
    use super::*;
    use crate::context::SimContext;
    use crate::player;

    #[test]
    fn idle_to_moving_on_input() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let cfg = config();
        let mut store = AgentStore::new();
        let id = store.spawn(AgentSpec::player(Point::new(50.0, 50.0)));
        let agent = store.get(id).unwrap();
        assert_eq!(agent.state, AgentState::Player(PlayerState::Idle));

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(id), Point::new(1.0, 0.0));
        let input = PlayerInput::new(1.0, 0.0, false);
        let outcome = player::update(agent, input, &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Player(PlayerState::Moving));
        assert!(outcome.pos.x > agent.pos.x);
    }

    #[test]
    fn moving_to_idle_when_input_drops() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let cfg = config();
        let mut store = AgentStore::new();
        let id = store.spawn(AgentSpec::player(Point::new(50.0, 50.0)));
        store.get_mut(id).unwrap().enter_state(AgentState::Player(PlayerState::Moving));
        let agent = store.get(id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(id), Point::new(1.0, 0.0));
        let outcome = player::update(agent, PlayerInput::default(), &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Player(PlayerState::Idle));
        assert_eq!(outcome.pos, agent.pos);
    }

    #[test]
    fn zero_hp_forces_dead() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let cfg = config();
        let mut store = AgentStore::new();
        let id = store.spawn(AgentSpec::player(Point::new(50.0, 50.0)));
        store.get_mut(id).unwrap().hp = 0.0;
        let agent = store.get(id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(id), Point::new(1.0, 0.0));
        let outcome = player::update(agent, PlayerInput::default(), &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Player(PlayerState::Dead));
    }
}

mod pursuer_fsm {
    use super::*;
    use crate::context::SimContext;
    use crate::pursuer;

    #[test]
    fn idle_acquires_target_within_detection_radius() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let mut cfg = config();
        cfg.detection_r = 600.0;
        let mut store = AgentStore::new();
        let player_id = store.spawn(AgentSpec::player(Point::new(0.0, 0.0)));
        let pursuer_id = store.spawn(AgentSpec::new(AgentKind::Pursuer(PursuerSubtype::Runner), Point::new(500.0, 0.0)));
        let agent = store.get(pursuer_id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(player_id), Point::new(1.0, 0.0));
        let outcome = pursuer::update(agent, &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Pursuer(PursuerState::Chase));
        assert_eq!(outcome.target_id, Some(player_id));
    }

    #[test]
    fn chase_moves_toward_target() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let cfg = config();
        let mut store = AgentStore::new();
        let player_id = store.spawn(AgentSpec::player(Point::new(0.0, 0.0)));
        let pursuer_id = store.spawn(
            AgentSpec::new(AgentKind::Pursuer(PursuerSubtype::Runner), Point::new(100.0, 0.0)).speed(90.0),
        );
        store.get_mut(pursuer_id).unwrap().enter_state(AgentState::Pursuer(PursuerState::Chase));
        let agent = store.get(pursuer_id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(player_id), Point::new(1.0, 0.0));
        let outcome = pursuer::update(agent, &ctx, 1.0 / 60.0);
        assert!(outcome.pos.x < agent.pos.x, "pursuer should step toward the player");
    }

    #[test]
    fn attack_deals_damage_on_cooldown_expiry() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let mut cfg = config();
        cfg.attack_cooldown = 1.0;
        let mut store = AgentStore::new();
        let player_id = store.spawn(AgentSpec::player(Point::new(0.0, 0.0)));
        let pursuer_id = store.spawn(AgentSpec::new(AgentKind::Pursuer(PursuerSubtype::Brute), Point::new(5.0, 0.0)));
        {
            let p = store.get_mut(pursuer_id).unwrap();
            p.enter_state(AgentState::Pursuer(PursuerState::Attack));
            p.attack_timer = 0.01;
            p.target_id = Some(player_id);
        }
        let agent = store.get(pursuer_id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(player_id), Point::new(1.0, 0.0));
        let outcome = pursuer::update(agent, &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Pursuer(PursuerState::Attack));
        assert_eq!(outcome.damage.len(), 1);
        assert_eq!(outcome.damage[0].to, player_id);
        assert!(outcome.attack_timer > 0.0, "cooldown should reset after firing");
    }

    #[test]
    fn zero_hp_forces_dead_and_drops_target() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let cfg = config();
        let mut store = AgentStore::new();
        let pursuer_id = store.spawn(AgentSpec::new(AgentKind::Pursuer(PursuerSubtype::Shambler), Point::new(0.0, 0.0)));
        store.get_mut(pursuer_id).unwrap().hp = 0.0;
        let agent = store.get(pursuer_id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, None, Point::new(1.0, 0.0));
        let outcome = pursuer::update(agent, &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Pursuer(PursuerState::Dead));
        assert_eq!(outcome.target_id, None);
    }
}

mod follower_fsm {
    use super::*;
    use crate::context::SimContext;
    use crate::follower;

    #[test]
    fn init_activates_within_activation_radius() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let mut cfg = config();
        cfg.activation_r = 50.0;
        let mut store = AgentStore::new();
        let player_id = store.spawn(AgentSpec::player(Point::new(0.0, 0.0)));
        let follower_id = store.spawn(AgentSpec::new(AgentKind::Follower(FollowerRole::Guard), Point::new(10.0, 0.0)));
        let agent = store.get(follower_id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(player_id), Point::new(1.0, 0.0));
        let outcome = follower::update(agent, &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Follower(FollowerState::Follow));
    }

    #[test]
    fn follow_closes_in_on_anchor_behind_player() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let cfg = config();
        let mut store = AgentStore::new();
        let player_id = store.spawn(AgentSpec::player(Point::new(200.0, 200.0)));
        store.get_mut(player_id).unwrap().enter_state(AgentState::Player(PlayerState::Moving));
        let follower_id = store.spawn(
            AgentSpec::new(AgentKind::Follower(FollowerRole::Scout), Point::new(0.0, 200.0)).speed(110.0),
        );
        store.get_mut(follower_id).unwrap().enter_state(AgentState::Follower(FollowerState::Follow));
        let agent = store.get(follower_id).unwrap();

        // Player facing +x; anchor sits `follow_distance` behind, i.e. to the
        // player's west — closer to the follower's current position than the
        // player itself.
        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(player_id), Point::new(1.0, 0.0));
        let outcome = follower::update(agent, &ctx, 1.0 / 60.0);
        let anchor = Point::new(200.0 - cfg.follow_distance, 200.0);
        assert!(outcome.pos.distance(anchor) < agent.pos.distance(anchor));
    }

    #[test]
    fn zero_hp_forces_dead() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let cfg = config();
        let mut store = AgentStore::new();
        let player_id = store.spawn(AgentSpec::player(Point::new(0.0, 0.0)));
        let follower_id = store.spawn(AgentSpec::new(AgentKind::Follower(FollowerRole::Medic), Point::new(5.0, 0.0)));
        store.get_mut(follower_id).unwrap().hp = 0.0;
        let agent = store.get(follower_id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(player_id), Point::new(1.0, 0.0));
        let outcome = follower::update(agent, &ctx, 1.0 / 60.0);
        assert_eq!(outcome.state, AgentState::Follower(FollowerState::Dead));
    }

    #[test]
    fn medic_heals_instead_of_damaging() {
        let builder = ServiceBuilder::new();
        let svc = builder.service();
        let mut cfg = config();
        cfg.attack_cooldown = 1.0;
        let mut store = AgentStore::new();
        let player_id = store.spawn(AgentSpec::player(Point::new(0.0, 0.0)));
        store.get_mut(player_id).unwrap().hp = 10.0;
        let medic_id = store.spawn(AgentSpec::new(AgentKind::Follower(FollowerRole::Medic), Point::new(5.0, 0.0)));
        {
            let m = store.get_mut(medic_id).unwrap();
            m.enter_state(AgentState::Follower(FollowerState::Attack));
            m.attack_timer = 0.0;
        }
        let agent = store.get(medic_id).unwrap();

        let ctx = SimContext::new(Tick(0), &cfg, &svc, &store, Some(player_id), Point::new(1.0, 0.0));
        let outcome = follower::update(agent, &ctx, 1.0 / 60.0);
        assert_eq!(outcome.damage.len(), 1);
        assert!(outcome.damage[0].amount < 0.0, "medic should heal, not deal positive damage");
        assert_eq!(outcome.damage[0].to, player_id);
    }
}
