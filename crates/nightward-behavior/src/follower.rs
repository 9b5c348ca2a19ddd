//! Follower state machine, §4.E.

use nightward_agent::{Agent, AgentKind, AgentState, FollowerRole, FollowerState};
use nightward_core::Point;

use crate::context::{SimContext, WALL_STEP};
use crate::intent::DamageRequest;
use crate::outcome::UpdateOutcome;

/// Distance from the anchor below which a follower stops closing in.
const ANCHOR_EPSILON: f32 = 5.0;
/// Damage dealt per attack tick by non-Medic followers.
const FOLLOWER_ATK: f32 = 10.0;
/// Healing applied per attack tick by a Medic follower, to whichever ally
/// (player or follower) has the lowest hp within `detection_r`.
const MEDIC_HEAL: f32 = 15.0;

pub fn update(agent: &Agent, ctx: &SimContext, dt: f32) -> UpdateOutcome {
    let mut out = UpdateOutcome::carry_forward(agent, dt);

    if agent.hp <= 0.0 {
        if !matches!(agent.state, AgentState::Follower(FollowerState::Dead)) {
            out.transition_to(AgentState::Follower(FollowerState::Dead));
            out.target_id = None;
        }
        return out;
    }

    let AgentKind::Follower(role) = agent.kind else {
        return out;
    };

    let Some(player_pos) = ctx.player_pos() else {
        return out;
    };

    let current = agent.state.as_follower().unwrap_or(FollowerState::Init);
    let dist_to_player = agent.pos.distance(player_pos);
    let player_moving = matches!(
        ctx.player_id.and_then(|id| ctx.agents.get(id)).map(|p| p.state),
        Some(AgentState::Player(nightward_agent::PlayerState::Moving))
    );
    let nearest_pursuer = ctx.nearest_pursuer(agent.pos);
    let pursuer_in_range = nearest_pursuer
        .map(|(_, p)| agent.pos.distance(p) <= ctx.config.detection_r)
        .unwrap_or(false);
    let congested = is_congested(agent.pos, player_pos, ctx.player_facing, dist_to_player, ctx.config.congestion_r);

    match current {
        FollowerState::Init => {
            if dist_to_player <= ctx.config.activation_r {
                out.transition_to(AgentState::Follower(FollowerState::Follow));
            }
        }
        FollowerState::Idle => {
            if player_moving {
                out.transition_to(AgentState::Follower(FollowerState::Follow));
            }
        }
        FollowerState::Follow => {
            if congested {
                out.transition_to(AgentState::Follower(FollowerState::Avoid));
                out.avoid_offset = avoid_direction(agent.pos, player_pos, ctx.player_facing).scale(ctx.config.congestion_r);
            } else if !player_moving && pursuer_in_range {
                out.transition_to(AgentState::Follower(FollowerState::Attack));
                out.target_id = nearest_pursuer.map(|(id, _)| id);
                out.attack_timer = ctx.config.attack_cooldown;
            } else if !player_moving {
                out.transition_to(AgentState::Follower(FollowerState::Idle));
            } else {
                out.pos = move_toward_anchor(agent, player_pos, ctx.player_facing, ctx, dt);
            }
        }
        FollowerState::Attack => {
            if player_moving {
                out.transition_to(AgentState::Follower(FollowerState::Follow));
                out.target_id = None;
            } else if !pursuer_in_range {
                out.transition_to(AgentState::Follower(FollowerState::Follow));
                out.target_id = None;
            } else {
                out.target_id = nearest_pursuer.map(|(id, _)| id);
                out.attack_timer -= dt;
                if out.attack_timer <= 0.0 {
                    out.damage.extend(attack_tick(agent, role, nearest_pursuer, ctx));
                    out.attack_timer = ctx.config.attack_cooldown;
                }
            }
        }
        FollowerState::Avoid => {
            if agent.state_time + dt >= ctx.config.avoid_duration {
                out.transition_to(if !player_moving && pursuer_in_range {
                    AgentState::Follower(FollowerState::Attack)
                } else {
                    AgentState::Follower(FollowerState::Follow)
                });
                if matches!(out.state, AgentState::Follower(FollowerState::Attack)) {
                    out.target_id = nearest_pursuer.map(|(id, _)| id);
                    out.attack_timer = ctx.config.attack_cooldown;
                }
            } else {
                let progress = (out.state_time / ctx.config.avoid_duration).clamp(0.0, 1.0);
                let ease = (progress * std::f32::consts::PI).sin();
                let anchor = follow_anchor(player_pos, ctx.player_facing, ctx.config.follow_distance);
                let target = anchor.add(agent.avoid_offset.scale(ease));
                out.pos = ctx.collision.slide_translation(agent.pos, target, agent.w, agent.h, WALL_STEP);
            }
        }
        FollowerState::Dead => {}
    }

    out
}

fn attack_tick(
    agent: &Agent,
    role: FollowerRole,
    nearest_pursuer: Option<(nightward_core::AgentId, Point)>,
    ctx: &SimContext,
) -> Vec<DamageRequest> {
    match role {
        FollowerRole::Medic => {
            let lowest = ctx
                .agents
                .iter()
                .filter(|a| a.is_alive() && (a.kind.is_player() || a.kind.is_follower()) && a.id != agent.id)
                .filter(|a| agent.pos.distance(a.pos) <= ctx.config.detection_r)
                .filter(|a| a.hp < a.max_hp)
                .min_by(|a, b| a.hp.partial_cmp(&b.hp).unwrap());
            match lowest {
                Some(ally) => vec![DamageRequest::new(Some(agent.id), ally.id, -MEDIC_HEAL)],
                None => vec![],
            }
        }
        FollowerRole::Guard | FollowerRole::Scout => match nearest_pursuer {
            Some((id, _)) => vec![DamageRequest::new(Some(agent.id), id, FOLLOWER_ATK)],
            None => vec![],
        },
    }
}

/// Whether the player's motion is heading roughly at `pos` (within 90°) and
/// close enough to count as congestion.
fn is_congested(pos: Point, player_pos: Point, player_facing: Point, dist_to_player: f32, congestion_r: f32) -> bool {
    if dist_to_player >= congestion_r || dist_to_player < 1e-3 {
        return false;
    }
    let toward_follower = pos.sub(player_pos).normalized();
    player_facing.x * toward_follower.x + player_facing.y * toward_follower.y > 0.0
}

/// Perpendicular side to step toward when avoiding, chosen so the follower
/// moves away from the player's direct path rather than across it.
fn avoid_direction(pos: Point, player_pos: Point, player_facing: Point) -> Point {
    let perp = player_facing.perpendicular();
    let toward_follower = pos.sub(player_pos);
    let side = perp.x * toward_follower.x + perp.y * toward_follower.y;
    if side >= 0.0 {
        perp.normalized()
    } else {
        perp.normalized().scale(-1.0)
    }
}

fn follow_anchor(player_pos: Point, player_facing: Point, follow_distance: f32) -> Point {
    player_pos.sub(player_facing.scale(follow_distance))
}

fn move_toward_anchor(agent: &Agent, player_pos: Point, player_facing: Point, ctx: &SimContext, dt: f32) -> Point {
    let anchor = follow_anchor(player_pos, player_facing, ctx.config.follow_distance);
    if agent.pos.distance(anchor) <= ANCHOR_EPSILON {
        return agent.pos;
    }
    let direction = anchor.sub(agent.pos).normalized();
    let desired = agent.pos.add(direction.scale(agent.speed * dt));
    ctx.collision.slide_translation(agent.pos, desired, agent.w, agent.h, WALL_STEP)
}
