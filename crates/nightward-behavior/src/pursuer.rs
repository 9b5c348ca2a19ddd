//! Pursuer state machine, §4.E.

use nightward_agent::{Agent, AgentKind, AgentState, PursuerState, PursuerSubtype};
use nightward_core::Point;

use crate::context::SimContext;
use crate::intent::DamageRequest;
use crate::outcome::UpdateOutcome;

/// Cap on the chase detour step, per REDESIGN FLAG 3 (`min(|Δ|, 100)`).
const CHASE_DETOUR_CAP: f32 = 100.0;

/// Damage dealt per attack tick, by subtype.
fn atk_for(subtype: PursuerSubtype) -> f32 {
    match subtype {
        PursuerSubtype::Shambler => 8.0,
        PursuerSubtype::Runner => 5.0,
        PursuerSubtype::Brute => 25.0,
    }
}

pub fn update(agent: &Agent, ctx: &SimContext, dt: f32) -> UpdateOutcome {
    let mut out = UpdateOutcome::carry_forward(agent, dt);

    if agent.hp <= 0.0 {
        if !matches!(agent.state, AgentState::Pursuer(PursuerState::Dead)) {
            out.transition_to(AgentState::Pursuer(PursuerState::Dead));
            out.target_id = None;
        }
        return out;
    }

    let AgentKind::Pursuer(subtype) = agent.kind else {
        return out;
    };

    let current = agent.state.as_pursuer().unwrap_or(PursuerState::Idle);
    let target = ctx.nearest_player_or_follower(agent.pos);

    match current {
        PursuerState::Idle => {
            if let Some((id, pos)) = target {
                if agent.pos.distance(pos) <= ctx.config.detection_r {
                    out.transition_to(AgentState::Pursuer(PursuerState::Chase));
                    out.target_id = Some(id);
                }
            }
        }
        PursuerState::Chase => match target {
            None => {
                out.transition_to(AgentState::Pursuer(PursuerState::Idle));
                out.target_id = None;
            }
            Some((id, pos)) => {
                out.target_id = Some(id);
                if agent.pos.distance(pos) <= ctx.config.attack_r + ctx.config.range_buffer {
                    out.transition_to(AgentState::Pursuer(PursuerState::Attack));
                    out.attack_timer = ctx.config.attack_cooldown;
                } else {
                    out.pos = chase_step(agent, pos, ctx, dt);
                }
            }
        },
        PursuerState::Attack => match target {
            None => {
                out.transition_to(AgentState::Pursuer(PursuerState::Idle));
                out.target_id = None;
            }
            Some((id, pos)) => {
                out.target_id = Some(id);
                if agent.pos.distance(pos) > ctx.config.attack_r + ctx.config.range_buffer {
                    out.transition_to(AgentState::Pursuer(PursuerState::Chase));
                } else {
                    out.attack_timer -= dt;
                    if out.attack_timer <= 0.0 {
                        out.damage.push(DamageRequest::new(Some(agent.id), id, atk_for(subtype)));
                        out.attack_timer = ctx.config.attack_cooldown;
                    }
                }
            }
        },
        PursuerState::Dead => {}
    }

    out
}

/// Move toward `target` at `speed·dt`; if the direct step collides, try the
/// fixed 8-way detour order at `min(|Δ|, 100)`, requiring the detour path
/// itself stay clear. Stands still if every detour also collides.
fn chase_step(agent: &Agent, target: Point, ctx: &SimContext, dt: f32) -> Point {
    let to_target = target.sub(agent.pos);
    let step = (agent.speed * dt).min(to_target.length());
    let direction = to_target.normalized();
    let desired = agent.pos.add(direction.scale(step));

    if !ctx.collision.rect_collides_buildings(desired, agent.w, agent.h) {
        return desired;
    }

    let detour_step = step.min(CHASE_DETOUR_CAP);
    for (dx, dy) in nightward_collision::collision::DETOUR_ORDER {
        let candidate = agent.pos.add(Point::new(dx, dy).scale(detour_step));
        if !ctx.collision.rect_collides_buildings(candidate, agent.w, agent.h)
            && ctx.collision.path_valid(agent.pos, candidate, agent.w, agent.h)
        {
            return candidate;
        }
    }

    agent.pos
}
