//! Player state machine, §4.E.

use nightward_agent::{Agent, AgentState, PlayerState};
use nightward_core::{Point, PlayerInput};

use crate::context::{SimContext, MOVE_EPSILON, WALL_STEP};
use crate::intent::DamageRequest;
use crate::outcome::UpdateOutcome;

/// Damage dealt per attack tick.
const PLAYER_ATK: f32 = 20.0;

pub fn update(agent: &Agent, input: PlayerInput, ctx: &SimContext, dt: f32) -> UpdateOutcome {
    let mut out = UpdateOutcome::carry_forward(agent, dt);

    if agent.hp <= 0.0 {
        if !matches!(agent.state, AgentState::Player(PlayerState::Dead)) {
            out.transition_to(AgentState::Player(PlayerState::Dead));
            out.target_id = None;
        }
        return out;
    }

    let current = agent.state.as_player().unwrap_or(PlayerState::Idle);
    let moving_input = input.is_moving(MOVE_EPSILON);
    let nearest = ctx.nearest_pursuer(agent.pos);
    let in_range = nearest
        .map(|(_, p)| agent.pos.distance(p) <= ctx.config.attack_r + ctx.config.range_buffer)
        .unwrap_or(false);

    match current {
        PlayerState::Attacking => {
            if !(input.fire && in_range) {
                out.transition_to(idle_or_moving(moving_input));
                out.target_id = None;
            } else {
                out.target_id = nearest.map(|(id, _)| id);
                out.attack_timer -= dt;
                if out.attack_timer <= 0.0 {
                    if let Some((target, _)) = nearest {
                        out.damage.push(DamageRequest::new(Some(agent.id), target, PLAYER_ATK));
                    }
                    out.attack_timer = ctx.config.attack_cooldown;
                }
            }
        }
        PlayerState::Idle | PlayerState::Moving => {
            if input.fire && in_range {
                out.transition_to(AgentState::Player(PlayerState::Attacking));
                out.target_id = nearest.map(|(id, _)| id);
                out.attack_timer = ctx.config.attack_cooldown;
            } else if moving_input {
                if current != PlayerState::Moving {
                    out.transition_to(AgentState::Player(PlayerState::Moving));
                }
                let input_unit = Point::new(input.move_x, input.move_y).normalized();
                let desired = agent.pos.add(input_unit.scale(agent.speed * dt));
                out.pos = ctx.collision.slide_translation(agent.pos, desired, agent.w, agent.h, WALL_STEP);
            } else if current != PlayerState::Idle {
                out.transition_to(AgentState::Player(PlayerState::Idle));
            }
        }
        PlayerState::Dead => {}
    }

    out
}

fn idle_or_moving(moving: bool) -> AgentState {
    AgentState::Player(if moving { PlayerState::Moving } else { PlayerState::Idle })
}
