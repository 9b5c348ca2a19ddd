//! `nightward-behavior` — the three agent state machines, §4.E.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|---------------------------------------------------------------|
//! | [`context`] | `SimContext<'a>` — read-only per-tick state                  |
//! | [`intent`]  | `DamageRequest` — the one deferred, double-buffered side effect |
//! | [`outcome`] | `UpdateOutcome` — the result of one agent's update            |
//! | [`player`]  | Player FSM: `Idle \| Moving \| Attacking \| Dead`              |
//! | [`pursuer`] | Pursuer FSM: `Idle \| Chase \| Attack \| Dead`                 |
//! | [`follower`]| Follower FSM: `Init \| Idle \| Follow \| Attack \| Avoid \| Dead` |
//!
//! # Design notes
//!
//! The teacher's `BehaviorModel` trait exists to let a parallel intent phase
//! (Rayon) call into arbitrary user-supplied logic, then apply results
//! sequentially. The simulation core here is explicitly single-threaded
//! cooperative (no Rayon split is possible or desired), so that trait
//! collapses into three plain free functions, one per kind, each consuming a
//! `&SimContext` and producing an [`outcome::UpdateOutcome`] the scheduler
//! commits with [`outcome::UpdateOutcome::apply`]. Position and state commit
//! immediately per agent; only damage is buffered, since hits exchanged by
//! two agents in the same tick must both land (§5).

pub mod context;
pub mod follower;
pub mod intent;
pub mod outcome;
pub mod player;
pub mod pursuer;

#[cfg(test)]
mod tests;

pub use context::SimContext;
pub use intent::DamageRequest;
pub use outcome::UpdateOutcome;
