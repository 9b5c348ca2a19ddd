//! `nightward-core` — foundational types for the `nightward` simulation core.
//!
//! This crate is a dependency of every other `nightward-*` crate. It has no
//! `nightward-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! plus optional `serde`/`toml`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `BuildingId`                                 |
//! | [`geom`]    | `Point`, `Rect`                                         |
//! | [`time`]    | `Tick`, `WorldClock`, `DayRollover`                     |
//! | [`rng`]     | `SimRng` — single deterministic per-world PRNG          |
//! | [`input`]   | `PlayerInput`                                           |
//! | [`config`]  | `WorldConfig` and its sub-configs                       |
//! | [`error`]   | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                    |
//! |----------|------------------------------------------------------------|
//! | `serde`  | Adds `Serialize`/`Deserialize` to all public types.       |
//! | `config` | Adds `WorldConfig::from_toml_str` (implies `serde`).       |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod input;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WorldConfig;
pub use error::{CoreError, CoreResult};
pub use geom::{Point, Rect};
pub use ids::{AgentId, BuildingId};
pub use input::PlayerInput;
pub use rng::SimRng;
pub use time::{DayRollover, Tick, WorldClock};
