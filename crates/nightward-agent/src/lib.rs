//! `nightward-agent` — agent types and storage for the simulation core.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|----------------------------------------------------------|
//! | [`kind`]    | `AgentKind`, `PursuerSubtype`, `FollowerRole`            |
//! | [`state`]   | `AgentState` and the three per-kind state enums          |
//! | [`agent`]   | `Agent`, the common per-agent record                     |
//! | [`builder`] | `AgentSpec`, a fluent builder for a new agent's fields   |
//! | [`store`]   | `AgentStore`, the world's agent population               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod agent;
pub mod builder;
pub mod kind;
pub mod state;
pub mod store;


pub use agent::Agent;
pub use builder::AgentSpec;
pub use kind::{AgentKind, FollowerRole, PursuerSubtype};
pub use state::{AgentState, FollowerState, PlayerState, PursuerState};
pub use store::AgentStore;
