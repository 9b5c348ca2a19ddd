//! `nightward-sim` — the tick-driven scheduler that owns the world and
//! advances every agent by one step at a time.
//!
//! # Seven-step tick order
//!
//! ```text
//! World::tick(dt, input):
//!   ① Clock     — advance WorldClock by dt; a day rollover queues a wave.
//!   ② Spawn     — resolve one pursuer wave per rollover via Spawn::find_spawn.
//!   ③ Agents    — ascending-id pass: FSM transition, behavior, collision,
//!                 damage buffered (not applied) until step ④.
//!   ④ Damage    — apply the buffer; zero-hp agents transition to Dead.
//!   ⑤ Quadtree  — clear-and-rebuild / diff / reinsert-moved by change ratio.
//!   ⑥ Separate  — every `separation_period` ticks, push overlapping
//!                 pursuers apart.
//!   ⑦ Reap      — drop agents whose Dead timer has fully elapsed.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nightward_core::{PlayerInput, WorldConfig};
//! use nightward_map::Map;
//! use nightward_sim::{NoopObserver, World};
//!
//! let map: Map = /* load + Map::compile */;
//! let mut world = World::new(map, 42, WorldConfig::default())?;
//! world.spawn_player(start_pos);
//! world.tick(1.0 / 60.0, PlayerInput::default(), &mut NoopObserver);
//! let view = world.snapshot();
//! ```

pub mod error;
pub mod observer;
pub mod view;
pub mod world;


pub use error::{WorldError, WorldResult};
pub use observer::{NoopObserver, WorldObserver};
pub use view::{AgentView, WorldView};
pub use world::World;
