//! `nightward-collision` — obstacle-avoiding translation and spawn placement.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|------------------------------------------------------------|
//! | [`collision`] | `CollisionService`, `slide_translation`, `DETOUR_ORDER`    |
//! | [`spawn`]     | `find_spawn`, `SpawnQuery`                                 |
//!
//! # Slide model
//!
//! `CollisionService` borrows the map and both quadtrees for the duration of
//! one tick and answers every position query the agent state machines need:
//! point/rect-in-building tests, pairwise overlap, and the five-step
//! `slide_translation` fallback chain that turns a desired motion into a
//! safe resting position. Nothing here mutates state — `nightward-sim`
//! commits the results.

pub mod collision;
pub mod spawn;


pub use collision::{CollisionService, DETOUR_ORDER};
pub use spawn::{find_spawn, SpawnQuery};
