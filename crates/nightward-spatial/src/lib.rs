//! `nightward-spatial` — the dual static/dynamic region quadtree.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-------------------------------------------------------|
//! | [`quadtree`] | `QuadTree<Id>`, `QuadEntry<Id>`, the two aliases     |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod quadtree;


pub use error::{SpatialError, SpatialResult};
pub use quadtree::{DynamicQuadtree, QuadEntry, QuadTree, StaticQuadtree};
