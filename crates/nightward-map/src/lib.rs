//! `nightward-map` — compiles a raw grid matrix into merged building
//! rectangles and walkable cells.
//!
//! # Crate layout
//!
//! | Module       | Contents                                    |
//! |--------------|-----------------------------------------------|
//! | [`map`]      | `Map`, `MapRecord`, `Map::compile`            |
//! | [`building`] | `Building`, `BuildingType`                    |
//! | [`error`]    | `MapError`, `MapResult<T>`                    |

pub mod building;
pub mod error;
pub mod map;

#[cfg(test)]
mod tests;

pub use building::{Building, BuildingType};
pub use error::{MapError, MapResult};
pub use map::{Map, MapRecord};
