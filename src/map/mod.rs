//! Hex map geometry and the ring-removal shrinker.
//!
//! The map is a hexagonal grid in axial coordinates, stored in the document
//! as a spiral tile list enumerated ring by ring from the center. `hex`
//! holds the distance and ring-count primitives; `shrink` removes the
//! outermost ring and every positional reference beyond it.

pub mod hex;
pub mod shrink;

pub use hex::{distance, position_distance, tile_count};
pub use shrink::{shrink, NotShrinkable, ShrinkReport};
