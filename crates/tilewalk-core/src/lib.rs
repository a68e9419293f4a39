//! **tilewalk-core**: board types shared by the *tilewalk* crates.
//!
//! This crate provides the integer grid geometry and the [`Tile`] record
//! that callers hand to the path engine in `tilewalk-paths`.

pub mod geom;
pub mod tile;

pub use geom::{Point, manhattan};
pub use tile::Tile;
