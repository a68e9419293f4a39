//! Movement and path queries for tile-based board games.
//!
//! A caller hands over a snapshot of the board as a list of
//! [`Tile`](tilewalk_core::Tile)s and gets back an immutable [`TileGraph`]
//! with every connection populated. On that graph this crate provides:
//!
//! - **Movement enumeration**: every walk of N steps from a tile, with the
//!   first branch point of each walk ([`TileGraph::enumerate_paths`])
//! - **Choice detection**: grouping walks by destination and deciding
//!   whether the player must pick one ([`group_by_destination`],
//!   [`needs_choice`], [`auto_resolve`])
//! - **BFS** shortest paths, reachability and distance maps
//!   ([`TileGraph::shortest_path`], [`TileGraph::is_reachable`],
//!   [`TileGraph::bfs_map`])
//! - **Flood fill** ([`TileGraph::flood_fill`])
//! - **Validation** of duplicate, dangling and one-way links
//!   ([`TileGraph::validate`])
//!
//! Everything is a pure function of the graph; nothing is cached between
//! calls.
//!
//! # Connection inference
//!
//! | Strategy | Cost per board |
//! |---|---|
//! | [`ProximityScan`] (default) | O(T²) |
//! | [`GridBuckets`] | O(T) expected |
//!
//! Custom strategies implement [`ConnectivityStrategy`] and are passed to
//! [`TileGraph::build_with`].

mod adjacency;
mod bfs;
mod cc;
mod enumerate;
mod graph;
mod grouping;
mod neighbors;
mod path;
mod traits;
mod validate;

#[cfg(test)]
mod properties;

pub use enumerate::EnumerateConfig;
pub use graph::TileGraph;
pub use grouping::{DestinationGroup, auto_resolve, group_by_destination, needs_choice};
pub use neighbors::{GridBuckets, ProximityScan};
pub use path::{PathNode, PathOption, PathStep};
pub use traits::ConnectivityStrategy;
pub use validate::{GraphIssue, ValidationError};
