//! Board tiles.

use crate::geom::Point;

/// A single board cell.
///
/// `connections` lists the ids of tiles a token may move to from here, in
/// the order they should be explored. An empty list means "not supplied":
/// the graph builder infers it from grid proximity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub id: String,
    pub pos: Point,
    /// Free-form category tag such as `"normal"`, `"start"` or `"special"`.
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connections: Vec<String>,
}

impl Tile {
    /// Create a tile with no connections.
    pub fn new(id: impl Into<String>, x: i32, y: i32, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pos: Point::new(x, y),
            kind: kind.into(),
            connections: Vec::new(),
        }
    }

    /// Replace the connection list.
    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this tile lists `id` among its connections.
    pub fn connects_to(&self, id: &str) -> bool {
        self.connections.iter().any(|c| c == id)
    }
}
