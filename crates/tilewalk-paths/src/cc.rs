//! Flood fill over the board graph.

use tilewalk_core::Tile;

use crate::TileGraph;

impl TileGraph {
    /// Every tile reachable from `start` by following connections, `start`
    /// first, in discovery order.
    ///
    /// Returns an empty list if `start` is unknown.
    pub fn flood_fill(&self, start: &str) -> Vec<&Tile> {
        let Some(si) = self.idx(start) else {
            return Vec::new();
        };

        let mut seen = vec![false; self.tiles.len()];
        let mut stack = vec![si];
        let mut result = vec![&self.tiles[si]];
        seen[si] = true;

        // Iterative DFS from `start`.
        while let Some(ci) = stack.pop() {
            for &ni in &self.adj[ci] {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(ni);
                    result.push(&self.tiles[ni]);
                }
            }
        }

        result
    }
}
