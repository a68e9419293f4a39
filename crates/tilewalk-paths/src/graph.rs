use std::collections::HashMap;

use tilewalk_core::Tile;

use crate::neighbors::ProximityScan;
use crate::path::PathStep;
use crate::traits::ConnectivityStrategy;

/// An immutable board snapshot: tiles keyed by id, with connections
/// populated and resolved.
///
/// Tiles keep the slot of their first appearance in the input. Connection
/// ids are resolved to slots once at build time; ids that name no tile, and
/// repeats of an id already listed, are kept in [`Tile::connections`] but
/// never traversed.
#[derive(Debug, Clone)]
pub struct TileGraph {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) index: HashMap<String, usize>,
    // resolved adjacency, parallel to `tiles`
    pub(crate) adj: Vec<Vec<usize>>,
    pub(crate) duplicates: Vec<String>,
}

impl TileGraph {
    /// Build a graph, inferring missing connections with [`ProximityScan`].
    pub fn build<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        Self::build_with(tiles, ProximityScan)
    }

    /// Build a graph, inferring missing connections with `strategy`.
    ///
    /// Every tile whose connection list is empty receives the ids of its
    /// grid neighbours. Tiles with supplied connections are left untouched.
    /// When two records share an id the later one wins.
    pub fn build_with<I, S>(tiles: I, mut strategy: S) -> Self
    where
        I: IntoIterator<Item = Tile>,
        S: ConnectivityStrategy,
    {
        let mut board: Vec<Tile> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut duplicates: Vec<String> = Vec::new();

        for tile in tiles {
            match index.get(&tile.id) {
                Some(&slot) => {
                    log::warn!("duplicate tile id {:?}, keeping the last record", tile.id);
                    if !duplicates.contains(&tile.id) {
                        duplicates.push(tile.id.clone());
                    }
                    board[slot] = tile;
                }
                None => {
                    index.insert(tile.id.clone(), board.len());
                    board.push(tile);
                }
            }
        }

        strategy.prepare(&board);

        let mut nbuf = Vec::with_capacity(4);
        let mut inferred: Vec<(usize, Vec<String>)> = Vec::new();
        for i in 0..board.len() {
            if !board[i].connections.is_empty() {
                continue;
            }
            nbuf.clear();
            strategy.neighbors(&board, i, &mut nbuf);
            if nbuf.is_empty() {
                continue;
            }
            log::trace!("inferred {} connections for tile {:?}", nbuf.len(), board[i].id);
            inferred.push((i, nbuf.iter().map(|&j| board[j].id.clone()).collect()));
        }
        let inferred_count = inferred.len();
        for (i, connections) in inferred {
            board[i].connections = connections;
        }

        let adj = board
            .iter()
            .map(|t| {
                let mut slots: Vec<usize> = Vec::with_capacity(t.connections.len());
                for c in &t.connections {
                    if let Some(&j) = index.get(c) {
                        if !slots.contains(&j) {
                            slots.push(j);
                        }
                    }
                }
                slots
            })
            .collect();

        log::debug!(
            "built board graph: {} tiles, {} with inferred connections",
            board.len(),
            inferred_count
        );

        Self {
            tiles: board,
            index,
            adj,
            duplicates,
        }
    }

    /// Look up a tile by id.
    pub fn get(&self, id: &str) -> Option<&Tile> {
        self.idx(id).map(|i| &self.tiles[i])
    }

    /// Whether a tile with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All tiles, in order of first appearance in the input.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of distinct tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Consume the graph and return its tiles with populated connections.
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn idx(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[inline]
    pub(crate) fn path_step(&self, i: usize, step: usize) -> PathStep {
        let t = &self.tiles[i];
        PathStep {
            id: t.id.clone(),
            pos: t.pos,
            step,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::GridBuckets;

    fn cross() -> Vec<Tile> {
        vec![
            Tile::new("c", 1, 1, "start"),
            Tile::new("n", 1, 0, "normal"),
            Tile::new("w", 0, 1, "normal"),
            Tile::new("e", 2, 1, "special"),
            Tile::new("far", 5, 5, "normal"),
        ]
    }

    #[test]
    fn infers_three_neighbors_in_input_order() {
        let g = TileGraph::build(cross());
        assert_eq!(g.get("c").unwrap().connections, vec!["n", "w", "e"]);
        assert_eq!(g.get("n").unwrap().connections, vec!["c"]);
        assert!(g.get("far").unwrap().connections.is_empty());
    }

    #[test]
    fn supplied_connections_are_not_merged() {
        let mut tiles = cross();
        tiles[0].connections = vec!["e".into()];
        let g = TileGraph::build(tiles);
        assert_eq!(g.get("c").unwrap().connections, vec!["e"]);
        // `n` is still inferred, so the link is one-way from `n`.
        assert_eq!(g.get("n").unwrap().connections, vec!["c"]);
    }

    #[test]
    fn building_twice_is_idempotent() {
        let once = TileGraph::build(cross());
        let twice = TileGraph::build(once.clone().into_tiles());
        assert_eq!(once.tiles(), twice.tiles());
    }

    #[test]
    fn strategies_agree() {
        let a = TileGraph::build(cross());
        let b = TileGraph::build_with(cross(), GridBuckets::new());
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn duplicate_ids_last_wins() {
        let g = TileGraph::build([
            Tile::new("a", 0, 0, "normal"),
            Tile::new("b", 1, 0, "normal"),
            Tile::new("a", 9, 9, "special"),
        ]);
        assert_eq!(g.len(), 2);
        let a = g.get("a").unwrap();
        assert_eq!(a.kind, "special");
        assert_eq!(g.tiles()[0].id, "a");
        // Inference ran against the surviving record, which is far from `b`.
        assert!(a.connections.is_empty());
        assert_eq!(g.duplicates, vec!["a"]);
    }

    #[test]
    fn dangling_ids_are_kept_but_not_resolved() {
        let g = TileGraph::build([
            Tile::new("a", 0, 0, "normal").with_connections(["ghost", "b"]),
            Tile::new("b", 5, 0, "normal").with_connections(["a"]),
        ]);
        assert_eq!(g.get("a").unwrap().connections, vec!["ghost", "b"]);
        assert_eq!(g.adj[0], vec![1]);
    }

    #[test]
    fn repeated_connections_resolve_once() {
        let g = TileGraph::build([
            Tile::new("a", 0, 0, "normal").with_connections(["b", "b"]),
            Tile::new("b", 5, 0, "normal").with_connections(["a"]),
        ]);
        assert_eq!(g.adj[0], vec![1]);
    }

    #[test]
    fn extreme_coordinates_infer_nothing_spurious() {
        let board = || {
            vec![
                Tile::new("max", i32::MAX, 0, "normal"),
                Tile::new("min", i32::MIN, 0, "normal"),
                Tile::new("corner", i32::MAX, i32::MIN, "normal"),
                Tile::new("below", i32::MAX, i32::MIN + 1, "normal"),
            ]
        };
        let scan = TileGraph::build(board());
        let buckets = TileGraph::build_with(board(), GridBuckets::new());
        for g in [&scan, &buckets] {
            assert!(g.get("max").unwrap().connections.is_empty());
            assert!(g.get("min").unwrap().connections.is_empty());
            assert_eq!(g.get("corner").unwrap().connections, vec!["below"]);
            assert_eq!(g.get("below").unwrap().connections, vec!["corner"]);
        }
        assert_eq!(scan.tiles(), buckets.tiles());
    }

    #[test]
    fn empty_board() {
        let g = TileGraph::build(Vec::new());
        assert!(g.is_empty());
        assert!(!g.contains("x"));
        assert!(g.get("x").is_none());
    }
}
