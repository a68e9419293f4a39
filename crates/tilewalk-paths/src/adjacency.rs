use tilewalk_core::Tile;

use crate::TileGraph;

impl TileGraph {
    /// Tiles reachable in one move from `id`, in connection order.
    ///
    /// `exclude` (typically the tile the token just came from) is dropped
    /// from the result, as is any connection id that names no tile. An
    /// unknown `id` yields an empty list.
    pub fn neighbors(&self, id: &str, exclude: Option<&str>) -> Vec<&Tile> {
        let Some(i) = self.idx(id) else {
            return Vec::new();
        };
        let mut nbuf = Vec::new();
        self.eligible(i, exclude.and_then(|e| self.idx(e)), &mut nbuf);
        nbuf.into_iter().map(|j| &self.tiles[j]).collect()
    }

    /// Append the slots adjacent to slot `i`, minus `exclude`, into `buf`.
    /// The caller clears `buf` before calling.
    #[inline]
    pub(crate) fn eligible(&self, i: usize, exclude: Option<usize>, buf: &mut Vec<usize>) {
        buf.extend(self.adj[i].iter().copied().filter(|&j| Some(j) != exclude));
    }
}
