use tilewalk_core::Tile;

/// Neighbour inference for tiles that arrive without connections.
pub trait ConnectivityStrategy {
    /// Called once with the deduplicated board before any
    /// [`neighbors`](Self::neighbors) query. Strategies that index the board
    /// build their index here.
    fn prepare(&mut self, _board: &[Tile]) {}

    /// Append the indices (into `board`) of the tiles adjacent to `board[i]`,
    /// in ascending index order. The caller clears `buf` before calling.
    fn neighbors(&self, board: &[Tile], i: usize, buf: &mut Vec<usize>);
}
