//! Built-in [`ConnectivityStrategy`] implementations.
//!
//! Both strategies treat two tiles as adjacent when their Manhattan distance
//! is exactly 1, and both report neighbours in board order, so they are
//! interchangeable.

use std::collections::HashMap;

use tilewalk_core::{Point, Tile, manhattan};

use crate::traits::ConnectivityStrategy;

/// Pairwise scan over the whole board.
///
/// O(T) per tile, O(T²) per board. Fine for boards of up to a few hundred
/// tiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityScan;

impl ConnectivityStrategy for ProximityScan {
    fn neighbors(&self, board: &[Tile], i: usize, buf: &mut Vec<usize>) {
        let p = board[i].pos;
        for (j, t) in board.iter().enumerate() {
            if j != i && manhattan(p, t.pos) == 1 {
                buf.push(j);
            }
        }
    }
}

/// Position-bucketed lookup for large boards.
///
/// [`prepare`](ConnectivityStrategy::prepare) hashes every tile position
/// once; each query then probes the four cardinal cells.
#[derive(Debug, Clone, Default)]
pub struct GridBuckets {
    cells: HashMap<Point, Vec<usize>>,
}

impl GridBuckets {
    /// Create an empty index. It is filled when the builder calls `prepare`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectivityStrategy for GridBuckets {
    fn prepare(&mut self, board: &[Tile]) {
        self.cells.clear();
        for (i, t) in board.iter().enumerate() {
            self.cells.entry(t.pos).or_default().push(i);
        }
    }

    fn neighbors(&self, board: &[Tile], i: usize, buf: &mut Vec<usize>) {
        let start = buf.len();
        for n in board[i].pos.neighbors_4() {
            if let Some(bucket) = self.cells.get(&n) {
                buf.extend_from_slice(bucket);
            }
        }
        // Cardinal probe order is not board order.
        buf[start..].sort_unstable();
    }
}
