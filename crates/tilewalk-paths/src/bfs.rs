use std::collections::VecDeque;

use crate::TileGraph;
use crate::path::{PathNode, PathStep};

const UNVISITED: usize = usize::MAX;

impl TileGraph {
    /// Compute a minimum-hop path from `start` to `end` with breadth-first
    /// search.
    ///
    /// Connections are followed as stored, with no step budget and no
    /// one-step-back rule. Ties go to the earlier connection. Returns the
    /// full path (both endpoints included, steps numbered from 0) or `None`
    /// if either id is unknown or `end` cannot be reached.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<Vec<PathStep>> {
        let si = self.idx(start)?;
        let gi = self.idx(end)?;

        if si == gi {
            return Some(vec![self.path_step(si, 0)]);
        }

        let mut parent = vec![UNVISITED; self.tiles.len()];
        parent[si] = si;
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search false;
            };
            for &ni in &self.adj[ci] {
                if parent[ni] != UNVISITED {
                    continue;
                }
                parent[ni] = ci;
                if ni == gi {
                    break 'search true;
                }
                queue.push_back(ni);
            }
        };

        if !found {
            log::trace!("shortest_path: {end:?} not reachable from {start:?}");
            return None;
        }

        // Reconstruct path.
        let mut rev = vec![gi];
        let mut ci = gi;
        while ci != si {
            ci = parent[ci];
            rev.push(ci);
        }
        Some(
            rev.into_iter()
                .rev()
                .enumerate()
                .map(|(step, i)| self.path_step(i, step))
                .collect(),
        )
    }

    /// Whether any sequence of connections leads from `from` to `to`.
    pub fn is_reachable(&self, from: &str, to: &str) -> bool {
        self.shortest_path(from, to).is_some()
    }

    /// Compute a multi-source breadth-first distance map.
    ///
    /// Every known source starts at cost 0; unknown sources are skipped.
    /// Expansion stops at `max_dist`. Returns the reached tiles in discovery
    /// order.
    pub fn bfs_map(&self, sources: &[&str], max_dist: usize) -> Vec<PathNode> {
        let mut dist = vec![UNVISITED; self.tiles.len()];
        let mut results = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        for src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if dist[si] != UNVISITED {
                continue;
            }
            dist[si] = 0;
            queue.push_back(si);
            results.push(PathNode {
                id: self.tiles[si].id.clone(),
                cost: 0,
            });
        }

        while let Some(ci) = queue.pop_front() {
            let nd = dist[ci] + 1;
            if nd > max_dist {
                continue;
            }
            for &ni in &self.adj[ci] {
                if dist[ni] != UNVISITED {
                    continue;
                }
                dist[ni] = nd;
                queue.push_back(ni);
                results.push(PathNode {
                    id: self.tiles[ni].id.clone(),
                    cost: nd,
                });
            }
        }

        results
    }
}
