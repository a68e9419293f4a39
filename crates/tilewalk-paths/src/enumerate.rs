//! Step-budgeted movement enumeration.

use crate::TileGraph;
use crate::path::PathOption;

/// Limits applied by [`TileGraph::enumerate_paths_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerateConfig {
    /// Stop after recording this many options. `None` means unlimited.
    pub max_paths: Option<usize>,
}

/// A partial walk waiting on the work stack.
struct Walk {
    path: Vec<usize>,
    choice: Option<usize>,
}

impl TileGraph {
    /// Enumerate every walk of `steps` moves from `start`.
    ///
    /// Equivalent to [`enumerate_paths_with`](Self::enumerate_paths_with)
    /// with the default (unlimited) configuration.
    pub fn enumerate_paths(
        &self,
        start: &str,
        steps: usize,
        previous: Option<&str>,
    ) -> Vec<PathOption> {
        self.enumerate_paths_with(start, steps, previous, &EnumerateConfig::default())
    }

    /// Enumerate every walk of `steps` moves from `start`.
    ///
    /// The first move may not go to `previous`; every later move may not go
    /// back to the tile just left. Older tiles may be revisited. A walk that
    /// reaches a tile with nowhere to go before the budget is spent is
    /// recorded as it stands.
    ///
    /// Each option carries the step index of the first tile on its walk that
    /// offered more than one way forward. Options come out in depth-first
    /// order following each tile's connection order.
    ///
    /// An unknown `start` yields no options. A zero budget, or a start with
    /// no eligible neighbour, yields a single option holding only the start.
    pub fn enumerate_paths_with(
        &self,
        start: &str,
        steps: usize,
        previous: Option<&str>,
        config: &EnumerateConfig,
    ) -> Vec<PathOption> {
        let Some(si) = self.idx(start) else {
            log::debug!("enumerate: unknown start tile {start:?}");
            return Vec::new();
        };
        if config.max_paths == Some(0) {
            return Vec::new();
        }

        let mut nbuf = Vec::with_capacity(4);
        if steps > 0 {
            self.eligible(si, previous.and_then(|p| self.idx(p)), &mut nbuf);
        }
        if nbuf.is_empty() {
            log::trace!("enumerate: token on {start:?} cannot move");
            return vec![self.path_option(&[si], None)];
        }

        let mut results = Vec::new();
        let mut stack: Vec<Walk> = Vec::new();
        push_branches(&mut stack, &[si], &nbuf, (nbuf.len() > 1).then_some(0));

        while let Some(walk) = stack.pop() {
            let taken = walk.path.len() - 1;
            let at = walk.path[taken];

            nbuf.clear();
            if taken < steps {
                self.eligible(at, Some(walk.path[taken - 1]), &mut nbuf);
            }

            if nbuf.is_empty() {
                if taken < steps {
                    log::trace!(
                        "enumerate: dead end at {:?} after {taken} of {steps} steps",
                        self.tiles[at].id
                    );
                }
                results.push(self.path_option(&walk.path, walk.choice));
                if config.max_paths.is_some_and(|m| results.len() >= m) {
                    if !stack.is_empty() {
                        log::warn!(
                            "enumerate: capped at {} options from {start:?}",
                            results.len()
                        );
                    }
                    break;
                }
                continue;
            }

            // First branch wins.
            let choice = walk.choice.or((nbuf.len() > 1).then_some(taken));
            push_branches(&mut stack, &walk.path, &nbuf, choice);
        }

        log::debug!(
            "enumerate: {} options from {start:?} with {steps} steps",
            results.len()
        );
        results
    }

    fn path_option(&self, path: &[usize], choice_at_step: Option<usize>) -> PathOption {
        let last = path[path.len() - 1];
        PathOption {
            path: path
                .iter()
                .enumerate()
                .map(|(step, &i)| self.path_step(i, step))
                .collect(),
            destination: self.tiles[last].clone(),
            choice_at_step,
        }
    }
}

fn push_branches(stack: &mut Vec<Walk>, prefix: &[usize], next: &[usize], choice: Option<usize>) {
    // Reversed so the first connection is popped first.
    for &n in next.iter().rev() {
        let mut path = Vec::with_capacity(prefix.len() + 1);
        path.extend_from_slice(prefix);
        path.push(n);
        stack.push(Walk { path, choice });
    }
}
