use tilewalk_core::{Point, Tile};

/// One tile visited by a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub id: String,
    pub pos: Point,
    /// Zero-based step at which the tile was reached; 0 is the start tile.
    pub step: usize,
}

/// One complete candidate walk returned by the path enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathOption {
    /// Start to finish, start tile included.
    pub path: Vec<PathStep>,
    /// The tile the walk ends on.
    pub destination: Tile,
    /// Step index of the first branch point on this walk, if any.
    pub choice_at_step: Option<usize>,
}

impl PathOption {
    /// Whether the walk passed through a branch point.
    #[inline]
    pub fn requires_choice(&self) -> bool {
        self.choice_at_step.is_some()
    }

    /// Number of moves made (path length minus the start tile).
    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A tile with an associated distance, returned from BFS map queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub id: String,
    pub cost: usize,
}
