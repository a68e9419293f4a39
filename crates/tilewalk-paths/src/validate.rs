//! Optional structural checks on a built board.
//!
//! The builder accepts any input. Boards with one-way tiles are legal, so
//! none of these findings stop the path queries from running; callers that
//! want a strict board call [`TileGraph::validate`].

use std::fmt;

use crate::TileGraph;

/// A questionable feature of a board graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// More than one input record used this id; the last one was kept.
    DuplicateTile(String),
    /// `from` lists a connection to an id that names no tile.
    DanglingConnection { from: String, to: String },
    /// `from` lists `to`, but `to` does not list `from`.
    OneWayConnection { from: String, to: String },
    /// The tile lists itself.
    SelfConnection(String),
    /// `from` lists `to` more than once.
    RepeatedConnection { from: String, to: String },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTile(id) => write!(f, "duplicate tile id {id:?}"),
            Self::DanglingConnection { from, to } => {
                write!(f, "tile {from:?} connects to unknown tile {to:?}")
            }
            Self::OneWayConnection { from, to } => {
                write!(f, "tile {from:?} connects to {to:?} but not back")
            }
            Self::SelfConnection(id) => write!(f, "tile {id:?} connects to itself"),
            Self::RepeatedConnection { from, to } => {
                write!(f, "tile {from:?} lists {to:?} more than once")
            }
        }
    }
}

/// Error returned by [`TileGraph::validate`] listing every issue found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<GraphIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board graph has {} issue(s):", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl TileGraph {
    /// Collect every structural issue, duplicates first, then connection
    /// issues in tile order.
    pub fn issues(&self) -> Vec<GraphIssue> {
        let mut issues: Vec<GraphIssue> = self
            .duplicates
            .iter()
            .cloned()
            .map(GraphIssue::DuplicateTile)
            .collect();

        for tile in &self.tiles {
            for (k, to) in tile.connections.iter().enumerate() {
                let issue = if tile.connections[..k].contains(to) {
                    GraphIssue::RepeatedConnection {
                        from: tile.id.clone(),
                        to: to.clone(),
                    }
                } else if *to == tile.id {
                    GraphIssue::SelfConnection(tile.id.clone())
                } else {
                    match self.get(to) {
                        None => GraphIssue::DanglingConnection {
                            from: tile.id.clone(),
                            to: to.clone(),
                        },
                        Some(other) if !other.connects_to(&tile.id) => {
                            GraphIssue::OneWayConnection {
                                from: tile.id.clone(),
                                to: to.clone(),
                            }
                        }
                        Some(_) => continue,
                    }
                };
                issues.push(issue);
            }
        }

        issues
    }

    /// Fail if [`issues`](Self::issues) finds anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}
