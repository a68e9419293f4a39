//! Destination grouping and choice detection over enumerated paths.
//!
//! [`PathOption::requires_choice`] tells whether a single walk passed a
//! branch point. [`needs_choice`] tells whether a set of walks actually ends
//! on different tiles. Walks that branch and then reconverge have the first
//! without the second.

use std::collections::HashMap;

use crate::path::PathOption;

/// All options ending on the same tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationGroup<'a> {
    pub destination: &'a str,
    pub paths: Vec<&'a PathOption>,
}

/// Group options by destination tile id.
///
/// Groups appear in order of their first option; options keep their input
/// order within a group.
pub fn group_by_destination(paths: &[PathOption]) -> Vec<DestinationGroup<'_>> {
    let mut groups: Vec<DestinationGroup<'_>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for option in paths {
        let dest = option.destination.id.as_str();
        match slots.get(dest) {
            Some(&g) => groups[g].paths.push(option),
            None => {
                slots.insert(dest, groups.len());
                groups.push(DestinationGroup {
                    destination: dest,
                    paths: vec![option],
                });
            }
        }
    }
    groups
}

/// Whether the caller has to let the player pick among `paths`.
///
/// False for zero or one option; otherwise true iff the options end on more
/// than one distinct tile.
pub fn needs_choice(paths: &[PathOption]) -> bool {
    let Some((first, rest)) = paths.split_first() else {
        return false;
    };
    rest.iter().any(|o| o.destination.id != first.destination.id)
}

/// The option to apply without asking, when there is nothing to choose.
///
/// Returns the first option if [`needs_choice`] is false, `None` if there
/// are no options or the player must choose.
pub fn auto_resolve(paths: &[PathOption]) -> Option<&PathOption> {
    if needs_choice(paths) {
        return None;
    }
    paths.first()
}
