//! Path reconstruction from a predecessor map.

use std::collections::HashMap;

use mazepath_core::Coord;

/// Predecessor of each discovered coordinate on its best known path.
///
/// The start has no entry, so the map forms a tree rooted at the start.
pub type CameFrom = HashMap<Coord, Coord>;

/// Walk `came_from` backwards from `node` to the start.
///
/// Returns the path from start to `node`, both inclusive. A node with no
/// predecessor yields a single-element path.
pub fn reconstruct(came_from: &CameFrom, node: Coord) -> Vec<Coord> {
    let mut path = vec![node];
    let mut current = node;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
