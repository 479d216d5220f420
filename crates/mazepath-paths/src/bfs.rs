use std::collections::VecDeque;

use mazepath_core::{Coord, Maze};

const UNREACHABLE: i32 = i32::MAX;

/// Unweighted shortest distance, in moves, from `from` to `to`.
///
/// Plain breadth-first search over the same neighbour relation the A*
/// driver uses. Returns `None` if either point is not passable or `to`
/// cannot be reached. Useful as a reference to check A* results against.
pub fn bfs_distance(maze: &Maze, from: Coord, to: Coord) -> Option<i32> {
    if !maze.is_passable(from) || !maze.is_passable(to) {
        return None;
    }
    let si = maze.index(from)?;
    let ti = maze.index(to)?;

    let mut dist = vec![UNREACHABLE; maze.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        if ci == ti {
            return Some(dist[ci]);
        }
        let current_dist = dist[ci];

        nbuf.clear();
        maze.neighbors(maze.coord(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = maze.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = current_dist + 1;
            queue.push_back(ni);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_room_distance_is_manhattan() {
        let m = Maze::new(4, 6).unwrap();
        assert_eq!(bfs_distance(&m, Coord::new(0, 0), Coord::new(3, 5)), Some(8));
        assert_eq!(bfs_distance(&m, Coord::new(2, 2), Coord::new(2, 2)), Some(0));
    }

    #[test]
    fn walls_force_detours() {
        let m = Maze::parse("S#.\n.#.\n..E").unwrap();
        assert_eq!(bfs_distance(&m, Coord::new(0, 0), Coord::new(0, 2)), Some(6));
    }

    #[test]
    fn blocked_or_outside() {
        let m = Maze::parse("S#E").unwrap();
        assert_eq!(bfs_distance(&m, Coord::new(0, 0), Coord::new(0, 2)), None);
        assert_eq!(bfs_distance(&m, Coord::new(0, 0), Coord::new(0, 1)), None);
        assert_eq!(bfs_distance(&m, Coord::new(0, 0), Coord::new(5, 5)), None);
    }
}
