//! Uninformed search over the maze graph: cells are nodes and `Grid::neighbors` gives the edges.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use clap::ValueEnum;

use crate::grid::Grid;
use crate::position::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// FIFO frontier. Finds a shortest path by edge count.
    BreadthFirst,
    /// LIFO frontier. Finds some path, usually not the shortest.
    DepthFirst,
}

/// Order in which discovered cells are expanded.
trait Frontier: Default {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
}

impl Frontier for VecDeque<Cell> {
    fn push(&mut self, cell: Cell) {
        self.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.pop_front()
    }
}

impl Frontier for Vec<Cell> {
    fn push(&mut self, cell: Cell) {
        Vec::push(self, cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        Vec::pop(self)
    }
}

/// Discovery parent of every visited cell. The source maps to `None`.
type Parents = HashMap<Cell, Option<Cell>>;

fn explore<F: Frontier>(grid: &Grid, from: Cell, to: Cell) -> Parents {
    let mut parents = Parents::new();
    let mut frontier = F::default();

    parents.insert(from, None);
    frontier.push(from);

    while let Some(current) = frontier.pop() {
        if current == to {
            break;
        }
        for neighbor in grid.neighbors(current) {
            // First discovery wins; a cell is never re-parented.
            if let Entry::Vacant(entry) = parents.entry(neighbor) {
                entry.insert(Some(current));
                frontier.push(neighbor);
            }
        }
    }

    parents
}

/// Walks parent links back from `to`. Empty if `to` was never discovered.
fn reconstruct(parents: &Parents, to: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut step = Some(to);
    while let Some(cell) = step {
        let Some(&parent) = parents.get(&cell) else {
            return Vec::new();
        };
        path.push(cell);
        step = parent;
    }
    path.reverse();
    path
}

/// Path from `from` to `to`, both inclusive. `[from]` when they coincide, empty when `to` is
/// unreachable.
pub(crate) fn find_path(grid: &Grid, from: Cell, to: Cell, strategy: Strategy) -> Vec<Cell> {
    let parents = match strategy {
        Strategy::BreadthFirst => explore::<VecDeque<Cell>>(grid, from, to),
        Strategy::DepthFirst => explore::<Vec<Cell>>(grid, from, to),
    };
    reconstruct(&parents, to)
}

/// Shortest-path edge count, if `to` is reachable.
#[cfg(test)]
pub(crate) fn distance(grid: &Grid, from: Cell, to: Cell) -> Option<usize> {
    find_path(grid, from, to, Strategy::BreadthFirst)
        .len()
        .checked_sub(1)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::grid::Tile;

    fn grid(csv: &str) -> Grid {
        Grid::from_csv(csv).0
    }

    fn bfs(grid: &Grid, from: Cell, to: Cell) -> Vec<Cell> {
        find_path(grid, from, to, Strategy::BreadthFirst)
    }

    fn dfs(grid: &Grid, from: Cell, to: Cell) -> Vec<Cell> {
        find_path(grid, from, to, Strategy::DepthFirst)
    }

    fn assert_valid_path(grid: &Grid, path: &[Cell], from: Cell, to: Cell) {
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for pair in path.windows(2) {
            assert!(
                grid.neighbors(pair[0]).any(|n| n == pair[1]),
                "{:?} -> {:?} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    /// All-pairs shortest distances by repeated relaxation, independent of the search code.
    fn brute_force_distances(grid: &Grid) -> HashMap<(Cell, Cell), usize> {
        let cells: Vec<Cell> = grid.find_tiles(Tile::is_walkable).collect();
        let mut dist: HashMap<(Cell, Cell), usize> = HashMap::new();
        for &a in &cells {
            dist.insert((a, a), 0);
            for &b in &cells {
                if a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1 {
                    dist.insert((a, b), 1);
                }
            }
        }
        for &k in &cells {
            for &i in &cells {
                for &j in &cells {
                    if let (Some(&ik), Some(&kj)) = (dist.get(&(i, k)), dist.get(&(k, j))) {
                        let through = ik + kj;
                        if dist.get(&(i, j)).is_none_or(|&d| through < d) {
                            dist.insert((i, j), through);
                        }
                    }
                }
            }
        }
        dist
    }

    fn random_grid(rng: &mut StdRng, height: usize, width: usize) -> Grid {
        let csv: Vec<String> = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| if rng.random_bool(0.3) { "#" } else { "." })
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        grid(&csv.join("\n"))
    }

    #[test]
    fn source_equals_target() {
        let g = grid("P,.\n.,.");
        let c = Cell::new(0, 1);
        assert_eq!(bfs(&g, c, c), vec![c]);
        assert_eq!(dfs(&g, c, c), vec![c]);
        assert_eq!(distance(&g, c, c), Some(0));
    }

    #[test]
    fn bfs_follows_corridor() {
        let g = grid("#,#,#,#,#\n#,P,.,.,#\n#,#,#,.,#\n#,.,.,.,#\n#,#,#,#,#");
        let path = bfs(&g, Cell::new(1, 1), Cell::new(3, 1));
        assert_eq!(
            path,
            vec![
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(1, 3),
                Cell::new(2, 3),
                Cell::new(3, 3),
                Cell::new(3, 2),
                Cell::new(3, 1),
            ]
        );
    }

    #[test]
    fn bfs_tie_break_prefers_right_then_down() {
        // Two equal routes; exploring right first takes the top one.
        let g = grid("P,.\n.,.");
        let path = bfs(&g, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(path, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
    }

    #[test]
    fn unreachable_target_gives_empty_path() {
        let g = grid("P,#,.\n.,#,.");
        assert!(bfs(&g, Cell::new(0, 0), Cell::new(0, 2)).is_empty());
        assert!(dfs(&g, Cell::new(0, 0), Cell::new(0, 2)).is_empty());
        assert_eq!(distance(&g, Cell::new(0, 0), Cell::new(0, 2)), None);
    }

    #[test]
    fn wall_target_is_unreachable() {
        let g = grid("P,#,.");
        assert!(bfs(&g, Cell::new(0, 0), Cell::new(0, 1)).is_empty());
    }

    #[test]
    fn dfs_finds_a_valid_path() {
        let g = grid(".,.,.,.\n.,#,#,.\nP,.,.,.");
        let from = Cell::new(2, 0);
        let to = Cell::new(0, 3);
        let path = dfs(&g, from, to);
        assert_valid_path(&g, &path, from, to);
    }

    #[test]
    fn dfs_can_take_the_long_way() {
        // The stack pops the last pushed neighbor (up) first, so DFS goes around the top.
        let g = grid(".,.,.\nP,#,.\n.,.,.");
        let from = Cell::new(1, 0);
        let to = Cell::new(2, 1);
        let path = dfs(&g, from, to);
        assert_valid_path(&g, &path, from, to);
        assert_eq!(path.len() - 1, 6);
        assert_eq!(distance(&g, from, to), Some(2));
    }

    #[test]
    fn bfs_matches_brute_force_shortest_distances() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..25 {
            let g = random_grid(&mut rng, 5, 6);
            let expected = brute_force_distances(&g);
            let cells: Vec<Cell> = g.find_tiles(Tile::is_walkable).collect();
            for &from in &cells {
                for &to in &cells {
                    let path = bfs(&g, from, to);
                    match expected.get(&(from, to)) {
                        Some(&d) => {
                            assert_valid_path(&g, &path, from, to);
                            assert_eq!(path.len() - 1, d, "{from:?} -> {to:?}");
                        }
                        None => assert!(path.is_empty(), "{from:?} -> {to:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn dfs_never_beats_bfs() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..25 {
            let g = random_grid(&mut rng, 5, 5);
            let cells: Vec<Cell> = g.find_tiles(Tile::is_walkable).collect();
            for &from in &cells {
                for &to in &cells {
                    let shortest = bfs(&g, from, to);
                    let other = dfs(&g, from, to);
                    assert_eq!(shortest.is_empty(), other.is_empty());
                    if !other.is_empty() {
                        assert_valid_path(&g, &other, from, to);
                        assert!(other.len() >= shortest.len());
                    }
                }
            }
        }
    }
}
