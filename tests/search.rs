use hashbrown::HashMap;
use nanorand::{Rng, WyRand};
use pathseeker::prelude::*;
use pathseeker::Path;

const SQRT_2: f64 = std::f64::consts::SQRT_2;
const EPS: f64 = 1e-9;

/// A 2D grid with walls and 8-directional movement: orthogonal steps cost
/// 1, diagonal steps cost √2. Purely a test collaborator — the engine only
/// ever sees it through the `Graph` trait.
#[derive(Clone)]
struct GridMap {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl GridMap {
    fn open(width: usize, height: usize) -> GridMap {
        GridMap {
            width,
            height,
            walls: vec![false; width * height],
        }
    }

    fn set_wall(&mut self, x: usize, y: usize) {
        self.walls[y * self.width + x] = true;
    }

    fn clear_wall(&mut self, x: usize, y: usize) {
        self.walls[y * self.width + x] = false;
    }

    fn is_open(&self, x: isize, y: isize) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && !self.walls[y as usize * self.width + x as usize]
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        (0..self.width * self.height)
            .filter(|i| !self.walls[*i])
            .map(move |i| (i % width, i / width))
    }
}

impl Graph for GridMap {
    type Id = (usize, usize);

    fn lookup(&self, id: &(usize, usize)) -> Option<Node<(usize, usize)>> {
        self.is_open(id.0 as isize, id.1 as isize)
            .then(|| Node::new(*id, 0.0))
    }

    fn neighbors(&self, node: &Node<(usize, usize)>, out: &mut Vec<Node<(usize, usize)>>) {
        let (x, y) = node.id;
        for dx in -1isize..=1 {
            for dy in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x as isize + dx, y as isize + dy);
                if !self.is_open(nx, ny) {
                    continue;
                }
                let cost = if dx == 0 || dy == 0 { 1.0 } else { SQRT_2 };
                out.push(Node::new((nx as usize, ny as usize), cost));
            }
        }
    }
}

/// Octile distance: admissible and consistent for the movement costs above.
fn octile(from: &Node<(usize, usize)>, to: &Node<(usize, usize)>) -> f64 {
    let dx = (from.id.0 as f64 - to.id.0 as f64).abs();
    let dy = (from.id.1 as f64 - to.id.1 as f64).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    (hi - lo) + lo * SQRT_2
}

/// A directed adjacency-map graph for the non-grid scenarios.
#[derive(Clone, Default)]
struct AdjGraph {
    edges: HashMap<u32, Vec<(u32, f64)>>,
}

impl AdjGraph {
    fn add_node(&mut self, id: u32) {
        self.edges.entry(id).or_default();
    }

    fn add_edge(&mut self, from: u32, to: u32, cost: f64) {
        self.add_node(from);
        self.add_node(to);
        self.edges.get_mut(&from).unwrap().push((to, cost));
    }
}

impl Graph for AdjGraph {
    type Id = u32;

    fn lookup(&self, id: &u32) -> Option<Node<u32>> {
        self.edges.contains_key(id).then(|| Node::new(*id, 0.0))
    }

    fn neighbors(&self, node: &Node<u32>, out: &mut Vec<Node<u32>>) {
        for &(id, cost) in &self.edges[&node.id] {
            out.push(Node::new(id, cost));
        }
    }
}

/// Reference shortest-path cost by exhaustive edge relaxation
/// (Bellman-Ford). Slow and obviously correct; the engine is compared
/// against this on small random inputs.
fn relaxation_cost<Id: Clone + Eq + std::hash::Hash>(
    edges: &[(Id, Id, f64)],
    start: &Id,
    dest: &Id,
) -> Option<f64> {
    let mut dist: HashMap<Id, f64> = HashMap::new();
    dist.insert(start.clone(), 0.0);

    let rounds = edges.len() + 1;
    for _ in 0..rounds {
        let mut changed = false;
        for (from, to, cost) in edges {
            let Some(&base) = dist.get(from) else {
                continue;
            };
            let candidate = base + cost;
            if dist.get(to).map_or(true, |&known| candidate < known - EPS) {
                dist.insert(to.clone(), candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist.get(dest).copied()
}

fn grid_edges(grid: &GridMap) -> Vec<((usize, usize), (usize, usize), f64)> {
    let mut edges = vec![];
    let mut buffer = vec![];
    for cell in grid.cells() {
        let node = Node::new(cell, 0.0);
        buffer.clear();
        grid.neighbors(&node, &mut buffer);
        for next in &buffer {
            edges.push((cell, next.id, next.cost));
        }
    }
    edges
}

#[test]
fn start_equals_destination() {
    let engine = Engine::new(GridMap::open(5, 5));
    let path = engine.find(&(2, 2), &(2, 2), &CancelFlag::new()).unwrap();

    assert!(!path.is_empty());
    assert_eq!(path.len(), 1);
    assert_eq!(path.cost(), 0.0);
    assert_eq!(path.nodes()[0].id, (2, 2));
}

#[test]
fn open_grid_diagonal() {
    let engine = Engine::with_heuristic(GridMap::open(5, 5), FnHeuristic(octile));
    let path = engine.find(&(0, 0), &(4, 4), &CancelFlag::new()).unwrap();

    let ids: Vec<(usize, usize)> = path.ids().copied().collect();
    assert_eq!(ids, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert!((path.cost() - 4.0 * SQRT_2).abs() < EPS);
}

#[test]
fn wall_with_single_gap() {
    let mut grid = GridMap::open(5, 5);
    for x in 0..5 {
        grid.set_wall(x, 2);
    }
    grid.clear_wall(3, 2);

    let engine = Engine::with_heuristic(grid.clone(), FnHeuristic(octile));
    let path = engine.find(&(0, 0), &(4, 4), &CancelFlag::new()).unwrap();

    assert!(!path.is_empty());
    assert!(path.ids().any(|&id| id == (3, 2)), "path must use the gap");

    // sealing the gap leaves no route at all
    grid.set_wall(3, 2);
    let engine = Engine::with_heuristic(grid, FnHeuristic(octile));
    let path = engine.find(&(0, 0), &(4, 4), &CancelFlag::new()).unwrap();

    assert!(path.is_empty());
    assert_eq!(path.cost(), 0.0);
}

#[test]
fn walls_are_not_nodes() {
    let mut grid = GridMap::open(3, 3);
    grid.set_wall(1, 1);
    let engine = Engine::new(grid);
    let cancel = CancelFlag::new();

    assert_eq!(
        engine.find(&(1, 1), &(0, 0), &cancel),
        Err(SearchError::NotFound(Endpoint::Start))
    );
    assert_eq!(
        engine.find(&(0, 0), &(9, 9), &cancel),
        Err(SearchError::NotFound(Endpoint::Destination))
    );
}

#[test]
fn cancelled_before_any_expansion() {
    let cancel = CancelFlag::new();
    cancel.cancel();

    let engine = Engine::new(GridMap::open(64, 64));
    let path = engine.find(&(0, 0), &(63, 63), &cancel).unwrap();

    assert!(path.is_empty());
    assert!(cancel.is_cancelled());
}

#[test]
fn undirected_shortcut_preserves_outcomes() {
    // (1, 1) is walled in on all sides, so it has no edges at all
    let mut grid = GridMap::open(5, 5);
    grid.set_wall(0, 1);
    grid.set_wall(1, 0);
    grid.set_wall(2, 1);
    grid.set_wall(1, 2);
    grid.set_wall(0, 0);
    grid.set_wall(2, 0);
    grid.set_wall(0, 2);
    grid.set_wall(2, 2);

    let engine = Engine::new(grid).assume_undirected();
    let cancel = CancelFlag::new();

    let blocked = engine.find(&(4, 4), &(1, 1), &cancel).unwrap();
    assert!(blocked.is_empty());

    // a reachable destination is unaffected by the shortcut
    let path = engine.find(&(4, 0), &(4, 4), &cancel).unwrap();
    assert!(!path.is_empty());
    assert!((path.cost() - 4.0).abs() < EPS);
}

#[test]
fn dijkstra_equivalence_on_random_graphs() {
    let mut rng = WyRand::new_seed(0x5eed);

    for _ in 0..40 {
        let n = 8u32;
        let mut graph = AdjGraph::default();
        let mut edges = vec![];
        for id in 0..n {
            graph.add_node(id);
        }
        for from in 0..n {
            for to in 0..n {
                if from == to || rng.generate_range(0u32..100) >= 30 {
                    continue;
                }
                // integer-valued costs keep f64 sums exact
                let cost = rng.generate_range(1u32..10) as f64;
                graph.add_edge(from, to, cost);
                edges.push((from, to, cost));
            }
        }

        let engine = Engine::new(graph);
        let cancel = CancelFlag::new();
        for dest in 1..n {
            let path = engine.find(&0, &dest, &cancel).unwrap();
            match relaxation_cost(&edges, &0, &dest) {
                Some(expected) => {
                    assert!(!path.is_empty(), "engine missed an existing route");
                    assert_eq!(path.cost(), expected);
                }
                None => assert!(path.is_empty(), "engine invented a route"),
            }
        }
    }
}

#[test]
fn octile_heuristic_is_optimal_on_random_grids() {
    let mut rng = WyRand::new_seed(0xa57a);

    for _ in 0..40 {
        let mut grid = GridMap::open(6, 6);
        for x in 0..6 {
            for y in 0..6 {
                if rng.generate_range(0u32..100) < 25 {
                    grid.set_wall(x, y);
                }
            }
        }
        grid.clear_wall(0, 0);
        grid.clear_wall(5, 5);

        let edges = grid_edges(&grid);
        let engine = Engine::with_heuristic(grid, FnHeuristic(octile));
        let path = engine.find(&(0, 0), &(5, 5), &CancelFlag::new()).unwrap();

        match relaxation_cost(&edges, &(0, 0), &(5, 5)) {
            Some(expected) => {
                assert!(!path.is_empty());
                assert!(
                    (path.cost() - expected).abs() < 1e-6,
                    "engine cost {} differs from reference {}",
                    path.cost(),
                    expected,
                );
            }
            None => assert!(path.is_empty()),
        }
    }
}

#[test]
fn found_paths_satisfy_their_own_invariants() {
    let engine = Engine::with_heuristic(GridMap::open(5, 5), FnHeuristic(octile));
    let path = engine.find(&(0, 0), &(4, 4), &CancelFlag::new()).unwrap();

    // the total cost is the sum of the node costs, and cost_at agrees
    let summed: f64 = path.iter().map(|node| node.cost).sum();
    assert!((path.cost() - summed).abs() < EPS);
    assert!((path.cost_at(path.len() - 1).unwrap() - path.cost()).abs() < EPS);
    assert_eq!(path.cost_at(0).unwrap(), 0.0);
    assert!(path.run_id() > 0);
}

#[test]
fn concatenating_two_legs() {
    let grid = GridMap::open(5, 5);
    let engine = Engine::with_heuristic(grid, FnHeuristic(octile));
    let cancel = CancelFlag::new();

    let first = engine.find(&(0, 0), &(4, 0), &cancel).unwrap();
    let second = engine.find(&(4, 1), &(4, 4), &cancel).unwrap();

    let whole = first.concat(&second);
    assert!((whole.cost() - (first.cost() + second.cost())).abs() < EPS);
    assert_eq!(whole.len(), first.len() + second.len());
    let ids: Vec<_> = whole.ids().collect();
    let expected: Vec<_> = first.ids().chain(second.ids()).collect();
    assert_eq!(ids, expected);

    let joined = Path::join([first.clone(), second.clone()]);
    assert_eq!(joined, whole);
}

#[cfg(feature = "parallel")]
#[test]
fn detached_search_matches_sync() {
    let engine = Engine::with_heuristic(GridMap::open(8, 8), FnHeuristic(octile));
    let cancel = CancelFlag::new();

    let sync = engine.find(&(0, 0), &(7, 7), &cancel).unwrap();
    let detached = engine.find_detached(&(0, 0), &(7, 7), &cancel).wait().unwrap();

    assert_eq!(sync, detached);
}

#[cfg(feature = "parallel")]
#[test]
fn detached_search_observes_cancellation() {
    let cancel = CancelFlag::new();
    cancel.cancel();

    let engine = Engine::new(GridMap::open(32, 32));
    let path = engine.find_detached(&(0, 0), &(31, 31), &cancel).wait().unwrap();

    assert!(path.is_empty());
}
