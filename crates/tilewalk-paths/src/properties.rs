//! Randomized checks over generated boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilewalk_core::Tile;

use crate::{GridBuckets, PathOption, TileGraph, group_by_destination, needs_choice};

/// A grid board with random holes. Connections are inferred, so links are
/// symmetric.
fn holey_board(rng: &mut StdRng) -> Vec<Tile> {
    let w = rng.random_range(2..7);
    let h = rng.random_range(2..7);
    let mut tiles = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if rng.random_bool(0.75) {
                tiles.push(Tile::new(format!("{x}:{y}"), x, y, "normal"));
            }
        }
    }
    tiles
}

/// A board with random one-way links, some of them dangling.
fn one_way_board(rng: &mut StdRng) -> Vec<Tile> {
    let n = rng.random_range(2..9);
    (0..n)
        .map(|i| {
            let degree = rng.random_range(1..4);
            let links: Vec<String> = (0..degree)
                .map(|_| format!("t{}", rng.random_range(0..n + 1)))
                .collect();
            Tile::new(format!("t{i}"), 3 * i, 0, "normal").with_connections(links)
        })
        .collect()
}

fn boards() -> Vec<TileGraph> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut out = Vec::new();
    for _ in 0..40 {
        out.push(TileGraph::build(holey_board(&mut rng)));
        out.push(TileGraph::build(one_way_board(&mut rng)));
    }
    out
}

fn ids(o: &PathOption) -> Vec<&str> {
    o.path.iter().map(|s| s.id.as_str()).collect()
}

fn check_walks(g: &TileGraph, start: &str, steps: usize) {
    let opts = g.enumerate_paths(start, steps, None);
    assert!(!opts.is_empty());
    assert_eq!(opts, g.enumerate_paths(start, steps, None), "determinism");

    for o in &opts {
        let p = ids(o);
        assert_eq!(p[0], start);
        assert_eq!(o.destination.id, *p.last().unwrap());
        for (k, s) in o.path.iter().enumerate() {
            assert_eq!(s.step, k);
        }
        for w in p.windows(2) {
            assert!(g.get(w[0]).unwrap().connects_to(w[1]), "{w:?} not linked");
        }
        for w in p.windows(3) {
            assert_ne!(w[0], w[2], "stepped straight back in {p:?}");
        }

        // Full length, or stopped where nothing but the way back is left.
        if o.steps_taken() < steps && p.len() > 1 {
            let prev = p[p.len() - 2];
            assert!(g.neighbors(p[p.len() - 1], Some(prev)).is_empty());
        }
        assert!(o.steps_taken() <= steps);

        if let Some(c) = o.choice_at_step {
            let sibling = opts.iter().any(|other| {
                let q = ids(other);
                q.len() > c + 1 && p.len() > c + 1 && q[..=c] == p[..=c] && q[c + 1] != p[c + 1]
            });
            assert!(sibling, "choice at {c} without divergence in {p:?}");
        }

        // No walk beats the BFS distance.
        let sp = g.shortest_path(start, &o.destination.id).unwrap();
        assert!(sp.len() <= o.path.len());
    }

    let groups = group_by_destination(&opts);
    let total: usize = groups.iter().map(|g| g.paths.len()).sum();
    assert_eq!(total, opts.len());
    assert_eq!(needs_choice(&opts), groups.len() > 1);
}

#[test]
fn enumerated_walks_hold_invariants() {
    for g in boards() {
        for t in g.tiles() {
            for steps in 1..5 {
                check_walks(&g, &t.id, steps);
            }
        }
    }
}

#[test]
fn bfs_map_agrees_with_shortest_path() {
    for g in boards() {
        for t in g.tiles() {
            for node in g.bfs_map(&[t.id.as_str()], usize::MAX) {
                let sp = g.shortest_path(&t.id, &node.id).unwrap();
                assert_eq!(sp.len() - 1, node.cost);
            }
        }
    }
}

#[test]
fn reachability_is_symmetric_on_inferred_boards() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let g = TileGraph::build(holey_board(&mut rng));
        assert!(g.validate().is_ok());
        for a in g.tiles() {
            for b in g.tiles() {
                assert_eq!(g.is_reachable(&a.id, &b.id), g.is_reachable(&b.id, &a.id));
            }
            let filled = g.flood_fill(&a.id).len();
            let reachable = g.tiles().iter().filter(|b| g.is_reachable(&a.id, &b.id)).count();
            assert_eq!(filled, reachable);
        }
    }
}

#[test]
fn bucketed_inference_matches_scan() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..30 {
        let board = holey_board(&mut rng);
        let a = TileGraph::build(board.clone());
        let b = TileGraph::build_with(board, GridBuckets::new());
        assert_eq!(a.tiles(), b.tiles());
    }
}
