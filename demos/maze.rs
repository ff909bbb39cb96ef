//! Scatter walls over a grid and print the shortest path between two
//! corners.
//!
//! Usage: `maze [seed]`

use gridpath_graph::{Graph, GraphError, GridConfig, Range, VertexId};
use gridpath_paths::{MinHeap, ShortestPaths, path_cost};
use rand::{Rng, RngExt, SeedableRng};

const WIDTH: i32 = 40;
const HEIGHT: i32 = 16;
// Percentage of cells turned into walls.
const WALL_DENSITY: u32 = 30;

fn scatter_walls(
    graph: &mut Graph,
    rng: &mut impl Rng,
    keep: &[VertexId],
) -> Result<usize, GraphError> {
    let mut walls = 0;
    for p in Range::new(0, 0, WIDTH, HEIGHT) {
        let id = VertexId::from(p);
        if keep.contains(&id) {
            continue;
        }
        if rng.random_range(0..100u32) < WALL_DENSITY {
            graph.deactivate(id)?;
            walls += 1;
        }
    }
    Ok(walls)
}

fn render(graph: &Graph, start: VertexId, finish: VertexId, path: &[VertexId]) -> String {
    let mut out = String::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let id = VertexId::new(x, y);
            let ch = if id == start {
                'S'
            } else if id == finish {
                'F'
            } else if !graph.is_active(id) {
                '#'
            } else if path.contains(&id) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => 42,
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut graph = Graph::grid(&GridConfig::new(WIDTH, HEIGHT))?;
    let start = VertexId::new(0, 0);
    let finish = VertexId::new(WIDTH - 1, HEIGHT - 1);
    let walls = scatter_walls(&mut graph, &mut rng, &[start, finish])?;

    let mut linear = ShortestPaths::new();
    linear.calculate_paths_from(&graph, start)?;
    let mut heap = ShortestPaths::<MinHeap>::with_frontier();
    heap.calculate_paths_from(&graph, start)?;

    let path = linear.path_to(finish);
    print!("{}", render(&graph, start, finish, path.as_deref().unwrap_or(&[])));
    println!("seed {seed}, {walls} walls, {} cells reached", linear.settled().len());

    match path {
        Some(path) => {
            println!(
                "path: {} steps, cost {:.3} (heap frontier: {:.3})",
                path.len() - 1,
                path_cost(&graph, &path),
                heap.distance_at(finish)
            );
        }
        None => {
            log::warn!("no path from {start} to {finish}");
            println!("no path");
        }
    }
    Ok(())
}
