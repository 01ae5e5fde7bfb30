use dijkstra_sssp::algorithm::{reconstruct_path, DistanceTable, ShortestPathResult};
use dijkstra_sssp::graph::{load_graph, DirectedGraph, Graph, GridMaze};
use dijkstra_sssp::{AStar, BellmanFord, Dijkstra, ShortestPathAlgorithm};
use std::env;
use std::fs;

const USAGE: &str = "usage: sssp [--graph FILE.json | --maze FILE] [--source N] [--target N] \
                     [--algorithm dijkstra|bellman-ford|a-star]";

#[derive(Debug, Default)]
struct Options {
    graph: Option<String>,
    maze: Option<String>,
    source: Option<usize>,
    target: Option<usize>,
    algorithm: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} needs a value\n{}", flag, USAGE))
        };
        match flag.as_str() {
            "--graph" => options.graph = Some(value()?),
            "--maze" => options.maze = Some(value()?),
            "--source" => options.source = Some(value()?.parse().map_err(|e| format!("--source: {}", e))?),
            "--target" => options.target = Some(value()?.parse().map_err(|e| format!("--target: {}", e))?),
            "--algorithm" => options.algorithm = Some(value()?),
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument {}\n{}", other, USAGE)),
        }
    }
    Ok(options)
}

/// Five-vertex example graph solved when no input file is given
fn reference_graph() -> dijkstra_sssp::Result<DirectedGraph<i64>> {
    DirectedGraph::from_edges(5, &[(0, 1, 2), (0, 4, 1), (1, 2, 3), (4, 2, 2), (2, 3, 6)])
}

fn format_distances(distances: &DistanceTable<i64>) -> String {
    distances
        .iter()
        .map(|d| d.map_or_else(|| "INF".to_string(), |d| d.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn solve(
    algorithm: &str,
    graph: &DirectedGraph<i64>,
    source: usize,
) -> Result<ShortestPathResult<i64>, Box<dyn std::error::Error>> {
    let result = match algorithm {
        "dijkstra" => Dijkstra::new().compute_shortest_paths(graph, source)?,
        "bellman-ford" => BellmanFord::new().compute_shortest_paths(graph, source)?,
        other => return Err(format!("unknown algorithm {}", other).into()),
    };
    Ok(result)
}

fn run_maze(path: &str, options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let maze = GridMaze::parse(&fs::read_to_string(path)?)?;
    let graph: DirectedGraph<i64> = maze.to_graph(1);

    let source = match (options.source, maze.start()) {
        (Some(source), _) => source,
        (None, Some((row, col))) => maze.id_from_coord(row, col),
        (None, None) => return Err("maze has no S cell and no --source was given".into()),
    };
    let target = match (options.target, maze.end()) {
        (Some(target), _) => target,
        (None, Some((row, col))) => maze.id_from_coord(row, col),
        (None, None) => return Err("maze has no E cell and no --target was given".into()),
    };

    let route = match options.algorithm.as_deref().unwrap_or("a-star") {
        "a-star" => {
            let goal = maze.coord_from_id(target);
            let manhattan = maze.manhattan(goal);
            AStar::new(|v: usize| manhattan(v) as i64).find_path(&graph, source, target)?
        }
        "dijkstra" => Dijkstra::new().shortest_path(&graph, source, target)?,
        other => {
            let result = solve(other, &graph, source)?;
            result.path_to(target)
        }
    };

    match route {
        Some(route) => {
            println!("path length {}", route.distance);
            for row in 0..maze.rows() {
                let line: String = (0..maze.cols())
                    .map(|col| {
                        let id = maze.id_from_coord(row, col);
                        if maze.is_wall(row, col) {
                            '#'
                        } else if id == source {
                            'S'
                        } else if id == target {
                            'E'
                        } else if route.vertices.contains(&id) {
                            '*'
                        } else {
                            '.'
                        }
                    })
                    .collect();
                println!("{}", line);
            }
        }
        None => println!("no path"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if let Some(path) = &options.maze {
        return run_maze(path, &options);
    }

    let graph = match &options.graph {
        Some(path) => load_graph::<i64>(path)?,
        None => reference_graph()?,
    };
    let source = options.source.unwrap_or(0);
    let algorithm = options.algorithm.as_deref().unwrap_or("dijkstra");

    let result = solve(algorithm, &graph, source)?;
    println!("{}", format_distances(&result.distances));

    if let Some(target) = options.target {
        if target >= graph.vertex_count() {
            return Err(format!("target {} is not a vertex", target).into());
        }
        match reconstruct_path(&result, target) {
            Some(vertices) => println!(
                "{}",
                vertices
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ")
            ),
            None => println!("no path to {}", target),
        }
    }

    Ok(())
}
