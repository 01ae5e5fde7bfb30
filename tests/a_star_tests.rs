use dijkstra_sssp::algorithm::a_star::AStar;
use dijkstra_sssp::algorithm::dijkstra::Dijkstra;
use dijkstra_sssp::graph::generators::generate_grid;
use dijkstra_sssp::graph::{DirectedGraph, Graph, GridMaze};
use dijkstra_sssp::Error;

const MAZE: &str = "\
S..#......
.#.#.####.
.#...#....
.#####.##.
...#...#E.
";

#[test]
fn test_maze_route_matches_dijkstra() {
    let maze = GridMaze::parse(MAZE).unwrap();
    let graph = maze.to_graph(1u64);
    let (sr, sc) = maze.start().unwrap();
    let (er, ec) = maze.end().unwrap();
    let source = maze.id_from_coord(sr, sc);
    let target = maze.id_from_coord(er, ec);

    let heuristic = maze.manhattan((er, ec));
    let route = AStar::new(|v: usize| heuristic(v))
        .find_path(&graph, source, target)
        .unwrap()
        .expect("maze should be solvable");
    let reference = Dijkstra::new().shortest_path(&graph, source, target).unwrap().unwrap();

    assert_eq!(route.distance, reference.distance);
    assert_eq!(route.vertices.len() as u64, route.distance + 1);
    assert_eq!(route.vertices[0], source);
    assert_eq!(*route.vertices.last().unwrap(), target);
    for pair in route.vertices.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]));
        let (r, c) = maze.coord_from_id(pair[1]);
        assert!(!maze.is_wall(r, c));
    }
}

#[test]
fn test_walled_off_target_has_no_route() {
    let maze = GridMaze::parse("S.#.\n..#E\n").unwrap();
    let graph = maze.to_graph(1u64);
    let target = maze.id_from_coord(1, 3);
    let heuristic = maze.manhattan((1, 3));

    let route = AStar::new(|v: usize| heuristic(v)).find_path(&graph, 0, target).unwrap();
    assert!(route.is_none());
}

#[test]
fn test_zero_heuristic_on_open_grid() {
    let graph = generate_grid(8, 6, 3);
    let route = AStar::new(|_: usize| 0u64).find_path(&graph, 0, 47).unwrap().unwrap();
    // Seven steps right, five steps down
    assert_eq!(route.distance, 36);
    assert_eq!(route.vertices.len(), 13);
}

#[test]
fn test_source_equals_target() {
    let graph = generate_grid(3, 3, 1);
    let route = AStar::new(|_: usize| 0u64).find_path(&graph, 4, 4).unwrap().unwrap();
    assert_eq!(route.vertices, vec![4]);
    assert_eq!(route.distance, 0);
}

#[test]
fn test_out_of_range_arguments() {
    let graph = generate_grid(2, 2, 1);
    let a_star = AStar::new(|_: usize| 0u64);
    assert!(a_star.find_path(&graph, 4, 0).unwrap_err().is_invalid_argument());
    assert!(a_star.find_path(&graph, 0, 4).unwrap_err().is_invalid_argument());
}

#[test]
fn test_oversized_heuristic_saturates() {
    let graph = generate_grid(2, 1, 1);
    let route = AStar::new(|_: usize| u64::MAX).find_path(&graph, 0, 1).unwrap().unwrap();
    assert_eq!(route.vertices, vec![0, 1]);
    assert_eq!(route.distance, 1);
}

#[test]
fn test_overflowing_routes() {
    let graph = DirectedGraph::from_edges(3, &[(0, 1, 5u8), (0, 2, 200), (2, 1, 100)]).unwrap();
    let a_star = AStar::new(|_: usize| 0u8);
    assert_eq!(a_star.find_path(&graph, 0, 1).unwrap().unwrap().distance, 5);

    let graph = DirectedGraph::from_edges(3, &[(0, 1, 200u8), (1, 2, 100)]).unwrap();
    let err = a_star.find_path(&graph, 0, 2).unwrap_err();
    assert!(matches!(err, Error::DistanceOverflow { vertex: 2 }));
}
