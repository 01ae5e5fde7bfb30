use dijkstra_sssp::algorithm::bellman_ford::BellmanFord;
use dijkstra_sssp::algorithm::dijkstra::Dijkstra;
use dijkstra_sssp::algorithm::{solve_all_sources, solve_many, ShortestPathAlgorithm};
use dijkstra_sssp::graph::generators::generate_random_graph;
use dijkstra_sssp::graph::Graph;

#[test]
fn test_solve_many_matches_sequential_solves() {
    let graph = generate_random_graph(300, 4.0, 100, 5);
    let sources = [0, 17, 299, 17];
    let dijkstra = Dijkstra::new();

    let results = solve_many(&dijkstra, &graph, &sources).unwrap();
    assert_eq!(results.len(), sources.len());
    for (result, &source) in results.iter().zip(&sources) {
        assert_eq!(result.source, source);
        let sequential = dijkstra.compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.distances, sequential.distances);
    }
}

#[test]
fn test_solve_many_fails_on_invalid_source() {
    let graph = generate_random_graph(10, 2.0, 5, 1);
    let err = solve_many(&Dijkstra::new(), &graph, &[0, 10]).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_all_pairs_agree_between_algorithms() {
    let graph = generate_random_graph(25, 3.0, 12, 77);
    let by_dijkstra = solve_all_sources(&Dijkstra::new(), &graph).unwrap();
    let by_bellman = solve_all_sources(&BellmanFord::new(), &graph).unwrap();
    assert_eq!(by_dijkstra.len(), graph.vertex_count());

    for (d, b) in by_dijkstra.iter().zip(&by_bellman) {
        assert_eq!(d.distances, b.distances);
        assert_eq!(d.distances.get(d.source), Some(0));
    }

    // Triangle inequality over every edge and every source
    for result in &by_dijkstra {
        for (u, v, w) in graph.edges() {
            if let Some(du) = result.distances.get(u) {
                let dv = result.distances.get(v).expect("successor of a reachable vertex is reachable");
                assert!(dv <= du + w);
            }
        }
    }
}
