use dijkstra_sssp::data_structures::Frontier;

#[test]
fn test_pops_in_ascending_distance() {
    let mut frontier = Frontier::new();
    frontier.push(3usize, 9u64);
    frontier.push(1, 4);
    frontier.push(2, 7);
    assert_eq!(frontier.peek(), Some((1, 4)));

    assert_eq!(frontier.pop(), Some((1, 4)));
    assert_eq!(frontier.pop(), Some((2, 7)));
    assert_eq!(frontier.pop(), Some((3, 9)));
    assert_eq!(frontier.pop(), None);
    assert!(frontier.is_empty());
}

#[test]
fn test_ties_break_on_lower_vertex() {
    let mut frontier = Frontier::new();
    frontier.push(8usize, 5u32);
    frontier.push(2, 5);
    frontier.push(6, 5);
    let order: Vec<usize> = std::iter::from_fn(|| frontier.pop()).map(|(v, _)| v).collect();
    assert_eq!(order, vec![2, 6, 8]);
}

#[test]
fn test_duplicate_vertices_are_kept() {
    let mut frontier = Frontier::new();
    frontier.push(1usize, 10u64);
    frontier.push(1, 3);
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some((1, 3)));
    assert_eq!(frontier.pop(), Some((1, 10)));
}

#[test]
fn test_peak_len_tracks_high_water_mark() {
    let mut frontier: Frontier<usize, u64> = Frontier::default();
    frontier.push(0, 1);
    frontier.push(1, 2);
    frontier.pop();
    frontier.push(2, 3);
    frontier.push(3, 4);
    assert_eq!(frontier.peak_len(), 3);

    frontier.clear();
    assert_eq!(frontier.len(), 0);
    assert_eq!(frontier.peak_len(), 0);
}
