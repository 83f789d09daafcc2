use std::collections::VecDeque;

use assertables::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;

/// The A–B–C–D road used throughout: A and D are destinations, B and C are junctions.
#[fixture]
fn path_graph() -> Graph<&'static str, f64> {
    let mut graph = Graph::new();
    for v in ["A", "B", "C", "D"] {
        assert!(graph.add_vertex(v));
    }
    graph.add_undirected_edge("A", "B", 1.0).unwrap();
    graph.add_undirected_edge("B", "C", 2.0).unwrap();
    graph.add_undirected_edge("C", "D", 3.0).unwrap();
    graph
}

fn sorted(set: &ChainedHashSet<&'static str>) -> Vec<&'static str> {
    let mut v: Vec<_> = set.iter().copied().collect();
    v.sort_unstable();
    v
}

#[rstest]
fn test_add_vertex_twice() {
    let mut graph: Graph<u32, f64> = Graph::new();
    assert!(graph.add_vertex(1));
    assert!(!graph.add_vertex(1));
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.neighbors(&1).unwrap().len(), 0);
}

#[rstest]
fn test_add_edge_then_adjacent() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    assert_eq!(graph.add_edge(1, 2, 7.5), Ok(true));
    assert_eq!(graph.adjacent(&1, &2), Some(&7.5));
    assert_eq!(graph.adjacent(&2, &1), None);

    assert_eq!(graph.add_edge(1, 2, 8.0), Ok(false));
    assert_eq!(graph.adjacent(&1, &2), Some(&8.0));
}

#[rstest]
#[case(9, 1)]
#[case(1, 9)]
fn test_add_edge_unknown_endpoint(#[case] src: u32, #[case] dest: u32) {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    assert_eq!(graph.add_edge(src, dest, 1.0), Err(CoreError::UnknownVertex("9".into())));
    assert_eq!(graph.add_undirected_edge(src, dest, 1.0), Err(CoreError::UnknownVertex("9".into())));
    assert_eq!(graph.neighbors(&1).unwrap().len(), 0);
}

#[rstest]
fn test_remove_edge_is_directional(mut path_graph: Graph<&'static str, f64>) {
    assert!(path_graph.remove_edge(&"A", &"B"));
    assert_eq!(path_graph.adjacent(&"A", &"B"), None);
    assert_eq!(path_graph.adjacent(&"B", &"A"), Some(&1.0));
    assert!(!path_graph.remove_edge(&"A", &"B"));
    assert!(!path_graph.remove_edge(&"Z", &"B"));
}

#[rstest]
fn test_undirected_edge_both_ways(mut path_graph: Graph<&'static str, f64>) {
    assert_eq!(path_graph.adjacent(&"B", &"C"), Some(&2.0));
    assert_eq!(path_graph.adjacent(&"C", &"B"), Some(&2.0));
    assert_eq!(path_graph.add_undirected_edge("C", "B", 4.0), Ok(false));
    assert_eq!(path_graph.adjacent(&"B", &"C"), Some(&4.0));
}

#[rstest]
fn test_vertices_and_neighbors(mut path_graph: Graph<&'static str, f64>) {
    assert_eq!(sorted(&path_graph.vertices()), vec!["A", "B", "C", "D"]);
    assert_eq!(sorted(&path_graph.neighbors(&"B").unwrap()), vec!["A", "C"]);
    assert!(path_graph.neighbors(&"Z").is_err());
}

#[rstest]
fn test_dijkstra_path_graph(mut path_graph: Graph<&'static str, f64>) {
    let mut paths = dijkstra(&mut path_graph, &"A", Some(&"D"), |_| true).unwrap();
    assert_eq!(paths.path_to(&"D"), Some(VecDeque::from(["A", "B", "C", "D"])));
    assert_eq!(paths.distance(&"D"), Some(6.0));
    assert_eq!(paths.source(), &"A");
}

#[rstest]
fn test_dijkstra_path_to_source(mut path_graph: Graph<&'static str, f64>) {
    let mut paths = dijkstra(&mut path_graph, &"B", None, |_| true).unwrap();
    assert_eq!(paths.path_to(&"B"), Some(VecDeque::from(["B"])));
    assert_eq!(paths.distance(&"A"), Some(1.0));
    assert_eq!(paths.distance(&"D"), Some(5.0));
}

#[rstest]
fn test_dijkstra_prefers_cheaper_detour() {
    let mut graph = Graph::new();
    for v in 0..5 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 4, 10.0).unwrap();
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();
    graph.add_edge(3, 4, 1.0).unwrap();

    let mut paths = dijkstra(&mut graph, &0, None, |_| true).unwrap();
    assert_eq!(paths.path_to(&4), Some(VecDeque::from([0, 1, 2, 3, 4])));
    assert_eq!(paths.distance(&4), Some(4.0));
}

#[rstest]
fn test_dijkstra_rejected_vertex_blocks_route(mut path_graph: Graph<&'static str, f64>) {
    let mut paths = dijkstra(&mut path_graph, &"A", Some(&"D"), |v| *v != "C").unwrap();
    assert_eq!(paths.path_to(&"D"), None);
    assert_eq!(paths.distance(&"D"), None);
    assert_eq!(paths.distance(&"B"), Some(1.0));
}

#[rstest]
fn test_dijkstra_distances_are_optimal() {
    // Complete graph where the direct edge is never the cheapest.
    let mut graph = Graph::new();
    let n = 12u32;
    for v in 0..n {
        graph.add_vertex(v);
    }
    for a in 0..n {
        for b in 0..n {
            if a != b {
                graph.add_edge(a, b, f64::from(a.abs_diff(b)).powi(2)).unwrap();
            }
        }
    }

    let mut paths = dijkstra(&mut graph, &0, None, |_| true).unwrap();
    for v in 0..n {
        assert_eq!(paths.distance(&v), Some(f64::from(v)));
        let path = paths.path_to(&v).unwrap();
        assert_eq!(path.len(), v as usize + 1);
    }
}

#[rstest]
#[traced_test]
fn test_radius_search_expands_past_rejected(mut path_graph: Graph<&'static str, f64>) {
    // B and C are rejected but exploration still reaches D through them.
    let found = radius_search(&mut path_graph, &"A", |v| *v == "A" || *v == "D").unwrap();
    assert_eq!(sorted(&found), vec!["A", "D"]);
    assert!(logs_contain("radius search finished"));
}

#[rstest]
fn test_radius_search_unknown_start(mut path_graph: Graph<&'static str, f64>) {
    let found = radius_search(&mut path_graph, &"Z", |_| true).unwrap();
    assert!(found.is_empty());
}

#[rstest]
fn test_radius_search_stays_in_component(mut path_graph: Graph<&'static str, f64>) {
    path_graph.add_vertex("E");
    let found = radius_search(&mut path_graph, &"D", |_| true).unwrap();
    assert_eq!(found.len(), 4);
    assert_le!(found.len(), path_graph.vertex_count());
}

#[rstest]
#[case::to_known(Some(&"A"))]
#[case::to_itself(Some(&"Z"))]
#[case::exhaustive(None)]
fn test_dijkstra_unknown_source_reaches_nothing(
    mut path_graph: Graph<&'static str, f64>,
    #[case] target: Option<&&'static str>,
) {
    let mut paths = dijkstra(&mut path_graph, &"Z", target, |_| true).unwrap();
    assert_eq!(paths.path_to(&"A"), None);
    assert_eq!(paths.path_to(&"Z"), None);
    assert_eq!(paths.distance(&"Z"), None);
    assert_eq!(paths.source(), &"Z");
}
