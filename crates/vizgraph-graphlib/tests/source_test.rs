use vizgraph_graphlib::{EdgeKey, Graph, GraphSource};

fn key(v: &str, w: &str) -> EdgeKey {
    EdgeKey::new(v, w, None::<String>)
}

fn chain() -> Graph<(), ()> {
    let mut g = Graph::directed();
    g.set_path(&["A", "B", "C"]);
    g
}

#[test]
fn graph_source_exposes_vertices_and_edges_in_insertion_order() {
    let g = chain();

    assert_eq!(g.vertices(), vec!["A", "B", "C"]);
    assert_eq!(GraphSource::edges(&g), vec![key("A", "B"), key("B", "C")]);
    assert_eq!(g.vertex_count(), 3);
    assert!(GraphSource::is_directed(&g));
}

#[test]
fn graph_source_resolves_endpoints_and_incident_edges() {
    let g = chain();
    let b = "B".to_string();

    assert_eq!(g.edge_source(&key("A", "B")), "A");
    assert_eq!(g.edge_target(&key("A", "B")), "B");
    assert_eq!(g.incoming_edges(&b), vec![key("A", "B")]);
    assert_eq!(g.outgoing_edges(&b), vec![key("B", "C")]);
}

#[test]
fn graph_source_is_implemented_for_references() {
    fn count<G: GraphSource>(g: G) -> usize {
        g.edges().len()
    }

    let g = chain();
    assert_eq!(count(&g), 2);
    assert_eq!(count(&&g), 2);
}

#[test]
fn undirected_graph_source_reports_incident_edges_both_ways() {
    let mut g: Graph<(), ()> = Graph::undirected();
    g.set_edge("B", "A");
    let a = "A".to_string();

    assert!(!GraphSource::is_directed(&g));
    assert_eq!(g.incoming_edges(&a), g.outgoing_edges(&a));
    assert_eq!(g.outgoing_edges(&a), vec![key("A", "B")]);
}
