use std::collections::HashMap;

use topograph::{
    decouple_isolated_subgraphs, explore_graph, is_single_network, reduce_graph, single_network,
    BfVisitor, DfVisitor, Edge, Graph, GraphError, GraphNode, Vertex,
};

fn graph(edges: &[(Vertex, Vertex)]) -> Graph {
    Graph::from_edges(edges.iter().map(|&(a, b)| Edge::new(a, b)))
}

// 1 - 2 - 3 - 4 - 5 - 9
//     |   |   |
//     6 - 7   8
fn network() -> Graph {
    let nodes: HashMap<Vertex, GraphNode> = (1..=9)
        .map(|v| (v, GraphNode::new().with_int("id", v)))
        .collect();
    let edges = [
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 9),
        (2, 6),
        (6, 7),
        (7, 3),
        (4, 8),
    ];
    Graph::new(edges.iter().map(|&(a, b)| Edge::new(a, b)), nodes)
}

#[test]
fn reduce_network_keeps_parallel_chains() {
    let g = network();
    let rg = reduce_graph(&g).unwrap();

    assert_eq!(rg.vertices(), vec![1, 2, 3, 4, 8, 9]);
    assert_eq!(
        rg.edges(),
        vec![
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 4),
            Edge::new(4, 8),
            Edge::new(4, 9),
        ]
    );
    assert_eq!(rg.reduced_edge_count(), 6);
    assert_eq!(rg.edge_multiplicity(Edge::new(2, 3)), 2);

    assert_eq!(
        rg.expand_edge(Edge::new(2, 3)).unwrap(),
        vec![
            vec![Edge::new(2, 3)],
            vec![Edge::new(2, 6), Edge::new(6, 7), Edge::new(3, 7)],
        ]
    );
    assert_eq!(
        rg.expand_edge(Edge::new(9, 4)).unwrap(),
        vec![vec![Edge::new(4, 5), Edge::new(5, 9)]]
    );
    assert_eq!(
        rg.expand_edge(Edge::new(5, 9)),
        Err(GraphError::EdgeNotFound(Edge::new(5, 9)))
    );
}

#[test]
fn reduce_network_copies_payloads_and_full_adjacency() {
    let g = network();
    let rg = reduce_graph(&g).unwrap();

    for v in rg.vertices() {
        assert_eq!(rg.node(v), g.node(v));
    }
    assert!(rg.node(5).is_none());

    assert_eq!(rg.neighbor_vertices(4), vec![3, 8, 9]);
    assert_eq!(rg.full_neighbor_vertices(4), vec![3, 5, 8]);
    assert_eq!(rg.full_edge_container(), g.edge_container());
}

#[test]
fn reduce_is_repeatable() {
    let g = network();
    assert_eq!(reduce_graph(&g).unwrap(), reduce_graph(&g).unwrap());
    assert_eq!(
        decouple_isolated_subgraphs(&g).unwrap(),
        decouple_isolated_subgraphs(&g).unwrap()
    );
}

#[test]
fn reduce_two_cycles_sharing_a_junction() {
    // Figure eight: 1-2-3-1 and 1-4-5-1, vertex 1 has degree 4.
    let g = graph(&[(1, 2), (2, 3), (3, 1), (1, 4), (4, 5), (5, 1)]);
    let rg = reduce_graph(&g).unwrap();

    assert_eq!(rg.vertices(), vec![1]);
    let loops = rg.expansions(Edge::new(1, 1)).unwrap();
    assert_eq!(loops.len(), 2);
    assert_eq!(loops[0].vertices(), &[1, 2, 3, 1]);
    assert_eq!(loops[1].vertices(), &[1, 4, 5, 1]);
}

#[test]
fn reduce_each_component_separately() {
    // A path and a pure cycle.
    let g = graph(&[(1, 2), (2, 3), (10, 11), (11, 12), (12, 10)]);
    let rg = reduce_graph(&g).unwrap();

    assert_eq!(rg.vertices(), vec![1, 3, 10]);
    assert_eq!(rg.edge_multiplicity(Edge::new(1, 3)), 1);
    assert_eq!(rg.edge_multiplicity(Edge::new(10, 10)), 1);
}

#[test]
fn connectivity_examples() {
    assert!(is_single_network(&graph(&[(1, 2), (2, 3)])));

    let nodes: HashMap<Vertex, GraphNode> = [(4, GraphNode::new())].into_iter().collect();
    let g = Graph::new([Edge::new(1, 2)], nodes);
    assert!(!is_single_network(&g));
    assert!(!single_network(&g, &mut DfVisitor::new(2)).unwrap());
    assert_eq!(
        single_network(&g, &mut DfVisitor::new(3)),
        Err(GraphError::VertexNotFound(3))
    );
}

#[test]
fn decouple_orders_components_by_seed() {
    let nodes: HashMap<Vertex, GraphNode> = [(0, GraphNode::new().with_str("name", "lonely"))]
        .into_iter()
        .collect();
    let g = Graph::new(
        [Edge::new(7, 8), Edge::new(3, 4), Edge::new(4, 5)],
        nodes,
    );
    let parts = decouple_isolated_subgraphs(&g).unwrap();

    let vertex_sets: Vec<Vec<Vertex>> = parts.iter().map(Graph::vertices).collect();
    assert_eq!(vertex_sets, vec![vec![0], vec![3, 4, 5], vec![7, 8]]);
    assert_eq!(parts[0].node(0).map(|n| n.str("name")), Some(Ok("lonely")));
    assert_eq!(parts[1].edges(), vec![Edge::new(3, 4), Edge::new(4, 5)]);
    assert!(parts[1..].iter().all(is_single_network));
}

#[test]
fn explore_reports_loop_edges() {
    let g = network();
    let mut bf = BfVisitor::new(1);
    explore_graph(&g, &mut bf).unwrap();
    assert_eq!(bf.explored_count(), 9);
    assert_eq!(bf.loop_edges().len(), 1);

    let mut df = DfVisitor::new(1);
    explore_graph(&g, &mut df).unwrap();
    assert_eq!(df.explored_vertices(), bf.explored_vertices());
    assert_eq!(df.loop_edges().len(), 1);

    // A finished visitor refuses a second run until reset.
    assert_eq!(
        explore_graph(&g, &mut df),
        Err(GraphError::AlreadyInitialized)
    );
    df.reset();
    explore_graph(&g, &mut df).unwrap();
}

#[test]
fn concurrent_read_only_traversals() {
    let g = network();
    let expected = reduce_graph(&g).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=4)
            .map(|start| {
                let g = &g;
                s.spawn(move || {
                    let mut visitor = DfVisitor::new(start);
                    explore_graph(g, &mut visitor).unwrap();
                    (visitor.explored_count(), reduce_graph(g).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (explored, reduced) = handle.join().unwrap();
            assert_eq!(explored, 9);
            assert_eq!(reduced, expected);
        }
    });
}

#[test]
fn serde_shape_of_edges_and_nodes() {
    assert_eq!(serde_json::to_string(&Edge::new(3, 1)).unwrap(), "[1,3]");
    let e: Edge = serde_json::from_str("[5,2]").unwrap();
    assert_eq!(e, Edge::new(2, 5));

    let node = GraphNode::new().with_int("index", 3).with_str("name", "C");
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "ints": { "index": 3 }, "strs": { "name": "C" } })
    );

    let back: GraphNode = serde_json::from_value(json).unwrap();
    assert_eq!(back, node);
    let empty: GraphNode = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());
}
