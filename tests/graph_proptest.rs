use brandgraph::graph::{AdjacencyGraph, Graph, VertexId};
use brandgraph::{
    breadth_first_search, connected_components, find_back_edge, minimum_spanning_tree_kruskal,
    minimum_spanning_tree_prim, non_negative_weighted_search, path_exists, reverse_graph,
    shortest_path, topological_ordering,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn edge_list(max_vertices: u32, max_edges: usize) -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
    (1..=max_vertices).prop_flat_map(move |n| {
        (
            Just(n),
            proptest::collection::vec((1..=n, 1..=n), 0..max_edges),
        )
    })
}

fn weighted_edge_list(
    max_vertices: u32,
    max_edges: usize,
) -> impl Strategy<Value = (u32, Vec<(u32, u32, i64)>)> {
    (1..=max_vertices).prop_flat_map(move |n| {
        (
            Just(n),
            proptest::collection::vec((1..=n, 1..=n, -50i64..50), 0..max_edges),
        )
    })
}

// A path 1 - 2 - ... - n guarantees connectivity; `extra` adds cycles.
// The first weight seen for an unordered pair wins, so chain weights stick.
fn connected_weighted(n: u32, chain: &[i64], extra: &[(u32, u32, i64)]) -> AdjacencyGraph {
    let mut edges: Vec<(u32, u32, i64)> = (1..n)
        .map(|i| (i, i + 1, chain[(i as usize - 1) % chain.len()]))
        .collect();
    edges.extend(extra.iter().copied().filter(|&(a, b, _)| a != b && a <= n && b <= n));

    let mut seen = HashSet::new();
    edges.retain(|&(a, b, _)| seen.insert((a.min(b), a.max(b))));
    AdjacencyGraph::weighted(false, n as usize, &edges)
}

proptest! {
    #[test]
    fn test_components_partition_vertices((n, edges) in edge_list(40, 80)) {
        let g = AdjacencyGraph::unweighted(false, n as usize, &edges);
        let components = connected_components(&g).unwrap();
        let mut all: Vec<u32> = components.iter().flatten().map(|v| v.get()).collect();
        all.sort_unstable();
        prop_assert_eq!(all, (1..=n).collect::<Vec<_>>());

        for component in &components {
            for pair in component.windows(2) {
                prop_assert!(path_exists(&g, pair[0], pair[1]).unwrap());
            }
        }
    }

    #[test]
    fn test_undirected_reachability_is_symmetric((n, edges) in edge_list(25, 40)) {
        let g = AdjacencyGraph::unweighted(false, n as usize, &edges);
        for a in 1..=n {
            for b in 1..=n {
                let (a, b) = (VertexId::new(a), VertexId::new(b));
                prop_assert_eq!(path_exists(&g, a, b).unwrap(), path_exists(&g, b, a).unwrap());
            }
        }
    }

    #[test]
    fn test_topological_order_on_forward_edges((n, edges) in edge_list(40, 120)) {
        // Orient every edge from the smaller id to the larger: always acyclic.
        let forward: Vec<(u32, u32)> = edges
            .into_iter()
            .filter(|&(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        let g = AdjacencyGraph::unweighted(true, n as usize, &forward);
        prop_assert_eq!(find_back_edge(&g).unwrap(), None);

        let order = topological_ordering(&g).unwrap();
        let mut position = vec![0usize; n as usize + 1];
        for (i, v) in order.iter().enumerate() {
            position[v.get() as usize] = i;
        }
        for (a, b) in forward {
            prop_assert!(position[a as usize] < position[b as usize]);
        }
    }

    #[test]
    fn test_unit_weights_match_bfs((n, edges) in edge_list(40, 100)) {
        let unit: Vec<(u32, u32, i64)> = dedup_directed(edges).into_iter().map(|(a, b)| (a, b, 1)).collect();
        let g = AdjacencyGraph::weighted(true, n as usize, &unit);
        let hops = breadth_first_search(&g, VertexId::new(1)).unwrap();
        let weighted = non_negative_weighted_search(&g, VertexId::new(1)).unwrap();
        for v in g.vertex_ids() {
            prop_assert_eq!(hops.distance(v), weighted.distance(v));
            if let Some(path) = shortest_path(&weighted, v) {
                prop_assert_eq!(path.len() as u64, weighted.distance(v).unwrap() + 1);
            }
        }
    }

    #[test]
    fn test_kruskal_and_prim_weights_agree(
        n in 1u32..30,
        chain in proptest::collection::vec(-20i64..20, 1..10),
        extra in proptest::collection::vec((1u32..30, 1u32..30, -20i64..20), 0..60),
    ) {
        let g = connected_weighted(n, &chain, &extra);
        let kruskal = minimum_spanning_tree_kruskal(&g).unwrap();
        let prim = minimum_spanning_tree_prim(&g).unwrap();
        prop_assert_eq!(kruskal.len(), n as usize - 1);
        prop_assert_eq!(prim.len(), n as usize - 1);
        prop_assert_eq!(kruskal.total_weight(), prim.total_weight());
    }

    #[test]
    fn test_double_reversal_is_identity((n, edges) in weighted_edge_list(30, 60)) {
        let unique: Vec<(u32, u32, i64)> = {
            let mut seen = HashSet::new();
            edges.into_iter().filter(|&(a, b, _)| seen.insert((a, b))).collect()
        };
        let g = AdjacencyGraph::weighted(true, n as usize, &unique);
        let twice = reverse_graph(&reverse_graph(&g).unwrap()).unwrap();
        prop_assert_eq!(twice.edge_count(), g.edge_count());
        for v in g.vertex_ids() {
            let mut expected = g.weighted_neighbours(v).unwrap();
            let mut actual = twice.weighted_neighbours(v).unwrap();
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(expected, actual);
        }
    }
}

fn dedup_directed(edges: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
    let mut seen = HashSet::new();
    edges.into_iter().filter(|&edge| seen.insert(edge)).collect()
}
