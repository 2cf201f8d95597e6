use crate::error::Result;
use crate::graph::{Graph, Weight};

pub const CITIES: [&str; 10] = [
    "Brasilia",
    "Belo-Horizonte",
    "Vitoria",
    "Rio-de-Janeiro",
    "Sao-Paulo",
    "Salvador",
    "Curitiba",
    "Porto-Alegre",
    "Florianopolis",
    "Campo-Grande",
];

/// Road connections with travel time in minutes.
pub const ROADS: [(&str, &str, Weight); 18] = [
    ("Brasilia", "Belo-Horizonte", 594),
    ("Brasilia", "Rio-de-Janeiro", 975),
    ("Brasilia", "Vitoria", 1080),
    ("Belo-Horizonte", "Rio-de-Janeiro", 394),
    ("Belo-Horizonte", "Salvador", 1204),
    ("Rio-de-Janeiro", "Curitiba", 660),
    ("Rio-de-Janeiro", "Sao-Paulo", 327),
    ("Rio-de-Janeiro", "Vitoria", 428),
    ("Sao-Paulo", "Porto-Alegre", 945),
    ("Sao-Paulo", "Salvador", 1680),
    ("Sao-Paulo", "Curitiba", 344),
    ("Curitiba", "Vitoria", 1093),
    ("Curitiba", "Porto-Alegre", 627),
    ("Porto-Alegre", "Salvador", 2580),
    ("Porto-Alegre", "Campo-Grande", 1234),
    ("Florianopolis", "Curitiba", 333),
    ("Florianopolis", "Campo-Grande", 1080),
    ("Salvador", "Campo-Grande", 1920),
];

pub fn build_graph() -> Result<Graph> {
    let mut graph = Graph::with_capacity(CITIES.len());
    graph.add_nodes(CITIES)?;
    for (a, b, minutes) in ROADS {
        graph.connect(a, b, minutes)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::QueueKind;
    use crate::graph::INFINITY;

    fn names(graph: &Graph, path: &[usize]) -> Vec<String> {
        path.iter()
            .map(|&id| graph.node(id).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn builds_every_city_and_road() {
        let graph = build_graph().unwrap();
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.edge_count(), 18);
        let order: Vec<&str> = graph.nodes().map(|n| n.name()).collect();
        assert_eq!(order, CITIES);
    }

    #[test]
    fn from_brasilia() {
        let mut graph = build_graph().unwrap();
        graph.shortest_paths("Brasilia", QueueKind::Lazy).unwrap();
        let brasilia = graph.find_node("Brasilia");

        let bh = graph.find_node("Belo-Horizonte").unwrap();
        assert_eq!(graph.node(bh).unwrap().distance, 594);
        assert_eq!(graph.node(bh).unwrap().predecessor, brasilia);

        // 975 direct beats 594 + 394 through Belo-Horizonte.
        let rio = graph.find_node("Rio-de-Janeiro").unwrap();
        assert_eq!(graph.node(rio).unwrap().distance, 975);
        assert_eq!(graph.node(rio).unwrap().predecessor, brasilia);

        let sp = graph.find_node("Sao-Paulo").unwrap();
        assert_eq!(graph.node(sp).unwrap().distance, 1302);
        assert_eq!(
            names(&graph, &graph.path_to(sp)),
            ["Brasilia", "Rio-de-Janeiro", "Sao-Paulo"]
        );
        assert!(graph.nodes().all(|n| n.distance != INFINITY));
    }

    #[test]
    fn from_florianopolis() {
        let mut graph = build_graph().unwrap();
        let tree = graph.shortest_paths("Florianopolis", QueueKind::Indexed).unwrap();
        let floripa = graph.find_node("Florianopolis").unwrap();

        let cg = graph.find_node("Campo-Grande").unwrap();
        assert_eq!(tree.distance(cg), Some(1080));
        assert_eq!(tree.predecessor(cg), Some(floripa));

        let brasilia = graph.find_node("Brasilia").unwrap();
        assert_eq!(graph.node(brasilia).unwrap().distance, 1968);
        assert_eq!(
            names(&graph, &graph.path_to(brasilia)),
            ["Florianopolis", "Curitiba", "Rio-de-Janeiro", "Brasilia"]
        );
    }

    #[test]
    fn queue_kinds_agree_from_every_city() {
        let graph = build_graph().unwrap();
        for source in 0..graph.len() {
            let lazy = crate::dijkstra::run(&graph, source, QueueKind::Lazy).unwrap();
            let indexed = crate::dijkstra::run(&graph, source, QueueKind::Indexed).unwrap();
            assert_eq!(lazy.distances(), indexed.distances());
            assert_eq!(lazy.reachable_count(), graph.len());
        }
    }
}
