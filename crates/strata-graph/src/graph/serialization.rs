//! JSON-friendly snapshot of a DependencyGraph.

use serde::{Deserialize, Serialize};

use super::DependencyGraph;
use crate::{GraphError, Module};

/// Serialized form: modules sorted by name plus the explicit edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub modules: Vec<Module>,
    pub edges: Vec<(String, String)>,
}

impl From<&DependencyGraph> for GraphSnapshot {
    fn from(graph: &DependencyGraph) -> Self {
        Self {
            modules: graph.modules().into_iter().cloned().collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl TryFrom<GraphSnapshot> for DependencyGraph {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        let mut graph = DependencyGraph::from_modules(snapshot.modules)?;
        for (from, to) in &snapshot.edges {
            graph.add_dependency(from, to)?;
        }
        Ok(graph)
    }
}

impl Serialize for DependencyGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        GraphSnapshot::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DependencyGraph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let snapshot = GraphSnapshot::deserialize(deserializer)?;
        DependencyGraph::try_from(snapshot).map_err(serde::de::Error::custom)
    }
}

impl DependencyGraph {
    /// Serialize the graph as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let graph = DependencyGraph::from_modules([
            Module::new("app", "/r/app"),
            Module::builder("app.a", "/r/app/a.py").dependency("app.b").build(),
            Module::new("app.b", "/r/app/b.py"),
        ])
        .unwrap();

        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(value["modules"].as_array().unwrap().len(), 3);
        assert_eq!(value["modules"][0]["name"], "app");
        assert_eq!(value["edges"], serde_json::json!([["app.a", "app.b"]]));
    }

    #[test]
    fn test_restores_from_json() {
        let graph = DependencyGraph::from_modules([
            Module::new("x", "/r/x.py"),
            Module::builder("y", "/r/y.py").dependency("x").build(),
        ])
        .unwrap();

        let restored = DependencyGraph::from_json(&graph.to_json().unwrap()).unwrap();
        assert_eq!(restored, graph);
    }

    #[test]
    fn test_rejects_dangling_edge() {
        let json = r#"{"modules":[{"name":"a","parent_name":"","file_path":"/a.py",
            "dependencies":[],"is_package":false,"depth":0}],"edges":[["a","b"]]}"#;
        assert!(DependencyGraph::from_json(json).is_err());
    }
}
