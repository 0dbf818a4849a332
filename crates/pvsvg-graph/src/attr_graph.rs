use crate::{Attributes, GraphData, GraphError, VisualGraph};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Directed graph whose nodes and edges carry open-ended attribute mappings.
///
/// Nodes and edges iterate in insertion order. Re-adding an existing node or edge
/// merges the new attributes into the stored ones key by key.
#[derive(Debug, Clone)]
pub struct AttrGraph<T> {
    graph: DiGraph<(T, Attributes), Attributes>,
    node_map: HashMap<T, NodeIndex>,
}

impl<T: Eq + Hash + Clone> AttrGraph<T> {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    fn get_or_create_node(&mut self, id: T) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node((id.clone(), Attributes::new()));
        self.node_map.insert(id, idx);
        idx
    }

    pub fn add_node(&mut self, id: T, attrs: Attributes) {
        let idx = self.get_or_create_node(id);
        self.graph[idx].1.extend(attrs);
    }

    /// Add an edge, creating either endpoint if it is not yet present.
    pub fn add_edge(&mut self, from: T, to: T, attrs: Attributes) {
        let from_idx = self.get_or_create_node(from);
        let to_idx = self.get_or_create_node(to);

        match self.graph.find_edge(from_idx, to_idx) {
            Some(edge) => self.graph[edge].extend(attrs),
            None => {
                self.graph.add_edge(from_idx, to_idx, attrs);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_attributes(&self, id: &T) -> Option<&Attributes> {
        self.node_map.get(id).map(|&idx| &self.graph[idx].1)
    }
}

impl<T: Eq + Hash + Clone> Default for AttrGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> VisualGraph for AttrGraph<T> {
    type Id = T;

    fn nodes(&self) -> impl Iterator<Item = (&T, &Attributes)> {
        self.graph
            .node_indices()
            .map(|idx| (&self.graph[idx].0, &self.graph[idx].1))
    }

    fn edges(&self) -> impl Iterator<Item = (&T, &T, &Attributes)> {
        self.graph.edge_indices().filter_map(|edge| {
            let (from, to) = self.graph.edge_endpoints(edge)?;
            Some((&self.graph[from].0, &self.graph[to].0, &self.graph[edge]))
        })
    }
}

/// Node identifier loaded from JSON.
///
/// Identifiers compare by JSON value, so `"1"` and `1` are distinct nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonId(pub Value);

impl Eq for JsonId {}

impl Hash for JsonId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

/// Hash consistent with `Value` equality: object keys are visited in sorted order,
/// since maps compare equal regardless of insertion order.
fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            n.to_string().hash(state);
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            state.write_usize(items.len());
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            state.write_usize(map.len());
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, item) in entries {
                key.hash(state);
                hash_value(item, state);
            }
        }
    }
}

fn take_field(
    record: &mut Attributes,
    kind: &'static str,
    field: &'static str,
) -> Result<JsonId, GraphError> {
    record
        .shift_remove(field)
        .map(JsonId)
        .ok_or(GraphError::MissingField { kind, field })
}

impl AttrGraph<JsonId> {
    /// Rebuild a graph from flat node and edge records.
    ///
    /// This is the inverse of flattening: `id`, `from` and `to` become structure and
    /// every remaining key becomes an attribute.
    pub fn from_graph_data(data: GraphData) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        for mut node in data.nodes {
            let id = take_field(&mut node, "node", "id")?;
            graph.add_node(id, node);
        }

        for mut edge in data.edges {
            let from = take_field(&mut edge, "edge", "from")?;
            let to = take_field(&mut edge, "edge", "to")?;
            graph.add_edge(from, to, edge);
        }

        Ok(graph)
    }

    /// Parse `{"nodes": [...], "edges": [...]}` node-link JSON.
    pub fn from_json_str(input: &str) -> Result<Self, GraphError> {
        let value: Value = serde_json::from_str(input).map_err(GraphError::Parse)?;
        let Value::Object(mut root) = value else {
            return Err(GraphError::NotAnObject("graph"));
        };

        let nodes = object_list(root.shift_remove("nodes"), "node")?;
        let edges = object_list(root.shift_remove("edges"), "edge")?;

        Self::from_graph_data(GraphData { nodes, edges })
    }
}

fn object_list(value: Option<Value>, kind: &'static str) -> Result<Vec<Attributes>, GraphError> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(GraphError::NotAnObject(kind)),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            _ => Err(GraphError::NotAnObject(kind)),
        })
        .collect()
}
