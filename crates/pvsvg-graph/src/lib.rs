mod attr_graph;

pub use attr_graph::{AttrGraph, JsonId};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Open-ended, insertion-ordered attribute mapping attached to a node or an edge.
pub type Attributes = Map<String, Value>;

/// Flat node object handed to the frontend: `{"id": ..}` followed by the node attributes.
pub type NodeRecord = Map<String, Value>;

/// Flat edge object handed to the frontend: `{"from": .., "to": ..}` followed by the edge attributes.
pub type EdgeRecord = Map<String, Value>;

/// Errors raised while flattening or loading a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to serialize node identifier: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse graph JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("{kind} record is missing the `{field}` field")]
    MissingField { kind: &'static str, field: &'static str },

    #[error("{0} record is not a JSON object")]
    NotAnObject(&'static str),
}

/// Read-only view of a graph whose nodes and edges carry attribute mappings.
///
/// The renderer never mutates the graph and imposes no ordering of its own: records
/// come out in whatever order these iterators yield.
pub trait VisualGraph {
    type Id: Serialize;

    fn nodes(&self) -> impl Iterator<Item = (&Self::Id, &Attributes)>;

    fn edges(&self) -> impl Iterator<Item = (&Self::Id, &Self::Id, &Attributes)>;
}

/// Complete flattened payload passed from the renderer to the frontend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphData {
    pub fn from_graph<G: VisualGraph>(graph: &G) -> Result<Self, GraphError> {
        Ok(Self {
            nodes: flatten_nodes(graph)?,
            edges: flatten_edges(graph)?,
        })
    }
}

fn to_value<T: Serialize>(id: &T) -> Result<Value, GraphError> {
    serde_json::to_value(id).map_err(GraphError::Serialize)
}

/// Flatten every node into `{"id": <identifier>}` extended with its attributes.
///
/// An attribute literally named `id` replaces the structural identifier.
pub fn flatten_nodes<G: VisualGraph>(graph: &G) -> Result<Vec<NodeRecord>, GraphError> {
    let records = graph
        .nodes()
        .map(|(id, attrs)| {
            let mut record = NodeRecord::new();
            record.insert("id".to_string(), to_value(id)?);
            record.extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
            Ok(record)
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    debug!(count = records.len(), "flattened nodes");
    Ok(records)
}

/// Flatten every edge into `{"from": <source>, "to": <target>}` extended with its attributes.
///
/// Attributes named `from` or `to` replace the structural endpoints.
pub fn flatten_edges<G: VisualGraph>(graph: &G) -> Result<Vec<EdgeRecord>, GraphError> {
    let records = graph
        .edges()
        .map(|(from, to, attrs)| {
            let mut record = EdgeRecord::new();
            record.insert("from".to_string(), to_value(from)?);
            record.insert("to".to_string(), to_value(to)?);
            record.extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
            Ok(record)
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    debug!(count = records.len(), "flattened edges");
    Ok(records)
}
