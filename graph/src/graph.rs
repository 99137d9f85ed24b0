//! Core graph storage implementation.

use crate::index::AdjacencyIndex;
use sbolgraph_core::{
    Attributes, EdgeId, GraphError, GraphResult, Iri, NodeId, Statement, Term, Value,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

/// ID allocator for nodes and edges.
#[derive(Debug, Clone)]
struct IdAllocator {
    next_node_id: u64,
    next_edge_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    fn alloc_node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }
}

/// A node: one term appearing in at least one statement.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// The term this node stands for.
    pub term: Term,
    /// Display name, set at most once.
    display_name: Option<String>,
    /// Attribute values.
    pub attributes: Attributes,
}

impl Node {
    fn new(id: NodeId, term: Term) -> Self {
        Self {
            id,
            term,
            display_name: None,
            attributes: Attributes::new(),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Display name, or the bare term text when the node is unlabeled.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.term.lexical())
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// An edge between two nodes, collapsing every statement between them.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    /// Collapsed statements, never empty.
    statements: Vec<Statement>,
    /// Number of statements or view edges collapsed onto this edge.
    pub weight: u32,
    display_name: Option<String>,
    /// Attribute values.
    pub attributes: Attributes,
}

impl Edge {
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The first collapsed statement; it defines what the edge "is".
    pub fn first_statement(&self) -> &Statement {
        &self.statements[0]
    }

    /// Predicate of the first collapsed statement.
    pub fn predicate(&self) -> &Iri {
        self.first_statement().predicate()
    }

    /// Returns true if any collapsed statement uses `predicate`.
    pub fn has_predicate(&self, predicate: &str) -> bool {
        self.statements.iter().any(|s| s.predicate() == predicate)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub(crate) fn set_display_name(&mut self, name: String) {
        self.display_name = Some(name);
    }

    /// Keep only statements matching `keep`; returns how many were dropped.
    pub(crate) fn retain_statements(&mut self, keep: impl Fn(&Statement) -> bool) -> usize {
        let before = self.statements.len();
        self.statements.retain(|s| keep(s));
        before - self.statements.len()
    }
}

/// The in-memory graph storage.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    /// Node storage, ordered by id (insertion order)
    nodes: BTreeMap<NodeId, Node>,
    /// Edge storage, ordered by id (insertion order)
    edges: BTreeMap<EdgeId, Edge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Term -> node
    terms: HashMap<Term, NodeId>,
    /// Adjacency index
    adj_index: AdjacencyIndex,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty directed graph.
    pub fn new() -> Self {
        Self::with_kind(GraphKind::Directed)
    }

    /// Create a new empty graph of the given kind.
    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            id_alloc: IdAllocator::new(),
            terms: HashMap::new(),
            adj_index: AdjacencyIndex::new(),
        }
    }

    /// Build a graph holding every statement, collapsing statements that
    /// share a `(subject, object)` pair onto one edge.
    pub fn from_statements(kind: GraphKind, statements: impl IntoIterator<Item = Statement>) -> Self {
        let mut graph = Self::with_kind(kind);
        for statement in statements {
            graph.insert_statement(statement);
        }
        graph
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    fn pair_key(&self, source: NodeId, target: NodeId) -> (NodeId, NodeId) {
        match self.kind {
            GraphKind::Directed => (source, target),
            GraphKind::Undirected => (source.min(target), source.max(target)),
        }
    }

    // ==================== Node Operations ====================

    /// Get the node for a term, creating it if needed.
    pub fn ensure_node(&mut self, term: Term) -> NodeId {
        if let Some(id) = self.terms.get(&term) {
            return *id;
        }
        let id = self.id_alloc.alloc_node_id();
        self.terms.insert(term.clone(), id);
        self.nodes.insert(id, Node::new(id, term));
        id
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get the node id for a term.
    pub fn node_id(&self, term: &Term) -> Option<NodeId> {
        self.terms.get(term).copied()
    }

    /// Get the node for a term.
    pub fn node_by_term(&self, term: &Term) -> Option<&Node> {
        self.node_id(term).and_then(|id| self.nodes.get(&id))
    }

    /// Set a node's display name unless it already has one.
    ///
    /// Returns true if the name was set.
    pub fn set_display_name(&mut self, id: NodeId, name: impl Into<String>) -> GraphResult<bool> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))?;
        if node.display_name.is_some() {
            return Ok(false);
        }
        node.display_name = Some(name.into());
        Ok(true)
    }

    /// Set an attribute on a node.
    pub fn set_node_attr(&mut self, id: NodeId, attr_name: &str, value: Value) -> GraphResult<()> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))?;
        node.attributes.insert(attr_name.to_string(), value);
        Ok(())
    }

    /// Delete a node and all edges involving it.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound(id));
        }

        for edge_id in self.adj_index.edges_involving(id) {
            self.remove_edge(edge_id)?;
        }

        let node = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;
        self.terms.remove(&node.term);
        Ok(node)
    }

    /// Returns true if no edge touches the node.
    pub fn is_isolated(&self, id: NodeId) -> bool {
        self.adj_index.is_isolated(id)
    }

    // ==================== Edge Operations ====================

    /// Record a statement, collapsing it onto the existing edge for its
    /// `(subject, object)` pair if there is one.
    pub fn insert_statement(&mut self, statement: Statement) -> EdgeId {
        let subject = statement.subject().clone();
        let object = statement.object().clone();
        self.add_edge(subject, object, statement, None, 1)
    }

    /// Add an edge from `source` to `target` carrying `statement`.
    ///
    /// If an edge already joins the pair, the statement is appended, the
    /// weight grows by `weight`, and the existing display name is kept.
    pub fn add_edge(
        &mut self,
        source: Term,
        target: Term,
        statement: Statement,
        display_name: Option<String>,
        weight: u32,
    ) -> EdgeId {
        let source = self.ensure_node(source);
        let target = self.ensure_node(target);
        let key = self.pair_key(source, target);

        if let Some(edge_id) = self.adj_index.edge_for(key) {
            if let Some(edge) = self.edges.get_mut(&edge_id) {
                edge.statements.push(statement);
                edge.weight += weight;
                if edge.display_name.is_none() {
                    edge.display_name = display_name;
                }
                return edge_id;
            }
        }

        let id = self.id_alloc.alloc_edge_id();
        self.adj_index.insert(id, key, source, target);
        self.edges.insert(
            id,
            Edge {
                id,
                source,
                target,
                statements: vec![statement],
                weight,
                display_name,
                attributes: Attributes::new(),
            },
        );
        id
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// Get the edge joining two nodes.
    ///
    /// On an undirected graph the endpoint order does not matter.
    pub fn edge_between(&self, source: NodeId, target: NodeId) -> Option<&Edge> {
        self.adj_index
            .edge_for(self.pair_key(source, target))
            .and_then(|id| self.edges.get(&id))
    }

    /// Get the edge joining two terms.
    pub fn edge_between_terms(&self, source: &Term, target: &Term) -> Option<&Edge> {
        let s = self.node_id(source)?;
        let t = self.node_id(target)?;
        self.edge_between(s, t)
    }

    /// Delete an edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let edge = self.edges.remove(&id).ok_or(GraphError::EdgeNotFound(id))?;
        let key = self.pair_key(edge.source, edge.target);
        self.adj_index.remove(id, key, edge.source, edge.target);
        Ok(edge)
    }

    /// Set an attribute on an edge.
    pub fn set_edge_attr(&mut self, id: EdgeId, attr_name: &str, value: Value) -> GraphResult<()> {
        let edge = self.edges.get_mut(&id).ok_or(GraphError::EdgeNotFound(id))?;
        edge.attributes.insert(attr_name.to_string(), value);
        Ok(())
    }

    // ==================== Query Operations ====================

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Edges leaving a node. Fails on an undirected graph.
    pub fn out_edges(&self, id: NodeId) -> GraphResult<impl Iterator<Item = &Edge> + '_> {
        if !self.is_directed() {
            return Err(GraphError::undirected("out_edges"));
        }
        Ok(self
            .adj_index
            .edges_from(id)
            .filter_map(move |e| self.edges.get(&e)))
    }

    /// Edges entering a node. Fails on an undirected graph.
    pub fn in_edges(&self, id: NodeId) -> GraphResult<impl Iterator<Item = &Edge> + '_> {
        if !self.is_directed() {
            return Err(GraphError::undirected("in_edges"));
        }
        Ok(self
            .adj_index
            .edges_to(id)
            .filter_map(move |e| self.edges.get(&e)))
    }

    /// Every edge touching a node, regardless of direction.
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.adj_index
            .edges_involving(id)
            .into_iter()
            .filter_map(move |e| self.edges.get(&e))
    }

    /// Nodes one step away following edge direction (both ways if undirected).
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        match self.kind {
            GraphKind::Directed => self
                .adj_index
                .edges_from(id)
                .filter_map(|e| self.edges.get(&e))
                .map(|e| e.target)
                .collect(),
            GraphKind::Undirected => self.neighbors(id),
        }
    }

    /// Nodes one step away in either direction.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.incident_edges(id)
            .map(|e| if e.source == id { e.target } else { e.source })
            .collect()
    }

    // ==================== Statistics ====================

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get all node IDs, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get all edge IDs, in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys().copied()
    }

    // ==================== Conversion ====================

    /// Derive an undirected copy; edges `a -> b` and `b -> a` collapse into one.
    pub fn to_undirected(&self) -> Graph {
        let mut graph = Graph::with_kind(GraphKind::Undirected);
        for node in self.nodes.values() {
            let id = graph.ensure_node(node.term.clone());
            if let Some(copy) = graph.nodes.get_mut(&id) {
                copy.display_name = node.display_name.clone();
                copy.attributes = node.attributes.clone();
            }
        }
        for edge in self.edges.values() {
            let (Some(source), Some(target)) = (self.nodes.get(&edge.source), self.nodes.get(&edge.target))
            else {
                continue;
            };
            let mut statements = edge.statements.iter().cloned();
            let Some(first) = statements.next() else {
                continue;
            };
            let id = graph.add_edge(
                source.term.clone(),
                target.term.clone(),
                first,
                edge.display_name.clone(),
                edge.weight,
            );
            if let Some(copy) = graph.edges.get_mut(&id) {
                copy.statements.extend(statements);
                copy.attributes.extend(edge.attributes.clone());
            }
        }
        graph
    }
}
