//! Assertion types and builders for verifying produced views.

use sbolgraph_core::Value;
use sbolgraph_graph::{Edge, Graph, Node};

use crate::error::{ScenarioError, ScenarioResult};

/// Expectations on one produced view. Nodes are named by display label.
#[derive(Default)]
pub struct ViewAssertion {
    pub nodes: Option<usize>,
    pub edges: Option<usize>,
    pub has_nodes: Vec<String>,
    pub lacks_nodes: Vec<String>,
    /// (source, target, edge label if it matters)
    pub has_edges: Vec<(String, String, Option<String>)>,
    pub lacks_edges: Vec<(String, String)>,
    pub weights: Vec<(String, String, u32)>,
    pub node_attrs: Vec<(String, String, Value)>,
    pub lacks_attrs: Vec<(String, String)>,

    // Error assertions
    pub error: Option<String>,

    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Graph) -> bool>>,
}

impl std::fmt::Debug for ViewAssertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewAssertion")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("has_edges", &self.has_edges)
            .field("lacks_edges", &self.lacks_edges)
            .field("error", &self.error)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl ViewAssertion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(mut self, count: usize) -> Self {
        self.nodes = Some(count);
        self
    }

    pub fn edges(mut self, count: usize) -> Self {
        self.edges = Some(count);
        self
    }

    /// No nodes, and therefore no edges.
    pub fn empty(self) -> Self {
        self.nodes(0).edges(0)
    }

    pub fn has_node(mut self, label: &str) -> Self {
        self.has_nodes.push(label.to_string());
        self
    }

    pub fn lacks_node(mut self, label: &str) -> Self {
        self.lacks_nodes.push(label.to_string());
        self
    }

    /// An edge `source -> target` named `label`.
    pub fn has_edge(mut self, source: &str, target: &str, label: &str) -> Self {
        self.has_edges
            .push((source.to_string(), target.to_string(), Some(label.to_string())));
        self
    }

    /// An edge `source -> target` with any name.
    pub fn links(mut self, source: &str, target: &str) -> Self {
        self.has_edges.push((source.to_string(), target.to_string(), None));
        self
    }

    pub fn no_edge(mut self, source: &str, target: &str) -> Self {
        self.lacks_edges.push((source.to_string(), target.to_string()));
        self
    }

    pub fn weight(mut self, source: &str, target: &str, weight: u32) -> Self {
        self.weights.push((source.to_string(), target.to_string(), weight));
        self
    }

    pub fn node_attr(mut self, label: &str, attr: &str, value: impl Into<Value>) -> Self {
        self.node_attrs
            .push((label.to_string(), attr.to_string(), value.into()));
        self
    }

    /// The node must be present without the attribute.
    pub fn lacks_attr(mut self, label: &str, attr: &str) -> Self {
        self.lacks_attrs.push((label.to_string(), attr.to_string()));
        self
    }

    /// The view must fail with a message containing `message`.
    pub fn error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    pub fn custom(mut self, check: impl Fn(&Graph) -> bool + 'static) -> Self {
        self.custom = Some(Box::new(check));
        self
    }

    /// Verify the assertion against a produced view.
    pub fn verify(&self, step: &str, result: &Result<Graph, String>) -> ScenarioResult<()> {
        if let Some(ref expected) = self.error {
            return match result {
                Err(msg) if msg.contains(expected.as_str()) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', but view succeeded", expected),
                )),
            };
        }

        let view = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("view failed: {}", msg)))?;

        if let Some(expected) = self.nodes {
            if view.node_count() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} nodes, got {}", expected, view.node_count()),
                ));
            }
        }

        if let Some(expected) = self.edges {
            if view.edge_count() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected {} edges, got {}: {:?}",
                        expected,
                        view.edge_count(),
                        describe_edges(view)
                    ),
                ));
            }
        }

        for label in &self.has_nodes {
            if find_node(view, label).is_none() {
                return Err(ScenarioError::assertion_failed(step, format!("missing node '{}'", label)));
            }
        }

        for label in &self.lacks_nodes {
            if find_node(view, label).is_some() {
                return Err(ScenarioError::assertion_failed(step, format!("unexpected node '{}'", label)));
            }
        }

        for (source, target, label) in &self.has_edges {
            let found = find_edges(view, source, target)
                .any(|e| label.as_deref().map_or(true, |l| e.display_name() == Some(l)));
            if !found {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "missing edge {} -> {} ({}); edges: {:?}",
                        source,
                        target,
                        label.as_deref().unwrap_or("any label"),
                        describe_edges(view)
                    ),
                ));
            }
        }

        for (source, target) in &self.lacks_edges {
            if find_edges(view, source, target).next().is_some() {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("unexpected edge {} -> {}", source, target),
                ));
            }
        }

        for (source, target, weight) in &self.weights {
            let actual: Vec<u32> = find_edges(view, source, target).map(|e| e.weight).collect();
            if !actual.contains(weight) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} -> {} with weight {}, got {:?}", source, target, weight, actual),
                ));
            }
        }

        for (label, attr, value) in &self.node_attrs {
            let actual = find_node(view, label).and_then(|n| n.get_attr(attr));
            if actual != Some(value) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {}.{} = {}, got {:?}", label, attr, value, actual),
                ));
            }
        }

        for (label, attr) in &self.lacks_attrs {
            match find_node(view, label) {
                None => {
                    return Err(ScenarioError::assertion_failed(step, format!("missing node {}", label)));
                }
                Some(node) => {
                    if let Some(value) = node.get_attr(attr) {
                        return Err(ScenarioError::assertion_failed(
                            step,
                            format!("expected no {}.{}, got {}", label, attr, value),
                        ));
                    }
                }
            }
        }

        if let Some(ref custom) = self.custom {
            if !custom(view) {
                return Err(ScenarioError::assertion_failed(step, "custom assertion failed"));
            }
        }

        Ok(())
    }
}

fn find_node<'g>(view: &'g Graph, label: &str) -> Option<&'g Node> {
    view.nodes().find(|n| n.label() == label)
}

fn find_edges<'g>(view: &'g Graph, source: &'g str, target: &'g str) -> impl Iterator<Item = &'g Edge> + 'g {
    view.edges().filter(move |e| {
        let source_label = view.node(e.source).map(Node::label);
        let target_label = view.node(e.target).map(Node::label);
        source_label == Some(source) && target_label == Some(target)
    })
}

fn describe_edges(view: &Graph) -> Vec<String> {
    view.edges()
        .map(|e| {
            format!(
                "{} -[{}]-> {}",
                view.node(e.source).map_or("?", Node::label),
                e.display_name().unwrap_or("?"),
                view.node(e.target).map_or("?", Node::label),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbolgraph_core::Statement;
    use sbolgraph_graph::GraphKind;

    fn view() -> Graph {
        let mut graph = Graph::from_statements(
            GraphKind::Directed,
            [Statement::new("http://ex/A/1", "http://ex/p", "http://ex/B/1")],
        );
        graph.label();
        graph
    }

    #[test]
    fn test_passing_assertion() {
        let assertion = ViewAssertion::new().nodes(2).edges(1).has_edge("A", "B", "p").no_edge("B", "A");
        assert!(assertion.verify("step", &Ok(view())).is_ok());
    }

    #[test]
    fn test_failing_assertion_names_the_step() {
        let assertion = ViewAssertion::new().edges(3);
        let err = assertion.verify("count", &Ok(view())).expect_err("wrong count");
        assert!(err.to_string().contains("Step 'count'"));
    }

    #[test]
    fn test_expected_error() {
        let assertion = ViewAssertion::new().error("definition");
        assert!(assertion.verify("s", &Err("<x> has no 'definition' reference".into())).is_ok());
        assert!(assertion.verify("s", &Ok(view())).is_err());
    }
}
