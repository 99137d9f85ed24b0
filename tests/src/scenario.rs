//! Scenario builder and runner.

use sbolgraph_core::Statement;
use sbolgraph_graph::{StatementStore, StoreConfig};
use sbolgraph_loader::{load_str, RdfFormat};
use sbolgraph_views::{ViewEngine, ViewKind};

use crate::assertion::ViewAssertion;
use crate::error::{ScenarioError, ScenarioResult};

/// One view to produce and check.
#[derive(Debug)]
pub struct Step {
    pub name: String,
    pub kind: ViewKind,
    /// Convert the view to a tree before checking it.
    pub tree: bool,
    pub assertion: ViewAssertion,
}

/// A design, a store configuration, and the views to check against it.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    statements: Option<Vec<Statement>>,
    config: StoreConfig,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            statements: None,
            config: StoreConfig::default(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn design(mut self, statements: Vec<Statement>) -> Self {
        self.statements = Some(statements);
        self
    }

    /// Use a serialized document as the design.
    pub fn document(mut self, text: &str, format: RdfFormat) -> ScenarioResult<Self> {
        self.statements = Some(load_str(text, format)?);
        Ok(self)
    }

    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Prune with the default blacklists while loading.
    pub fn pruned(mut self) -> Self {
        self.config.prune_on_load = true;
        self
    }

    /// Produce `kind` and check it.
    pub fn step<F>(mut self, kind: ViewKind, build: F) -> Self
    where
        F: FnOnce(ViewAssertion) -> ViewAssertion,
    {
        self.steps.push(Step {
            name: kind.name().to_string(),
            kind,
            tree: false,
            assertion: build(ViewAssertion::new()),
        });
        self
    }

    /// Produce `kind`, convert it to a tree, and check it.
    pub fn tree_step<F>(mut self, kind: ViewKind, build: F) -> Self
    where
        F: FnOnce(ViewAssertion) -> ViewAssertion,
    {
        self.steps.push(Step {
            name: format!("{}-tree", kind.name()),
            kind,
            tree: true,
            assertion: build(ViewAssertion::new()),
        });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Build the store once and verify every step in order.
    pub fn run(&self) -> ScenarioResult<()> {
        crate::init_tracing();
        let statements = self
            .statements
            .clone()
            .ok_or_else(|| ScenarioError::no_design(&self.name))?;
        let store = StatementStore::with_config(statements, self.config.clone());
        let engine = ViewEngine::from_store(&store);

        for step in &self.steps {
            let result = if step.tree {
                engine.tree_view(step.kind)
            } else {
                engine.produce(step.kind)
            };
            let result = result.map_err(|e| e.to_string());
            step.assertion
                .verify(&format!("{}:{}", self.name, step.name), &result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_without_design_fails() {
        let scenario = Scenario::new("empty").step(ViewKind::Full, |a| a.empty());
        assert!(matches!(scenario.run(), Err(ScenarioError::NoDesign { .. })));
    }

    #[test]
    fn test_steps_are_recorded_in_order() {
        let scenario = Scenario::new("order")
            .step(ViewKind::Components, |a| a.edges(0))
            .tree_step(ViewKind::Parent, |a| a);

        let names: Vec<&str> = scenario.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["components", "parent-tree"]);
    }
}
