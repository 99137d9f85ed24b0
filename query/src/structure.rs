//! Structural lookups: sub-components, modules, sequence annotations and
//! combinatorial derivations.

use crate::error::{QueryError, QueryResult};
use crate::lookup::SbolQuery;
use sbolgraph_core::Term;
use sbolgraph_vocab::{translate_role, ObjectType, Predicate, UNKNOWN};
use tracing::{debug, warn};

/// One located sequence annotation of a component definition.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedLocation<'g> {
    pub annotation: &'g Term,
    pub location: &'g Term,
    pub role_name: &'static str,
    pub start: i64,
    pub end: i64,
}

impl<'g> SbolQuery<'g> {
    // ==================== Components ====================

    /// `(cd, component, ?)`
    pub fn components(&self, cd: &Term) -> Vec<&'g Term> {
        self.objects(cd, Predicate::Component)
    }

    /// `(md, functionalComponent, ?)`
    pub fn functional_components(&self, md: &Term) -> Vec<&'g Term> {
        self.objects(md, Predicate::FunctionalComponent)
    }

    /// `(md, module, ?)`
    pub fn modules(&self, md: &Term) -> Vec<&'g Term> {
        self.objects(md, Predicate::Module)
    }

    // ==================== Sequence annotations ====================

    /// `(cd, sequenceAnnotation, ?)`
    pub fn sequence_annotations(&self, cd: &Term) -> Vec<&'g Term> {
        self.objects(cd, Predicate::SequenceAnnotation)
    }

    /// `(cd, sequenceConstraint, ?)`
    pub fn sequence_constraints(&self, cd: &Term) -> Vec<&'g Term> {
        self.objects(cd, Predicate::SequenceConstraint)
    }

    /// `(sa, location, ?)`
    pub fn locations(&self, annotation: &Term) -> Vec<&'g Term> {
        self.objects(annotation, Predicate::Location)
    }

    /// `(sa, component, ?)`, the sub-component the annotation places.
    pub fn annotation_component(&self, annotation: &Term) -> Option<&'g Term> {
        self.object(annotation, Predicate::Component)
    }

    /// Readable role of an annotation: the role of the definition behind its
    /// component, or else the annotation's own role.
    pub fn annotation_role_name(&self, annotation: &Term) -> QueryResult<&'static str> {
        if let Some(component) = self.annotation_component(annotation) {
            let definition = self.definition(component)?;
            return Ok(self.role_name(definition));
        }
        Ok(self
            .object(annotation, Predicate::Role)
            .and_then(|role| translate_role(role.lexical()))
            .unwrap_or(UNKNOWN))
    }

    fn integer(&self, node: &Term, predicate: Predicate) -> QueryResult<i64> {
        let value = self.require(node, predicate)?;
        value
            .as_literal()
            .and_then(|lit| lit.as_integer())
            .ok_or_else(|| QueryError::invalid_literal(node, predicate.name(), value.lexical(), "an integer"))
    }

    /// `(start, end)` of a Range, `(at, at)` of a Cut, `None` for any other
    /// kind of location.
    pub fn location_bounds(&self, location: &Term) -> QueryResult<Option<(i64, i64)>> {
        match self.object_type(location) {
            ObjectType::Range => Ok(Some((
                self.integer(location, Predicate::Start)?,
                self.integer(location, Predicate::End)?,
            ))),
            ObjectType::Cut => {
                let at = self.integer(location, Predicate::At)?;
                Ok(Some((at, at)))
            }
            _ => Ok(None),
        }
    }

    /// The located annotations of a component definition, ascending by start.
    ///
    /// Locations sharing a start keep the order they were found in.
    /// Locations without coordinates are skipped.
    pub fn sequence_order(&self, cd: &Term) -> QueryResult<Vec<OrderedLocation<'g>>> {
        let mut ordered: Vec<OrderedLocation<'g>> = Vec::new();
        for annotation in self.sequence_annotations(cd) {
            let role_name = self.annotation_role_name(annotation)?;
            for location in self.locations(annotation) {
                let Some((start, end)) = self.location_bounds(location)? else {
                    warn!(%location, "location has no coordinates, skipping");
                    continue;
                };
                let at = ordered
                    .iter()
                    .position(|entry| entry.start > start)
                    .unwrap_or(ordered.len());
                ordered.insert(
                    at,
                    OrderedLocation {
                        annotation,
                        location,
                        role_name,
                        start,
                        end,
                    },
                );
            }
        }
        debug!(%cd, locations = ordered.len(), "ordered sequence annotations");
        Ok(ordered)
    }

    // ==================== Combinatorial derivations ====================

    /// `(derivation, strategy, ?)`
    pub fn strategy(&self, derivation: &Term) -> Option<&'g Term> {
        self.object(derivation, Predicate::Strategy)
    }

    /// `(derivation, template, ?)`
    pub fn template(&self, derivation: &Term) -> Option<&'g Term> {
        self.object(derivation, Predicate::Template)
    }

    /// `(derivation, variableComponent, ?)`
    pub fn variable_components(&self, derivation: &Term) -> Vec<&'g Term> {
        self.objects(derivation, Predicate::VariableComponent)
    }

    /// `(vc, variable, ?)`, which must exist.
    pub fn variable(&self, variable_component: &Term) -> QueryResult<&'g Term> {
        self.require(variable_component, Predicate::Variable)
    }

    /// `(vc, operator, ?)`, which must exist.
    pub fn operator(&self, variable_component: &Term) -> QueryResult<&'g Term> {
        self.require(variable_component, Predicate::Operator)
    }

    /// `(vc, variant, ?)`
    pub fn variants(&self, variable_component: &Term) -> Vec<&'g Term> {
        self.objects(variable_component, Predicate::Variant)
    }

    /// `(vc, variantCollection, ?)`
    pub fn variant_collections(&self, variable_component: &Term) -> Vec<&'g Term> {
        self.objects(variable_component, Predicate::VariantCollection)
    }

    /// `(collection, member, ?)`
    pub fn members(&self, collection: &Term) -> Vec<&'g Term> {
        self.objects(collection, Predicate::Member)
    }
}
