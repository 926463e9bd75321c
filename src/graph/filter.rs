//! Declarative vertex predicates.

use std::collections::HashSet;

use crate::types::Vertex;

/// Criteria for selecting vertices. A vertex matches when it satisfies
/// every criterion that is set; the default filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct VertexFilter {
    /// Accept only these names. Empty = any name.
    pub names: HashSet<String>,
    /// Accept only names starting with this prefix.
    pub prefix: Option<String>,
    /// Minimum out-degree (inclusive).
    pub min_out_degree: Option<usize>,
    /// Maximum out-degree (inclusive).
    pub max_out_degree: Option<usize>,
}

impl VertexFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given names.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn min_out_degree(mut self, degree: usize) -> Self {
        self.min_out_degree = Some(degree);
        self
    }

    pub fn max_out_degree(mut self, degree: usize) -> Self {
        self.max_out_degree = Some(degree);
        self
    }

    /// Evaluate the filter against one vertex.
    pub fn matches(&self, vertex: &Vertex) -> bool {
        if !self.names.is_empty() && !self.names.contains(vertex.name()) {
            return false;
        }
        if let Some(ref prefix) = self.prefix {
            if !vertex.name().starts_with(prefix.as_str()) {
                return false;
            }
        }
        let degree = vertex.out_degree();
        if self.min_out_degree.is_some_and(|min| degree < min) {
            return false;
        }
        if self.max_out_degree.is_some_and(|max| degree > max) {
            return false;
        }
        true
    }
}
