//! Fixed-depth relational queries: grandparents, siblings, cousins.
//!
//! An edge `A -> B` makes `B` a "parent" of `A`. Every query walks outgoing
//! edges a fixed number of hops, so cycles cannot cause unbounded work.
//! Results are sets: each name appears once and the order is unspecified.

use std::collections::HashSet;

use log::trace;

use crate::types::Vertex;

use super::{Graph, VertexFilter};

/// The relational queries a [`Graph`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Two outgoing hops.
    Grandparents,
    /// Two outgoing hops, excluding the start vertex.
    Siblings,
    /// Three outgoing hops through a sibling, excluding the start vertex.
    Cousins,
}

impl Relation {
    /// Return a human-readable name for this relation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grandparents => "grandparents",
            Self::Siblings => "siblings",
            Self::Cousins => "cousins",
        }
    }

    /// Parse a relation from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "grandparents" | "grandparent" => Some(Self::Grandparents),
            "siblings" | "sibling" => Some(Self::Siblings),
            "cousins" | "cousin" => Some(Self::Cousins),
            _ => None,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Graph {
    /// Run the query for `relation` from `name`.
    pub fn query(&self, relation: Relation, name: &str) -> Vec<String> {
        match relation {
            Relation::Grandparents => self.query_grandparents(name),
            Relation::Siblings => self.query_siblings(name),
            Relation::Cousins => self.query_cousins(name),
        }
    }

    /// Vertices reachable from `name` by exactly two outgoing edges.
    ///
    /// Returns an empty vec if `name` is absent.
    pub fn query_grandparents(&self, name: &str) -> Vec<String> {
        let Some(vertex) = self.vertex(name) else {
            return Vec::new();
        };

        let mut grandparents = HashSet::new();
        for parent in self.targets(vertex) {
            for grandparent in self.targets(parent) {
                grandparents.insert(grandparent.name());
            }
        }

        trace!("{:?} has {} grandparents", name, grandparents.len());
        into_names(grandparents)
    }

    /// Other successors of the vertices `name` points to, never `name` itself.
    ///
    /// Returns an empty vec if `name` is absent.
    pub fn query_siblings(&self, name: &str) -> Vec<String> {
        let Some(vertex) = self.vertex(name) else {
            return Vec::new();
        };

        let mut siblings = HashSet::new();
        for sibling in self.siblings_of(vertex) {
            siblings.insert(sibling.name());
        }

        trace!("{:?} has {} siblings", name, siblings.len());
        into_names(siblings)
    }

    /// Successors of the siblings of `name`, never `name` itself.
    ///
    /// Returns an empty vec if `name` is absent.
    pub fn query_cousins(&self, name: &str) -> Vec<String> {
        let Some(vertex) = self.vertex(name) else {
            return Vec::new();
        };

        let mut cousins = HashSet::new();
        for sibling in self.siblings_of(vertex) {
            for cousin in self.targets(sibling) {
                if cousin.id() != vertex.id() {
                    cousins.insert(cousin.name());
                }
            }
        }

        trace!("{:?} has {} cousins", name, cousins.len());
        into_names(cousins)
    }

    /// All vertices for which `predicate` returns true, in no particular order.
    ///
    /// The predicate is called once per vertex and may keep state.
    pub fn filter_vertices<F>(&self, mut predicate: F) -> Vec<&Vertex>
    where
        F: FnMut(&Vertex) -> bool,
    {
        self.vertices().filter(|&v| predicate(v)).collect()
    }

    /// All vertices matching a declarative [`VertexFilter`].
    pub fn filter_by(&self, filter: &VertexFilter) -> Vec<&Vertex> {
        self.filter_vertices(|v| filter.matches(v))
    }

    /// Two-hop targets of `vertex` other than `vertex` itself. May repeat.
    fn siblings_of<'a>(&'a self, vertex: &'a Vertex) -> impl Iterator<Item = &'a Vertex> {
        self.targets(vertex)
            .flat_map(move |parent| self.targets(parent))
            .filter(move |sibling| sibling.id() != vertex.id())
    }
}

fn into_names(set: HashSet<&str>) -> Vec<String> {
    set.into_iter().map(str::to_owned).collect()
}
