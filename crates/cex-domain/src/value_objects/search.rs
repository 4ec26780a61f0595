//! Search-Related Value Objects
//!
//! Value objects representing vector search hits.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Category of an entity stored in the vector index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A noun-like concept
    Thing,
    /// A verb-like concept
    Action,
}

impl Kind {
    /// Singular name of the kind
    pub fn name(self) -> &'static str {
        match self {
            Self::Thing => "thing",
            Self::Action => "action",
        }
    }

    /// Plural name, used as the collection segment of beacons
    pub fn plural(self) -> &'static str {
        match self {
            Self::Thing => "things",
            Self::Action => "actions",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value Object: Vector Search Hit
///
/// Contains some info of a concept, but not all. The `id` can be used to
/// retrieve the full concept from the storage that owns it.
///
/// ## Business Rules
///
/// - `score` is passed through from the searcher (higher is conventionally better)
/// - `vector` may be empty when the searcher does not return stored vectors
/// - `beacon` is empty until the explorer annotates the result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSearchResult {
    /// Identifier of the matched entity
    pub id: Uuid,
    /// Category of the matched entity
    pub kind: Kind,
    /// Class of the matched entity
    pub class_name: String,
    /// Similarity score as returned by the searcher
    pub score: f32,
    /// The entity's own embedding
    #[serde(default)]
    pub vector: Vec<f32>,
    /// Canonical locator, computed by the explorer
    #[serde(default)]
    pub beacon: String,
}

impl VectorSearchResult {
    /// Create an un-annotated result
    pub fn new(id: Uuid, kind: Kind, class_name: impl Into<String>, score: f32) -> Self {
        Self {
            id,
            kind,
            class_name: class_name.into(),
            score,
            vector: Vec::new(),
            beacon: String::new(),
        }
    }

    /// Attach the entity's embedding
    #[must_use]
    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.vector = vector;
        self
    }
}
