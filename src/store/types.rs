use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a pet is created.
pub type PetId = i64;

/// A pet held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Server-assigned, immutable once issued.
    pub id: PetId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Creation input for a pet. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl NewPet {
    pub fn new(name: impl Into<String>, tag: Option<&str>) -> Self {
        Self {
            name: name.into(),
            tag: tag.map(str::to_string),
        }
    }
}

/// Restrictions applied by `PetStore::find_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    /// When set, only pets whose tag equals one of these values are returned.
    /// A pet is emitted once per matching entry, so repeated tags repeat the pet.
    pub tags: Option<Vec<String>>,
    /// Maximum number of pets to return.
    pub limit: Option<usize>,
}

impl PetFilter {
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(Into::into).collect()),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
