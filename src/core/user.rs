use serde::{Deserialize, Serialize};

/// User record managed by the registry.
///
/// The id is caller-supplied and never generated or checked for uniqueness;
/// lookups resolve to the first record with a matching id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: i64, name: Option<String>, email: Option<String>) -> Self {
        Self { id, name, email }
    }

    /// Case-insensitive substring match of `fragment` against the name.
    /// A record without a name never matches.
    pub fn name_contains(&self, fragment: &str) -> bool {
        match &self.name {
            Some(name) => name.to_lowercase().contains(&fragment.to_lowercase()),
            None => false,
        }
    }
}
