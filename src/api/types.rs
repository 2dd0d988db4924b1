use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single list entry: id, title, completion flag.
///
/// Fetched todos keep their server-assigned ids; locally created ones get
/// a fresh v4 UUID via [`Todo::new`]. Ids are unique within the list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Creates a locally-authored todo, not yet completed.
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            completed: false,
        }
    }
}

/// The reference endpoint serves numeric ids while locally created todos
/// carry UUID strings. Accept either representation and normalize to a
/// `String`.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(u64),
        Str(String),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Str(s) => s,
    })
}
