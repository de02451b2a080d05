//! Free-form body record echoed back by the body demo route.

use serde::{Deserialize, Deserializer, Serialize};

/// A record with a nullable attribute whose key is still required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub attr1: Option<String>,
    pub attr2: i64,
}

// A plain `Option` field treats a missing key as `None`; this one must be present.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
