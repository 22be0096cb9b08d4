use serde::{Deserialize, Serialize};

/// A seeded, read-only city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}
