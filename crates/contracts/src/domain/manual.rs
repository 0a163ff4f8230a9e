use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Identified;

/// An authored manual. `prevent_edit`/`prevent_delete` are server-owned
/// locks the UI must honour before offering any mutation (defense in
/// depth alongside server-side enforcement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manual {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub prevent_edit: bool,
    #[serde(default)]
    pub prevent_delete: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualSection {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl Identified for Manual {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for ManualSection {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Content {
    fn id(&self) -> i64 {
        self.id
    }
}
