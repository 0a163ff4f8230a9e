use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Identified for Department {
    fn id(&self) -> i64 {
        self.id
    }
}
