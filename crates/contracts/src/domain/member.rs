use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Identified for Member {
    fn id(&self) -> i64 {
        self.id
    }
}
