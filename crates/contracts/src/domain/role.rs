use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Identified;
use crate::system::session::AccessLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub access: AccessLevel,
    pub created_at: DateTime<Utc>,
}

impl Identified for Role {
    fn id(&self) -> i64 {
        self.id
    }
}
