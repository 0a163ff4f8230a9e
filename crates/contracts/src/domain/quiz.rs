use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub prevent_edit: bool,
    #[serde(default)]
    pub prevent_delete: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSection {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

impl Identified for Quiz {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for QuizSection {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Question {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Answer {
    fn id(&self) -> i64 {
        self.id
    }
}
