use serde::{Deserialize, Serialize};

use super::difficulty::{breakdown, Difficulty};
use super::interview::{InterviewQuestion, InterviewTopic};

/// Full interview track for one job role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoleConfig {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub tagline: String,
    pub topics: Vec<InterviewTopic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMeta {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub tagline: &'static str,
}

impl RoleConfig {
    pub fn questions(&self) -> impl Iterator<Item = (&InterviewTopic, &InterviewQuestion)> {
        self.topics
            .iter()
            .flat_map(|t| t.questions.iter().map(move |q| (t, q)))
    }

    /// First question with this id, searching topics in order.
    pub fn question(&self, id: &str) -> Option<(&InterviewTopic, &InterviewQuestion)> {
        self.questions().find(|(_, q)| q.id == id)
    }

    pub fn topic(&self, id: &str) -> Option<&InterviewTopic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|t| t.questions.len()).sum()
    }

    pub fn difficulty_breakdown(&self) -> [(Difficulty, usize); 3] {
        breakdown(self.questions().map(|(_, q)| q.difficulty))
    }
}
