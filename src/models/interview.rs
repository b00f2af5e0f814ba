use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterviewTopic {
    pub id: String,
    pub label: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterviewQuestion {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_examples: Vec<CodeExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_mistakes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_takeaway: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodeExample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub language: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_lists_default_empty() {
        let q: InterviewQuestion = serde_json::from_value(json!({
            "id": "event-loop",
            "title": "Explain the event loop",
            "difficulty": "intermediate",
            "answer": "A single thread drains the task queue..."
        }))
        .unwrap();
        assert!(q.code_examples.is_empty());
        assert!(q.follow_ups.is_empty());
        assert!(q.key_takeaway.is_none());
    }

    #[test]
    fn test_empty_lists_not_serialized() {
        let q = InterviewQuestion {
            id: "idempotency".to_string(),
            title: "What is idempotency?".to_string(),
            difficulty: Difficulty::Beginner,
            answer: "Repeating the request has the same effect.".to_string(),
            code_examples: Vec::new(),
            tips: Vec::new(),
            common_mistakes: Vec::new(),
            follow_ups: vec!["Is POST idempotent?".to_string()],
            tags: vec!["http".to_string()],
            key_takeaway: None,
        };
        let value = serde_json::to_value(&q).unwrap();
        assert!(value.get("codeExamples").is_none());
        assert_eq!(value["followUps"][0], "Is POST idempotent?");
    }

    #[test]
    fn test_misspelled_field_rejected() {
        let err = serde_json::from_value::<InterviewQuestion>(json!({
            "id": "cap",
            "title": "CAP theorem",
            "difficulty": "advanced",
            "answer": "Pick two under partition.",
            "keyTakeAway": "Partitions happen."
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `keyTakeAway`"));
    }
}
