use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// A named group of lessons, e.g. "Getting Started".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocCategory {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub entries: Vec<DocEntry>,
}

/// One self-contained tutorial lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocEntry {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheat_sheet: Option<String>,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Vec<QuizQuestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<Challenge>,
}

impl DocEntry {
    pub fn quiz_len(&self) -> usize {
        self.quiz.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Section {
    pub heading: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analogy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<Diagram>,
    /// 1-based line numbers into `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_highlight_lines: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Challenge {
    pub prompt: String,
    pub starter_code: String,
    pub solution_code: String,
    #[serde(default)]
    pub hints: Vec<String>,
}

/// Diagram attached to a section, tagged on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Diagram {
    Mermaid {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Custom {
        data: CustomDiagram,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl Diagram {
    pub fn caption(&self) -> Option<&str> {
        match self {
            Diagram::Mermaid { caption, .. } | Diagram::Custom { caption, .. } => caption.as_deref(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Diagram::Mermaid { .. } => "mermaid",
            Diagram::Custom { data, .. } => data.type_name(),
        }
    }
}

/// Structured payload of a `custom` diagram, tagged on `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CustomDiagram {
    MemoryLayout {
        regions: Vec<MemoryRegion>,
    },
    Array {
        items: Vec<String>,
        #[serde(default)]
        highlight: Vec<usize>,
    },
    HashMap {
        entries: Vec<HashMapEntry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        buckets: Option<u32>,
    },
}

impl CustomDiagram {
    pub fn type_name(&self) -> &'static str {
        match self {
            CustomDiagram::MemoryLayout { .. } => "memory-layout",
            CustomDiagram::Array { .. } => "array",
            CustomDiagram::HashMap { .. } => "hash-map",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemoryRegion {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HashMapEntry {
    pub key: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_camel_case_fields() {
        let section: Section = serde_json::from_value(json!({
            "heading": "Slices",
            "content": "A slice is a view over an array.",
            "code": "s := []int{1, 2, 3}\nfmt.Println(s)",
            "codeHighlightLines": [1]
        }))
        .unwrap();
        assert_eq!(section.code_highlight_lines, Some(vec![1]));
        assert!(section.diagram.is_none());
    }

    #[test]
    fn test_mermaid_diagram() {
        let diagram: Diagram = serde_json::from_value(json!({
            "kind": "mermaid",
            "code": "graph LR; A-->B",
            "caption": "flow"
        }))
        .unwrap();
        assert_eq!(diagram.caption(), Some("flow"));
        assert!(matches!(diagram, Diagram::Mermaid { .. }));
    }

    #[test]
    fn test_custom_diagram_nested_tag() {
        let diagram: Diagram = serde_json::from_value(json!({
            "kind": "custom",
            "data": {
                "type": "hash-map",
                "entries": [{ "key": "go", "value": "1.22" }]
            }
        }))
        .unwrap();
        match diagram {
            Diagram::Custom { data, caption } => {
                assert_eq!(data.type_name(), "hash-map");
                assert!(caption.is_none());
            }
            other => panic!("expected custom diagram, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_diagram_kind_rejected() {
        let result = serde_json::from_value::<Diagram>(json!({
            "kind": "ascii",
            "code": "+--+"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_quiz_question_wire_names() {
        let q: QuizQuestion = serde_json::from_value(json!({
            "question": "Zero value of int?",
            "options": ["nil", "0"],
            "correctIndex": 1,
            "explanation": "Numeric types default to 0."
        }))
        .unwrap();
        assert_eq!(q.correct_index, 1);
        assert!(serde_json::from_value::<QuizQuestion>(json!({
            "question": "?", "options": ["a", "b"], "correctIndex": -1, "explanation": ""
        }))
        .is_err());
    }
}
