//! Partition composition.
//!
//! Partitions are ordered lists of categories (or topics). Composing them is
//! plain concatenation: the output lists every element of the first
//! partition, then the second, and so on. Nothing is checked here; run
//! `crate::validate` over the result.

use tracing::debug;

use crate::models::{DocCategory, InterviewTopic, LanguageConfig, LanguageMeta, RoleConfig, RoleMeta};

pub fn compose<T, P>(partitions: impl IntoIterator<Item = P>) -> Vec<T>
where
    P: IntoIterator<Item = T>,
{
    partitions.into_iter().flatten().collect()
}

impl LanguageMeta {
    pub fn assemble(&self, partitions: Vec<Vec<DocCategory>>) -> LanguageConfig {
        let partition_count = partitions.len();
        let categories = compose(partitions);
        debug!(
            "Composed language '{}' from {} partitions into {} categories",
            self.id,
            partition_count,
            categories.len()
        );

        LanguageConfig {
            id: self.id.to_string(),
            label: self.label.to_string(),
            icon: self.icon.to_string(),
            color: self.color.to_string(),
            doc_url: self.doc_url.to_string(),
            tagline: self.tagline.to_string(),
            playground_url: self.playground_url.to_string(),
            execution_api: self.execution_api.to_string(),
            categories,
        }
    }
}

impl RoleMeta {
    pub fn assemble(&self, partitions: Vec<Vec<InterviewTopic>>) -> RoleConfig {
        let partition_count = partitions.len();
        let topics = compose(partitions);
        debug!(
            "Composed role '{}' from {} partitions into {} topics",
            self.id,
            partition_count,
            topics.len()
        );

        RoleConfig {
            id: self.id.to_string(),
            label: self.label.to_string(),
            icon: self.icon.to_string(),
            color: self.color.to_string(),
            tagline: self.tagline.to_string(),
            topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, DocEntry};

    fn entry(id: &str) -> DocEntry {
        DocEntry {
            id: id.to_string(),
            title: id.to_uppercase(),
            difficulty: Difficulty::Beginner,
            tags: Vec::new(),
            cheat_sheet: None,
            sections: Vec::new(),
            quiz: None,
            challenge: None,
        }
    }

    fn category(id: &str, entries: &[&str]) -> DocCategory {
        DocCategory {
            id: id.to_string(),
            label: id.to_string(),
            icon: "book".to_string(),
            entries: entries.iter().map(|e| entry(e)).collect(),
        }
    }

    const META: LanguageMeta = LanguageMeta {
        id: "go",
        label: "Go",
        icon: "go",
        color: "#00ADD8",
        doc_url: "https://go.dev/doc/",
        tagline: "Simple, fast, concurrent",
        playground_url: "https://go.dev/play/",
        execution_api: "go",
    };

    #[test]
    fn test_two_partitions_in_order() {
        let p1 = vec![category("cat-a", &["e1"])];
        let p2 = vec![category("cat-b", &["e2"])];
        let composed = compose(vec![p1.clone(), p2.clone()]);
        assert_eq!(composed, vec![p1[0].clone(), p2[0].clone()]);
        let ids: Vec<&str> = composed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cat-a", "cat-b"]);
    }

    #[test]
    fn test_order_preserved_within_and_across_partitions() {
        let composed = compose(vec![vec![1, 2], vec![], vec![3], vec![4, 5]]);
        assert_eq!(composed, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_associative() {
        let a = vec!["a1", "a2"];
        let b = vec!["b1"];
        let c = vec!["c1", "c2"];

        let mut left = compose(vec![a.clone(), b.clone()]);
        left.extend(c.clone());
        let flat = compose(vec![a.clone(), b.clone(), c.clone()]);
        let right = compose(vec![a, compose(vec![b, c])]);

        assert_eq!(left, flat);
        assert_eq!(right, flat);
    }

    #[test]
    fn test_idempotent() {
        let partitions = vec![vec![category("x", &["1", "2"])], vec![category("y", &["3"])]];
        assert_eq!(compose(partitions.clone()), compose(partitions));
    }

    #[test]
    fn test_empty_input() {
        let composed: Vec<DocCategory> = compose(Vec::<Vec<DocCategory>>::new());
        assert!(composed.is_empty());
    }

    #[test]
    fn test_assemble_attaches_metadata() {
        let config = META.assemble(vec![
            vec![category("basics", &["hello"])],
            vec![category("types", &["structs", "maps"])],
        ]);
        assert_eq!(config.id, "go");
        assert_eq!(config.playground_url, "https://go.dev/play/");
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.entry_count(), 3);
    }

    #[test]
    fn test_assemble_role() {
        let meta = RoleMeta {
            id: "frontend",
            label: "Frontend Developer",
            icon: "layout",
            color: "#F59E0B",
            tagline: "Browsers and UI",
        };
        let topic = InterviewTopic {
            id: "css".to_string(),
            label: "CSS".to_string(),
            icon: "palette".to_string(),
            description: None,
            questions: Vec::new(),
        };
        let role = meta.assemble(vec![vec![topic.clone()], vec![]]);
        assert_eq!(role.topics, vec![topic]);
        assert_eq!(role.label, "Frontend Developer");
    }
}
