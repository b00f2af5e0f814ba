use serde::{Deserialize, Serialize};

use super::difficulty::{breakdown, Difficulty};
use super::doc::{DocCategory, DocEntry};

/// Full content bundle for one language being taught.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LanguageConfig {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub doc_url: String,
    pub tagline: String,
    pub playground_url: String,
    pub execution_api: String,
    pub categories: Vec<DocCategory>,
}

/// Static metadata of a language, before its partitions are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMeta {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub doc_url: &'static str,
    pub tagline: &'static str,
    pub playground_url: &'static str,
    pub execution_api: &'static str,
}

impl LanguageConfig {
    /// Every entry in navigation order, paired with its category.
    pub fn entries(&self) -> impl Iterator<Item = (&DocCategory, &DocEntry)> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c, e)))
    }

    pub fn entry(&self, id: &str) -> Option<(&DocCategory, &DocEntry)> {
        self.entries().find(|(_, e)| e.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&DocCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn difficulty_breakdown(&self) -> [(Difficulty, usize); 3] {
        breakdown(self.entries().map(|(_, e)| e.difficulty))
    }
}
