//! Shipped content.
//!
//! Each language or role is split into partitions: JSON documents embedded
//! at build time, each holding an ordered list of categories or topics.
//! Partition boundaries carry no meaning; only their order does.

mod backend;
mod frontend;
mod go;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ContentError, Result};
use crate::models::{LanguageConfig, RoleConfig};
use crate::validate::{validate_language, validate_role, ValidationReport};

/// One embedded content file.
pub struct Partition {
    pub name: &'static str,
    pub source: &'static str,
}

impl Partition {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let items: Vec<T> =
            serde_json::from_str(self.source).map_err(|source| ContentError::Partition {
                partition: self.name.to_string(),
                source,
            })?;
        debug!("Parsed partition '{}' ({} items)", self.name, items.len());
        Ok(items)
    }
}

fn parse_all<T: DeserializeOwned>(partitions: &[Partition]) -> Result<Vec<Vec<T>>> {
    partitions.iter().map(Partition::parse::<T>).collect()
}

/// A language or a role, as resolved from a track id.
#[derive(Debug, Clone, Copy)]
pub enum Track<'a> {
    Language(&'a LanguageConfig),
    Role(&'a RoleConfig),
}

impl<'a> Track<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Track::Language(l) => &l.id,
            Track::Role(r) => &r.id,
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            Track::Language(l) => &l.label,
            Track::Role(r) => &r.label,
        }
    }

    pub fn validate(&self) -> ValidationReport {
        match self {
            Track::Language(l) => validate_language(l),
            Track::Role(r) => validate_role(r),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let result = match self {
            Track::Language(l) => serde_json::to_string_pretty(l),
            Track::Role(r) => serde_json::to_string_pretty(r),
        };
        result.map_err(|source| ContentError::Serialize {
            id: self.id().to_string(),
            source,
        })
    }
}

/// Every shipped language and role, composed once.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub languages: Vec<LanguageConfig>,
    pub roles: Vec<RoleConfig>,
}

impl Catalog {
    pub fn load() -> Result<Self> {
        let languages = vec![go::META.assemble(parse_all(go::PARTITIONS)?)];
        let roles = vec![
            frontend::META.assemble(parse_all(frontend::PARTITIONS)?),
            backend::META.assemble(parse_all(backend::PARTITIONS)?),
        ];
        debug!(
            "Loaded catalog: {} language(s), {} role(s)",
            languages.len(),
            roles.len()
        );
        Ok(Self { languages, roles })
    }

    pub fn language(&self, id: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|l| l.id == id)
    }

    pub fn role(&self, id: &str) -> Option<&RoleConfig> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Languages are searched before roles.
    pub fn track(&self, id: &str) -> Result<Track<'_>> {
        self.language(id)
            .map(Track::Language)
            .or_else(|| self.role(id).map(Track::Role))
            .ok_or_else(|| ContentError::UnknownTrack(id.to_string()))
    }

    pub fn tracks(&self) -> impl Iterator<Item = Track<'_>> {
        self.languages
            .iter()
            .map(Track::Language)
            .chain(self.roles.iter().map(Track::Role))
    }

    pub fn validate(&self) -> Vec<ValidationReport> {
        self.tracks().map(|t| t.validate()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocCategory;

    #[test]
    fn test_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.languages.len(), 1);
        assert_eq!(catalog.roles.len(), 2);
    }

    #[test]
    fn test_shipped_content_is_valid() {
        let catalog = Catalog::load().unwrap();
        for report in catalog.validate() {
            assert!(
                report.passes(true),
                "{}: errors {:?}, warnings {:?}",
                report.target,
                report.errors,
                report.warnings
            );
        }
    }

    #[test]
    fn test_shipped_quiz_indices_in_bounds() {
        let catalog = Catalog::load().unwrap();
        for language in &catalog.languages {
            for (_, entry) in language.entries() {
                for q in entry.quiz.iter().flatten() {
                    assert!(q.options.len() >= 2, "{}", entry.id);
                    assert!(q.correct_index < q.options.len(), "{}", entry.id);
                }
            }
        }
    }

    #[test]
    fn test_go_partitions_compose_in_order() {
        let catalog = Catalog::load().unwrap();
        let language = catalog.language("go").unwrap();

        let mut expected = Vec::new();
        for partition in go::PARTITIONS {
            let categories: Vec<DocCategory> = partition.parse().unwrap();
            expected.extend(categories.into_iter().map(|c| c.id));
        }
        let actual: Vec<String> = language.categories.iter().map(|c| c.id.clone()).collect();
        assert_eq!(actual, expected);
        assert_eq!(actual.first().map(String::as_str), Some("getting-started"));
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let first = Catalog::load().unwrap();
        let second = Catalog::load().unwrap();
        assert_eq!(first.languages, second.languages);
        assert_eq!(first.roles, second.roles);
    }

    #[test]
    fn test_track_resolution() {
        let catalog = Catalog::load().unwrap();
        assert!(matches!(catalog.track("go"), Ok(Track::Language(_))));
        assert!(matches!(catalog.track("backend"), Ok(Track::Role(_))));
        assert!(matches!(
            catalog.track("cobol"),
            Err(ContentError::UnknownTrack(id)) if id == "cobol"
        ));
    }

    #[test]
    fn test_bad_partition_names_itself() {
        let partition = Partition {
            name: "broken",
            source: r#"[{ "id": "x" }]"#,
        };
        let err = partition.parse::<DocCategory>().unwrap_err();
        assert!(err.to_string().contains("'broken'"));
    }

    #[test]
    fn test_export_round_trip() {
        let catalog = Catalog::load().unwrap();
        let track = catalog.track("frontend").unwrap();
        let json = track.to_json().unwrap();
        let parsed: RoleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(Some(&parsed), catalog.role("frontend"));
    }
}
