//! Content validation.
//!
//! A validation pass walks a composed config once and collects every
//! finding instead of stopping at the first one. Paths in findings use the
//! wire field names, e.g. `categories[1].entries[0].quiz[2]`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    CustomDiagram, Diagram, DocCategory, DocEntry, InterviewQuestion, InterviewTopic,
    LanguageConfig, QuizQuestion, RoleConfig, Section,
};

const ROOT: &str = "(root)";

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Violation {
    #[error("{path}: {message}")]
    SchemaViolation { path: String, message: String },

    #[error("duplicate {collection} id '{id}' at {first} and {second}")]
    DuplicateId {
        collection: String,
        id: String,
        first: String,
        second: String,
    },

    #[error("{path}: correctIndex {index} is out of range for {options} options")]
    InvalidQuizIndex {
        path: String,
        index: usize,
        options: usize,
    },

    #[error("{path}: quiz question has {options} option(s), needs at least 2")]
    TooFewOptions { path: String, options: usize },

    #[error("{path}: highlight line {line} is outside the code block ({lines} lines)")]
    InvalidHighlightLine { path: String, line: u32, lines: usize },

    #[error("{path}: {message}")]
    InvalidDiagram { path: String, message: String },
}

/// Findings that do not fail a build unless strict mode is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Warning {
    EmptyCollection { path: String, collection: String },
    DuplicateTag { path: String, tag: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EmptyCollection { path, collection } => {
                write!(f, "{}: {} is empty", path, collection)
            }
            Warning::DuplicateTag { path, tag } => {
                write!(f, "{}: tag '{}' is listed more than once", path, tag)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub target: String,
    pub checked_at: String,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn passes(&self, strict: bool) -> bool {
        self.is_ok() && !(strict && !self.warnings.is_empty())
    }
}

#[derive(Default)]
struct Validator {
    errors: Vec<Violation>,
    warnings: Vec<Warning>,
}

impl Validator {
    fn require(&mut self, path: &str, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(Violation::SchemaViolation {
                path: path.to_string(),
                message: format!("required field '{}' is blank", field),
            });
        }
    }

    fn non_empty(&mut self, path: &str, collection: &str, len: usize) {
        if len == 0 {
            self.warnings.push(Warning::EmptyCollection {
                path: path.to_string(),
                collection: collection.to_string(),
            });
        }
    }

    /// Reports each repeated id against the position where it first appeared.
    fn unique_ids<'a>(
        &mut self,
        collection: &str,
        items: impl IntoIterator<Item = (&'a str, String)>,
    ) {
        let mut seen: HashMap<&'a str, String> = HashMap::new();
        for (id, path) in items {
            match seen.get(id) {
                Some(first) => self.errors.push(Violation::DuplicateId {
                    collection: collection.to_string(),
                    id: id.to_string(),
                    first: first.clone(),
                    second: path,
                }),
                None => {
                    seen.insert(id, path);
                }
            }
        }
    }

    fn unique_tags(&mut self, path: &str, tags: &[String]) {
        let mut seen = HashSet::new();
        for tag in tags {
            if !seen.insert(tag.as_str()) {
                self.warnings.push(Warning::DuplicateTag {
                    path: path.to_string(),
                    tag: tag.clone(),
                });
            }
        }
    }

    /// Deserializes one record, reporting a shape error at `path` on failure.
    fn parse_record<T: DeserializeOwned>(&mut self, path: &str, value: Value) -> Option<T> {
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                self.errors.push(Violation::SchemaViolation {
                    path: path.to_string(),
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Splits the child list `key` off a record so the record and each child
    /// can be deserialized separately. The record is parsed with an empty list
    /// in its place.
    fn parse_parent<T: DeserializeOwned>(
        &mut self,
        path: &str,
        mut value: Value,
        key: &str,
    ) -> (Option<T>, Vec<Value>) {
        let children = match value.get_mut(key).map(std::mem::take) {
            Some(Value::Array(children)) => children,
            _ => {
                self.errors.push(Violation::SchemaViolation {
                    path: path.to_string(),
                    message: format!("expected an object with a `{}` array", key),
                });
                return (None, Vec::new());
            }
        };
        value[key] = Value::Array(Vec::new());
        (self.parse_record(path, value), children)
    }

    fn finish(self, target: &str) -> ValidationReport {
        let report = ValidationReport {
            target: target.to_string(),
            checked_at: Local::now().to_rfc3339(),
            errors: self.errors,
            warnings: self.warnings,
        };
        for warning in &report.warnings {
            warn!("{}: {}", report.target, warning);
        }
        info!(
            "Validated '{}': {} error(s), {} warning(s)",
            report.target,
            report.errors.len(),
            report.warnings.len()
        );
        report
    }
}

/// A category and the entries of it that are available for checking.
///
/// Indices are positions in the source, so findings keep their wire paths
/// even when neighbouring records failed to parse. `category` is `None` when
/// the category record itself did not parse.
struct CategoryView<'a> {
    index: usize,
    category: Option<&'a DocCategory>,
    len: usize,
    entries: Vec<(usize, &'a DocEntry)>,
}

struct TopicView<'a> {
    index: usize,
    topic: Option<&'a InterviewTopic>,
    len: usize,
    questions: Vec<(usize, &'a InterviewQuestion)>,
}

pub fn validate_language(config: &LanguageConfig) -> ValidationReport {
    let mut v = Validator::default();
    v.require(ROOT, "id", &config.id);
    v.require(ROOT, "label", &config.label);
    v.non_empty(ROOT, "categories", config.categories.len());

    let views: Vec<CategoryView<'_>> = config
        .categories
        .iter()
        .enumerate()
        .map(|(index, c)| CategoryView {
            index,
            category: Some(c),
            len: c.entries.len(),
            entries: c.entries.iter().enumerate().collect(),
        })
        .collect();
    check_categories(&mut v, &views);

    v.finish(&config.id)
}

fn check_categories(v: &mut Validator, views: &[CategoryView<'_>]) {
    v.unique_ids(
        "category",
        views.iter().filter_map(|c| {
            c.category
                .map(|category| (category.id.as_str(), format!("categories[{}]", c.index)))
        }),
    );
    v.unique_ids(
        "entry",
        views.iter().flat_map(|c| {
            c.entries.iter().map(move |&(ei, e)| {
                (e.id.as_str(), format!("categories[{}].entries[{}]", c.index, ei))
            })
        }),
    );

    for view in views {
        let path = format!("categories[{}]", view.index);
        if let Some(category) = view.category {
            v.require(&path, "id", &category.id);
            v.require(&path, "label", &category.label);
            v.non_empty(&path, "entries", view.len);
        }

        for &(ei, entry) in &view.entries {
            validate_entry(v, &format!("{}.entries[{}]", path, ei), entry);
        }
    }
}
fn validate_entry(v: &mut Validator, path: &str, entry: &DocEntry) {
    v.require(path, "id", &entry.id);
    v.require(path, "title", &entry.title);
    v.non_empty(path, "sections", entry.sections.len());
    v.unique_tags(path, &entry.tags);

    for (si, section) in entry.sections.iter().enumerate() {
        validate_section(v, &format!("{}.sections[{}]", path, si), section);
    }

    if let Some(quiz) = &entry.quiz {
        v.non_empty(path, "quiz", quiz.len());
        for (qi, question) in quiz.iter().enumerate() {
            validate_quiz_question(v, &format!("{}.quiz[{}]", path, qi), question);
        }
    }

    if let Some(challenge) = &entry.challenge {
        let path = format!("{}.challenge", path);
        v.require(&path, "prompt", &challenge.prompt);
        v.require(&path, "solutionCode", &challenge.solution_code);
    }
}

fn validate_section(v: &mut Validator, path: &str, section: &Section) {
    v.require(path, "heading", &section.heading);

    if let Some(lines) = &section.code_highlight_lines {
        match &section.code {
            Some(code) => {
                let count = code.lines().count();
                for &line in lines {
                    if line == 0 || line as usize > count {
                        v.errors.push(Violation::InvalidHighlightLine {
                            path: path.to_string(),
                            line,
                            lines: count,
                        });
                    }
                }
            }
            None if !lines.is_empty() => v.errors.push(Violation::SchemaViolation {
                path: path.to_string(),
                message: "codeHighlightLines is set but the section has no code".to_string(),
            }),
            None => {}
        }
    }

    if let Some(diagram) = &section.diagram {
        validate_diagram(v, &format!("{}.diagram", path), diagram);
    }
}

fn validate_diagram(v: &mut Validator, path: &str, diagram: &Diagram) {
    let mut invalid = |message: String| {
        v.errors.push(Violation::InvalidDiagram {
            path: path.to_string(),
            message,
        })
    };

    match diagram {
        Diagram::Mermaid { code, .. } => {
            if code.trim().is_empty() {
                invalid("mermaid diagram has no source".to_string());
            }
        }
        Diagram::Custom { data, .. } => match data {
            CustomDiagram::MemoryLayout { regions } => {
                if regions.is_empty() {
                    invalid("memory-layout diagram has no regions".to_string());
                }
            }
            CustomDiagram::Array { items, highlight } => {
                for &index in highlight {
                    if index >= items.len() {
                        invalid(format!(
                            "array highlight index {} is out of range for {} items",
                            index,
                            items.len()
                        ));
                    }
                }
            }
            CustomDiagram::HashMap { buckets, .. } => {
                if *buckets == Some(0) {
                    invalid("hash-map diagram declares zero buckets".to_string());
                }
            }
        },
    }
}

fn validate_quiz_question(v: &mut Validator, path: &str, question: &QuizQuestion) {
    v.require(path, "question", &question.question);

    let options = question.options.len();
    if options < 2 {
        v.errors.push(Violation::TooFewOptions {
            path: path.to_string(),
            options,
        });
    }
    if question.correct_index >= options {
        v.errors.push(Violation::InvalidQuizIndex {
            path: path.to_string(),
            index: question.correct_index,
            options,
        });
    }
}


pub fn validate_role(config: &RoleConfig) -> ValidationReport {
    let mut v = Validator::default();
    v.require(ROOT, "id", &config.id);
    v.require(ROOT, "label", &config.label);
    v.non_empty(ROOT, "topics", config.topics.len());

    let views: Vec<TopicView<'_>> = config
        .topics
        .iter()
        .enumerate()
        .map(|(index, t)| TopicView {
            index,
            topic: Some(t),
            len: t.questions.len(),
            questions: t.questions.iter().enumerate().collect(),
        })
        .collect();
    check_topics(&mut v, &views);

    v.finish(&config.id)
}

fn check_topics(v: &mut Validator, views: &[TopicView<'_>]) {
    v.unique_ids(
        "topic",
        views.iter().filter_map(|t| {
            t.topic
                .map(|topic| (topic.id.as_str(), format!("topics[{}]", t.index)))
        }),
    );

    for view in views {
        let path = format!("topics[{}]", view.index);
        if let Some(topic) = view.topic {
            v.require(&path, "id", &topic.id);
            v.require(&path, "label", &topic.label);
            v.non_empty(&path, "questions", view.len);
        }

        v.unique_ids(
            "question",
            view.questions
                .iter()
                .map(|&(qi, q)| (q.id.as_str(), format!("{}.questions[{}]", path, qi))),
        );

        for &(qi, question) in &view.questions {
            validate_interview_question(v, &format!("{}.questions[{}]", path, qi), question);
        }
    }
}

fn validate_interview_question(v: &mut Validator, path: &str, question: &InterviewQuestion) {
    v.require(path, "id", &question.id);
    v.require(path, "title", &question.title);
    v.require(path, "answer", &question.answer);
    v.unique_tags(path, &question.tags);

    for (i, example) in question.code_examples.iter().enumerate() {
        v.require(&format!("{}.codeExamples[{}]", path, i), "code", &example.code);
    }
}

/// Validates a config read from outside the binary, e.g. a JSON file.
///
/// The kind is detected from the top-level key: `categories` for a language,
/// `topics` for a role. Each record is deserialized on its own, so one
/// malformed record is reported as a schema violation at its path and the
/// rest of the document is still checked. The report is named after
/// `source_name`.
pub fn validate_document(source_name: &str, text: &str) -> ValidationReport {
    let mut v = Validator::default();

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            v.errors.push(Violation::SchemaViolation {
                path: format!("line {}, column {}", e.line(), e.column()),
                message: e.to_string(),
            });
            return v.finish(source_name);
        }
    };

    if value.get("categories").is_some() {
        debug!("Validating '{}' as a language config", source_name);
        check_language_document(&mut v, value);
    } else if value.get("topics").is_some() {
        debug!("Validating '{}' as a role config", source_name);
        check_role_document(&mut v, value);
    } else {
        v.errors.push(Violation::SchemaViolation {
            path: ROOT.to_string(),
            message: "document has neither 'categories' nor 'topics'".to_string(),
        });
    }

    v.finish(source_name)
}

fn check_language_document(v: &mut Validator, value: Value) {
    let (root, categories) = v.parse_parent::<LanguageConfig>(ROOT, value, "categories");
    if let Some(root) = &root {
        v.require(ROOT, "id", &root.id);
        v.require(ROOT, "label", &root.label);
        v.non_empty(ROOT, "categories", categories.len());
    }

    let mut parsed: Vec<(usize, Option<DocCategory>, usize, Vec<(usize, DocEntry)>)> = Vec::new();
    for (ci, category) in categories.into_iter().enumerate() {
        let path = format!("categories[{}]", ci);
        let (header, entries) = v.parse_parent::<DocCategory>(&path, category, "entries");
        let len = entries.len();
        let mut ok = Vec::new();
        for (ei, entry) in entries.into_iter().enumerate() {
            let entry_path = format!("{}.entries[{}]", path, ei);
            if let Some(entry) = v.parse_record::<DocEntry>(&entry_path, entry) {
                ok.push((ei, entry));
            }
        }
        parsed.push((ci, header, len, ok));
    }

    let views: Vec<CategoryView<'_>> = parsed
        .iter()
        .map(|(index, header, len, entries)| CategoryView {
            index: *index,
            category: header.as_ref(),
            len: *len,
            entries: entries.iter().map(|(ei, e)| (*ei, e)).collect(),
        })
        .collect();
    check_categories(v, &views);
}

fn check_role_document(v: &mut Validator, value: Value) {
    let (root, topics) = v.parse_parent::<RoleConfig>(ROOT, value, "topics");
    if let Some(root) = &root {
        v.require(ROOT, "id", &root.id);
        v.require(ROOT, "label", &root.label);
        v.non_empty(ROOT, "topics", topics.len());
    }

    let mut parsed: Vec<(usize, Option<InterviewTopic>, usize, Vec<(usize, InterviewQuestion)>)> =
        Vec::new();
    for (ti, topic) in topics.into_iter().enumerate() {
        let path = format!("topics[{}]", ti);
        let (header, questions) = v.parse_parent::<InterviewTopic>(&path, topic, "questions");
        let len = questions.len();
        let mut ok = Vec::new();
        for (qi, question) in questions.into_iter().enumerate() {
            let question_path = format!("{}.questions[{}]", path, qi);
            if let Some(question) = v.parse_record::<InterviewQuestion>(&question_path, question) {
                ok.push((qi, question));
            }
        }
        parsed.push((ti, header, len, ok));
    }

    let views: Vec<TopicView<'_>> = parsed
        .iter()
        .map(|(index, header, len, questions)| TopicView {
            index: *index,
            topic: header.as_ref(),
            len: *len,
            questions: questions.iter().map(|(qi, q)| (*qi, q)).collect(),
        })
        .collect();
    check_topics(v, &views);
}
