pub mod config;
pub mod difficulty;
pub mod doc;
pub mod interview;
pub mod language;
pub mod role;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use difficulty::Difficulty;
pub use doc::{CustomDiagram, Diagram, DocCategory, DocEntry, QuizQuestion, Section};
pub use interview::{InterviewQuestion, InterviewTopic};
pub use language::{LanguageConfig, LanguageMeta};
pub use role::{RoleConfig, RoleMeta};
