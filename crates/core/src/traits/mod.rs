//! Collaborator traits
//!
//! The orchestrator depends only on these seams. Each is `Send + Sync` so a
//! single long-lived instance can be injected and shared by concurrent
//! requests.

mod detector;
mod scorer;
mod translator;

pub use detector::LanguageDetector;
pub use scorer::PolarityScorer;
pub use translator::Translator;
