//! Text processing for the sentiment pipeline
//!
//! This crate provides the concrete collaborators and the decision core:
//! - **Detection**: script pass + trigram language identification
//! - **Dialect**: romanized-Tamil ("Thanglish") marker heuristic
//! - **Translation**: HTTP sidecar client and pass-through translator
//! - **Polarity**: deterministic lexical polarity scorer
//! - **Sentiment**: keyword-priority classifier with polarity fallback

pub mod detection;
pub mod dialect;
pub mod polarity;
pub mod sentiment;
pub mod translation;

pub use detection::{Script, ScriptDetector, WhatlangDetector};
pub use dialect::ThanglishDetector;
pub use polarity::LexicalPolarityScorer;
pub use sentiment::{Decision, KeywordClassifier};
pub use translation::{create_translator, HttpTranslator, HttpTranslatorConfig, NoopTranslator};
