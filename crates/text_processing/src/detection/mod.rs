//! Language detection
//!
//! [`WhatlangDetector`] is the bundled [`mozhi_core::LanguageDetector`];
//! [`ScriptDetector`] is its Unicode-block first pass.

mod script;
mod trigram;

pub use script::{Script, ScriptDetector};
pub use trigram::WhatlangDetector;
