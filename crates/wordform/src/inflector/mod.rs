//! Rule-driven word inflection.

mod cache;
mod defaults;
mod engine;
mod error;
mod file;
mod rule;
mod table;
mod transliteration;
mod update;

pub use cache::{CacheKind, InflectionCache};
pub use engine::Inflector;
pub use error::{LoadError, RuleError, compute_suggestions};
pub use file::RuleFile;
pub use rule::{CaseMode, Rule};
pub use table::{Direction, IrregularMap, RuleTable};
pub use transliteration::{TransliterationMap, TransliterationRule};
pub use update::{RuleCategory, RuleUpdate, TableUpdate};
