pub mod inflector;
mod pattern;
pub mod text;

#[cfg(feature = "global")]
pub mod global;

pub use inflector::{
    CacheKind, CaseMode, Direction, InflectionCache, Inflector, IrregularMap, LoadError, Rule,
    RuleCategory, RuleError, RuleFile, RuleTable, RuleUpdate, TableUpdate, TransliterationMap,
    TransliterationRule, compute_suggestions,
};
pub use pattern::quote;
pub use text::{
    CleanMethod, CleanOptions, Data, Format, InsertOptions, TextError, TokenizeOptions, Value,
    clean, extract, insert, tokenize,
};

/// Creates named template [`Data`] from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans and
/// strings can be passed directly. Pair order is kept.
///
/// # Example
///
/// ```
/// use wordform::{InsertOptions, insert, params};
///
/// let data = params! { "name" => "Bob", "age" => 65 };
/// assert_eq!(data.len(), 2);
/// let text = insert("{:name} is {:age}", data, &InsertOptions::default()).unwrap();
/// assert_eq!(text, "Bob is 65");
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Data::Named(::std::vec::Vec::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        $crate::Data::Named(::std::vec![
            $(
                ($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value)),
            )+
        ])
    };
}
