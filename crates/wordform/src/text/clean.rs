//! Removal of placeholders left over after [`insert`](crate::insert).

use bon::Builder;

use crate::pattern::{compile, literal, quote, replace_all};
use crate::text::error::TextError;
use crate::text::insert::InsertOptions;

const DEFAULT_WORD: &str = r"[\w,.]+";
const DEFAULT_GAP: &str = r"[\s]*(?:(?:and|or|,)[\s]*)?";

/// What kind of text is being cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanMethod {
    /// Placeholders together with the joining words around them.
    #[default]
    Text,

    /// Attributes whose value is only placeholders.
    Html,
}

/// Options for [`clean`].
#[derive(Debug, Clone, Builder)]
pub struct CleanOptions {
    #[builder(default)]
    pub method: CleanMethod,

    /// Pattern for a placeholder name.
    #[builder(default = String::from(DEFAULT_WORD), into)]
    pub word: String,

    /// Pattern for the text joining placeholders.
    #[builder(default = String::from(DEFAULT_GAP), into)]
    pub gap: String,

    #[builder(default, into)]
    pub replacement: String,

    /// With the html method, also run the text method afterwards.
    #[builder(default = true)]
    pub and_text: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        CleanOptions::builder().build()
    }
}

impl CleanOptions {
    pub fn html() -> Self {
        CleanOptions::builder().method(CleanMethod::Html).build()
    }
}

/// Remove placeholders delimited by `options.before` and `options.after`.
///
/// The cleaning options come from `options.clean`, falling back to the text
/// method with its defaults.
///
/// ```
/// use wordform::{CleanOptions, InsertOptions, insert};
///
/// let options = InsertOptions::builder().clean(CleanOptions::default()).build();
/// let text = insert("{:a}, {:b} and {:c}", [("a", "x"), ("b", "y")], &options).unwrap();
/// assert_eq!(text, "x, y");
/// ```
pub fn clean(text: &str, options: &InsertOptions) -> Result<String, TextError> {
    let defaults = CleanOptions::default();
    let settings = options.clean.as_ref().unwrap_or(&defaults);
    let before = quote(&options.before);
    let after = quote(&options.after);

    match settings.method {
        CleanMethod::Text => clean_text(text, &before, &after, settings),
        CleanMethod::Html => {
            let pattern = format!(
                r#"[\s]*[a-z]+=(")({before}{word}{after}[\s]*)+\1"#,
                word = settings.word
            );
            let regex = compile(&pattern, true).map_err(TextError::invalid_pattern(&pattern))?;
            let stripped = replace_all(&regex, text, &literal(&settings.replacement));
            if settings.and_text {
                clean_text(&stripped, &before, &after, &defaults)
            } else {
                Ok(stripped.into_owned())
            }
        }
    }
}

fn clean_text(
    text: &str,
    before: &str,
    after: &str,
    settings: &CleanOptions,
) -> Result<String, TextError> {
    let word = &settings.word;
    let gap = &settings.gap;
    let pattern = format!(
        "({before}{word}{after}{gap}|{gap}{before}{word}{after}|{gap}{before}{word}{after}{gap})"
    );
    let regex = compile(&pattern, false).map_err(TextError::invalid_pattern(&pattern))?;
    Ok(replace_all(&regex, text, &literal(&settings.replacement)).into_owned())
}
