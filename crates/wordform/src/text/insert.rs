//! Placeholder substitution.

use std::borrow::Cow;
use std::cmp::Reverse;

use bon::Builder;
use const_fnv1a_hash::fnv1a_hash_str_64;

use crate::pattern::{compile, quote, replace_all};
use crate::text::clean::{CleanOptions, clean};
use crate::text::error::TextError;
use crate::text::value::{Data, Value};

/// How placeholders are located when substituting by pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// Build the pattern from `before`, `after` and `escape`.
    Delimiters,

    /// A caller pattern; `%s` stands for the quoted key and `%%` for a
    /// literal `%`.
    Pattern(String),
}

/// Options for [`insert`].
///
/// ```
/// use wordform::InsertOptions;
///
/// let options = InsertOptions::builder().before("${").after("}").build();
/// assert_eq!(options.before, "${");
/// assert!(options.escape.is_none());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct InsertOptions {
    /// Text in front of a placeholder name.
    #[builder(default = String::from("{:"), into)]
    pub before: String,

    /// Text after a placeholder name.
    #[builder(default = String::from("}"), into)]
    pub after: String,

    /// Text that, placed before `before`, keeps a placeholder from being
    /// replaced.
    #[builder(into)]
    pub escape: Option<String>,

    pub format: Option<Format>,

    /// When set, leftover placeholders are removed with [`clean`].
    pub clean: Option<CleanOptions>,
}

impl Default for InsertOptions {
    fn default() -> Self {
        InsertOptions::builder().build()
    }
}

impl InsertOptions {
    /// The pattern template used in pattern mode, if any.
    fn placeholder_format(&self) -> Option<Cow<'_, str>> {
        match &self.format {
            Some(Format::Pattern(pattern)) => Some(Cow::Borrowed(pattern)),
            Some(Format::Delimiters) => Some(Cow::Owned(self.delimiter_format())),
            None if self.escape().is_some() => Some(Cow::Owned(self.delimiter_format())),
            None => None,
        }
    }

    fn delimiter_format(&self) -> String {
        let before = quote(&self.before).replace('%', "%%");
        let after = quote(&self.after).replace('%', "%%");
        match self.escape() {
            Some(escape) => {
                let escape = quote(escape).replace('%', "%%");
                format!("(?<!{escape}){before}%s{after}")
            }
            None => format!("{before}%s{after}"),
        }
    }

    fn escape(&self) -> Option<&str> {
        self.escape.as_deref().filter(|escape| !escape.is_empty())
    }
}

/// Replace placeholders in `template` with `data`.
///
/// Named data without a format is substituted literally, in one pass. A
/// template containing `?` with positional data fills each `?` in turn.
/// Everything else goes through the placeholder pattern.
///
/// ```
/// use wordform::{InsertOptions, insert};
///
/// let text = insert(
///     "My name is {:name} and I am {:age}.",
///     [("name", "Bob"), ("age", "65")],
///     &InsertOptions::default(),
/// ).unwrap();
/// assert_eq!(text, "My name is Bob and I am 65.");
///
/// let text = insert("A ? and a ?", vec!["cat", "dog"], &InsertOptions::default()).unwrap();
/// assert_eq!(text, "A cat and a dog");
/// ```
pub fn insert(
    template: &str,
    data: impl Into<Data>,
    options: &InsertOptions,
) -> Result<String, TextError> {
    let format = options.placeholder_format();
    let result = match data.into() {
        Data::Named(pairs) if format.is_none() => replace_named(template, &pairs, options),
        Data::Positional(values)
            if template.contains('?') && values.first().is_some_and(|v| !v.is_null()) =>
        {
            replace_positional(template, values)
        }
        data => replace_by_pattern(template, data.into_pairs(), format.as_deref(), options)?,
    };

    if options.clean.is_some() {
        clean(&result, options)
    } else {
        Ok(result)
    }
}

/// Substitute `{before}{key}{after}` literally, preferring the longest
/// placeholder at each position. Inserted text is never rescanned.
fn replace_named(template: &str, pairs: &[(String, Value)], options: &InsertOptions) -> String {
    let mut replacements: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        let placeholder = format!("{}{key}{}", options.before, options.after);
        if placeholder.is_empty() {
            continue;
        }
        let value = value.to_string();
        match replacements.iter_mut().find(|(p, _)| *p == placeholder) {
            Some(existing) => existing.1 = value,
            None => replacements.push((placeholder, value)),
        }
    }
    replacements.sort_by_key(|(placeholder, _)| Reverse(placeholder.len()));

    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(c) = rest.chars().next() {
        match replacements.iter().find(|(p, _)| rest.starts_with(p.as_str())) {
            Some((placeholder, value)) => {
                result.push_str(value);
                rest = &rest[placeholder.len()..];
            }
            None => {
                result.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    result
}

/// Fill each `?` with the next value; exhausted values become empty.
fn replace_positional(template: &str, values: Vec<Value>) -> String {
    let mut result = template.to_string();
    let mut values = values.into_iter();
    let mut offset = 0;
    while let Some(found) = result[offset..].find('?') {
        let pos = offset + found;
        let value = values
            .next()
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        result.replace_range(pos..=pos, &value);
        offset = pos + value.len();
    }
    result
}

/// Replace matches of the rendered placeholder pattern for every key.
///
/// Matches are swapped for a hash of the pattern first, then the hash for
/// the value, so replacement text is never read as a group reference.
fn replace_by_pattern(
    template: &str,
    pairs: Vec<(String, Value)>,
    format: Option<&str>,
    options: &InsertOptions,
) -> Result<String, TextError> {
    let mut result = template.to_string();
    if let Some(format) = format {
        for (key, value) in pairs {
            let pattern = render_format(format, &quote(&key));
            if pattern.is_empty() {
                continue;
            }
            let regex = compile(&pattern, false).map_err(TextError::invalid_pattern(&pattern))?;
            let hash = fnv1a_hash_str_64(&pattern).to_string();
            let hashed = replace_all(&regex, &result, &hash).into_owned();
            result = hashed.replace(&hash, &value.to_string());
        }
    }

    if options.format.is_none() {
        if let Some(escape) = options.escape() {
            result = result.replace(&format!("{escape}{}", options.before), &options.before);
        }
    }
    Ok(result)
}

/// Expand `%s` to `key` and `%%` to `%`.
fn render_format(format: &str, key: &str) -> String {
    let mut rendered = String::with_capacity(format.len() + key.len());
    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.peek() {
                Some('s') => {
                    chars.next();
                    rendered.push_str(key);
                    continue;
                }
                Some('%') => {
                    chars.next();
                }
                _ => {}
            }
        }
        rendered.push(c);
    }
    rendered
}
