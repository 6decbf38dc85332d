use crate::pattern::{captures, compile};
use crate::text::error::TextError;

/// Return capture group `index` of the first match of `pattern` in `text`.
///
/// Group 0 is the whole match. `None` means the pattern did not match or the
/// group did not take part in the match.
///
/// ```
/// use wordform::extract;
///
/// assert_eq!(extract(r"(\d+)-(\d+)", "pages 10-20", 2).unwrap(), Some("20"));
/// assert_eq!(extract(r"\d+", "no digits", 0).unwrap(), None);
/// ```
pub fn extract<'t>(
    pattern: &str,
    text: &'t str,
    index: usize,
) -> Result<Option<&'t str>, TextError> {
    let regex = compile(pattern, false).map_err(TextError::invalid_pattern(pattern))?;
    Ok(captures(&regex, text)
        .and_then(|caps| caps.get(index))
        .map(|m| m.as_str()))
}
