use thiserror::Error;

/// An error raised by the template functions.
#[derive(Debug, Error)]
pub enum TextError {
    /// A caller-supplied pattern does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },
}

impl TextError {
    pub(crate) fn invalid_pattern(pattern: &str) -> impl FnOnce(fancy_regex::Error) -> TextError {
        let pattern = pattern.to_string();
        move |source| TextError::InvalidPattern { pattern, source }
    }
}
