//! Splitting on a separator outside of bounds.

use bon::Builder;

/// Options for [`tokenize`].
#[derive(Debug, Clone, Builder)]
pub struct TokenizeOptions {
    #[builder(default = String::from(","), into)]
    pub separator: String,

    /// Opens a nested scope.
    #[builder(default = String::from("("), into)]
    pub left_bound: String,

    /// Closes a nested scope. When equal to `left_bound`, occurrences
    /// alternate between opening and closing.
    #[builder(default = String::from(")"), into)]
    pub right_bound: String,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        TokenizeOptions::builder().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Separator,
    Left,
    Right,
}

/// Split `data` on the separator, ignoring separators nested inside bounds.
///
/// Tokens are trimmed. Empty markers are never matched.
///
/// ```
/// use wordform::{TokenizeOptions, tokenize};
///
/// let tokens = tokenize("a,(b,c),d", &TokenizeOptions::default());
/// assert_eq!(tokens, ["a", "(b,c)", "d"]);
///
/// let quoted = TokenizeOptions::builder().left_bound("'").right_bound("'").build();
/// assert_eq!(tokenize("x, 'y, z'", &quoted), ["x", "'y, z'"]);
/// ```
pub fn tokenize(data: &str, options: &TokenizeOptions) -> Vec<String> {
    if data.is_empty() {
        return Vec::new();
    }

    let markers = [
        (Marker::Separator, options.separator.as_str()),
        (Marker::Left, options.left_bound.as_str()),
        (Marker::Right, options.right_bound.as_str()),
    ];
    let symmetric = options.left_bound == options.right_bound;

    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut depth: isize = 0;
    let mut open = false;
    let mut offset = 0;

    while let Some((pos, marker, text)) = nearest_marker(data, offset, &markers) {
        buffer.push_str(&data[offset..pos]);

        if marker == Marker::Separator && depth == 0 {
            tokens.push(buffer.trim().to_string());
            buffer.clear();
        } else {
            buffer.push_str(text);
        }

        if symmetric {
            if marker == Marker::Left {
                depth += if open { -1 } else { 1 };
                open = !open;
            }
        } else {
            match marker {
                Marker::Left => depth += 1,
                Marker::Right => depth -= 1,
                Marker::Separator => {}
            }
        }
        offset = pos + text.len();
    }

    buffer.push_str(&data[offset..]);
    tokens.push(buffer.trim().to_string());
    tokens
}

/// The first marker at or after `offset`; ties go to the earlier marker.
fn nearest_marker<'m>(
    data: &str,
    offset: usize,
    markers: &[(Marker, &'m str); 3],
) -> Option<(usize, Marker, &'m str)> {
    markers
        .iter()
        .filter(|(_, text)| !text.is_empty())
        .filter_map(|&(marker, text)| {
            data[offset..]
                .find(text)
                .map(|found| (offset + found, marker, text))
        })
        .min_by_key(|(pos, _, _)| *pos)
}
