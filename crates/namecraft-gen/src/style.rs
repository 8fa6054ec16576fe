// Styled pairings: cross a word with the theme words of a named style.

use namecraft_core::case::{capitalize, title_case};
use namecraft_core::enums::Style;

use crate::catalog::style_words;

/// Pair `word` with every theme word of `style`.
///
/// Each theme word contributes three forms: theme-first, word-first, and a
/// title-cased concatenation. The output is deterministic, ordered by the
/// catalog, not deduplicated and not truncated; callers cut it down to
/// whatever budget they have.
pub fn style_pairings(word: &str, style: Style) -> Vec<String> {
    let themes = style_words(style);
    let mut pairings = Vec::with_capacity(themes.len() * 3);
    for theme in themes {
        pairings.push(format!("{}{}", capitalize(theme), capitalize(word)));
        pairings.push(format!("{}{}", capitalize(word), capitalize(theme)));
        pairings.push(title_case(&format!("{theme}{word}")));
    }
    pairings
}
