// Fixed word tables used by the generators. All of these are process-wide,
// immutable configuration; nothing in the engine ever mutates them.

use namecraft_core::enums::Style;

/// Prefixes tried by the affix variation generator.
pub const PREFIXES: &[&str] = &[
    "ultra", "mega", "super", "hyper", "neo", "pro", "meta", "elite",
    "prime", "max", "next", "smart", "quick", "bright", "true", "pure",
];

/// Suffixes tried by the affix variation generator.
pub const SUFFIXES: &[&str] = &[
    "ify", "ly", "hub", "zone", "spot", "lab", "works", "pro",
    "plus", "verse", "wave", "gen", "tek", "flow", "craft", "shift",
];

const MODERN_WORDS: &[&str] = &["tech", "digital", "smart", "cloud", "data", "ai", "cyber"];

const ELEGANT_WORDS: &[&str] = &["luxury", "premium", "exclusive", "refined", "classic", "elite"];

const PLAYFUL_WORDS: &[&str] = &["fun", "happy", "joy", "bright", "cheerful", "lively"];

const PROFESSIONAL_WORDS: &[&str] =
    &["expert", "specialist", "consulting", "solutions", "enterprise"];

const INNOVATIVE_WORDS: &[&str] =
    &["next-gen", "cutting-edge", "revolutionary", "advanced", "future"];

/// Theme words for a style.
pub fn style_words(style: Style) -> &'static [&'static str] {
    match style {
        Style::Modern => MODERN_WORDS,
        Style::Elegant => ELEGANT_WORDS,
        Style::Playful => PLAYFUL_WORDS,
        Style::Professional => PROFESSIONAL_WORDS,
        Style::Innovative => INNOVATIVE_WORDS,
    }
}
