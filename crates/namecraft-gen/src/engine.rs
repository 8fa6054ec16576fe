// Top-level orchestration: run all five generators over one topic phrase.

use rand::RngCore;
use serde::Serialize;

use namecraft_core::enums::{Category, Style};

use crate::acronym::acronym_forms;
use crate::generators::{blend_words, combine_words, generate_variations};
use crate::style::style_pairings;

/// Styles crossed with the leading topic words for the styled category.
const STYLED_STYLES: [Style; 3] = [Style::Modern, Style::Professional, Style::Innovative];

/// Styled pairings kept per word/style combination.
const STYLED_PER_CALL: usize = 3;

/// Topic words paired with styles.
const STYLED_WORDS: usize = 2;

/// Categorized suggestions for one topic.
///
/// Always carries exactly the five categories, in a fixed order, each
/// truncated to the caller's count. Serializes to a JSON object keyed by
/// [`Category::name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub variations: Vec<String>,
    pub combinations: Vec<String>,
    pub styled: Vec<String>,
    pub acronyms: Vec<String>,
    pub blends: Vec<String>,
}

impl Suggestions {
    /// The suggestions in one category.
    pub fn category(&self, category: Category) -> &[String] {
        match category {
            Category::Variations => &self.variations,
            Category::Combinations => &self.combinations,
            Category::Styled => &self.styled,
            Category::Acronyms => &self.acronyms,
            Category::Blends => &self.blends,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Variations => &mut self.variations,
            Category::Combinations => &mut self.combinations,
            Category::Styled => &mut self.styled,
            Category::Acronyms => &mut self.acronyms,
            Category::Blends => &mut self.blends,
        }
    }

    /// Total number of suggestions across all categories.
    pub fn total(&self) -> usize {
        Category::ALL
            .iter()
            .map(|&c| self.category(c).len())
            .sum()
    }
}

/// Generate suggestions for `topic` using the thread-local random source.
///
/// Convenience wrapper over [`creative_suggestions_with`]; output varies
/// from call to call in the randomized categories.
pub fn creative_suggestions(topic: &str, count: usize) -> Suggestions {
    creative_suggestions_with(topic, count, &mut rand::thread_rng())
}

/// Generate suggestions for `topic` with at most `count` entries per
/// category, drawing randomness from `rng`.
///
/// The topic is split on whitespace. Single-word topics only populate the
/// variation and styled categories; an empty topic yields empty categories
/// everywhere. Both are valid inputs, not errors, and the result always
/// has all five categories.
pub fn creative_suggestions_with(
    topic: &str,
    count: usize,
    rng: &mut dyn RngCore,
) -> Suggestions {
    let words: Vec<String> = topic.split_whitespace().map(str::to_string).collect();
    let mut suggestions = Suggestions::default();

    // Each word gets an equal share of the variation budget. The guard
    // keeps an empty topic from dividing by zero.
    let budget = if words.is_empty() {
        count
    } else {
        count / words.len()
    };
    for word in &words {
        suggestions
            .variations
            .extend(generate_variations(word, budget, rng));
    }

    if words.len() > 1 {
        suggestions.combinations = combine_words(&words, count);
    }

    for style in STYLED_STYLES {
        for word in words.iter().take(STYLED_WORDS) {
            let pairings = style_pairings(word, style);
            suggestions
                .styled
                .extend(pairings.into_iter().take(STYLED_PER_CALL));
        }
    }

    if words.len() > 1 {
        // An acronym failure just leaves the category empty.
        if let Ok(forms) = acronym_forms(topic) {
            suggestions.acronyms = forms.flatten();
        }
    }

    if words.len() > 1 {
        suggestions.blends = blend_words(&words[0], &words[1]);
    }

    for category in Category::ALL {
        suggestions.category_mut(category).truncate(count);
    }
    suggestions
}
