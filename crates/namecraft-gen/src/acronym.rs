// Acronym extraction: deterministic letter summaries of a multi-word phrase.

use namecraft_core::case::capitalize;
use namecraft_core::character::is_vowel;

/// Maximum length of the consonant form.
const MAX_CONSONANTS: usize = 6;

/// Words shorter than this never contribute to an acronym.
const MIN_WORD_CHARS: usize = 3;

/// Acronym extraction failure.
///
/// This is data, not a fault: callers building a full suggestion result
/// treat it as "no acronyms available" and keep the other categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AcronymError {
    /// The phrase has no words of three or more characters.
    #[error("not enough words to create an acronym")]
    InsufficientInput,
}

/// The acronym forms extracted from one phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymForms {
    /// First letter of each qualifying word, uppercased.
    pub simple: String,
    /// First two letters of each qualifying word, uppercased.
    pub two_letter: String,
    /// Non-vowel characters across qualifying words, uppercased,
    /// truncated to the first six.
    pub consonants: String,
    /// Casing variants of `simple`: lowercase, capitalized, and
    /// first-upper-rest-lower. The last two coincide whenever `simple`
    /// starts with a cased letter; all three entries are kept anyway.
    pub variations: Vec<String>,
}

impl AcronymForms {
    /// Flatten into the order used by the suggestion engine: the three
    /// main forms followed by the casing variants.
    pub fn flatten(&self) -> Vec<String> {
        let mut flat = Vec::with_capacity(3 + self.variations.len());
        flat.push(self.simple.clone());
        flat.push(self.two_letter.clone());
        flat.push(self.consonants.clone());
        flat.extend(self.variations.iter().cloned());
        flat
    }
}

/// Extract acronym forms from `phrase`.
///
/// Tokenizes on whitespace and keeps words of at least three characters;
/// if none remain the phrase cannot carry an acronym and
/// [`AcronymError::InsufficientInput`] is returned. Pure and
/// deterministic.
pub fn acronym_forms(phrase: &str) -> Result<AcronymForms, AcronymError> {
    let words: Vec<&str> = phrase
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
        .collect();
    if words.is_empty() {
        return Err(AcronymError::InsufficientInput);
    }

    let simple: String = words
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    let two_letter: String = words
        .iter()
        .flat_map(|w| w.chars().take(2))
        .flat_map(char::to_uppercase)
        .collect();

    let consonants: String = words
        .iter()
        .flat_map(|w| w.chars())
        .filter(|&c| !is_vowel(c))
        .flat_map(char::to_uppercase)
        .take(MAX_CONSONANTS)
        .collect();

    let capitalized = capitalize(&simple);
    let variations = vec![simple.to_lowercase(), capitalized.clone(), capitalized];

    Ok(AcronymForms {
        simple,
        two_letter,
        consonants,
        variations,
    })
}
