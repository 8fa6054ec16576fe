// Character classification.

/// Vowels recognized by the acronym consonant extraction (lowercase).
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Returns `true` for the five ASCII vowels, case-insensitively.
///
/// Everything else -- consonants, digits, hyphens -- counts as a
/// "consonant" for acronym purposes.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}
