// Candidate generators: each applies one class of string transform to the
// input words and feeds the results into a `CandidateSet`.

use rand::RngCore;
use rand::seq::SliceRandom;

use namecraft_core::case::{capitalize, title_case};

use crate::candidates::CandidateSet;
use crate::catalog::{PREFIXES, SUFFIXES};

/// Prefixes (and suffixes) sampled per run of the affix generator.
const AFFIX_SAMPLE: usize = 5;

/// Random prefix+word+suffix draws per run of the affix generator.
const MIXED_DRAWS: usize = 3;

/// Cap on the number of blends produced for a word pair.
pub const MAX_BLENDS: usize = 10;

/// Trait for individual candidate generators.
///
/// Each generator derives candidate words from its input and pushes them
/// into `out`, which handles deduplication and the category cap.
/// Deterministic generators ignore `rng`; randomized ones draw from it
/// unconditionally so that a fixed seed always yields the same output
/// regardless of the cap.
pub trait CandidateGenerator {
    fn generate(&self, rng: &mut dyn RngCore, out: &mut CandidateSet);
}

// ---------------------------------------------------------------------------
// AffixVariations
// ---------------------------------------------------------------------------

/// Mutate a single word with prefixes and suffixes from the catalog.
///
/// Emits the word itself and its capitalized form, then lowercase and
/// capitalized affixed forms for a random sample of up to 5 prefixes and
/// 5 suffixes, and finally 3 random prefix+word+suffix draws.
pub struct AffixVariations<'a> {
    /// The word to mutate.
    pub word: &'a str,
}

impl CandidateGenerator for AffixVariations<'_> {
    fn generate(&self, rng: &mut dyn RngCore, out: &mut CandidateSet) {
        let lower = self.word.to_lowercase();
        let capitalized = capitalize(self.word);

        out.push(self.word.to_string());
        out.push(capitalized.clone());

        for prefix in PREFIXES.choose_multiple(rng, AFFIX_SAMPLE) {
            out.push(format!("{prefix}{lower}"));
            out.push(format!("{}{}", capitalize(prefix), capitalized));
        }

        for suffix in SUFFIXES.choose_multiple(rng, AFFIX_SAMPLE) {
            out.push(format!("{lower}{suffix}"));
            out.push(format!("{}{}", capitalized, capitalize(suffix)));
        }

        for _ in 0..MIXED_DRAWS {
            if let (Some(prefix), Some(suffix)) = (PREFIXES.choose(rng), SUFFIXES.choose(rng)) {
                out.push(format!("{prefix}{lower}{suffix}"));
            }
        }
    }
}

/// Generate up to `count` affix variations of `word`.
pub fn generate_variations(word: &str, count: usize, rng: &mut dyn RngCore) -> Vec<String> {
    let mut out = CandidateSet::new(count);
    AffixVariations { word }.generate(rng, &mut out);
    out.into_vec()
}

// ---------------------------------------------------------------------------
// WordCombiner
// ---------------------------------------------------------------------------

/// Join multiple words into compound candidates.
///
/// Every unordered pair contributes four surface forms (capitalized
/// concatenation, title-cased concatenation, underscore join, hyphen join);
/// every run of three consecutive words contributes one capitalized
/// concatenation. Deterministic.
pub struct WordCombiner<'a> {
    /// The words to combine, in topic order.
    pub words: &'a [String],
}

impl WordCombiner<'_> {
    fn emit(&self, out: &mut CandidateSet) {
        for (i, first) in self.words.iter().enumerate() {
            for second in &self.words[i + 1..] {
                out.push(format!("{}{}", capitalize(first), capitalize(second)));
                out.push(title_case(&format!("{first}{second}")));
                out.push(format!("{first}_{second}"));
                out.push(format!("{first}-{second}"));
            }
        }

        if self.words.len() >= 3 {
            for triple in self.words.windows(3) {
                out.push(format!(
                    "{}{}{}",
                    capitalize(&triple[0]),
                    capitalize(&triple[1]),
                    capitalize(&triple[2])
                ));
            }
        }
    }
}

impl CandidateGenerator for WordCombiner<'_> {
    fn generate(&self, _rng: &mut dyn RngCore, out: &mut CandidateSet) {
        self.emit(out);
    }
}

/// Combine `words` into at most `max_combinations` compound candidates.
///
/// Fewer than two words cannot be combined; the input is returned
/// unchanged in that case.
pub fn combine_words(words: &[String], max_combinations: usize) -> Vec<String> {
    if words.len() < 2 {
        return words.to_vec();
    }
    let mut out = CandidateSet::new(max_combinations);
    WordCombiner { words }.emit(&mut out);
    out.into_vec()
}

// ---------------------------------------------------------------------------
// Portmanteau
// ---------------------------------------------------------------------------

/// Blend two words by splicing a prefix of one with a suffix of the other.
///
/// For split points `i` in `[2, len)` of the first word and `j` in
/// `[1, len - 1)` of the second, emits the capitalized splice; then the
/// same with the words exchanged. Indices are in characters, so the cost
/// is O(len1 * len2) -- very long words make this the most expensive
/// generator in the engine. Words shorter than three characters contribute
/// no splices for their direction.
pub struct Portmanteau<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl Portmanteau<'_> {
    fn emit(&self, out: &mut CandidateSet) {
        let first: Vec<char> = self.first.to_lowercase().chars().collect();
        let second: Vec<char> = self.second.to_lowercase().chars().collect();

        splice_into(&first, &second, out);
        splice_into(&second, &first, out);
    }
}

impl CandidateGenerator for Portmanteau<'_> {
    fn generate(&self, _rng: &mut dyn RngCore, out: &mut CandidateSet) {
        self.emit(out);
    }
}

/// Emit every `head[..i] + tail[j..]` splice, capitalized.
fn splice_into(head: &[char], tail: &[char], out: &mut CandidateSet) {
    for i in 2..head.len() {
        for j in 1..tail.len().saturating_sub(1) {
            let blended: String = head[..i].iter().chain(&tail[j..]).collect();
            out.push(capitalize(&blended));
        }
    }
}

/// Blend two words into at most [`MAX_BLENDS`] portmanteau candidates.
///
/// Two words shorter than three characters produce an empty result; that
/// is expected, not an error.
pub fn blend_words(first: &str, second: &str) -> Vec<String> {
    let mut out = CandidateSet::new(MAX_BLENDS);
    Portmanteau { first, second }.emit(&mut out);
    out.into_vec()
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    // --- AffixVariations ---

    #[test]
    fn variations_include_original_and_capitalized() {
        let variations = generate_variations("cloud", 30, &mut rng());
        assert_eq!(variations[0], "cloud");
        assert_eq!(variations[1], "Cloud");
    }

    #[test]
    fn variations_respect_count() {
        for count in [0, 1, 5, 10] {
            let variations = generate_variations("cloud", count, &mut rng());
            assert!(variations.len() <= count);
        }
    }

    #[test]
    fn variations_are_unique() {
        let variations = generate_variations("cloud", 30, &mut rng());
        let mut sorted = variations.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), variations.len());
    }

    #[test]
    fn variations_are_deterministic_for_a_seed() {
        let a = generate_variations("cloud", 20, &mut rng());
        let b = generate_variations("cloud", 20, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn variations_use_catalog_affixes() {
        // With a cap far above the natural set size, every affixed form is
        // built from a catalog prefix or suffix around the lowercased word.
        let variations = generate_variations("Cloud", 100, &mut rng());
        for v in variations.iter().skip(2) {
            let lower = v.to_lowercase();
            assert!(lower.contains("cloud"), "unexpected candidate {v}");
        }
    }

    // --- WordCombiner ---

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn combine_emits_all_four_pair_forms() {
        let combined = combine_words(&words(&["cloud", "storage"]), 20);
        assert!(combined.contains(&"CloudStorage".to_string()));
        assert!(combined.contains(&"Cloudstorage".to_string()));
        assert!(combined.contains(&"cloud_storage".to_string()));
        assert!(combined.contains(&"cloud-storage".to_string()));
    }

    #[test]
    fn combine_single_word_is_returned_unchanged() {
        let combined = combine_words(&words(&["a"]), 10);
        assert_eq!(combined, ["a"]);
        assert!(combine_words(&[], 10).is_empty());
    }

    #[test]
    fn combine_adds_consecutive_triples() {
        let combined = combine_words(&words(&["data", "cloud", "hub"]), 50);
        assert!(combined.contains(&"DataCloudHub".to_string()));
    }

    #[test]
    fn combine_respects_max() {
        let combined = combine_words(&words(&["data", "cloud", "hub", "lab"]), 3);
        assert_eq!(combined.len(), 3);
    }

    #[test]
    fn combine_deduplicates_repeated_words() {
        let combined = combine_words(&words(&["go", "go"]), 20);
        let mut sorted = combined.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), combined.len());
    }

    // --- Portmanteau ---

    #[test]
    fn blends_are_capped_and_unique() {
        let blends = blend_words("cloud", "storage");
        assert!(!blends.is_empty());
        assert!(blends.len() <= MAX_BLENDS);
        let mut sorted = blends.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), blends.len());
    }

    #[test]
    fn blends_are_capitalized_splices() {
        let blends = blend_words("cloud", "storage");
        // First splice: "cl" + "torage".
        assert_eq!(blends[0], "Cltorage");
        for blend in &blends {
            let mut chars = blend.chars();
            assert!(chars.next().is_some_and(|c| c.is_uppercase()));
            assert!(chars.all(|c| c.is_lowercase()));
        }
    }

    #[test]
    fn blends_lowercase_their_inputs() {
        assert_eq!(blend_words("CLOUD", "STORAGE"), blend_words("cloud", "storage"));
    }

    #[test]
    fn short_words_blend_to_nothing() {
        assert!(blend_words("ab", "cd").is_empty());
        assert!(blend_words("a", "storage").is_empty());
        assert!(blend_words("", "").is_empty());
    }

    #[test]
    fn one_long_word_still_blends() {
        // "cloud" supplies prefixes, "hub" supplies the suffix "ub".
        let blends = blend_words("cloud", "hub");
        assert!(!blends.is_empty());
        assert!(blends.contains(&"Club".to_string()));
    }
}
