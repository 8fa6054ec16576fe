//! Creative word-suggestion engine.
//!
//! Given a short topic phrase, produces five categories of brandable word
//! suggestions using surface-level string transforms and an injectable
//! random source:
//!
//! - [`generators`] -- the candidate generators (affix variations, word
//!   combinations, portmanteau blends)
//! - [`style`] -- theme-word pairings for a named style
//! - [`acronym`] -- deterministic letter-extraction forms for a phrase
//! - [`candidates`] -- capped, deduplicating candidate accumulator
//! - [`catalog`] -- the fixed affix and style-theme word tables
//! - [`engine`] -- top-level orchestration over all five categories
//!
//! Randomness is always passed in by the caller, so a seeded
//! [`rand::rngs::StdRng`] makes every operation reproducible.

pub mod acronym;
pub mod candidates;
pub mod catalog;
pub mod engine;
pub mod generators;
pub mod style;

// Re-export key types for convenient access.
pub use acronym::{AcronymError, AcronymForms, acronym_forms};
pub use candidates::CandidateSet;
pub use engine::{Suggestions, creative_suggestions, creative_suggestions_with};
pub use generators::{
    AffixVariations, CandidateGenerator, Portmanteau, WordCombiner, blend_words, combine_words,
    generate_variations,
};
pub use namecraft_core::enums::{Category, Style};
pub use style::style_pairings;
