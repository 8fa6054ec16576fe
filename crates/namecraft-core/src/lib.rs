//! Shared types and string utilities for the namecraft suggestion engine.
//!
//! - [`case`] -- case transforms used by every generator (capitalize, title case)
//! - [`character`] -- character classification (vowels vs. everything else)
//! - [`enums`] -- suggestion categories and style names

pub mod case;
pub mod character;
pub mod enums;
