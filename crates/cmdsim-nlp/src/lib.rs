//! Free-text to command normalization.
//!
//! [`Normalizer::normalize`] turns phrases like "go to Documents" into
//! canonical command lines (`cd Documents`) by running an ordered cascade of
//! case-insensitive patterns; the first match wins. Input that already starts
//! with a known verb passes through untouched. [`Normalizer::suggest`] offers
//! autocomplete candidates over the same vocabulary.

mod normalizer;
mod patterns;
pub mod vocabulary;

pub use normalizer::{Normalizer, ParseResult};
