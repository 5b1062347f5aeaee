//! Payment concept and filial number extraction.

use super::patterns::{CONCEPT, FILIAL};
use super::FieldRule;

/// Cleaned concept text, plus the filial number when the concept mentions
/// one ("Filial 14", any casing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Concept with underscores replaced by spaces, trimmed.
    pub concept: String,
    /// Filial number found inside the concept, if any.
    pub filial: Option<String>,
}

/// Extracts the payment concept from the "Descripción" label.
pub struct ConceptRule;

impl ConceptRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConceptRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for ConceptRule {
    type Output = Concept;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = CONCEPT.captures(text)?;
        let concept = caps[1].replace('_', " ").trim().to_string();
        let filial = FILIAL
            .captures(&concept)
            .map(|caps| caps[1].to_string());

        Some(Concept { concept, filial })
    }
}
