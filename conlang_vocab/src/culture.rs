//! Cultural filtering and cultural-importance lookup

use crate::types::{CulturalContext, WordEntry};

/// Tags associated with a named cultural context.
///
/// Unknown contexts have no associated tags.
pub fn associated_tags(context: &str) -> &'static [&'static str] {
    match context {
        "maritime" => &["water", "sea", "boat", "fishing"],
        "desert" => &["sand", "arid", "camel", "oasis"],
        "forest" => &["tree", "hunting", "wood"],
        "agricultural" => &["farming", "grain", "harvest"],
        "mountain" => &["hill", "climbing", "stone"],
        _ => &[],
    }
}

/// Keep the words relevant under `context`, preserving order
pub fn filter_by_culture<'a, I>(words: I, context: &CulturalContext) -> Vec<WordEntry>
where
    I: IntoIterator<Item = &'a WordEntry>,
{
    words
        .into_iter()
        .filter(|w| w.cultural.admits(context))
        .cloned()
        .collect()
}

/// Whether a word carries a tag tied to the active context.
///
/// Always false when no context is selected.
pub fn is_culturally_important(word: &WordEntry, context: &CulturalContext) -> bool {
    match context {
        CulturalContext::All => false,
        CulturalContext::Named(name) => associated_tags(name)
            .iter()
            .any(|tag| word.has_tag(tag)),
    }
}
