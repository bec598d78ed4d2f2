use once_cell::sync::Lazy;
use std::collections::HashSet;

// Prepositions appear as the second piece of compound words like
// "mother-in-law" and "man at arms". Compound handling in both the
// pluralizer and the singularizer inflects the piece before the
// preposition.
pub(crate) static PREPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "before", "during", "of", "till", "above", "behind", "except", "off", "to",
        "across", "below", "for", "on", "under", "after", "beneath", "from", "onto", "until",
        "among", "beside", "in", "out", "unto", "around", "besides", "into", "over", "upon", "at",
        "between", "near", "since", "with", "athwart", "betwixt", "beyond", "but", "by",
    ]
    .iter()
    .copied()
    .collect()
});

#[cfg(test)]
mod tests {
    #[test]
    fn prepositions() {
        assert!(super::PREPOSITIONS.contains("in"));
        assert!(super::PREPOSITIONS.contains("betwixt"));
        assert!(!super::PREPOSITIONS.contains("general"));
        assert!(!super::PREPOSITIONS.contains("law"));
    }
}
