//! Fixed keyword sets that gate delegation to the LLM backend.
//!
//! A question qualifies when it mentions a known crop or a harvest-timing
//! intent. Matching is plain substring containment over the lowercased
//! question, so e.g. "unripe" matches the intent term "ripe" and "corner"
//! matches the crop term "corn" — acceptable for the demo's scope.

/// Named crops the demo knows about.
pub const CROP_KEYWORDS: &[&str] = &[
    "wheat",
    "tomato",
    "tomatoes",
    "pepper",
    "peppers",
    "maize",
    "corn",
    "sugarcane",
    "rice",
];

/// Terms signaling the question concerns harvest timing or readiness.
pub const INTENT_KEYWORDS: &[&str] = &[
    "harvest",
    "ready",
    "readiness",
    "maturity",
    "mature",
    "ripeness",
    "ripe",
    "moisture",
    "brix",
    "firmness",
];

/// True when the question names any known crop.
pub fn mentions_crop(question: &str) -> bool {
    contains_any(question, CROP_KEYWORDS)
}

/// True when the question carries any harvest-readiness intent term.
pub fn mentions_harvest_intent(question: &str) -> bool {
    contains_any(question, INTENT_KEYWORDS)
}

fn contains_any(question: &str, keywords: &[&str]) -> bool {
    let q = question.to_lowercase();
    keywords.iter().any(|k| q.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_crops() {
        assert!(mentions_crop("When is wheat ready to harvest?"));
        assert!(mentions_crop("my tomatoes look pale"));
        assert!(!mentions_crop("What is the capital of France?"));
    }

    #[test]
    fn detects_intent() {
        assert!(mentions_harvest_intent("Is it ripe yet?"));
        assert!(mentions_harvest_intent("what moisture content should I wait for"));
        assert!(!mentions_harvest_intent("What is the capital of France?"));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(mentions_crop("WHEAT field"));
        assert!(mentions_harvest_intent("Fully MATURE already?"));
    }

    #[test]
    fn matches_inside_larger_words() {
        // Substring semantics, documented above.
        assert!(mentions_harvest_intent("these look unripe"));
        assert!(mentions_crop("around the corner"));
    }
}
