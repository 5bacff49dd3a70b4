//! Prompt vocabulary and random word selection.
//!
//! A prompt is an (adjective, noun) pair drawn uniformly at random from
//! two fixed word lists. Persistence of the chosen pair is the database
//! layer's job (`PromptRepo::activate_new`).

use rand::seq::IndexedRandom;

/// Adjectives a prompt can ask for.
pub const ADJECTIVES: &[&str] = &[
    "furious", "sleepy", "shiny", "ancient", "tiny", "giant", "colorful", "broken", "fluffy",
    "wet", "golden", "crooked", "spooky", "cheerful", "rusty", "striped", "round", "silent",
    "wild", "frozen",
];

/// Nouns a prompt can ask for.
pub const NOUNS: &[&str] = &[
    "dragon", "bicycle", "umbrella", "cat", "bridge", "teapot", "shoe", "tree", "clock",
    "lantern", "door", "boat", "flower", "mirror", "ladder", "bird", "book", "chair", "cloud",
    "fence",
];

/// Pick a new (adjective, noun) pair uniformly at random.
pub fn pick_prompt_words() -> (&'static str, &'static str) {
    let mut rng = rand::rng();

    // Both lists are non-empty consts, so `choose` cannot return None.
    let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or(ADJECTIVES[0]);
    let noun = NOUNS.choose(&mut rng).copied().unwrap_or(NOUNS[0]);
    (adjective, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_come_from_the_vocabularies() {
        for _ in 0..50 {
            let (adjective, noun) = pick_prompt_words();
            assert!(ADJECTIVES.contains(&adjective));
            assert!(NOUNS.contains(&noun));
        }
    }

    #[test]
    fn test_vocabularies_are_nonempty_and_distinct_words() {
        assert!(!ADJECTIVES.is_empty());
        assert!(!NOUNS.is_empty());

        // Duplicate entries would skew the uniform draw.
        for list in [ADJECTIVES, NOUNS] {
            let mut seen = std::collections::HashSet::new();
            for word in list {
                assert!(seen.insert(word), "duplicate vocabulary word: {word}");
            }
        }
    }
}
