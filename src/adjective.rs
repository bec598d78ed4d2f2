/*!
Comparative and superlative forms of adjectives.

Grading is driven by an estimate of the syllable count plus a small set of
irregular forms. One- and two-syllable adjectives take a suffix ("bigger",
"funnier"); everything longer takes the periphrastic "more"/"most" form
("more important").
*/
use std::borrow::Cow;

const VOWELS: &str = "aeiouy";

// Adjectives that inflect irregularly, as (comparative, superlative) pairs.
static IRREGULAR: &[(&str, &str, &str)] = &[
    ("bad", "worse", "worst"),
    ("far", "further", "farthest"),
    ("good", "better", "best"),
    ("hind", "hinder", "hindmost"),
    ("ill", "worse", "worst"),
    ("less", "lesser", "least"),
    ("little", "less", "least"),
    ("many", "more", "most"),
    ("much", "more", "most"),
    ("well", "better", "best"),
];

// Adjectives that do not take a suffix at all.
static UNINFLECTED: &[&str] = &["giant", "glib", "hurt", "known", "madly"];

#[derive(Clone, Copy, Debug)]
enum Degree {
    Comparative,
    Superlative,
}

impl Degree {
    fn suffix(self) -> &'static str {
        match self {
            Degree::Comparative => "er",
            Degree::Superlative => "est",
        }
    }

    fn periphrastic(self) -> &'static str {
        match self {
            Degree::Comparative => "more",
            Degree::Superlative => "most",
        }
    }
}

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(ch)
}

// Estimates the number of syllables by counting maximal runs of vowel
// characters, ignoring a single trailing "e". Counting is case-sensitive:
// only lowercase vowels count.
fn count_syllables(word: &str) -> usize {
    let counted = match word.strip_suffix('e') {
        Some(stem) if !stem.is_empty() => stem,
        _ => word,
    };
    let mut syllables = 0;
    let mut previous_was_vowel = false;
    for ch in counted.chars() {
        let vowel = is_vowel(ch);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }
    syllables
}

// True for one-syllable words ending consonant-vowel-consonant, which double
// the final consonant before the suffix ("big" => "bigger").
fn ends_consonant_vowel_consonant(adjective: &str) -> bool {
    let mut chars = adjective.chars().rev();
    let (last, next, third) = match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return false,
    };
    !is_vowel(last) && is_vowel(next) && !is_vowel(third)
}

fn grade(adjective: &str, degree: Degree) -> Cow<'_, str> {
    let syllables = count_syllables(adjective);

    if let Some((_, comparative, superlative)) =
        IRREGULAR.iter().find(|(word, _, _)| *word == adjective)
    {
        return Cow::Borrowed(match degree {
            Degree::Comparative => comparative,
            Degree::Superlative => superlative,
        });
    }
    if UNINFLECTED.contains(&adjective) {
        return Cow::Owned(format!("{} {}", degree.periphrastic(), adjective));
    }

    let mut stem = Cow::Borrowed(adjective);
    let mut suffix = degree.suffix();

    if syllables <= 2 && adjective.ends_with('e') {
        // Ending with a silent e: larger, wiser.
        suffix = suffix.trim_start_matches('e');
    } else if syllables == 1 && ends_consonant_vowel_consonant(adjective) {
        // One syllable ending consonant-vowel-consonant: bigger, thinner.
        // Exceptions: lower, newer.
        if !adjective.ends_with('w') {
            if let Some(last) = adjective.chars().next_back() {
                return Cow::Owned(format!("{}{}{}", adjective, last, suffix));
            }
        }
    } else if syllables == 1 {
        // One syllable ending with more consonants or vowels: briefer.
    } else if syllables == 2 && adjective.ends_with('y') {
        // Two syllables ending with a y: funnier, hairier.
        stem = Cow::Owned(format!("{}i", &adjective[..adjective.len() - 1]));
    } else if syllables == 2
        && (adjective.ends_with("er") || adjective.ends_with("le") || adjective.ends_with("ow"))
    {
        // Two syllables with specific suffixes: gentler, narrower.
    } else {
        // Three or more syllables: more generous, more important.
        return Cow::Owned(format!("{} {}", degree.periphrastic(), adjective));
    }

    Cow::Owned(format!("{}{}", stem, suffix))
}

/// Returns the comparative form of the given adjective, e.g. "big" =>
/// "bigger" and "important" => "more important".
pub fn comparative(adjective: &str) -> Cow<'_, str> {
    grade(adjective, Degree::Comparative)
}

/// Returns the superlative form of the given adjective, e.g. "big" =>
/// "biggest" and "important" => "most important".
pub fn superlative(adjective: &str) -> Cow<'_, str> {
    grade(adjective, Degree::Superlative)
}

/// Returns the attributive form of the given adjective. English adjectives
/// do not decline between attributive and predicative position, so this is
/// the identity.
pub fn attributive(adjective: &str) -> &str {
    adjective
}

/// Returns the predicative form of the given adjective. As with
/// [attributive], this is the identity.
pub fn predicative(adjective: &str) -> &str {
    adjective
}
