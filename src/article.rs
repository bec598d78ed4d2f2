/*!
Article selection: "a", "an", and "the".

Based on the article rules from the Ruby Linguistics module by Michael
Granger. The rules are checked in a fixed order against the first
space-delimited token of the word, and the first one that matches wins. A
final unconditional rule guesses "a", so these functions always return an
answer.
*/
use once_cell::sync::Lazy;
use regex::Regex;

/// Selects between the indefinite article ("a" or "an") and the definite
/// article ("the").
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArticleKind {
    /// "a" or "an", chosen per word. This is the default.
    Indefinite,
    /// "the", for any word.
    Definite,
}

impl Default for ArticleKind {
    fn default() -> Self {
        ArticleKind::Indefinite
    }
}

// Explicit exceptions: an hour, an honor. The source rule used a negative
// look-ahead to exclude "houri"; the regex crate has no look-ahead, so the
// equivalent "hour not followed by i" is spelled out.
static EXPLICIT_AN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x) euler | hour (?: [^i] | $ ) | heir | honest | hono")
        .expect("Could not parse explicit an regex")
});

// Strings of capitals starting with a vowel-sound consonant followed by
// another consonant, which are not likely to be real words.
static UPPERCASE_ABBREV_AN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[FHLMNRSX][A-Z]").expect("Could not parse abbrev an regex"));

// The source expresses this as a negative look-ahead inside the abbreviation
// rule. It has to be a separate regex here, checked at each candidate
// position of the one above.
static UPPERCASE_ABBREV_EXCEPTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    let re = r"(?x)
        ^
        (?:
            FJO | [HLMNS]Y. | RY[EO] | SQU |
            (?:
                F[LR]? | [HL] | MN? | N | RH? | S[CHKLMNPTVW]? | X(?:YL)?
            ) [AEIOU]
        )
    ";
    Regex::new(re).expect("Could not parse abbrev exception regex")
});

static LOWERCASE_ABBREV_AN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[aefhilmnorsx][.-]").expect("Could not parse lowercase abbrev an regex")
});

static LOWERCASE_ABBREV_A_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][.-]").expect("Could not parse lowercase abbrev a regex"));

// Consonants: a bear.
static CONSONANT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^aeiouy]").expect("Could not parse consonant regex"));

// -eu like "you": a european.
static SPECIAL_CASE_EUW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^e[uw]").expect("Could not parse special case euw regex"));

// -o like "wa": a one-liner.
static SPECIAL_CASE_ONC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^onc?e").expect("Could not parse special case onc regex"));

// -u like "you": a university.
static SPECIAL_CASE_UNI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x) uni (?: [^nmd] | mo )").expect("Could not parse special case uni regex")
});

// -u like "you": a uterus.
static SPECIAL_CASE_U_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x) ^ u [bcfhjkqrst] [aeiou]").expect("Could not parse special case u regex")
});

// Vowels: an owl.
static VOWEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[aeiou]").expect("Could not parse vowel regex"));

// y like "i": an yclept, a year.
static INITIAL_Y_AN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x) y (?: b[lor] | cl[ea] | fere | gg | p[ios] | rou | tt )")
        .expect("Could not parse initial y an regex")
});

// True if the abbreviation rule matches at any position of the token where
// the exception pattern does not.
fn is_vowel_sound_abbreviation(token: &str) -> bool {
    for (i, _) in token.char_indices() {
        let rest = &token[i..];
        if UPPERCASE_ABBREV_AN_REGEX.is_match(rest)
            && !UPPERCASE_ABBREV_EXCEPTION_REGEX.is_match(rest)
        {
            return true;
        }
    }
    false
}

/// Returns the indefinite article ("a" or "an") for the given word.
///
/// ```
/// use en_inflect::article::indefinite_article;
///
/// assert_eq!(indefinite_article("university"), "a");
/// assert_eq!(indefinite_article("hour"), "an");
/// ```
pub fn indefinite_article(word: &str) -> &'static str {
    let token = word.split(' ').next().unwrap_or(word);

    // Handle explicit exceptions...
    if EXPLICIT_AN_REGEX.is_match(token) {
        return "an";
    }

    // Handle abbreviations...
    if is_vowel_sound_abbreviation(token) {
        return "an";
    }
    if LOWERCASE_ABBREV_AN_REGEX.is_match(token) {
        return "an";
    }
    if LOWERCASE_ABBREV_A_REGEX.is_match(token) {
        return "a";
    }

    // Handle consonants...
    if CONSONANT_REGEX.is_match(token) {
        return "a";
    }

    // Handle special vowel-forms...
    if SPECIAL_CASE_EUW_REGEX.is_match(token) {
        return "a";
    }
    if SPECIAL_CASE_ONC_REGEX.is_match(token) {
        return "a";
    }
    if SPECIAL_CASE_UNI_REGEX.is_match(token) {
        return "a";
    }
    if SPECIAL_CASE_U_REGEX.is_match(token) {
        return "a";
    }

    // Handle vowels...
    if VOWEL_REGEX.is_match(token) {
        return "an";
    }

    // Handle y... (before certain consonants it implies an "i" sound)
    if INITIAL_Y_AN_REGEX.is_match(token) {
        return "an";
    }

    // Otherwise, guess "a"
    "a"
}

/// Returns the definite article ("the") for the given word.
pub fn definite_article(_word: &str) -> &'static str {
    "the"
}

/// Returns the indefinite ("a" or "an") or definite ("the") article for the
/// given word.
pub fn article(word: &str, kind: ArticleKind) -> &'static str {
    match kind {
        ArticleKind::Indefinite => indefinite_article(word),
        ArticleKind::Definite => definite_article(word),
    }
}

/// Returns the article followed by the word, e.g. `referenced("hour",
/// ArticleKind::Indefinite)` is "an hour".
pub fn referenced(word: &str, kind: ArticleKind) -> String {
    format!("{} {}", article(word, kind), word)
}

#[cfg(test)]
mod tests {
    use super::ArticleKind;

    #[test]
    fn indefinite_article() {
        let tests = [
            ("a", "dog"),
            ("a", "bear"),
            ("a", "cat"),
            ("an", "elephant"),
            ("an", "owl"),
            ("an", "egg"),
            ("an", "apple"),
            ("an", "ice"),
            ("an", "umbrella"),
            // Explicit exceptions.
            ("an", "hour"),
            ("an", "hourglass"),
            ("an", "hour hand"),
            ("a", "houri"),
            ("an", "heir"),
            ("an", "honest man"),
            ("an", "honor"),
            ("an", "euler"),
            // The article patterns are case-sensitive; capitalized vowels
            // fall through to the consonant rule.
            ("a", "Euler"),
            ("a", "European"),
            ("a", "Ukraine"),
            ("a", "I"),
            // Abbreviations.
            ("an", "FBI"),
            ("an", "MBA"),
            ("an", "XML"),
            ("an", "SQL"),
            ("an", "RSVP"),
            ("an", "YMCA"),
            ("an", "HSL colour space"),
            ("an", "XY chromosome"),
            ("a", "LED"),
            ("a", "NATO country"),
            ("a", "SOS"),
            ("a", "UFO"),
            ("a", "F.B.I. agent"),
            ("a", "L.E.D."),
            ("an", "n-th"),
            ("an", "x-ray"),
            ("a", "X-ray"),
            // Special vowel-forms.
            ("a", "european"),
            ("a", "ewe"),
            ("a", "one"),
            ("a", "once-only"),
            ("an", "oncologist"),
            ("a", "university"),
            ("a", "unicorn"),
            ("a", "utopia"),
            ("a", "uterus"),
            ("an", "unanimous vote"),
            ("a", "union"),
            ("an", "uvula"),
            ("an", "urgent matter"),
            // y as "i".
            ("an", "yclept"),
            ("an", "ytterbium"),
            ("a", "year"),
            ("a", "youth"),
            // Fallbacks.
            ("an", "a"),
            ("an", "e"),
            ("a", "8"),
            ("a", ""),
        ];
        for test in tests {
            assert_eq!(
                super::indefinite_article(test.1),
                test.0,
                "indefinite_article({}) = {}",
                test.1,
                test.0,
            );
        }
    }

    #[test]
    fn definite_article() {
        assert_eq!(super::definite_article("dog"), "the");
        assert_eq!(super::definite_article("hour"), "the");
    }

    #[test]
    fn article() {
        assert_eq!(super::article("dog", ArticleKind::Indefinite), "a");
        assert_eq!(super::article("hour", ArticleKind::Indefinite), "an");
        assert_eq!(super::article("dog", ArticleKind::Definite), "the");
        assert_eq!(super::article("dog", ArticleKind::default()), "a");
    }

    #[test]
    fn referenced() {
        let tests = [
            ("hour", ArticleKind::Indefinite, "an hour"),
            ("dog", ArticleKind::Indefinite, "a dog"),
            ("cat", ArticleKind::Definite, "the cat"),
        ];
        for test in tests {
            assert_eq!(
                super::referenced(test.0, test.1),
                test.2,
                "referenced({}, {:?}) = {}",
                test.0,
                test.1,
                test.2,
            );
        }
    }
}
