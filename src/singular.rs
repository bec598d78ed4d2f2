/*!
Singularization of nouns.

The inverse of the pluralizer: direct-lookup exception tables (uninflected
words, uncountables, words whose singular already ends in -ie, and an
irregular plural-to-singular map) checked first, then an ordered cascade of
suffix rewrite rules whose final rule strips a single trailing "s".

The exception tables are matched loosely, by suffix rather than exact
equality, and that looseness is part of the engine's observable behavior.
See DESIGN.md before tightening anything here.
*/
use crate::pos::PartOfSpeech;
use crate::util;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

/// Options for [singularize_with].
#[derive(Clone, Debug, Default)]
pub struct Options<'a> {
    /// The part of speech of the word. Nouns and adjectives share one rule
    /// set, so this only affects recursion into compound words. Defaults to
    /// [PartOfSpeech::Noun].
    pub part_of_speech: PartOfSpeech,
    /// Caller-supplied replacements, consulted by exact match before any
    /// rule logic. Always wins.
    pub custom: HashMap<&'a str, &'a str>,
}

// Words that are their own singular. The table word has to *end with* the
// lowercased input for the entry to match. "carp" was silently concatenated
// onto "wildebeest" in the source data; the combined entry stays because
// both words' behavior depends on it.
static UNINFLECTED: &[&str] = &[
    "bison",
    "debris",
    "headquarters",
    "pincers",
    "trout",
    "bream",
    "diabetes",
    "herpes",
    "pliers",
    "tuna",
    "breeches",
    "djinn",
    "high-jinks",
    "proceedings",
    "whiting",
    "britches",
    "eland",
    "homework",
    "rabies",
    "wildebeestcarp",
    "elk",
    "innings",
    "salmon",
    "chassis",
    "flounder",
    "jackanapes",
    "scissors",
    "christmas",
    "gallows",
    "mackerel",
    "series",
    "clippers",
    "georgia",
    "measles",
    "shears",
    "cod",
    "graffiti",
    "mews",
    "species",
    "contretemps",
    "mumps",
    "swine",
    "corps",
    "news",
    "swiss",
];

// Mass nouns, same matching direction as UNINFLECTED. "cheese" was
// concatenated onto "water" in the source data.
static UNCOUNTABLE: &[&str] = &[
    "advice",
    "equipment",
    "happiness",
    "luggage",
    "news",
    "software",
    "bread",
    "fruit",
    "information",
    "mathematics",
    "progress",
    "understanding",
    "butter",
    "furniture",
    "ketchup",
    "mayonnaise",
    "research",
    "watercheese",
    "garbage",
    "knowledge",
    "meat",
    "rice",
    "electricity",
    "gravel",
    "love",
    "mustard",
    "sand",
];

// Words whose singular already ends in -ie ("zombies" => "zombie", not
// "zomby"). An entry matches when the input ends with the entry plus "s".
// The "^pie" and "^tie" entries carry a literal caret and can never match;
// "bogie" was concatenated onto "zombie". All preserved as-is: "zombies"
// and "pies" reach the rewrite rules below because of it.
static IE_SINGULAR: &[&str] = &[
    "alergie",
    "cutie",
    "hoagie",
    "newbie",
    "softie",
    "veggie",
    "auntie",
    "doggie",
    "hottie",
    "nightie",
    "sortie",
    "weenie",
    "beanie",
    "eyrie",
    "indie",
    "oldie",
    "stoolie",
    "yuppie",
    "birdie",
    "freebie",
    "junkie",
    "^pie",
    "sweetie",
    "zombiebogie",
    "goonie",
    "laddie",
    "pixie",
    "techie",
    "bombie",
    "groupie",
    "laramie",
    "quickie",
    "^tie",
    "collie",
    "hankie",
    "lingerie",
    "reverie",
    "toughie",
    "cookie",
    "hippie",
    "meanie",
    "rookie",
    "valkyrie",
];

// Irregular plural => singular pairs, scanned in order. An entry matches
// when the lowercased input ends with the plural; the substitution keeps
// whatever precedes the matched suffix.
static IRREGULAR: &[(&str, &str)] = &[
    ("atlantes", "atlas"),
    ("atlases", "atlas"),
    ("axes", "axe"),
    ("beeves", "beef"),
    ("brethren", "brother"),
    ("children", "child"),
    ("corpora", "corpus"),
    ("corpuses", "corpus"),
    ("ephemerides", "ephemeris"),
    ("feet", "foot"),
    ("ganglia", "ganglion"),
    ("geese", "goose"),
    ("genera", "genus"),
    ("genii", "genie"),
    ("graffiti", "graffito"),
    ("helves", "helve"),
    ("kine", "cow"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mongooses", "mongoose"),
    ("monies", "money"),
    ("moves", "move"),
    ("mythoi", "mythos"),
    ("numena", "numen"),
    ("occipita", "occiput"),
    ("octopodes", "octopus"),
    ("opera", "opus"),
    ("opuses", "opus"),
    ("our", "my"),
    ("oxen", "ox"),
    ("penes", "penis"),
    ("penises", "penis"),
    ("people", "person"),
    ("sexes", "sex"),
    ("soliloquies", "soliloquy"),
    ("teeth", "tooth"),
    ("testes", "testis"),
    ("trilbys", "trilby"),
    ("turves", "turf"),
    ("zoa", "zoon"),
];

fn rule(pattern: &str, replacement: &'static str) -> (Regex, &'static str) {
    (
        Regex::new(pattern).expect("Could not parse singular rule regex"),
        replacement,
    )
}

// The rewrite cascade, tried in order, first match wins. A capture group
// from an alternation that did not participate in the match expands to
// nothing in the replacement, which is what the "ses$" rule below relies
// on. Case sensitivity varies per rule, matching the source tables.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        rule(r"(?i)(.)ae$", "${1}a"),
        rule(r"(?i)(.)itis$", "${1}itis"),
        rule(r"(?i)(.)eaux$", "${1}eau"),
        rule(r"(?i)(quiz)zes$", "${1}"),
        rule(r"(?i)(matr)ices$", "${1}ix"),
        rule(r"(?i)(ap|vert|ind)ices$", "${1}ex"),
        rule(r"(?i)^(ox)en", "${1}"),
        rule(r"(?i)(alias|status)es$", "${1}"),
        rule(r"(?i)([octop|vir])i$", "${1}us"),
        rule(r"(?i)(cris|ax|test)es$", "${1}is"),
        rule(r"(?i)(shoe)s$", "${1}"),
        rule(r"(?i)(o)es$", "${1}"),
        rule(r"(?i)(bus)es$", "${1}"),
        rule(r"(?i)([m|l])ice$", "${1}ouse"),
        rule(r"(?i)(x|ch|ss|sh)es$", "${1}"),
        rule(r"(?i)(m)ovies$", "${1}ovie"),
        rule(r"(?i)(.)ombies$", "${1}ombie"),
        rule(r"(?i)(s)eries$", "${1}eries"),
        rule(r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
        // -f, -fe sometimes take -ves in the plural (e.g., lives, wolves).
        rule(r"([aeo]l)ves$", "${1}f"),
        rule(r"([^d]ea)ves$", "${1}f"),
        rule(r"arves$", "arf"),
        rule(r"erves$", "erve"),
        rule(r"([nlw]i)ves$", "${1}fe"),
        rule(r"(?i)([lr])ves$", "${1}f"),
        rule(r"([aeo])ves$", "${1}ve"),
        rule(r"(?i)(sive)s$", "${1}"),
        rule(r"(?i)(tive)s$", "${1}"),
        rule(r"(?i)(hive)s$", "${1}"),
        rule(r"(?i)([^f])ves$", "${1}fe"),
        // -ses suffixes.
        rule(r"(?i)(^analy)ses$", "${1}sis"),
        rule(
            r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
            "${1}${2}sis",
        ),
        rule(r"(?i)(.)opses$", "${1}opsis"),
        rule(r"(?i)(.)yses$", "${1}ysis"),
        rule(r"(?i)(h|d|r|o|n|b|cl|p)oses$", "${1}ose"),
        rule(
            r"(?i)(fruct|gluc|galact|lact|ket|malt|rib|sacchar|cellul)ose$",
            "${1}ose",
        ),
        rule(r"(?i)(.)oses$", "${1}osis"),
        // -a
        rule(r"(?i)([ti])a$", "${1}um"),
        rule(r"(?i)(n)ews$", "${1}ews"),
        rule(r"(?i)s$", ""),
    ]
});

/// Returns the singular of the given word with default options.
///
/// ```
/// use en_inflect::singular::singularize;
///
/// assert_eq!(singularize("children"), "child");
/// assert_eq!(singularize("wolves"), "wolf");
/// ```
pub fn singularize(word: &str) -> Cow<'_, str> {
    singularize_with(word, &Options::default())
}

/// Returns the singular of the given word. Never fails; a word no rule
/// matches comes back unchanged.
pub fn singularize_with<'a>(word: &'a str, options: &Options<'a>) -> Cow<'a, str> {
    if let Some(replacement) = options.custom.get(word) {
        return Cow::Borrowed(*replacement);
    }

    // Recurse compound words (e.g. mothers-in-law).
    if word.contains('-') {
        let pieces: Vec<&str> = word.split('-').collect();
        if pieces.len() > 1 && util::PREPOSITIONS.contains(pieces[1]) {
            let head = singularize_with(pieces[0], options);
            return Cow::Owned(format!("{}-{}", head, pieces[1..].join("-")));
        }
    }

    // dogs' => dog's
    if let Some(stem) = word.strip_suffix('\'') {
        return Cow::Owned(format!("{}'s", singularize(stem)));
    }

    let lower = word.to_lowercase();

    for x in UNINFLECTED {
        if x.ends_with(lower.as_str()) {
            return Cow::Borrowed(word);
        }
    }
    for x in UNCOUNTABLE {
        if x.ends_with(lower.as_str()) {
            return Cow::Borrowed(word);
        }
    }
    if lower.ends_with('s') {
        let stem = &lower[..lower.len() - 1];
        if IE_SINGULAR.iter().any(|x| stem.ends_with(x)) {
            return Cow::Owned(lower);
        }
    }
    for (plural, singular) in IRREGULAR {
        if lower.ends_with(plural) {
            if word.len() >= plural.len() {
                let at = word.len() - plural.len();
                if word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(plural) {
                    return Cow::Owned(format!("{}{}", &word[..at], singular));
                }
            }
            return Cow::Borrowed(word);
        }
    }

    for (pattern, replacement) in RULES.iter() {
        if pattern.is_match(word) {
            return pattern.replace_all(word, *replacement);
        }
    }

    Cow::Borrowed(word)
}
