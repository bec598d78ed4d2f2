//! The [PartOfSpeech] enum, which selects the rule groups that apply when
//! inflecting a word.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The part of speech of the word being inflected. Only a closed set of
/// adjectives (demonstratives like "this" and possessives like "my")
/// pluralize at all, so passing [PartOfSpeech::Adjective] restricts the
/// pluralizer to the rule groups covering that set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PartOfSpeech {
    /// A noun ("dog", "matrix"). This is the default.
    Noun,
    /// A verb. No verb-specific rules exist; the full cascade applies.
    Verb,
    /// An adjective ("this", "my", "big").
    Adjective,
    /// An adverb. As with verbs, the full cascade applies.
    Adverb,
}

impl PartOfSpeech {
    /// Returns the Penn Treebank tag for this part of speech.
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NN",
            PartOfSpeech::Verb => "VB",
            PartOfSpeech::Adjective => "JJ",
            PartOfSpeech::Adverb => "RB",
        }
    }
}

impl Default for PartOfSpeech {
    fn default() -> Self {
        PartOfSpeech::Noun
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error)]
#[error("{0} is not a recognized part-of-speech tag")]
pub struct ParsePartOfSpeechError(String);

impl FromStr for PartOfSpeech {
    type Err = ParsePartOfSpeechError;

    /// Parses a Penn Treebank tag. Matching is by two-letter prefix, so
    /// subcategorized tags like "NNS", "VBD", "JJR", or "RBS" parse to the
    /// base part of speech.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.starts_with("NN") {
            Ok(PartOfSpeech::Noun)
        } else if tag.starts_with("VB") {
            Ok(PartOfSpeech::Verb)
        } else if tag.starts_with("JJ") {
            Ok(PartOfSpeech::Adjective)
        } else if tag.starts_with("RB") {
            Ok(PartOfSpeech::Adverb)
        } else {
            Err(ParsePartOfSpeechError(tag.to_string()))
        }
    }
}
