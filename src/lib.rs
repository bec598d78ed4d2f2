#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Inflect English nouns, adjectives, and articles.
//!
//! This crate converts nouns and a small number of adjectives between their
//! singular and plural forms, derives the comparative and superlative forms
//! of adjectives, and picks the correct indefinite article ("a" or "an")
//! for a word. It answers isolated per-word queries; it does not tag,
//! tokenize, or otherwise understand running text.
//!
//! The pluralization rules follow "An Algorithmic Approach to English
//! Pluralization" by Damian Conway, the singularization rules are adapted
//! from Bermi Ferrer's Inflector, and the article rules come from the Ruby
//! Linguistics module by Michael Granger. The rules are almost entirely
//! table-driven: ordered groups of pattern rules, gated where necessary by
//! closed word categories, with the first matching rule winning.
//!
//! Where a noun has both a modern and a classical/unassimilated plural
//! (e.g. "indexes" and "indices", "maximums" and "maxima"), the classical
//! form is the default; pass `classical: false` in
//! [plural::Options] to prefer the modern inflection.
//!
//! Every function here is a best-effort heuristic transformer, not a
//! validator: for any input string, including empty or already-inflected
//! ones, it returns a string and never fails. All rule tables are compiled
//! once, on first use, and are read-only afterwards, so the whole crate is
//! safe to call from any number of threads without synchronization.
//!
//! # Examples
//!
//! ```
//! use en_inflect::{comparative, indefinite_article, pluralize, singularize};
//!
//! assert_eq!(pluralize("mother-in-law"), "mothers-in-law");
//! assert_eq!(singularize("children"), "child");
//! assert_eq!(indefinite_article("hour"), "an");
//! assert_eq!(comparative("big"), "bigger");
//! ```

mod util;

pub mod adjective;
pub mod article;
pub mod plural;
pub mod pos;
pub mod singular;

pub use adjective::{attributive, comparative, predicative, superlative};
pub use article::{article, definite_article, indefinite_article, referenced, ArticleKind};
pub use plural::{pluralize, pluralize_with};
pub use pos::PartOfSpeech;
pub use singular::{singularize, singularize_with};
