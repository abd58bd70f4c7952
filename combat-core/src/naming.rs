//! Display names with grammatical articles.
//!
//! A [`Name`] knows which articles it takes, so messages can say
//! "a goblin", "The goblin" or just "Ash" without the caller caring
//! which kind of name it is holding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a composed name should be capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capitalization {
    #[default]
    None,
    FirstLetter,
    WholeString,
}

impl Capitalization {
    /// Apply this capitalization to a string.
    pub fn apply(self, text: &str) -> String {
        match self {
            Capitalization::None => text.to_string(),
            Capitalization::FirstLetter => {
                let mut chars = text.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Capitalization::WholeString => text.to_uppercase(),
        }
    }
}

/// Indefinite article a name takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndefiniteArticle {
    #[default]
    None,
    A,
    An,
}

impl IndefiniteArticle {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            IndefiniteArticle::None => None,
            IndefiniteArticle::A => Some("a"),
            IndefiniteArticle::An => Some("an"),
        }
    }
}

/// Definite article a name takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefiniteArticle {
    #[default]
    None,
    The,
}

impl DefiniteArticle {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            DefiniteArticle::None => None,
            DefiniteArticle::The => Some("the"),
        }
    }
}

/// An immutable display name.
///
/// Generic names ("goblin") take both articles; specific names ("Ash")
/// are proper nouns and take neither. The article modes are fixed when
/// the name is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    text: String,
    #[serde(default)]
    indefinite: IndefiniteArticle,
    #[serde(default)]
    definite: DefiniteArticle,
}

impl Name {
    /// A common noun referred to as "a/an X" and "the X".
    pub fn generic(text: impl Into<String>, indefinite: IndefiniteArticle) -> Self {
        Self {
            text: text.into(),
            indefinite,
            definite: DefiniteArticle::The,
        }
    }

    /// A proper noun, never given an article.
    pub fn specific(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indefinite: IndefiniteArticle::None,
            definite: DefiniteArticle::None,
        }
    }

    /// The bare name without any article.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn indefinite_article(&self) -> IndefiniteArticle {
        self.indefinite
    }

    pub fn definite_article(&self) -> DefiniteArticle {
        self.definite
    }

    /// Render as "a goblin", "an ooze" or the bare name.
    pub fn with_indefinite_article(&self, capitalization: Capitalization) -> String {
        self.compose(self.indefinite.as_str(), capitalization)
    }

    /// Render as "the goblin" or the bare name.
    pub fn with_definite_article(&self, capitalization: Capitalization) -> String {
        self.compose(self.definite.as_str(), capitalization)
    }

    fn compose(&self, article: Option<&str>, capitalization: Capitalization) -> String {
        let composed = match article {
            Some(article) => format!("{article} {}", self.text),
            None => self.text.clone(),
        };
        capitalization.apply(&composed)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
