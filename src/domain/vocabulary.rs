use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ConfigLayer, Segment};

/// The character separating the tokens of a class name.
pub const DELIMITER: char = '-';

/// Error returned when a vocabulary token contains the [`DELIMITER`].
///
/// A token containing the delimiter could never match a single position of
/// a class name, so such tokens are refused when a set is built.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid vocabulary token '{0}': tokens must not contain '{DELIMITER}'")]
pub struct InvalidTokenError(String);

/// The set of tokens allowed for one [`Segment`].
///
/// Tokens are case-sensitive and unique. Order is irrelevant; iteration is
/// sorted so that serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct VocabularySet(BTreeSet<String>);

impl VocabularySet {
    /// Builds a set from the given tokens.
    ///
    /// Duplicates are collapsed. Empty tokens are kept (they can never
    /// match, since empty tokens are rejected before membership is tested).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTokenError`] if any token contains the
    /// [`DELIMITER`].
    pub fn new<I, S>(tokens: I) -> Result<Self, InvalidTokenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tokens
            .into_iter()
            .map(|token| {
                let token = token.into();
                if token.contains(DELIMITER) {
                    Err(InvalidTokenError(token))
                } else {
                    Ok(token)
                }
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    /// Builds a set from a static word list known to be delimiter-free.
    pub(crate) fn from_static(tokens: &[&'static str]) -> Self {
        Self(
            tokens
                .iter()
                .filter(|token| !token.contains(DELIMITER))
                .map(|&token| token.to_string())
                .collect(),
        )
    }

    /// Returns `true` if the token is a member of this set.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Returns the number of tokens in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns a new set containing the tokens of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }
}

impl TryFrom<Vec<String>> for VocabularySet {
    type Error = InvalidTokenError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parses a comma-delimited list, trimming whitespace around each item.
///
/// An empty string is an empty set, not a set holding one empty token.
impl FromStr for VocabularySet {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::new(s.split(',').map(str::trim))
    }
}

impl fmt::Display for VocabularySet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens: Vec<_> = self.iter().collect();
        write!(f, "{}", tokens.join(","))
    }
}

/// The fully resolved vocabulary for every [`Segment`].
///
/// Built once with [`Vocabulary::resolve`] and read-only afterwards. It owns
/// copies of its sets, so it can be shared freely between threads and is
/// unaffected by later changes to the layers it was resolved from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vocabulary {
    namespaces: VocabularySet,
    functions: VocabularySet,
    components: VocabularySet,
    elements: VocabularySet,
    modifiers: VocabularySet,
}

impl Vocabulary {
    /// Resolves the effective vocabulary from up to three layers.
    ///
    /// For each segment the highest-precedence layer with a concrete value
    /// wins outright: `overrides` > `file` > `defaults`. Values are never
    /// merged across layers. A segment that is unset in every layer
    /// resolves to an empty set.
    #[must_use]
    pub fn resolve(
        defaults: &ConfigLayer,
        file: Option<&ConfigLayer>,
        overrides: Option<&ConfigLayer>,
    ) -> Self {
        let layers = [
            ("overrides", overrides),
            ("file", file),
            ("defaults", Some(defaults)),
        ];

        let pick = |segment: Segment| {
            layers
                .iter()
                .find_map(|&(name, layer)| layer?.get(segment).map(|set| (name, set)))
                .map_or_else(
                    || {
                        debug!(%segment, "unset in every layer");
                        VocabularySet::default()
                    },
                    |(name, set)| {
                        debug!(%segment, layer = name, tokens = set.len(), "resolved");
                        set.clone()
                    },
                )
        };

        Self {
            namespaces: pick(Segment::Namespace),
            functions: pick(Segment::Function),
            components: pick(Segment::Component),
            elements: pick(Segment::Element),
            modifiers: pick(Segment::Modifier),
        }
    }

    /// Returns the set of tokens allowed for the given segment.
    #[must_use]
    pub const fn get(&self, segment: Segment) -> &VocabularySet {
        match segment {
            Segment::Namespace => &self.namespaces,
            Segment::Function => &self.functions,
            Segment::Component => &self.components,
            Segment::Element => &self.elements,
            Segment::Modifier => &self.modifiers,
        }
    }

    /// Returns `true` if `token` is allowed in the given segment.
    #[must_use]
    pub fn allows(&self, segment: Segment, token: &str) -> bool {
        self.get(segment).contains(token)
    }

    /// Renders the vocabulary as a `[tool.chcss]` section of a
    /// `pyproject.toml` file, one key per segment in grammar order.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary cannot be serialized to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let mut rendered = String::from("[tool.chcss]\n");
        for segment in Segment::ALL {
            let tokens = toml::Value::try_from(self.get(segment))?;
            rendered.push_str(&format!("{} = {tokens}\n", segment.config_key()));
        }
        Ok(rendered)
    }
}
