use serde::Deserialize;

use super::{
    Segment, VocabularySet,
    html::{HTML_ELEMENTS, HTML_ELEMENTS_OBSOLETE},
};

/// A partial vocabulary configuration.
///
/// Each field is either a concrete set or `None`, which means *unset*: an
/// unset field defers to the next layer down during
/// [`Vocabulary::resolve`](super::Vocabulary::resolve). A concrete empty set
/// is not the same as unset, and does override lower layers.
///
/// Deserializes from the `[tool.chcss]` table of a `pyproject.toml` or the
/// `"chcss"` entry of a `package.json`. Absent keys are unset and unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    /// Allowed namespace tokens.
    pub namespaces: Option<VocabularySet>,
    /// Allowed function tokens.
    pub functions: Option<VocabularySet>,
    /// Allowed component tokens.
    pub components: Option<VocabularySet>,
    /// Allowed element tokens.
    pub elements: Option<VocabularySet>,
    /// Allowed modifier tokens.
    pub modifiers: Option<VocabularySet>,
}

impl ConfigLayer {
    /// A layer with every field unset.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// The built-in defaults.
    ///
    /// Every field is concrete: elements are the current HTML element names,
    /// all other segments are empty.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            namespaces: Some(VocabularySet::default()),
            functions: Some(VocabularySet::default()),
            components: Some(VocabularySet::default()),
            elements: Some(VocabularySet::from_static(HTML_ELEMENTS)),
            modifiers: Some(VocabularySet::default()),
        }
    }

    /// The built-in defaults, with obsolete HTML elements also allowed.
    #[must_use]
    pub fn defaults_with_obsolete_elements() -> Self {
        let elements = VocabularySet::from_static(HTML_ELEMENTS)
            .union(&VocabularySet::from_static(HTML_ELEMENTS_OBSOLETE));
        Self::defaults().with(Segment::Element, elements)
    }

    /// Returns the value for a segment, or `None` if it is unset.
    #[must_use]
    pub const fn get(&self, segment: Segment) -> Option<&VocabularySet> {
        match segment {
            Segment::Namespace => self.namespaces.as_ref(),
            Segment::Function => self.functions.as_ref(),
            Segment::Component => self.components.as_ref(),
            Segment::Element => self.elements.as_ref(),
            Segment::Modifier => self.modifiers.as_ref(),
        }
    }

    /// Sets (or, with `None`, unsets) the value for a segment.
    pub fn set(&mut self, segment: Segment, value: Option<VocabularySet>) {
        let field = match segment {
            Segment::Namespace => &mut self.namespaces,
            Segment::Function => &mut self.functions,
            Segment::Component => &mut self.components,
            Segment::Element => &mut self.elements,
            Segment::Modifier => &mut self.modifiers,
        };
        *field = value;
    }

    /// Returns this layer with a concrete value for the given segment.
    #[must_use]
    pub fn with(mut self, segment: Segment, value: VocabularySet) -> Self {
        self.set(segment, Some(value));
        self
    }

    /// Returns `true` if every field is unset.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        Segment::ALL.iter().all(|&segment| self.get(segment).is_none())
    }
}
