use std::fmt;

/// One of the five positional roles a token can play in a class name.
///
/// Segments appear in a fixed order:
/// `namespace-function[-component...[-element[-modifier...]]]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Project namespace. Exactly one, required.
    Namespace,
    /// Function of the class. Exactly one, required.
    Function,
    /// Structural component. One or more, optional as a group.
    Component,
    /// Target element. At most one, only after a component.
    Element,
    /// Modifier. Zero or more, only after an element.
    Modifier,
}

impl Segment {
    /// All segments, in grammar order.
    pub const ALL: [Self; 5] = [
        Self::Namespace,
        Self::Function,
        Self::Component,
        Self::Element,
        Self::Modifier,
    ];

    /// The singular, human-readable name of the segment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Function => "function",
            Self::Component => "component",
            Self::Element => "element",
            Self::Modifier => "modifier",
        }
    }

    /// The configuration key holding this segment's vocabulary.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Namespace => "namespaces",
            Self::Function => "functions",
            Self::Component => "components",
            Self::Element => "elements",
            Self::Modifier => "modifiers",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
