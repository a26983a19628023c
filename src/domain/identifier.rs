//! Validation of class names against the positional grammar.
//!
//! ```text
//! identifier := namespace '-' function [ ( '-' component )+ [ '-' element ( '-' modifier )* ] ]
//! ```
//!
//! Matching is a single greedy left-to-right pass with no backtracking. Once
//! a token fails to match the component vocabulary it is tried exactly once
//! as the element, and never again as a component.

use std::{fmt, ops::Range};

use super::{DELIMITER, Segment, Vocabulary};

/// A class name accepted by [`validate`], split into its segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassName<'a> {
    namespace: &'a str,
    function: &'a str,
    components: Vec<&'a str>,
    element: Option<&'a str>,
    modifiers: Vec<&'a str>,
}

impl<'a> ClassName<'a> {
    /// The namespace token.
    #[must_use]
    pub const fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// The function token.
    #[must_use]
    pub const fn function(&self) -> &'a str {
        self.function
    }

    /// The component tokens, in input order.
    #[must_use]
    pub fn components(&self) -> &[&'a str] {
        &self.components
    }

    /// The element token, if present.
    #[must_use]
    pub const fn element(&self) -> Option<&'a str> {
        self.element
    }

    /// The modifier tokens, in input order.
    #[must_use]
    pub fn modifiers(&self) -> &[&'a str] {
        &self.modifiers
    }
}

impl fmt::Display for ClassName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.namespace, self.function)?;
        for token in self
            .components
            .iter()
            .chain(&self.element)
            .chain(&self.modifiers)
        {
            write!(f, "{DELIMITER}{token}")?;
        }
        Ok(())
    }
}

/// The segments that would have been accepted at a failing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected(&'static [Segment]);

impl Expected {
    /// The accepted segments, in grammar order.
    #[must_use]
    pub const fn segments(self) -> &'static [Segment] {
        self.0
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<_> = self.0.iter().map(|segment| segment.name()).collect();
        f.write_str(&names.join(" or "))
    }
}

/// The reason a class name was rejected.
///
/// Rejection is an expected outcome of validation rather than a failure; it
/// carries enough information to point at the offending token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// A token is empty: the name is empty, or has a leading, trailing or
    /// doubled delimiter.
    #[error("empty token at position {position}")]
    EmptyToken {
        /// Index of the empty token.
        position: usize,
        /// Byte span of the empty token (always zero-length).
        span: Range<usize>,
    },

    /// The name ended before a required segment.
    #[error("missing {expected} after '{identifier}'")]
    Missing {
        /// The complete class name.
        identifier: String,
        /// Index at which the missing token was expected.
        position: usize,
        /// The segment that was required.
        expected: Expected,
    },

    /// A token is not allowed at its position.
    #[error("unexpected token '{token}' at position {position}, expected {expected}")]
    Unexpected {
        /// The offending token.
        token: String,
        /// Index of the offending token.
        position: usize,
        /// Byte span of the offending token within the class name.
        span: Range<usize>,
        /// The segments that would have been accepted here.
        expected: Expected,
    },
}

impl Rejection {
    /// Index of the token at which validation failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyToken { position, .. }
            | Self::Missing { position, .. }
            | Self::Unexpected { position, .. } => *position,
        }
    }

    /// Byte span within the class name to point at.
    ///
    /// For a missing segment this is the empty span at the end of the name.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::EmptyToken { span, .. } | Self::Unexpected { span, .. } => span.clone(),
            Self::Missing { identifier, .. } => identifier.len()..identifier.len(),
        }
    }

    /// The offending token, if there is one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Unexpected { token, .. } => Some(token),
            Self::EmptyToken { .. } | Self::Missing { .. } => None,
        }
    }

    /// The segments that would have been accepted at the failing position.
    #[must_use]
    pub const fn expected(&self) -> &'static [Segment] {
        match self {
            Self::EmptyToken { .. } => &[],
            Self::Missing { expected, .. } | Self::Unexpected { expected, .. } => {
                expected.segments()
            }
        }
    }
}

/// Grammar position reached after consuming a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Namespace,
    Function,
    Component,
    Element,
    Modifier,
}

impl State {
    /// Segments accepted for the next token, in the order they are tried.
    const fn expects(self) -> &'static [Segment] {
        match self {
            Self::Start => &[Segment::Namespace],
            Self::Namespace => &[Segment::Function],
            Self::Function => &[Segment::Component],
            Self::Component => &[Segment::Component, Segment::Element],
            Self::Element | Self::Modifier => &[Segment::Modifier],
        }
    }
}

struct Token<'a> {
    text: &'a str,
    span: Range<usize>,
}

fn tokenize(identifier: &str) -> Result<Vec<Token<'_>>, Rejection> {
    let mut offset = 0;
    identifier
        .split(DELIMITER)
        .enumerate()
        .map(|(position, text)| {
            let span = offset..offset + text.len();
            offset = span.end + DELIMITER.len_utf8();
            if text.is_empty() {
                Err(Rejection::EmptyToken { position, span })
            } else {
                Ok(Token { text, span })
            }
        })
        .collect()
}

/// Validates a class name against the vocabulary.
///
/// Returns the parsed [`ClassName`] on acceptance.
///
/// # Errors
///
/// Returns a [`Rejection`] describing the first token that could not be
/// matched, or the segment that was missing.
pub fn validate<'a>(
    identifier: &'a str,
    vocabulary: &Vocabulary,
) -> Result<ClassName<'a>, Rejection> {
    let tokens = tokenize(identifier)?;

    let mut class_name = ClassName::default();
    let mut state = State::Start;

    for (position, token) in tokens.into_iter().enumerate() {
        let segment = state
            .expects()
            .iter()
            .copied()
            .find(|&segment| vocabulary.allows(segment, token.text))
            .ok_or_else(|| Rejection::Unexpected {
                token: token.text.to_string(),
                position,
                span: token.span.clone(),
                expected: Expected(state.expects()),
            })?;

        state = match segment {
            Segment::Namespace => {
                class_name.namespace = token.text;
                State::Namespace
            }
            Segment::Function => {
                class_name.function = token.text;
                State::Function
            }
            Segment::Component => {
                class_name.components.push(token.text);
                State::Component
            }
            Segment::Element => {
                class_name.element = Some(token.text);
                State::Element
            }
            Segment::Modifier => {
                class_name.modifiers.push(token.text);
                State::Modifier
            }
        };
    }

    match state {
        State::Start | State::Namespace => Err(Rejection::Missing {
            identifier: identifier.to_string(),
            position: usize::from(state == State::Namespace),
            expected: Expected(state.expects()),
        }),
        State::Function | State::Component | State::Element | State::Modifier => Ok(class_name),
    }
}

/// Returns `true` if the class name is valid for the vocabulary.
#[must_use]
pub fn is_valid(identifier: &str, vocabulary: &Vocabulary) -> bool {
    validate(identifier, vocabulary).is_ok()
}
