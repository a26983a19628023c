//! CSS class naming hierarchy enforcement
//!
//! Class names follow the positional grammar
//! `namespace-function[-component...[-element[-modifier...]]]`, with the
//! allowed tokens for each position taken from a project vocabulary.

pub mod domain;
pub use domain::{
    ClassName, ConfigLayer, Rejection, Segment, Vocabulary, VocabularySet, is_valid, validate,
};

/// Configuration file loading and class name extraction from input text.
pub mod storage;
pub use storage::Candidate;
