//! Domain models for class name validation.
//!
//! This module contains the grammar segments, vocabularies and their
//! configuration layers, and the class name validator. Nothing here performs
//! I/O.

mod segment;
pub use segment::Segment;

/// HTML element name lists.
pub mod html;

mod layer;
pub use layer::ConfigLayer;

mod vocabulary;
pub use vocabulary::{DELIMITER, InvalidTokenError, Vocabulary, VocabularySet};

pub mod identifier;
pub use identifier::{ClassName, Rejection, is_valid, validate};
