//! # tdm-types
//!
//! Shared domain types for the term-document matrix tools.
//!
//! This crate defines the core data structures used throughout the system:
//! - TermFrequencies: per-document term -> count mapping
//! - Vocabulary: the sorted union of terms across a corpus
//! - TermDocumentMatrix: dense term x document count matrix
//! - Settings: Configuration types
//!
//! ## Usage
//!
//! ```rust
//! use tdm_types::{TermFrequencies, Vocabulary};
//!
//! let mut freqs = TermFrequencies::new();
//! freqs.increment("apple");
//! let vocab = Vocabulary::from_terms(freqs.terms());
//! assert_eq!(vocab.position("apple"), Some(0));
//! ```

pub mod config;
pub mod error;
pub mod frequency;
pub mod matrix;
pub mod vocabulary;

pub use config::Settings;
pub use error::TdmError;
pub use frequency::TermFrequencies;
pub use matrix::TermDocumentMatrix;
pub use vocabulary::Vocabulary;
