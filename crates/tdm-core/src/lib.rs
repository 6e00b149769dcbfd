//! # tdm-core
//!
//! Term-frequency counting and term-document matrix generation.
//!
//! ## Pipeline
//! 1. `corpus::read_directory` lists document names in sorted order
//! 2. `vocabulary::build_vocabulary` unions the terms of every document
//! 3. `matrix::build_matrix` fills the dense count matrix
//! 4. `writer::write_output` writes the three output artifacts
//!
//! `pipeline::generate` runs all four steps. `counter` is the independent
//! single-stream frequency counter whose output format the pipeline consumes.
//!
//! Everything runs single-threaded and in memory; the vocabulary, document
//! list and full dense matrix must fit in RAM at once.

pub mod corpus;
pub mod counter;
pub mod matrix;
pub mod parser;
pub mod pipeline;
pub mod vocabulary;
pub mod writer;

pub use corpus::read_directory;
pub use counter::{count_tokens, write_frequencies};
pub use matrix::build_matrix;
pub use parser::{parse_term_frequencies, read_term_frequencies};
pub use pipeline::{generate, GenerationSummary};
pub use vocabulary::build_vocabulary;
pub use writer::{write_output, DOCUMENTS_FILE, MATRIX_FILE, TERMS_FILE};
