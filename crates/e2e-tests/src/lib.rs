//! End-to-end test infrastructure for the term-document matrix tools.
//!
//! Provides a shared TestHarness and helper functions for E2E tests
//! covering text -> frequency files -> matrix artifacts.

use std::fs;
use std::path::PathBuf;

use tdm_core::{count_tokens, generate, write_frequencies, GenerationSummary};
use tdm_core::{DOCUMENTS_FILE, MATRIX_FILE, TERMS_FILE};
use tdm_types::TdmError;

/// Shared test harness for E2E tests.
///
/// Owns a temp directory with an input corpus directory and a path for the
/// (not yet created) output directory.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Directory of per-document term-frequency files
    pub input_dir: PathBuf,
    /// Output directory path; created by `generate`
    pub output_dir: PathBuf,
}

impl TestHarness {
    /// Create a new harness with an empty input directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let input_dir = temp_dir.path().join("corpus");
        let output_dir = temp_dir.path().join("out");

        fs::create_dir(&input_dir).expect("Failed to create input dir");

        Self {
            _temp_dir: temp_dir,
            input_dir,
            output_dir,
        }
    }

    /// Write a raw term-frequency file into the corpus.
    pub fn add_frequency_file(&self, name: &str, contents: &str) {
        fs::write(self.input_dir.join(name), contents).expect("Failed to write frequency file");
    }

    /// Count `text` with the frequency counter and store the result as `name`.
    pub fn add_text_document(&self, name: &str, text: &str) {
        let freqs = count_tokens(text.as_bytes()).expect("Failed to count tokens");
        let mut out = Vec::new();
        write_frequencies(&freqs, &mut out).expect("Failed to format frequencies");
        fs::write(self.input_dir.join(name), out).expect("Failed to write frequency file");
    }

    /// Run the full generation pipeline.
    pub fn generate(&self) -> Result<GenerationSummary, TdmError> {
        generate(&self.input_dir, &self.output_dir)
    }

    /// Read an output artifact as a string.
    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir.join(name)).expect("Failed to read output file")
    }

    pub fn sorted_terms(&self) -> Vec<String> {
        lines(&self.read_output(TERMS_FILE))
    }

    pub fn sorted_documents(&self) -> Vec<String> {
        lines(&self.read_output(DOCUMENTS_FILE))
    }

    /// Parse td_matrix.txt into its header and rows.
    pub fn matrix(&self) -> ParsedMatrix {
        ParsedMatrix::parse(&self.read_output(MATRIX_FILE))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// td_matrix.txt contents split into header and rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatrix {
    pub num_terms: usize,
    pub num_documents: usize,
    pub rows: Vec<Vec<u64>>,
}

impl ParsedMatrix {
    /// Parse matrix text; panics on any format violation.
    pub fn parse(text: &str) -> Self {
        assert!(text.ends_with('\n'), "matrix file must be newline-terminated");
        let mut lines = text.lines();
        let header: Vec<usize> = lines
            .next()
            .expect("Missing header line")
            .split(' ')
            .map(|n| n.parse().expect("Header field is not an integer"))
            .collect();
        assert_eq!(header.len(), 2, "header must hold two integers");

        let rows = lines
            .map(|line| {
                if line.is_empty() {
                    Vec::new()
                } else {
                    line.split(' ')
                        .map(|n| n.parse().expect("Cell is not an integer"))
                        .collect()
                }
            })
            .collect();

        Self {
            num_terms: header[0],
            num_documents: header[1],
            rows,
        }
    }
}

/// Split newline-terminated text into lines.
pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Build a document whose text repeats each `(term, count)` pair.
pub fn repeat_terms(pairs: &[(&str, usize)]) -> String {
    pairs
        .iter()
        .flat_map(|(term, count)| std::iter::repeat(*term).take(*count))
        .collect::<Vec<_>>()
        .join(" ")
}
