//! End-to-end matrix generation.

use std::path::Path;

use tracing::info;

use tdm_types::TdmError;

use crate::corpus::read_directory;
use crate::matrix::build_matrix;
use crate::vocabulary::build_vocabulary;
use crate::writer::write_output;

/// Shape of a generated matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub num_terms: usize,
    pub num_documents: usize,
    pub nonzero_cells: usize,
}

/// Read every term-frequency file in `input_dir` and write the sorted term
/// list, sorted document list and dense matrix into a new `output_dir`.
///
/// Stops at the first error; nothing is rolled back.
pub fn generate(input_dir: &Path, output_dir: &Path) -> Result<GenerationSummary, TdmError> {
    info!(input = %input_dir.display(), output = %output_dir.display(), "Generating term-document matrix");

    let documents = read_directory(input_dir)?;
    info!(count = documents.len(), "Found documents");

    let vocabulary = build_vocabulary(input_dir, &documents)?;
    let matrix = build_matrix(input_dir, &documents, &vocabulary)?;
    write_output(output_dir, &vocabulary, &documents, &matrix)?;

    Ok(GenerationSummary {
        num_terms: matrix.num_terms(),
        num_documents: matrix.num_documents(),
        nonzero_cells: matrix.nonzero_count(),
    })
}
