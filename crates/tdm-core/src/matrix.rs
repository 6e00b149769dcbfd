//! Second pass over the corpus: populate the dense matrix.

use std::path::Path;

use tracing::{debug, info, warn};

use tdm_types::{TdmError, TermDocumentMatrix, Vocabulary};

use crate::parser::read_term_frequencies;

/// Build the `vocabulary x documents` count matrix.
///
/// Each document is parsed again and its terms are placed through
/// `Vocabulary::position`; cells for absent terms stay 0.
pub fn build_matrix(
    input_dir: &Path,
    documents: &[String],
    vocabulary: &Vocabulary,
) -> Result<TermDocumentMatrix, TdmError> {
    let mut matrix = TermDocumentMatrix::zeros(vocabulary.len(), documents.len());

    for (col, document) in documents.iter().enumerate() {
        let freqs = read_term_frequencies(&input_dir.join(document))?;

        for (term, frequency) in freqs.iter() {
            match vocabulary.position(term) {
                Some(row) => matrix.set(row, col, frequency),
                // Only reachable if the file changed after the vocabulary pass.
                None => warn!(document = %document, term = %term, "Term missing from vocabulary"),
            }
        }
        debug!(document = %document, column = col, terms = freqs.len(), "Filled matrix column");
    }

    info!(
        rows = matrix.num_terms(),
        columns = matrix.num_documents(),
        nonzero = matrix.nonzero_count(),
        "Built term-document matrix"
    );
    Ok(matrix)
}
