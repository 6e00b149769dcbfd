//! First pass over the corpus: collect the vocabulary.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use tdm_types::{TdmError, Vocabulary};

use crate::parser::read_term_frequencies;

/// Union the terms of every document in `documents` and sort them.
///
/// Each document's frequencies are parsed and dropped immediately; only
/// the term set is retained.
pub fn build_vocabulary(input_dir: &Path, documents: &[String]) -> Result<Vocabulary, TdmError> {
    let mut terms: HashSet<String> = HashSet::new();

    for document in documents {
        let freqs = read_term_frequencies(&input_dir.join(document))?;
        debug!(document = %document, terms = freqs.len(), "Collected document terms");
        terms.extend(freqs.terms().map(str::to_string));
    }

    let vocabulary = Vocabulary::from_set(terms);
    info!(
        terms = vocabulary.len(),
        documents = documents.len(),
        "Built vocabulary"
    );
    Ok(vocabulary)
}
