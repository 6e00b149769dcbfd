//! Term-frequency file parser.
//!
//! Input lines are `"<term> <frequency>"`. Blank lines are skipped; any other
//! line that does not hold exactly two whitespace-separated fields with a
//! non-negative base-10 frequency aborts the parse. Repeated terms keep the
//! last value seen.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tdm_types::{TdmError, TermFrequencies};

/// Read and parse the term-frequency file at `path`.
pub fn read_term_frequencies(path: &Path) -> Result<TermFrequencies, TdmError> {
    let file = File::open(path).map_err(|e| TdmError::io(path, e))?;
    parse_term_frequencies(BufReader::new(file), path)
}

/// Parse term-frequency lines from `reader`.
///
/// `source` is only used to label errors.
pub fn parse_term_frequencies<R: BufRead>(
    reader: R,
    source: &Path,
) -> Result<TermFrequencies, TdmError> {
    let mut freqs = TermFrequencies::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TdmError::io(source, e))?;
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let &[term, frequency] = fields.as_slice() else {
            return Err(TdmError::MalformedRecord {
                path: source.to_path_buf(),
                line: line_no,
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
        };

        let frequency: u64 = frequency.parse().map_err(|e| TdmError::MalformedRecord {
            path: source.to_path_buf(),
            line: line_no,
            reason: format!("invalid frequency '{frequency}': {e}"),
        })?;

        freqs.insert(term, frequency);
    }

    Ok(freqs)
}
