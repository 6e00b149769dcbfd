//! Output artifacts.
//!
//! `output_dir` is created with a single-level `create_dir` and must not
//! exist beforehand. Files already written are left in place if a later
//! write fails.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use tdm_types::{TdmError, TermDocumentMatrix, Vocabulary};

/// Row labels, one term per line.
pub const TERMS_FILE: &str = "sorted_terms.txt";

/// Column labels, one document name per line.
pub const DOCUMENTS_FILE: &str = "sorted_documents.txt";

/// `"<rows> <cols>"` header followed by one line of counts per term.
pub const MATRIX_FILE: &str = "td_matrix.txt";

/// Create `output_dir` and write the three artifacts into it.
pub fn write_output(
    output_dir: &Path,
    vocabulary: &Vocabulary,
    documents: &[String],
    matrix: &TermDocumentMatrix,
) -> Result<(), TdmError> {
    fs::create_dir(output_dir).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => TdmError::OutputExists(output_dir.to_path_buf()),
        _ => TdmError::io(output_dir, e),
    })?;

    write_file(&output_dir.join(TERMS_FILE), |w| write_lines(w, vocabulary))?;
    write_file(&output_dir.join(DOCUMENTS_FILE), |w| write_lines(w, documents))?;
    write_file(&output_dir.join(MATRIX_FILE), |w| write_matrix(w, matrix))?;

    info!(dir = %output_dir.display(), "Wrote output artifacts");
    Ok(())
}

fn write_file<F>(path: &Path, body: F) -> Result<(), TdmError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| TdmError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| TdmError::io(path, e))
}

fn write_lines<W, I, S>(writer: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    Ok(())
}

/// Write the dimension header and every row as space-separated counts.
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &TermDocumentMatrix) -> io::Result<()> {
    writeln!(writer, "{} {}", matrix.num_terms(), matrix.num_documents())?;
    for row in matrix.rows() {
        let mut cells = row.iter();
        if let Some(first) = cells.next() {
            write!(writer, "{first}")?;
            for cell in cells {
                write!(writer, " {cell}")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
