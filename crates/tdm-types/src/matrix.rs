//! Dense term-document matrix.

/// Dense `num_terms x num_documents` matrix of raw counts, stored row-major.
///
/// Cell `(i, j)` holds the frequency of vocabulary term `i` in document `j`,
/// or 0 when the term does not occur there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermDocumentMatrix {
    num_terms: usize,
    num_documents: usize,
    cells: Vec<u64>,
}

impl TermDocumentMatrix {
    /// All-zero matrix of the given shape.
    pub fn zeros(num_terms: usize, num_documents: usize) -> Self {
        Self {
            num_terms,
            num_documents,
            cells: vec![0; num_terms * num_documents],
        }
    }

    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Value at row `term`, column `document`.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn get(&self, term: usize, document: usize) -> u64 {
        self.cells[self.offset(term, document)]
    }

    /// Set row `term`, column `document` to `value`.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn set(&mut self, term: usize, document: usize, value: u64) {
        let offset = self.offset(term, document);
        self.cells[offset] = value;
    }

    /// All document counts for one term.
    pub fn row(&self, term: usize) -> &[u64] {
        let start = term * self.num_documents;
        &self.cells[start..start + self.num_documents]
    }

    /// Iterate rows in term order.
    ///
    /// Yields exactly `num_terms` rows, even when there are no documents.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        (0..self.num_terms).map(move |i| self.row(i))
    }

    /// Number of cells holding a non-zero count.
    pub fn nonzero_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    fn offset(&self, term: usize, document: usize) -> usize {
        assert!(
            term < self.num_terms && document < self.num_documents,
            "cell ({term}, {document}) out of range for {}x{} matrix",
            self.num_terms,
            self.num_documents
        );
        term * self.num_documents + document
    }
}
