//! End-to-end pipeline tests.
//!
//! Text or frequency files -> generate -> sorted_terms.txt,
//! sorted_documents.txt, td_matrix.txt.

use pretty_assertions::assert_eq;

use e2e_tests::{repeat_terms, ParsedMatrix, TestHarness};
use tdm_core::{read_term_frequencies, GenerationSummary};

/// The two-document reference corpus produces the exact reference files.
#[test]
fn test_reference_corpus() {
    let harness = TestHarness::new();
    harness.add_frequency_file("doc1.txt", "apple 2\nbanana 1\n");
    harness.add_frequency_file("doc2.txt", "banana 3\ncherry 1\n");

    harness.generate().unwrap();

    assert_eq!(harness.read_output("sorted_terms.txt"), "apple\nbanana\ncherry\n");
    assert_eq!(harness.read_output("sorted_documents.txt"), "doc1.txt\ndoc2.txt\n");
    assert_eq!(harness.read_output("td_matrix.txt"), "3 2\n2 0\n1 3\n0 1\n");
}

/// Counter output feeds straight into the generator.
#[test]
fn test_counter_output_composes_with_generator() {
    let harness = TestHarness::new();
    harness.add_text_document("b.txt", "the cat sat on the mat");
    harness.add_text_document("a.txt", "the dog\nchased the cat the end");

    let summary = harness.generate().unwrap();
    assert_eq!(summary.num_documents, 2);

    assert_eq!(harness.sorted_documents(), vec!["a.txt", "b.txt"]);
    assert_eq!(
        harness.sorted_terms(),
        vec!["cat", "chased", "dog", "end", "mat", "on", "sat", "the"]
    );

    let matrix = harness.matrix();
    assert_eq!(
        matrix.rows,
        vec![
            vec![1, 1], // cat
            vec![1, 0], // chased
            vec![1, 0], // dog
            vec![1, 0], // end
            vec![0, 1], // mat
            vec![0, 1], // on
            vec![0, 1], // sat
            vec![3, 2], // the
        ]
    );
}

/// Terms and documents are each lexicographically non-decreasing.
#[test]
fn test_sorting_invariant() {
    let harness = TestHarness::new();
    harness.add_frequency_file("zeta", "zebra 1\nAardvark 2\nmango 3\n");
    harness.add_frequency_file("Alpha", "éclair 1\napple 1\n");
    harness.add_frequency_file("10", "Zulu 4\n");
    harness.add_frequency_file("9", "mango 1\n");

    harness.generate().unwrap();

    let terms = harness.sorted_terms();
    let docs = harness.sorted_documents();
    assert!(terms.windows(2).all(|w| w[0] <= w[1]), "terms: {terms:?}");
    assert!(docs.windows(2).all(|w| w[0] <= w[1]), "docs: {docs:?}");
    assert_eq!(docs, vec!["10", "9", "Alpha", "zeta"]);
}

/// Header matches the label files and every row has one field per document.
#[test]
fn test_dimension_invariant() {
    let harness = TestHarness::new();
    for i in 0..5 {
        let unique = format!("only{i}");
        let text = repeat_terms(&[("shared", i + 1), (unique.as_str(), 2)]);
        harness.add_text_document(&format!("doc{i}.txt"), &text);
    }

    let summary = harness.generate().unwrap();
    let matrix = harness.matrix();

    assert_eq!(matrix.num_terms, harness.sorted_terms().len());
    assert_eq!(matrix.num_documents, harness.sorted_documents().len());
    assert_eq!(matrix.rows.len(), matrix.num_terms);
    assert!(matrix.rows.iter().all(|row| row.len() == matrix.num_documents));
    assert_eq!(
        summary,
        GenerationSummary {
            num_terms: 6,
            num_documents: 5,
            nonzero_cells: 10,
        }
    );
}

/// Every recorded frequency appears in its cell and every other cell is 0.
#[test]
fn test_coverage_invariant() {
    let harness = TestHarness::new();
    harness.add_frequency_file("d1", "x 1\ny 2\nz 3\n");
    harness.add_frequency_file("d2", "y 5\n");
    harness.add_frequency_file("d3", "w 7\nz 0\n");
    harness.add_frequency_file("d4", "");

    harness.generate().unwrap();

    let terms = harness.sorted_terms();
    let docs = harness.sorted_documents();
    let matrix = harness.matrix();

    for (col, doc) in docs.iter().enumerate() {
        let freqs = read_term_frequencies(&harness.input_dir.join(doc)).unwrap();
        for (row, term) in terms.iter().enumerate() {
            let expected = freqs.get(term).unwrap_or(0);
            assert_eq!(matrix.rows[row][col], expected, "cell ({term}, {doc})");
        }
    }
}

/// Duplicate terms within one file keep the last frequency.
#[test]
fn test_duplicate_term_last_write_wins() {
    let harness = TestHarness::new();
    harness.add_frequency_file("doc", "apple 1\nbanana 2\napple 4\n");

    harness.generate().unwrap();

    assert_eq!(harness.sorted_terms(), vec!["apple", "banana"]);
    assert_eq!(harness.read_output("td_matrix.txt"), "2 1\n4\n2\n");
}

/// An empty corpus still writes all three files.
#[test]
fn test_empty_corpus() {
    let harness = TestHarness::new();

    let summary = harness.generate().unwrap();

    assert_eq!(summary.num_terms, 0);
    assert_eq!(harness.read_output("sorted_terms.txt"), "");
    assert_eq!(harness.read_output("sorted_documents.txt"), "");
    assert_eq!(
        harness.matrix(),
        ParsedMatrix {
            num_terms: 0,
            num_documents: 0,
            rows: vec![],
        }
    );
}

/// Documents with only blank lines contribute an all-zero column.
#[test]
fn test_blank_document_column() {
    let harness = TestHarness::new();
    harness.add_frequency_file("a", "term 3\n");
    harness.add_frequency_file("b", "\n\n");

    harness.generate().unwrap();

    assert_eq!(harness.read_output("td_matrix.txt"), "1 2\n3 0\n");
}
