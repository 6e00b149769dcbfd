//! Frequency counter for a single text stream.
//!
//! Tokens are maximal runs of non-whitespace characters. No case folding,
//! punctuation stripping or stemming is applied.

use std::io::{self, BufRead, Write};

use tdm_types::TermFrequencies;

/// Count every whitespace-delimited token in `reader`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so any input
/// can be counted.
pub fn count_tokens<R: BufRead>(mut reader: R) -> io::Result<TermFrequencies> {
    let mut freqs = TermFrequencies::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        for token in String::from_utf8_lossy(&line).split_whitespace() {
            freqs.increment(token);
        }
    }

    Ok(freqs)
}

/// Write `"<token> <count>"` lines in sorted token order.
pub fn write_frequencies<W: Write>(freqs: &TermFrequencies, mut writer: W) -> io::Result<()> {
    for (token, count) in freqs.sorted() {
        writeln!(writer, "{token} {count}")?;
    }
    writer.flush()
}
