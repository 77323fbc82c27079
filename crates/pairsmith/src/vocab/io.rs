//! # Vocabulary IO
//!
//! Line formats:
//! * symbols - ``<representation><TAB><count>``, e.g. ``h u g </w>\t1``;
//!   the count is the last whitespace-separated field.
//! * counts - ``<word> <count>``; words are split into characters.
//!
//! Blank lines and lines starting with ``#`` are skipped.

use std::io::{BufRead, Write};

use crate::errors::{PSResult, PairsmithError};
use crate::training::{CountType, SymbolType};
use crate::vocab::{SymbolWord, Vocabulary};

fn parse_count<C: CountType>(
    field: &str,
    line: usize,
) -> PSResult<C> {
    C::from_str_radix(field, 10).map_err(|_| PairsmithError::Parse {
        line,
        message: format!("invalid count {field:?}"),
    })
}

fn content_lines<R: BufRead>(reader: R) -> impl Iterator<Item = PSResult<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|l| (idx + 1, l)).map_err(PairsmithError::from))
        .filter(|res| match res {
            Ok((_, l)) => {
                let t = l.trim();
                !t.is_empty() && !t.starts_with('#')
            }
            Err(_) => true,
        })
}

/// Read a pre-split ``<representation> <count>`` vocabulary.
///
/// Duplicate representations are summed.
pub fn read_symbol_vocab<S, C, R>(reader: R) -> PSResult<Vocabulary<S, C>>
where
    S: SymbolType,
    C: CountType,
    R: BufRead,
{
    let mut vocab = Vocabulary::new();
    for res in content_lines(reader) {
        let (line, text) = res?;
        let Some((repr, count)) = text.trim().rsplit_once(char::is_whitespace) else {
            return Err(PairsmithError::Parse {
                line,
                message: "expected '<representation> <count>'".to_string(),
            });
        };
        vocab.insert(SymbolWord::parse(repr), parse_count(count, line)?)?;
    }
    Ok(vocab)
}

/// Read a ``<word> <count>`` list of surface words.
///
/// Each word becomes its characters, plus `end_marker` when present.
pub fn read_word_counts<S, C, R>(
    reader: R,
    end_marker: Option<&str>,
) -> PSResult<Vocabulary<S, C>>
where
    S: SymbolType,
    C: CountType,
    R: BufRead,
{
    let mut vocab = Vocabulary::new();
    for res in content_lines(reader) {
        let (line, text) = res?;
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [word, count] = fields.as_slice() else {
            return Err(PairsmithError::Parse {
                line,
                message: format!("expected '<word> <count>', found {} fields", fields.len()),
            });
        };
        vocab.insert(
            SymbolWord::from_word_chars(word, end_marker),
            parse_count(count, line)?,
        )?;
    }
    Ok(vocab)
}

/// Write a vocabulary as ``<representation><TAB><count>`` lines.
///
/// The output can be read back by [`read_symbol_vocab`].
pub fn write_symbol_vocab<S, C, W>(
    vocab: &Vocabulary<S, C>,
    writer: &mut W,
) -> PSResult<()>
where
    S: SymbolType,
    C: CountType,
    W: Write + ?Sized,
{
    for (word, count) in vocab.iter() {
        writeln!(writer, "{word}\t{count}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use compact_str::CompactString;

    use super::*;
    use crate::vocab::END_OF_WORD;

    type V = Vocabulary<CompactString, u64>;

    #[test]
    fn test_read_symbol_vocab() {
        let data = "# demo\nh u g </w>\t1\n\np u g </w> 3\n  h u g </w>\t2\n";
        let vocab: V = read_symbol_vocab(Cursor::new(data)).unwrap();

        assert_eq!(vocab.keys(), vec!["h u g </w>", "p u g </w>"]);
        assert_eq!(vocab.get_representation("h u g </w>"), Some(3));
        assert_eq!(vocab.get_representation("p u g </w>"), Some(3));
    }

    #[test]
    fn test_read_symbol_vocab_errors() {
        let err = read_symbol_vocab::<CompactString, u64, _>(Cursor::new("a b\t1\nab\n"))
            .unwrap_err();
        assert!(matches!(err, PairsmithError::Parse { line: 2, .. }));

        let err = read_symbol_vocab::<CompactString, u64, _>(Cursor::new("a b\tmany\n"))
            .unwrap_err();
        assert!(matches!(err, PairsmithError::Parse { line: 1, .. }));

        let err = read_symbol_vocab::<CompactString, u8, _>(Cursor::new("a b\t200\na b\t56\n"))
            .unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));
    }

    #[test]
    fn test_read_word_counts() {
        let data = "hug 10\npug 5\n\n# skipped\npun 12\n";
        let vocab: V = read_word_counts(Cursor::new(data), Some(END_OF_WORD)).unwrap();

        assert_eq!(vocab.keys(), vec!["h u g </w>", "p u g </w>", "p u n </w>"]);
        assert_eq!(vocab.total_frequency(), 27);

        let err = read_word_counts::<CompactString, u64, _>(Cursor::new("hug 1 2\n"), None)
            .unwrap_err();
        assert!(matches!(err, PairsmithError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_write_read_symbol_vocab() {
        let vocab = V::from_representations([("h ug </w>", 2), ("p un</w>", 7)]).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_symbol_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "h ug </w>\t2\np un</w>\t7\n");

        let reloaded: V = read_symbol_vocab(Cursor::new(buf)).unwrap();
        assert_eq!(reloaded, vocab);
    }
}
