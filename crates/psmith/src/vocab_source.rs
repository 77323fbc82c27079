use std::io::BufRead;

use compact_str::CompactString;
use pairsmith::{
    training::{DEFAULT_WORD_PATTERN, WordCounterOptions},
    vocab::{END_OF_WORD, Vocabulary, io},
};

use crate::input_output::open_reader;

/// The vocabulary type used by the CLI.
pub type CliVocab = Vocabulary<CompactString, u64>;

/// The vocabulary of the classic four-word demo.
pub const DEMO_VOCAB: &[(&str, u64)] = &[
    ("h u g </w>", 1),
    ("p u g </w>", 1),
    ("p u n </w>", 1),
    ("b u n </w>", 1),
];

/// Input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Pre-split `<representation> <count>` lines, e.g. `h u g </w>	1`.
    Symbols,

    /// `<word> <count>` lines; words are split into characters.
    Counts,

    /// Raw text; words are matched by `--pattern` and counted.
    Text,
}

/// Vocabulary source arg group.
#[derive(clap::Args, Debug)]
pub struct VocabSourceArgs {
    /// Input files; "-" reads stdin.
    files: Vec<String>,

    /// Input file format.
    #[arg(long, short = 'f', value_enum, default_value = "symbols")]
    format: InputFormat,

    /// Word pattern for the "text" format.
    #[arg(long, default_value = DEFAULT_WORD_PATTERN)]
    pattern: String,

    /// End-of-word marker for the "counts" and "text" formats.
    #[arg(long, default_value = END_OF_WORD)]
    end_marker: String,

    /// Do not append an end-of-word marker.
    #[arg(long)]
    no_end_marker: bool,

    /// Use the built-in demo vocabulary instead of input files.
    #[arg(long, conflicts_with = "files")]
    demo: bool,
}

impl VocabSourceArgs {
    fn end_marker(&self) -> Option<&str> {
        (!self.no_end_marker).then_some(self.end_marker.as_str())
    }

    fn paths(&self) -> Vec<String> {
        if self.files.is_empty() {
            vec!["-".to_string()]
        } else {
            self.files.clone()
        }
    }

    /// Load the vocabulary.
    ///
    /// Entries from multiple files are combined; duplicates are summed.
    pub fn load_vocab(&self) -> Result<CliVocab, Box<dyn std::error::Error>> {
        if self.demo {
            log::info!("Using the demo vocabulary");
            return Ok(Vocabulary::from_representations(DEMO_VOCAB.iter().copied())?);
        }

        if self.format == InputFormat::Text {
            return self.load_text();
        }

        let mut vocab = CliVocab::new();
        for (idx, path) in self.paths().iter().enumerate() {
            log::info!("{idx}: {path}");
            let reader = open_reader(path)?;
            let part: CliVocab = if self.format == InputFormat::Symbols {
                io::read_symbol_vocab(reader)?
            } else {
                io::read_word_counts(reader, self.end_marker())?
            };
            for (word, count) in part {
                vocab.insert(word, count)?;
            }
        }
        log::info!("Loaded {} distinct words", vocab.len());
        Ok(vocab)
    }

    fn load_text(&self) -> Result<CliVocab, Box<dyn std::error::Error>> {
        let mut counter = WordCounterOptions::default()
            .with_pattern(self.pattern.clone())
            .with_end_marker(self.end_marker().map(str::to_string))
            .init::<CompactString, u64>()?;

        for (idx, path) in self.paths().iter().enumerate() {
            log::info!("{idx}: {path}");
            for line in open_reader(path)?.lines() {
                counter.update_from_text(line?)?;
            }
        }
        log::info!("Counted {} distinct words", counter.len());
        Ok(counter.to_vocabulary()?)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::File, io::Write};

    use clap::Parser;
    use tempdir::TempDir;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        source: VocabSourceArgs,
    }

    fn write_file(
        dir: &TempDir,
        name: &str,
        contents: &str,
    ) -> String {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn load(args: &[&str]) -> CliVocab {
        let args = TestArgs::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap();
        args.source.load_vocab().unwrap()
    }

    #[test]
    fn test_demo() {
        let vocab = load(&["--demo"]);
        assert_eq!(
            vocab.keys(),
            vec!["h u g </w>", "p u g </w>", "p u n </w>", "b u n </w>"]
        );
    }

    #[test]
    fn test_symbols_files_are_combined() {
        let dir = TempDir::new("psmith").unwrap();
        let a = write_file(&dir, "a.txt", "h u g </w>\t1\np u g </w>\t2\n");
        let b = write_file(&dir, "b.txt", "p u g </w>\t3\n");

        let vocab = load(&[&a, &b]);
        assert_eq!(vocab.keys(), vec!["h u g </w>", "p u g </w>"]);
        assert_eq!(vocab.get_representation("p u g </w>"), Some(5));
    }

    #[test]
    fn test_counts() {
        let dir = TempDir::new("psmith").unwrap();
        let path = write_file(&dir, "counts.txt", "hug 4\npun 2\n");

        let vocab = load(&["--format", "counts", &path]);
        assert_eq!(vocab.keys(), vec!["h u g </w>", "p u n </w>"]);

        let vocab = load(&["--format", "counts", "--no-end-marker", &path]);
        assert_eq!(vocab.keys(), vec!["h u g", "p u n"]);
    }

    #[test]
    fn test_text() {
        let dir = TempDir::new("psmith").unwrap();
        let path = write_file(&dir, "corpus.txt", "hug pug\npun bun hug\n");

        let vocab = load(&["-f", "text", "--end-marker", "_", &path]);
        assert_eq!(vocab.keys(), vec!["h u g _", "p u g _", "p u n _", "b u n _"]);
        assert_eq!(vocab.get_representation("h u g _"), Some(2));
    }
}
