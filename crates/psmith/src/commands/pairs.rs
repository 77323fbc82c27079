use std::io::Write;

use compact_str::CompactString;
use pairsmith::training::{PairCountTable, ranked_pairs};

use crate::{
    commands::TieBreakArg,
    input_output::OutputArgs,
    logging::LogArgs,
    vocab_source::VocabSourceArgs,
};

/// Args for the pairs command.
#[derive(clap::Args, Debug)]
pub struct PairsArgs {
    #[command(flatten)]
    source: VocabSourceArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Only list the top K pairs.
    #[arg(long)]
    top: Option<usize>,

    /// Tie-break policy used to rank equally frequent pairs.
    #[arg(long, value_enum, default_value = "first-seen")]
    tie_break: TieBreakArg,

    #[command(flatten)]
    output: OutputArgs,
}

impl PairsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = self.source.load_vocab()?;
        let table = PairCountTable::from_vocab(&vocab)?;
        log::info!("{} distinct pairs", table.len());

        let mut writer = self.output.open_writer()?;
        self.write_pairs(&table, &mut writer)
    }

    fn write_pairs(
        &self,
        table: &PairCountTable<CompactString, u64>,
        writer: &mut dyn Write,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let ranked = ranked_pairs(table, self.tie_break.into());
        let limit = self.top.unwrap_or(ranked.len());
        for ((left, right), count) in ranked.into_iter().take(limit) {
            writeln!(writer, "{left} {right}\t{count}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        pairs: PairsArgs,
    }

    fn render(args: &[&str]) -> String {
        let args = TestArgs::try_parse_from(std::iter::once("pairs").chain(args.iter().copied()))
            .unwrap()
            .pairs;
        let vocab = args.source.load_vocab().unwrap();
        let table = PairCountTable::from_vocab(&vocab).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        args.write_pairs(&table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_top_pairs() {
        assert_eq!(
            render(&["--demo", "--top", "3"]),
            "u g\t2\ng </w>\t2\np u\t2\n"
        );
    }

    #[test]
    fn test_lexical_ranking() {
        assert_eq!(
            render(&["--demo", "--top", "2", "--tie-break", "lexical"]),
            "g </w>\t2\nn </w>\t2\n"
        );
    }
}
