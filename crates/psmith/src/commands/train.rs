use compact_str::CompactString;
use pairsmith::{
    report::{ReportFormat, write_report},
    training::{MergeTrainerOptions, TrainResults, train},
    vocab::io::write_symbol_vocab,
};

use crate::{
    commands::TieBreakArg,
    input_output::{OutputArgs, open_writer},
    logging::LogArgs,
    vocab_source::VocabSourceArgs,
};

/// Report formats for the train command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportArg {
    /// One block per merge round.
    Text,

    /// A single JSON document.
    Json,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Text => ReportFormat::Text,
            ReportArg::Json => ReportFormat::Json,
        }
    }
}

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    #[command(flatten)]
    source: VocabSourceArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of merge rounds to run.
    #[arg(long, short = 'n', default_value = "10", allow_negative_numbers = true)]
    rounds: i64,

    /// Tie-break policy among equally frequent pairs.
    #[arg(long, value_enum, default_value = "first-seen")]
    tie_break: TieBreakArg,

    /// Report format.
    #[arg(long, value_enum, default_value = "text")]
    report: ReportArg,

    /// Count pairs in parallel.
    #[arg(long)]
    parallel: bool,

    /// Do not record a vocabulary snapshot per round.
    #[arg(long)]
    no_snapshots: bool,

    /// Optional file for the final vocabulary; "-" may be used to indicate stdout.
    #[arg(long)]
    vocab_output: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = self.trainer_options()?;
        let vocab = self.source.load_vocab()?;

        log::info!("Training...");
        let results = train(vocab, options)?;
        log::info!(
            "Stopped after {} merges: {}",
            results.history.len(),
            results.halt_reason
        );

        self.write_outputs(&results)
    }

    /// Write the report, and the final vocabulary when requested.
    fn write_outputs(
        &self,
        results: &TrainResults<CompactString, u64>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_report(results, self.report.into(), &mut writer)?;

        if let Some(path) = &self.vocab_output {
            log::info!("vocab output: {}", path);
            let mut writer = open_writer(&self.vocab_output)?;
            write_symbol_vocab(&results.vocab, &mut writer)?;
        }

        Ok(())
    }

    fn trainer_options(&self) -> Result<MergeTrainerOptions, Box<dyn std::error::Error>> {
        Ok(MergeTrainerOptions::from_signed_rounds(self.rounds)?
            .with_tie_break(self.tie_break.into())
            .with_parallel(self.parallel)
            .with_record_snapshots(!self.no_snapshots))
    }
}
