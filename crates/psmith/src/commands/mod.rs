mod pairs;
mod train;

/// Subcommands for psmith
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run BPE merge training rounds.
    Train(train::TrainArgs),

    /// List the adjacent pair counts of a vocabulary.
    Pairs(pairs::PairsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Pairs(cmd) => cmd.run(),
        }
    }
}

/// Tie-break policy choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TieBreakArg {
    /// The first pair seen in vocabulary order.
    #[default]
    FirstSeen,

    /// The lexically smallest pair.
    Lexical,
}

impl From<TieBreakArg> for pairsmith::training::TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstSeen => Self::FirstSeen,
            TieBreakArg::Lexical => Self::Lexical,
        }
    }
}
