use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

mod jotto;
mod logging;
mod render;
mod solitaire;

/// Terminal front-end for the pegduo game engines.
#[derive(Parser)]
#[command(name = "pegduo", version, about)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Code-breaking deduction game: crack the secret peg sequence.
    Jotto(jotto::JottoArgs),
    /// Peg-elimination puzzle on the English cross board.
    Solitaire,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity.log_level_filter())?;

    match cli.command {
        Command::Jotto(args) => jotto::run(args),
        Command::Solitaire => solitaire::run(),
    }
}
