use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use pegduo_core as game;

use crate::render;

#[derive(Args)]
pub struct JottoArgs {
    /// Number of pegs in the secret code.
    #[arg(long, default_value_t = 4)]
    code_length: u8,

    /// Maximum number of scored guesses.
    #[arg(long, default_value_t = 6)]
    guesses: u8,

    /// Allow BLK and WHT as code colors on top of their scoring-marker role.
    #[arg(long)]
    score_pegs_as_code: bool,

    /// Seed for the random secret; taken from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit secret code such as "RED GRN BLU YLW", dealt by a second
    /// player instead of the random draw.
    #[arg(long)]
    code: Option<String>,
}

pub fn run(args: JottoArgs) -> Result<()> {
    let config = game::JottoConfig::new(args.code_length, args.guesses, args.score_pegs_as_code);
    let mut engine = game::JottoEngine::new(config);
    deal_code(&mut engine, &args)?;

    println!(
        "Crack the {}-peg code in {} guesses.",
        config.code_length, config.allowed_guesses
    );
    print_palette(&engine);
    println!("Scoring: BLK = right color and spot, WHT = right color elsewhere, 000 = no match.");

    let stdin = io::stdin();
    loop {
        print!(
            "guess {}/{}> ",
            engine.guesses_used() + 1,
            config.allowed_guesses
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit" | "exit") {
            return Ok(());
        }

        let guess = match parse_pegs(line) {
            Ok(guess) => guess,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let outcome = match engine.submit_guess(&guess) {
            Ok(outcome) => outcome,
            Err(game::GameError::InvalidGuessLength) => {
                println!("Need exactly {} pegs.", config.code_length);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let record = engine.guesses().last().context("guess history is empty")?;
        println!(
            "  {}  ->  {}",
            render::peg_row(&record.guess),
            render::peg_row(&record.score)
        );

        match outcome {
            game::GuessOutcome::Ongoing => {}
            game::GuessOutcome::Won => {
                println!("Cracked it in {} guesses!", engine.guesses_used());
                if !start_new_round(&mut engine, &args)? {
                    return Ok(());
                }
            }
            game::GuessOutcome::Lost => {
                println!(
                    "Out of guesses. The code was: {}",
                    render::peg_row(engine.code())
                );
                if !start_new_round(&mut engine, &args)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Offers a fresh round after a finished game; explicit-code games end
/// instead, since the dealt secret is spent.
fn start_new_round(engine: &mut game::JottoEngine, args: &JottoArgs) -> Result<bool> {
    if args.code.is_some() {
        return Ok(false);
    }

    print!("Play again? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    if !matches!(line.trim(), "y" | "Y" | "yes") {
        return Ok(false);
    }

    engine.reset();
    engine.set_code_with(game::RandomCodeGenerator::new(clock_seed()))?;
    println!("New code dealt.");
    Ok(true)
}

fn deal_code(engine: &mut game::JottoEngine, args: &JottoArgs) -> Result<()> {
    if let Some(code) = &args.code {
        engine.set_code(&parse_pegs(code)?)?;
    } else {
        let seed = args.seed.unwrap_or_else(clock_seed);
        log::debug!("drawing secret code with seed {seed}");
        engine.set_code_with(game::RandomCodeGenerator::new(seed))?;
    }
    Ok(())
}

fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

fn parse_pegs(input: &str) -> Result<Vec<game::Peg>> {
    input
        .split([' ', ','])
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<game::Peg>()
                .map_err(|_| anyhow::anyhow!("Unknown peg {token:?}, try e.g. RED or blue."))
        })
        .collect()
}

fn print_palette(engine: &game::JottoEngine) {
    let palette: Vec<game::Peg> = game::Peg::ALL
        .into_iter()
        .filter(|&peg| engine.is_code_peg(peg))
        .collect();
    println!("Colors in play: {}", render::peg_row(&palette));
}
