use anyhow::{Context, Result};
use casino_hands::cards::{parse_cards, Card};
use casino_hands::deck::Deck;
use casino_hands::evaluator::{evaluate, Evaluation};
use casino_hands::pool::Mode;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

#[derive(Debug, Parser)]
#[clap(version, about = "Rank casino poker hands, wild cards included.")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate cards given on the command line, e.g. `As Ah W W Kd`.
    Eval {
        /// Hand family to rank in.
        #[clap(long, short, value_enum, default_value_t = ModeArg::Five)]
        mode: ModeArg,
        /// Cards; `W`, `*` or `Jk` is a joker.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Deal a pool from a seeded deck and evaluate it.
    Deal {
        #[clap(long, short, value_enum, default_value_t = ModeArg::Five)]
        mode: ModeArg,
        /// Number of cards to deal; defaults to 3 or 7 depending on mode.
        #[clap(long, short, value_parser = clap::value_parser!(u8).range(3..=7))]
        count: Option<u8>,
        /// Jokers shuffled into the deck.
        #[clap(long, short, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
        jokers: u8,
        /// Shuffle seed.
        #[clap(long, short, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Three,
    Five,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Three => Mode::ThreeCard,
            ModeArg::Five => Mode::FiveCard,
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let (pool, mode) = match cli.command {
        Command::Eval { mode, cards } => {
            let pool = parse_cards(&cards.join(" ")).context("reading cards")?;
            (pool, Mode::from(mode))
        }
        Command::Deal { mode, count, jokers, seed } => {
            let mode = Mode::from(mode);
            let count = count.map_or(
                match mode {
                    Mode::ThreeCard => 3,
                    Mode::FiveCard => 7,
                },
                usize::from,
            );
            let mut deck = Deck::with_jokers(usize::from(jokers));
            deck.shuffle_seeded(seed);
            let pool = deck.deal(count);
            info!("dealt {} with seed {seed}", join(&pool));
            (pool, mode)
        }
    };

    let eval = evaluate(&pool, mode).with_context(|| format!("evaluating {}", join(&pool)))?;
    print_evaluation(&eval);
    Ok(())
}

fn print_evaluation(eval: &Evaluation) {
    let kickers: Vec<String> = eval.kickers().iter().map(|r| r.to_string()).collect();
    println!("{} ({})", eval.category_name(), kickers.join(" "));
    println!("cards: {}", join(&eval.display_order()));
    if !eval.wild_substitutions().is_empty() {
        println!("wilds: {}", join(eval.wild_substitutions()));
    }
}

fn join(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
