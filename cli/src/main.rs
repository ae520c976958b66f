use std::process;
use std::time::Instant;

use clap::{ArgGroup, Parser};
use oddsmith_core::{
    parse_cards, parse_range, Board, Card, Deck, EngineError, Hand, Range, Simulator,
};

#[derive(Parser)]
#[command(name = "oddsmith")]
#[command(about = "No-Limit Hold'em equity calculator")]
#[command(group(ArgGroup::new("hero_input").required(true).args(["hero", "hero_range"])))]
#[command(group(ArgGroup::new("villain_input").required(true).args(["villain", "villain_range"])))]
struct Cli {
    /// Hero's exact hole cards, e.g. "AsAd"
    #[arg(long)]
    hero: Option<String>,

    /// Hero's range as comma-separated tokens, e.g. "TT+, AKs"
    #[arg(long)]
    hero_range: Option<String>,

    /// Villain's exact hole cards, e.g. "KdKh"
    #[arg(long)]
    villain: Option<String>,

    /// Villain's range as comma-separated tokens
    #[arg(long)]
    villain_range: Option<String>,

    /// Community cards, e.g. "Ad7h5cTc" (0 to 5 cards)
    #[arg(long, default_value = "")]
    board: String,

    /// Number of Monte Carlo iterations
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,

    /// RNG seed for reproducible runs; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_board(s: &str) -> Result<Vec<Card>, EngineError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    let cards = parse_cards(s)?;
    if cards.len() > 5 {
        return Err(EngineError::InvalidArgument(format!(
            "board holds {} cards, at most 5 allowed",
            cards.len()
        )));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(EngineError::InvalidArgument(format!(
                "duplicate board card {}",
                card
            )));
        }
    }
    Ok(cards)
}

/// Builds one player's range from either an exact hand or range notation,
/// dropping combos blocked by the board.
fn build_range(
    exact: Option<&str>,
    notation: Option<&str>,
    board: &[Card],
) -> Result<Range, EngineError> {
    let mut range = match (exact, notation) {
        (Some(s), None) => {
            let hand: Hand = s.parse()?;
            let mut range = Range::new();
            range.add_hand(hand);
            range
        }
        (None, Some(s)) => parse_range(s)?,
        _ => {
            return Err(EngineError::InvalidArgument(
                "provide exactly one of an exact hand or a range".to_string(),
            ))
        }
    };

    range.remove_blocked(board);
    if range.is_empty() {
        return Err(EngineError::NoAvailableCombo);
    }
    Ok(range)
}

fn run(cli: &Cli) -> Result<(), EngineError> {
    let board_cards = parse_board(&cli.board)?;

    let hero_range = build_range(cli.hero.as_deref(), cli.hero_range.as_deref(), &board_cards)?;
    let villain_range = build_range(
        cli.villain.as_deref(),
        cli.villain_range.as_deref(),
        &board_cards,
    )?;

    let mut deck = Deck::standard();
    deck.remove_all(&board_cards);
    let board = Board::new(board_cards);
    let seed = cli.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let result = Simulator::new().run_seeded(
        &hero_range,
        &board,
        1,
        &deck,
        &[villain_range],
        cli.iterations,
        seed,
    )?;
    let elapsed = start.elapsed();

    println!("Monte Carlo results ({} iterations)", cli.iterations);
    println!("  Hero win:    {:.2}%", result.win * 100.0);
    println!("  Villain win: {:.2}%", result.loss * 100.0);
    println!("  Tie:         {:.2}%", result.tie * 100.0);
    println!("  Hero equity: {:.2}%", result.equity() * 100.0);
    println!("  Elapsed:     {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
