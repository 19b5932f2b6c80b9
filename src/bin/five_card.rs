use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

use five_card::core::{Deck, Hand};

const PROMPT: &str = "Enter five cards separated by commas (e.g. AH, 2H, 3H, 4H, 5H), \
                      DEAL for a random hand, or EXIT to quit:";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("{PROMPT}");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like EXIT.
            break;
        }
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        if input.eq_ignore_ascii_case("deal") {
            let mut deck = Deck::default();
            deck.shuffle(&mut rand::thread_rng());
            if let Some(hand) = deck.deal_hand() {
                println!("Dealt: {hand}");
                print_rank(&hand);
            }
            continue;
        }

        match Hand::new_from_str(input) {
            Ok(hand) => print_rank(&hand),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn print_rank(hand: &Hand) {
    let text = format!("Poker Rank: {}", hand.rank());
    println!("{}", text.cyan());
}
