//! Hot-seat CLI example: two players share the terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use trickrs::{Card, Face, Game, GameOptions, GameState, Hand, Suit};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Trick-taking CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    let mut tricks_taken = [0_u32; 2];

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            return;
        }

        print_hands(&game);
        let Some(trump) = prompt_suit("Trump suit (c/s/h/d): ") else {
            println!("Goodbye.");
            return;
        };
        if let Err(err) = game.declare_trump(trump) {
            println!("Trump error: {err}");
            return;
        }

        while game.state() == GameState::Playing {
            let Some(player) = game.current_player() else {
                break;
            };
            print_table(&game, player);

            let Some(hand) = game.get_hand(player) else {
                break;
            };
            let input = prompt_line(&format!("Player {player}, card index: "));
            if input == "q" || input == "quit" {
                return;
            }
            let Some(card) = input.parse::<usize>().ok().and_then(|i| hand.card_at(i)) else {
                println!("Pick an index from your hand.");
                continue;
            };

            match game.play(player, card) {
                Ok(Some(result)) => {
                    println!(
                        "Player {} takes the trick with {}.",
                        result.winner,
                        format_card(&result.winning_card)
                    );
                    if let Some(count) = tricks_taken.get_mut(usize::from(result.winner)) {
                        *count += 1;
                    }
                }
                Ok(None) => {}
                Err(err) => println!("Play error: {err}"),
            }
        }

        println!(
            "Round complete. Tricks taken so far: player 0 = {}, player 1 = {}",
            tricks_taken[0], tricks_taken[1]
        );
        game.clear_round();
        if let Err(err) = game.reshuffle() {
            println!("Reshuffle error: {err}");
            return;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_suit(prompt: &str) -> Option<Suit> {
    loop {
        match prompt_line(prompt).as_str() {
            "c" | "clubs" => return Some(Suit::Clubs),
            "s" | "spades" => return Some(Suit::Spades),
            "h" | "hearts" => return Some(Suit::Hearts),
            "d" | "diamonds" => return Some(Suit::Diamonds),
            "q" | "quit" => return None,
            _ => println!("Please enter c, s, h, or d."),
        }
    }
}

fn print_hands(game: &Game) {
    println!();
    for player in 0..game.options.players {
        if let Some(hand) = game.get_hand(player) {
            println!("Player {player}: {}", format_hand(&hand));
        }
    }
    println!();
}

fn print_table(game: &Game, player: u8) {
    let trump = game.trump().map_or_else(|| "-".to_string(), |s| s.to_string());
    println!("\nTrump: {trump} | deck: {} cards", game.cards_remaining());

    let trick = game.current_trick();
    if !trick.is_empty() {
        let played = trick
            .iter()
            .map(|play| format!("P{} {}", play.player, format_card(&play.card)))
            .collect::<Vec<_>>()
            .join("  ");
        println!("Trick: {played}");
    }

    let legal = game.legal_cards(player);
    if let Some(hand) = game.get_hand(player) {
        println!("Player {player}: {}", format_indexed(&hand, &legal));
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.iter()
        .map(|card| format_card(&card))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Walks the hand with the read-only cursor, dimming cards that may not be played.
fn format_indexed(hand: &Hand, legal: &[Card]) -> String {
    let mut parts = Vec::new();
    let mut node = hand.first();
    let mut index = 0;
    while let Some(current) = node {
        let card = current.card();
        let text = format!("{index}:{}", format_card(&card));
        if legal.contains(&card) {
            parts.push(text);
        } else {
            parts.push(colorize(&format!("{index}:{card}"), "90"));
        }
        node = current.next();
        index += 1;
    }
    parts.join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.face {
        Face::Nine => "9",
        Face::Ten => "10",
        Face::Jack => "J",
        Face::Queen => "Q",
        Face::King => "K",
        Face::Ace => "A",
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
