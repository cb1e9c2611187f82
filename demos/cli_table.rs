//! CLI card table example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use handrank::{Card, HandCard, Suit, Table, TableOptions};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("Card table CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_jokers(1);
    let mut table = Table::new(options, seed);
    table.deal_hand();

    loop {
        print_table(&table);

        let input = prompt_line("Action ([1-9] select, (t)rash, (s)uit, (r)ank, (d)raw, (c)lear, q): ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "t" | "trash" => {
                let result = table.trash_selected();
                if result.discarded.is_empty() {
                    println!("Nothing selected.");
                } else {
                    println!(
                        "Trashed {} cards, drew {}.",
                        result.discarded.len(),
                        result.replacements.len()
                    );
                }
            }
            "s" | "suit" => table.sort_by_suit(),
            "r" | "rank" => table.sort_by_rank(),
            "d" | "draw" => {
                if let Err(err) = table.try_draw() {
                    println!("Draw error: {err}");
                }
            }
            "c" | "clear" => table.clear_selection(),
            other => match other.parse::<usize>() {
                Ok(slot) => toggle_slot(&mut table, slot),
                Err(_) => println!("Unknown action."),
            },
        }
    }
}

fn toggle_slot(table: &mut Table, slot: usize) {
    let Some(id) = slot
        .checked_sub(1)
        .and_then(|index| table.hand().cards().get(index))
        .map(HandCard::id)
    else {
        println!("No card in slot {slot}.");
        return;
    };

    if let Err(err) = table.toggle_select(id) {
        println!("Select error: {err}");
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

fn print_table(table: &Table) {
    println!();
    println!("Cards: ({}/{})", table.remaining(), table.total());

    let hand = table
        .hand()
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| format_slot(index + 1, card))
        .collect::<Vec<_>>()
        .join("  ");
    println!("Hand: {hand}");

    match table.evaluate() {
        Ok(evaluation) => match evaluation.combination {
            Some(combination) => println!("Combination: {combination}"),
            None => println!("Combination: -"),
        },
        Err(err) => println!("Evaluation error: {err}"),
    }
}

fn format_slot(slot: usize, card: &HandCard) -> String {
    let face = format_card(&card.card());
    if card.is_selected() {
        format!("{slot}:[{face}]")
    } else {
        format!("{slot}:{face}")
    }
}

fn format_card(card: &Card) -> String {
    if card.joker {
        return colorize("JK", "35");
    }

    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
