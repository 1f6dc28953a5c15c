//! Terminal session
//!
//! Renders the landing and main screens over plain stdout and drives them
//! from stdin. The landing screen launches one fetch cycle; the main screen
//! shows one fact card at a time with position indicators and cycles on
//! command.

use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::deck::{FactDeck, FetchMode};
use crate::apod::FactSource;

/// Star field dimensions for the decorative banner
const STAR_FIELD_ROWS: usize = 4;
const STAR_FIELD_COLS: usize = 64;
const STAR_COUNT: usize = 40;

/// Outcome of one screen's command loop
enum Transition {
    Launch,
    ReturnToLanding,
    Quit,
}

/// Run the interactive session: landing screen, fetch cycle, fact deck.
///
/// Returns when the user quits. Each landing-to-main transition performs
/// exactly one fetch cycle.
pub async fn run_session<S>(source: &S, count: usize, mode: FetchMode) -> anyhow::Result<()>
where
    S: FactSource + Sync,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if let Transition::Quit = landing_screen(&mut lines).await? {
            break;
        }

        println!();
        println!("  Connecting to deep space...");
        let mut deck = FactDeck::load(source, count, mode).await;

        if let Transition::Quit = main_screen(&mut lines, &mut deck).await? {
            break;
        }
    }

    println!("Goodbye, explorer.");
    Ok(())
}

/// Show the landing screen until the user launches or quits.
async fn landing_screen(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Transition> {
    println!();
    print_star_field();
    println!();
    println!("   ==============================================");
    println!("                 COSMIC  EXPLORER");
    println!("   ==============================================");
    println!();
    println!("   Journey through the cosmos and discover the");
    println!("   wonders of our universe");
    println!();
    println!("   [Enter] Launch Expedition    [q] Quit");
    println!();

    match read_command(lines).await? {
        Some(cmd) if cmd == "q" || cmd == "quit" => Ok(Transition::Quit),
        Some(_) => Ok(Transition::Launch),
        None => Ok(Transition::Quit),
    }
}

/// Show the fact deck until the user returns to the landing screen or quits.
async fn main_screen(
    lines: &mut Lines<BufReader<Stdin>>,
    deck: &mut FactDeck,
) -> anyhow::Result<Transition> {
    loop {
        render_deck(deck);

        match read_command(lines).await? {
            Some(cmd) if cmd == "q" || cmd == "quit" => return Ok(Transition::Quit),
            Some(cmd) if cmd == "b" || cmd == "back" => return Ok(Transition::ReturnToLanding),
            Some(_) => deck.next(),
            None => return Ok(Transition::Quit),
        }
    }
}

/// Render the current fact card, indicators, and any advisory.
fn render_deck(deck: &FactDeck) {
    println!();
    print_star_field();
    println!();

    if let Some(advisory) = deck.advisory() {
        println!("   ! {advisory}");
        println!();
    }

    if let Some(fact) = deck.current_fact() {
        println!("   ----------------------------------------------");
        if !fact.title.is_empty() {
            println!("   {}", fact.title);
            println!();
        }
        for line in wrap_text(&fact.fact, 46) {
            println!("   {line}");
        }
        println!();
        println!("   image: {}", fact.image);
        if fact.date != crate::apod::FALLBACK_DATE {
            println!("   date:  {}", fact.date);
        }
        if let Some(copyright) = &fact.copyright {
            println!("   (c) {copyright}");
        }
        println!("   ----------------------------------------------");
    }

    println!();
    println!("   {}", indicator_row(deck));
    println!();
    println!("   [Enter] Next fact    [b] Return to Launch    [q] Quit");
}

/// One dot per record, the current position highlighted.
fn indicator_row(deck: &FactDeck) -> String {
    (0..deck.len())
        .map(|i| if i == deck.position() { "(*)" } else { " . " })
        .collect::<Vec<_>>()
        .join("")
}

/// Print a band of randomly placed stars, regenerated per render.
fn print_star_field() {
    let mut rng = rand::thread_rng();
    let mut field = vec![vec![' '; STAR_FIELD_COLS]; STAR_FIELD_ROWS];

    for _ in 0..STAR_COUNT {
        let row = rng.gen_range(0..STAR_FIELD_ROWS);
        let col = rng.gen_range(0..STAR_FIELD_COLS);
        field[row][col] = if rng.gen_bool(0.3) { '*' } else { '.' };
    }

    for row in field {
        println!("   {}", row.into_iter().collect::<String>());
    }
}

/// Greedy word wrap to the given width.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Read one trimmed, lowercased command line; `None` on EOF.
async fn read_command(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<String>> {
    Ok(lines.next_line().await?.map(|l| l.trim().to_lowercase()))
}
