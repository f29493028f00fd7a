use anyhow::Result;
use scrabble_solver::{Board, Letters, Lexicon, Strategy};
use std::env;
use std::time::Instant;

const MOVES: &[&str] = &["COMRADE H8", "L(O)BSTER 9G", "OREs 10K", "SPLENDID 15H"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let rack = args.next().unwrap_or_else(|| String::from("STONER?"));
    let strategy: Strategy = match args.next() {
        Some(name) => name.parse()?,
        None => Strategy::default(),
    };

    let t0 = Instant::now();
    #[cfg(feature = "bincode")]
    let lexicon = Lexicon::deserialize_from("wordlists/words.bin")
        .or_else(|_| Lexicon::from_file("wordlists/words.txt"))?;
    #[cfg(not(feature = "bincode"))]
    let lexicon = Lexicon::from_file("wordlists/words.txt")?;
    let board = Board::new().with_moves(MOVES)?;
    println!("Create board with {} took {:?}", lexicon, t0.elapsed());
    println!("{}", board);

    let rack: Letters = rack.parse()?;
    let t0 = Instant::now();
    let mut moves = lexicon.find_words(&board, &rack);
    println!(
        "Find words with {}: {} moves in {:?}",
        rack,
        moves.len(),
        t0.elapsed()
    );
    // show the best 20 moves
    moves.sort_by(|a, b| b.score().cmp(&a.score()));
    for mv in moves.iter().take(20) {
        println!("{:<20} {:3} {:?}", mv.to_string(), mv.score(), mv.bonuses());
    }
    let chosen = strategy.choose(&moves);
    println!("{} plays {}", strategy, chosen);
    Ok(())
}
