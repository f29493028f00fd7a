use anyhow::Result;
use scrabble_solver::Lexicon;
use std::env;

fn main() -> Result<()> {
    let wordfile = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("wordlists/words.txt"));
    let lexicon = Lexicon::from_file(&wordfile)?;
    println!("{}", lexicon);
    for word in ["SPLENDID", "SPLENDOR"] {
        println!("{}: {}", word, lexicon.is_word(word));
    }
    // save to bin file
    #[cfg(feature = "bincode")]
    lexicon.serialize_into(&wordfile.replace(".txt", ".bin"))?;
    Ok(())
}
