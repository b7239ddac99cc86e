use anyhow::Result;
use bytetoword_words::{Dictionary, VocabularyBuilder, DICTIONARY_FILE, WORDS_FILE};
use std::time::Instant;

fn run() -> Result<()> {
    let now = Instant::now();
    let dictionary = Dictionary::from_file(DICTIONARY_FILE)?;
    println!("{}", dictionary.len());

    let vocabulary = VocabularyBuilder::default().build(&dictionary, &mut rand::thread_rng());
    println!("{}", vocabulary.eligible);

    vocabulary.write_to(WORDS_FILE)?;
    eprintln!(
        "wrote {} words to '{}' in {:.2} s",
        vocabulary.len(),
        WORDS_FILE,
        now.elapsed().as_secs_f32()
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
