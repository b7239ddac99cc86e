//! Prepare the vocabulary of a byte-to-word encoding.
//! <br>
//! This crate turns a dictionary into a fixed list of short words that an encoder
//! elsewhere uses to spell bytes as words. It performs no encoding itself.
//!
//! The preparation is a linear pipeline:
//! - [`Dictionary`] reads the dictionary and extracts the [`headword`] of every line:
//!   the text before the first `(`, trimmed and lower-cased.
//! - [`WordFilter`] collapses duplicates and drops words that are shorter than
//!   [`MIN_WORD_LEN`] bytes or contain a byte from [`DISALLOWED`].
//! - [`select`] takes the shortest words until more than [`CAP`] are taken and shuffles them.
//! - [`write_words`] writes them newline separated, replacing the output file atomically.
//!
//! All processing is done on raw bytes; the dictionary is expected to be ASCII compatible.
//!
//! # Basic usage
//!  ```
//! # use bytetoword_words::{Dictionary, VocabularyBuilder, Error};
//! use rand::{rngs::StdRng, SeedableRng};
//! let dictionary = Dictionary::from_bytes(b"Rust(noun) a metal\nrest(noun)\nrust\nr(letter)\n");
//! let mut rng = StdRng::seed_from_u64(123);
//! let vocabulary = VocabularyBuilder::default().build(&dictionary, &mut rng);
//! assert_eq!(vocabulary.loaded, 4);
//! assert_eq!(vocabulary.eligible, 2);
//! for word in &vocabulary.words {
//!     println!("{}", String::from_utf8_lossy(word));
//! }
//! # Ok::<(), Error>(())
//! ```
mod byteset;
mod dictionary;
mod error;
mod filter;
mod select;
mod vocabulary;
mod writer;

/// A word as raw bytes.
pub type Word = Vec<u8>;

/// Dictionary read by the binary, relative to the working directory.
pub const DICTIONARY_FILE: &str = "dictionary.txt";

/// Word list written by the binary, relative to the working directory.
pub const WORDS_FILE: &str = "words.txt";

pub use crate::byteset::ByteSet;
pub use crate::dictionary::{headword, Dictionary};
pub use crate::error::Error;
pub use crate::filter::{WordFilter, WordLengths, DISALLOWED, MIN_WORD_LEN};
pub use crate::select::{select, CAP};
pub use crate::vocabulary::{Vocabulary, VocabularyBuilder};
pub use crate::writer::{join, read_words, write_words};
