use crate::dictionary::Dictionary;
use crate::filter::WordFilter;
use crate::select::{select, CAP};
use crate::writer::write_words;
use crate::{Error, Word};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The shuffled word list prepared from a dictionary.
pub struct Vocabulary {
    /// Selected words in output order.
    pub words: Vec<Word>,
    /// Number of headwords read from the dictionary, duplicates included.
    pub loaded: usize,
    /// Number of distinct headwords that passed the filter.
    pub eligible: usize,
    /// Path of the dictionary file.
    /// Empty if the vocabulary is not built from a file.
    pub dictionary: String,
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Vocabulary: {} of {} eligible words from {} lines in '{}'>",
            self.words.len(),
            self.eligible,
            self.loaded,
            self.dictionary
        )
    }
}

impl Vocabulary {
    /// Build a vocabulary from the dictionary file at `path` with the default
    /// filter and cap, shuffled with the thread-local random generator.
    /// ## Errors
    /// Fails if the dictionary can not be read.
    pub fn from_file(path: &str) -> Result<Vocabulary, Error> {
        VocabularyBuilder::default().build_from_file(path, &mut rand::thread_rng())
    }

    /// Write the words to `path`, see [`write_words`](crate::write_words).
    /// ## Errors
    /// Fails if the file can not be written.
    pub fn write_to(&self, path: &str) -> Result<(), Error> {
        write_words(path, &self.words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone)]
/// Parameters of the filter and selection stages.
pub struct VocabularyBuilder {
    filter: WordFilter,
    cap: usize,
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        VocabularyBuilder {
            filter: WordFilter::default(),
            cap: CAP,
        }
    }
}

impl VocabularyBuilder {
    pub fn with_filter(mut self, filter: WordFilter) -> VocabularyBuilder {
        self.filter = filter;
        self
    }

    pub fn with_cap(mut self, cap: usize) -> VocabularyBuilder {
        self.cap = cap;
        self
    }

    /// Filter, select and shuffle the headwords of `dictionary`.
    /// ## Examples
    /// ```
    /// # use bytetoword_words::{Dictionary, VocabularyBuilder};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let dictionary = Dictionary::from_bytes(b"ab(noun) a test\nHello, World(greeting)\na(article)\n");
    /// let vocabulary = VocabularyBuilder::default().build(&dictionary, &mut StdRng::seed_from_u64(0));
    /// assert_eq!(vocabulary.loaded, 3);
    /// assert_eq!(vocabulary.eligible, 1);
    /// assert_eq!(vocabulary.words, vec![b"ab".to_vec()]);
    /// ```
    pub fn build<R: Rng + ?Sized>(&self, dictionary: &Dictionary, rng: &mut R) -> Vocabulary {
        let lengths = self.filter.apply(dictionary.headwords.iter().cloned());
        let words = select(&lengths, self.cap, rng);
        Vocabulary {
            words,
            loaded: dictionary.len(),
            eligible: lengths.len(),
            dictionary: dictionary.path.clone(),
        }
    }

    /// Read the dictionary at `path` and [`build`](VocabularyBuilder::build) from it.
    /// ## Errors
    /// Fails if the dictionary can not be read.
    pub fn build_from_file<R: Rng + ?Sized>(
        &self,
        path: &str,
        rng: &mut R,
    ) -> Result<Vocabulary, Error> {
        let dictionary = Dictionary::from_file(path)?;
        Ok(self.build(&dictionary, rng))
    }
}
