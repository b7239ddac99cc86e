use crate::byteset::ByteSet;
use crate::Word;
use std::collections::{BTreeMap, BTreeSet};

/// Shortest word that is kept.
pub const MIN_WORD_LEN: usize = 2;

/// Bytes that disqualify a word: space, punctuation, backslash and double quote.
pub const DISALLOWED: &[u8] = b" !@#$%^&*()_+-=[]{};':\\<>?,./\"";

/// Surviving words and their length in bytes.
pub type WordLengths = BTreeMap<Word, usize>;

#[derive(Debug, Clone)]
/// Decides which headwords are eligible for the vocabulary.
pub struct WordFilter {
    min_len: usize,
    disallowed: ByteSet,
}

impl Default for WordFilter {
    fn default() -> WordFilter {
        WordFilter::new(MIN_WORD_LEN, DISALLOWED)
    }
}

impl WordFilter {
    pub fn new(min_len: usize, disallowed: &[u8]) -> WordFilter {
        WordFilter {
            min_len,
            disallowed: ByteSet::from(disallowed),
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn disallowed(&self) -> &ByteSet {
        &self.disallowed
    }

    /// Returns true if `word` is long enough and has no disallowed byte.
    /// ## Examples
    /// ```
    /// use bytetoword_words::WordFilter;
    /// let filter = WordFilter::default();
    /// assert!(filter.accepts(b"ab"));
    /// assert!(!filter.accepts(b"a"));
    /// assert!(!filter.accepts(b"hello, world"));
    /// ```
    pub fn accepts(&self, word: &[u8]) -> bool {
        word.len() >= self.min_len && !self.disallowed.intersects(word)
    }

    /// Collapse duplicate headwords, drop the ones that are not accepted and
    /// record the length of every survivor.
    pub fn apply<I>(&self, headwords: I) -> WordLengths
    where
        I: IntoIterator<Item = Word>,
    {
        headwords
            .into_iter()
            .collect::<BTreeSet<Word>>()
            .into_iter()
            .filter(|word| self.accepts(word))
            .map(|word| {
                let len = word.len();
                (word, len)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| w.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_disallowed_set() {
        let filter = WordFilter::default();
        let set = filter.disallowed();
        for &b in b" !@#$%^&*()_+-=[]{};':\\<>?,./\"" {
            assert!(set.contains(b), "{:?} should be disallowed", b as char);
        }
        assert_eq!(set.len(), 30);
        for &b in b"azAZ09`~|\t" {
            assert!(!set.contains(b), "{:?} should be allowed", b as char);
        }
    }

    #[test]
    fn test_accepts() {
        let filter = WordFilter::default();
        assert!(filter.accepts(b"ab"));
        assert!(filter.accepts(b"zebra"));
        assert!(filter.accepts(b"x9"));
        assert!(!filter.accepts(b""));
        assert!(!filter.accepts(b"a"));
        assert!(!filter.accepts(b"don't"));
        assert!(!filter.accepts(b"back\\slash"));
        assert!(!filter.accepts(b"say\"what"));
        assert!(!filter.accepts(b"ice cream"));
        assert!(!filter.accepts(b"end."));
    }

    #[test]
    fn test_apply() {
        let filter = WordFilter::default();
        let lengths = filter.apply(words(&[
            "ab", "hello, world", "a", "ab", "", "zebra", "co-op", "zebra",
        ]));
        let expected: WordLengths = vec![(b"ab".to_vec(), 2), (b"zebra".to_vec(), 5)]
            .into_iter()
            .collect();
        assert_eq!(lengths, expected);
    }

    #[test]
    fn test_custom_filter() {
        let filter = WordFilter::new(4, b"z");
        assert_eq!(filter.min_len(), 4);
        let lengths = filter.apply(words(&["abc", "abcd", "zzzz", "abcde"]));
        assert_eq!(lengths.len(), 2);
        assert_eq!(lengths.get(&b"abcd".to_vec()), Some(&4));
        assert_eq!(lengths.get(&b"abcde".to_vec()), Some(&5));
    }
}
