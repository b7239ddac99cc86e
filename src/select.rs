use crate::filter::WordLengths;
use crate::Word;
use rand::seq::SliceRandom;
use rand::Rng;

/// Selection stops as soon as more than `CAP` words are taken.
pub const CAP: usize = 65536 + 256;

/// Take the shortest words from `lengths` until more than `cap` are taken, then
/// shuffle them with `rng`.
///
/// The result holds `min(cap + 1, lengths.len())` words. Words of equal length
/// are taken in byte order, so the selected set only depends on the input.
/// ## Examples
/// ```
/// use bytetoword_words::{select, WordLengths};
/// use rand::{rngs::StdRng, SeedableRng};
/// let lengths: WordLengths = vec![(b"abc".to_vec(), 3), (b"ab".to_vec(), 2), (b"xy".to_vec(), 2)]
///     .into_iter()
///     .collect();
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut words = select(&lengths, 1, &mut rng);
/// words.sort();
/// assert_eq!(words, vec![b"ab".to_vec(), b"xy".to_vec()]);
/// ```
pub fn select<R: Rng + ?Sized>(lengths: &WordLengths, cap: usize, rng: &mut R) -> Vec<Word> {
    let mut candidates: Vec<(&Word, usize)> = lengths.iter().map(|(w, &n)| (w, n)).collect();
    // map iteration is in byte order, the stable sort keeps it within a length
    candidates.sort_by_key(|&(_, n)| n);

    let mut words: Vec<Word> = Vec::with_capacity(candidates.len().min(cap.saturating_add(1)));
    for (word, _) in candidates {
        words.push(word.clone());
        if words.len() > cap {
            break;
        }
    }
    words.shuffle(rng);
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn lengths(words: &[&str]) -> WordLengths {
        words
            .iter()
            .map(|w| (w.as_bytes().to_vec(), w.len()))
            .collect()
    }

    #[test]
    fn test_select_under_cap() {
        let lengths = lengths(&["ab", "abc", "abcd"]);
        let mut rng = StdRng::seed_from_u64(123);
        let words = select(&lengths, CAP, &mut rng);
        assert_eq!(words.len(), 3);
        let set: HashSet<_> = words.iter().collect();
        assert_eq!(set.len(), 3);
        for word in &words {
            assert!(lengths.contains_key(word));
        }
    }

    #[test]
    fn test_select_takes_one_past_cap() {
        let lengths = lengths(&["aaaa", "bb", "ccc", "dd", "eeeee", "ff"]);
        let mut rng = StdRng::seed_from_u64(123);
        let mut words = select(&lengths, 3, &mut rng);
        assert_eq!(words.len(), 4);
        words.sort();
        assert_eq!(
            words,
            vec![b"bb".to_vec(), b"ccc".to_vec(), b"dd".to_vec(), b"ff".to_vec()]
        );
    }

    #[test]
    fn test_tie_break_is_byte_order() {
        let lengths = lengths(&["zz", "yy", "xx", "ww"]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut words = select(&lengths, 1, &mut rng);
        words.sort();
        assert_eq!(words, vec![b"ww".to_vec(), b"xx".to_vec()]);
    }

    #[test]
    fn test_unbounded_cap() {
        let lengths = lengths(&["ab", "abc", "abcd"]);
        let mut rng = StdRng::seed_from_u64(123);
        assert_eq!(select(&lengths, usize::MAX, &mut rng).len(), 3);
    }

    #[test]
    fn test_select_empty() {
        let mut rng = StdRng::seed_from_u64(123);
        assert!(select(&WordLengths::new(), CAP, &mut rng).is_empty());
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let words: Vec<String> = (0..200).map(|i| format!("w{:03}", i)).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let lengths = lengths(&refs);
        let a = select(&lengths, CAP, &mut StdRng::seed_from_u64(42));
        let b = select(&lengths, CAP, &mut StdRng::seed_from_u64(42));
        let c = select(&lengths, CAP, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
        let mut sorted = a.clone();
        sorted.sort();
        assert_ne!(a, sorted);
    }

    #[test]
    fn test_cap() {
        assert_eq!(CAP, 65_792);
    }
}
