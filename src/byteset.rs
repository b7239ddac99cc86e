use std::iter::FromIterator;

const WORDS: usize = 4;

/// A bitset over all 256 byte values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteSet([u64; WORDS]);

impl ByteSet {
    pub fn new() -> ByteSet {
        ByteSet([0; WORDS])
    }

    pub fn contains(&self, byte: u8) -> bool {
        let v = byte as usize;
        self.0[v / 64] & (1 << (v % 64)) != 0
    }

    pub fn insert(&mut self, byte: u8) {
        let v = byte as usize;
        self.0[v / 64] |= 1 << (v % 64);
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if any byte of `word` is in the set.
    pub fn intersects<W: AsRef<[u8]>>(&self, word: W) -> bool {
        word.as_ref().iter().any(|&b| self.contains(b))
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut s = ByteSet::new();
        for b in iter {
            s.insert(b);
        }
        s
    }
}

impl From<&[u8]> for ByteSet {
    fn from(v: &[u8]) -> Self {
        v.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byteset() {
        let mut bytes = ByteSet::new();
        assert!(bytes.is_empty());
        for &n in &[2, 255, 2, 64, 63] {
            bytes.insert(n);
        }
        for &n in &[2, 63, 64, 255] {
            assert!(bytes.contains(n));
        }
        assert!(!bytes.contains(5));
        assert!(!bytes.contains(0));
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn test_from_slice() {
        let bytes = ByteSet::from(&b"zaqa\x80"[..]);
        assert_eq!(bytes.len(), 4);
        for &b in b"aqz\x80" {
            assert!(bytes.contains(b));
        }
    }

    #[test]
    fn test_intersects() {
        let bytes = ByteSet::from(&b",. "[..]);
        assert!(bytes.intersects("hello, world"));
        assert!(bytes.intersects(b"end."));
        assert!(!bytes.intersects("plain"));
        assert!(!ByteSet::new().intersects("anything at all"));
    }
}
