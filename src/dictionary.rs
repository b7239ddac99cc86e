use crate::{Error, Word};
use std::fmt;
use std::fs::read;

/// Start of the annotation that follows a headword.
const ANNOTATION: u8 = b'(';

/// Whitespace stripped around a headword: space, tab, newline, carriage return,
/// vertical tab and form feed.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_space(b));
    let end = bytes.iter().rposition(|&b| !is_space(b));
    match (start, end) {
        (Some(s), Some(e)) => &bytes[s..=e],
        _ => &[],
    }
}

/// Extract the headword from a dictionary line: the text before the first `(`,
/// trimmed and lower-cased.
/// ## Examples
/// ```
/// use bytetoword_words::headword;
/// assert_eq!(headword(b"ab(noun) a test"), b"ab");
/// assert_eq!(headword(b"  Hello, World(greeting)\r\n"), b"hello, world");
/// assert_eq!(headword(b"Bare\n"), b"bare");
/// ```
pub fn headword(line: &[u8]) -> Word {
    let head = match line.iter().position(|&b| b == ANNOTATION) {
        Some(i) => &line[..i],
        None => line,
    };
    trim(head).to_ascii_lowercase()
}

#[derive(Debug, Clone, Default)]
/// The headwords of a dictionary file, one per line, in file order.
pub struct Dictionary {
    /// Headwords in file order. Duplicates are kept.
    pub headwords: Vec<Word>,
    /// Path of the dictionary file.
    /// Empty if the dictionary is not read from a file.
    pub path: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} headwords from '{}'>",
            self.headwords.len(),
            self.path
        )
    }
}

impl Dictionary {
    /// Read a dictionary file. Each line holds a headword optionally followed by
    /// a parenthesized annotation. The file is read as raw bytes.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(path: &str) -> Result<Dictionary, Error> {
        let bytes = read(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let mut dictionary = Dictionary::from_bytes(&bytes);
        dictionary.path = String::from(path);
        Ok(dictionary)
    }

    /// Parse dictionary contents. A final line without a newline still counts,
    /// a final newline does not start an extra line.
    pub fn from_bytes(bytes: &[u8]) -> Dictionary {
        let headwords = bytes
            .split_inclusive(|&b| b == b'\n')
            .map(headword)
            .collect();
        Dictionary {
            headwords,
            path: String::new(),
        }
    }

    /// Number of loaded headwords, duplicates included.
    pub fn len(&self) -> usize {
        self.headwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headwords.is_empty()
    }
}
