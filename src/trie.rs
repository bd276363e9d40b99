use std::fmt;
use std::fmt::Formatter;
use itertools::Itertools;

/// Rejection raised when a word contains a byte outside 'a'-'z'.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrieError {
    InvalidLetter { byte: u8 },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::InvalidLetter { byte } => {
                write!(f, "byte {byte:#04x} is outside 'a'-'z'")
            }
        }
    }
}

impl std::error::Error for TrieError {}

pub struct TrieNode {
    children: Box<[Option<TrieNode>; 26]>,
    count: usize,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: Box::new(std::array::from_fn(|_| None)),
            count: 0,
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letters = (0..26)
            .filter(|i| self.children[*i].is_some())
            .map(|i| (i as u8 + b'a') as char)
            .collect_vec();
        write!(f, "{letters:?}:{}", self.count)
    }
}

/// Occurrence index over words of lowercase ASCII letters. Each node owns
/// its 26 child slots, so dropping the trie releases the whole tree,
/// children before parents.
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
        }
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Self, TrieError> {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word)?;
        }
        Ok(trie)
    }

    /// Records one occurrence of `word`, creating any path nodes that do
    /// not exist yet. The empty word is legal and counts on the root.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        let mut current = &mut self.root;
        for index in letter_indices(word)? {
            current = current.children[index].get_or_insert_with(TrieNode::new);
        }
        current.count += 1;
        Ok(())
    }

    /// Number of times `word` was inserted; 0 if the path is missing or
    /// `word` only ever appeared as a prefix of longer words.
    pub fn occurrences(&self, word: &str) -> Result<usize, TrieError> {
        let mut current = &self.root;
        for index in letter_indices(word)? {
            match &current.children[index] {
                Some(child) => current = child,
                None => return Ok(0),
            }
        }
        Ok(current.count)
    }
}

// Validates the whole word up front, so a rejected word never leaves a
// partially built path behind.
fn letter_indices(word: &str) -> Result<impl Iterator<Item = usize> + '_, TrieError> {
    if let Some(byte) = word.bytes().find(|byte| !byte.is_ascii_lowercase()) {
        return Err(TrieError::InvalidLetter { byte });
    }
    Ok(word.bytes().map(|byte| (byte - b'a') as usize))
}
