use crate::grid::N;
use crate::letterset::{Label, LetterSet, NLETTERS};
use crate::Error;
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Index of a node in the [`Lexicon`] trie.
pub type NodeId = usize;

/// The node for the empty prefix
pub const ROOT: NodeId = 0;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// A new identity for a lexicon; changes whenever words are added.
fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Marks a missing child. The root is never a child, so index 0 is free.
const NONE: u32 = 0;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    /// Child node per label, `NONE` if there is no edge
    children: [u32; NLETTERS],
    /// The labels of all child nodes
    edges: LetterSet,
    terminal: bool,
}

impl Node {
    fn new() -> Node {
        Node {
            children: [NONE; NLETTERS],
            edges: LetterSet::new(),
            terminal: false,
        }
    }
}

/// A trie data structure that holds all the possible words.
///
/// Nodes are stored in a flat arena and refer to their children by index.
/// Words are stored in uppercase; lookups are case-insensitive.
///
/// ## Examples
/// ```
/// use scrabble_solver::Lexicon;
/// let mut lexicon = Lexicon::new();
/// assert!(lexicon.add_word("gab"));
/// assert!(!lexicon.add_word("a"));
/// assert!(lexicon.is_word("GAB"));
/// assert!(!lexicon.is_word("GA"));
/// assert!(lexicon.node_at("ga").is_some());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexicon {
    nodes: Vec<Node>,
    /// Path of the word file used to build the lexicon.
    /// Empty if the lexicon is not built from a file.
    wordfile: String,
    word_count: usize,
    /// Identifies the words of the lexicon for the cross-check cache of a board
    #[cfg_attr(feature = "serde", serde(skip, default = "next_id"))]
    id: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::new()
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

/// Labels for `word`, or `None` if it has a character that is not an ascii letter.
fn to_labels(word: &str) -> Option<Vec<Label>> {
    word.chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                Some(ch.to_ascii_uppercase() as u8 - b'A')
            } else {
                None
            }
        })
        .collect()
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Lexicon {
        Lexicon {
            nodes: vec![Node::new()],
            wordfile: String::new(),
            word_count: 0,
            id: next_id(),
        }
    }

    /// Add `word` to the lexicon.
    ///
    /// Returns false, and leaves the lexicon unchanged, if the word is shorter
    /// than 2 or longer than 15 letters, or has characters other than `A` .. `Z`.
    pub fn add_word(&mut self, word: &str) -> bool {
        let len = word.chars().count();
        if len < 2 || len > N {
            return false;
        }
        let labels = match to_labels(word) {
            Some(labels) => labels,
            None => return false,
        };
        let mut node = ROOT;
        for label in labels {
            node = match self.child(node, label) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[node].children[label as usize] = child as u32;
                    self.nodes[node].edges.insert(label);
                    child
                }
            }
        }
        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.word_count += 1;
            self.id = next_id();
        }
        true
    }

    #[inline]
    pub(crate) fn id(&self) -> usize {
        self.id
    }

    /// Build a lexicon from a list of words.
    /// Words are trimmed; invalid words are skipped.
    pub fn from_word_list<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.add_word(word.as_ref().trim());
        }
        lexicon
    }

    /// Read the lexicon from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Lexicon, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut lexicon = Lexicon::from_word_list(contents.lines());
        lexicon.wordfile = String::from(wordfile);
        info!(
            "loaded {} words ({} nodes) from {}",
            lexicon.word_count,
            lexicon.node_count(),
            wordfile
        );
        Ok(lexicon)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::LexiconDeserializeError(String::from(wordfile)))?;
        info!("deserialized {}", lexicon);
        Ok(lexicon)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the lexicon to a bincoded file.
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path)
            .map_err(|_| Error::LexiconSerializeError(String::from(path)))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::LexiconSerializeError(String::from(path)))
    }

    /// The node reached by following `prefix` from the root, case-insensitive.
    pub fn node_at(&self, prefix: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for ch in prefix.chars() {
            if !ch.is_ascii_alphabetic() {
                return None;
            }
            node = self.child(node, ch.to_ascii_uppercase() as u8 - b'A')?;
        }
        Some(node)
    }

    /// Check if `word` is in the lexicon, case-insensitive.
    pub fn is_word(&self, word: &str) -> bool {
        self.node_at(word).map_or(false, |node| self.is_final(node))
    }

    /// Check if a word ends at `node`.
    #[inline]
    pub fn is_final(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    /// The child of `node` for `label`, if any.
    #[inline]
    pub fn child(&self, node: NodeId, label: Label) -> Option<NodeId> {
        match self.nodes[node].children[label as usize] {
            NONE => None,
            child => Some(child as NodeId),
        }
    }

    /// The labels of all children of `node`.
    #[inline]
    pub fn edges(&self, node: NodeId) -> LetterSet {
        self.nodes[node].edges
    }

    /// Iterate over the `(label, child)` pairs of `node`, in alphabetical order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (Label, NodeId)> + '_ {
        self.edges(node)
            .iter()
            .map(move |label| (label, self.nodes[node].children[label as usize] as NodeId))
    }

    /// The number of words in the lexicon
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
